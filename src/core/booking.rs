use crate::core::navigation::{Location, Route, BOOKED_PATH, LISTING_PATH};
use crate::domain::model::Doctor;
use crate::domain::ports::Navigator;

/// 預約流程目前所在的畫面。預約不會送到任何伺服器，只是一次導覽。
#[derive(Debug, Clone, PartialEq)]
pub enum BookingState {
    Listing,
    Confirmed(Doctor),
    /// 確認頁沒有導覽資料（例如重新整理後），顯示提示而不是失敗
    MissingDoctor,
}

impl BookingState {
    pub fn from_location(location: &Location) -> Self {
        match location.route() {
            Route::AppointmentBooked => match &location.state {
                Some(doctor) => BookingState::Confirmed(doctor.clone()),
                None => BookingState::MissingDoctor,
            },
            Route::Listing | Route::NotFound => BookingState::Listing,
        }
    }

    pub fn doctor(&self) -> Option<&Doctor> {
        match self {
            BookingState::Confirmed(doctor) => Some(doctor),
            _ => None,
        }
    }
}

pub fn book<N: Navigator + ?Sized>(navigator: &mut N, doctor: &Doctor) {
    tracing::info!("📅 Booking appointment with {} ({})", doctor.name, doctor.id);
    navigator.push(BOOKED_PATH, Some(doctor.clone()));
}

pub fn back_to_listing<N: Navigator + ?Sized>(navigator: &mut N) {
    navigator.push(LISTING_PATH, None);
}
