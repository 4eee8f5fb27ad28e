use crate::domain::model::{ConsultationMode, Doctor};

/// 取得資料失敗時使用的示範資料，讓畫面仍有內容可以操作
pub fn sample_doctors() -> Vec<Doctor> {
    vec![
        Doctor::new(
            "1",
            "Dr. John Smith",
            &["General Physician"],
            10,
            500.0,
            ConsultationMode::VideoConsult,
        ),
        Doctor::new(
            "2",
            "Dr. Sarah Johnson",
            &["Dentist"],
            8,
            800.0,
            ConsultationMode::InClinic,
        ),
    ]
}
