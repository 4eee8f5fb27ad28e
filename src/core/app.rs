use crate::core::booking::{self, BookingState};
use crate::core::directory::Directory;
use crate::core::filter;
use crate::core::navigation::{Location, MemoryHistory, Route};
use crate::core::store::{FilterAction, FilterStore};
use crate::domain::model::{Doctor, FilterState};
use crate::domain::ports::DoctorSource;
use crate::utils::error::{DirectoryError, Result};
use crate::views::listing::ListingView;
use crate::views::{confirmation, ViewOptions};

pub const SUGGESTION_LIMIT: usize = 5;

/// 把資料來源、篩選狀態、瀏覽歷史與畫面串在一起的應用程式外殼
pub struct DirectoryApp<S: DoctorSource> {
    source: S,
    directory: Directory,
    filters: FilterStore,
    history: MemoryHistory,
    options: ViewOptions,
}

impl<S: DoctorSource> DirectoryApp<S> {
    pub fn new(source: S, history: MemoryHistory, fallback_enabled: bool, options: ViewOptions) -> Self {
        let filters = FilterStore::from_query(&history.location().query);
        Self {
            source,
            directory: Directory::new(fallback_enabled),
            filters,
            history,
            options,
        }
    }

    pub async fn start(&mut self) -> bool {
        tracing::info!("Starting doctor directory at {}", self.history.location().href());
        self.directory.load(&self.source).await
    }

    pub async fn retry(&mut self) -> bool {
        tracing::info!("🔄 Retrying doctor fetch");
        self.directory.load(&self.source).await
    }

    pub fn dispatch(&mut self, action: FilterAction) {
        self.filters.update(action, &mut self.history);
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn filters(&self) -> &FilterState {
        self.filters.state()
    }

    pub fn location(&self) -> &Location {
        self.history.location()
    }

    /// 每次讀取都重新計算，搜尋對每個按鍵即時反應
    pub fn displayed(&self) -> Vec<Doctor> {
        filter::apply(self.directory.doctors(), self.filters.state())
    }

    pub fn suggestions(&self) -> Vec<&Doctor> {
        filter::suggestions(
            self.directory.doctors(),
            &self.filters.state().search_query,
            SUGGESTION_LIMIT,
        )
    }

    pub fn book(&mut self, id: &str) -> Result<()> {
        let doctor = self
            .directory
            .find(id)
            .ok_or_else(|| DirectoryError::DoctorNotFound { id: id.to_string() })?;
        booking::book(&mut self.history, doctor);
        Ok(())
    }

    pub fn back(&mut self) {
        booking::back_to_listing(&mut self.history);
        self.filters.sync_from_location(&self.history.location().query);
    }

    /// 瀏覽器的上一頁；回到的位置決定篩選狀態
    pub fn go_back(&mut self) -> bool {
        if !self.history.go_back() {
            return false;
        }
        self.filters.sync_from_location(&self.history.location().query);
        true
    }

    /// 模擬重新整理頁面：暫存的導覽資料遺失，篩選狀態由網址重建
    pub fn reload(&mut self) {
        self.history.reload();
        self.filters.sync_from_location(&self.history.location().query);
    }

    pub fn booking_state(&self) -> BookingState {
        BookingState::from_location(self.history.location())
    }

    pub fn render(&self) -> String {
        match self.history.location().route() {
            Route::Listing => {
                let displayed = self.displayed();
                let suggestions = self.suggestions();
                ListingView {
                    directory: &self.directory,
                    filters: self.filters.state(),
                    displayed: &displayed,
                    suggestions: &suggestions,
                    options: &self.options,
                }
                .render()
            }
            Route::AppointmentBooked => confirmation::render(&self.booking_state(), &self.options),
            Route::NotFound => format!(
                "Page not found: {}\n[{}]\n",
                self.history.location().path,
                confirmation::BACK_ACTION_LABEL
            ),
        }
    }
}
