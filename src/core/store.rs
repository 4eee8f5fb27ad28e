use crate::core::query;
use crate::domain::model::{ConsultationMode, FilterState, SortOption};
use crate::domain::ports::Navigator;

/// 使用者對篩選面板的操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    SetSearch(String),
    SetMode(ConsultationMode),
    ToggleSpeciality(String),
    SetSort(SortOption),
    Clear,
}

/// 唯一的篩選狀態持有者。
///
/// 所有修改都經過 [`FilterStore::update`]，它在同一次呼叫裡更新狀態並以
/// replace 語意寫回網址，兩者不會分歧。
#[derive(Debug, Clone, Default)]
pub struct FilterStore {
    state: FilterState,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_query(query: &str) -> Self {
        Self {
            state: query::from_query(query),
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// 導覽後由網址重新推導狀態；不回寫網址
    pub fn sync_from_location(&mut self, query: &str) {
        self.state = query::from_query(query);
        tracing::debug!("Filter state synced from location: {:?}", self.state);
    }

    pub fn update<N: Navigator + ?Sized>(&mut self, action: FilterAction, navigator: &mut N) {
        tracing::debug!("Applying filter action: {:?}", action);

        match action {
            FilterAction::SetSearch(query) => self.state.search_query = query,
            FilterAction::SetMode(mode) => self.state.consultation_mode = Some(mode),
            // 空白名稱無法寫進網址，直接忽略
            FilterAction::ToggleSpeciality(speciality) if speciality.trim().is_empty() => {
                tracing::debug!("Ignoring blank speciality toggle");
            }
            FilterAction::ToggleSpeciality(speciality) => {
                if !self.state.specialities.remove(&speciality) {
                    self.state.specialities.insert(speciality);
                }
            }
            FilterAction::SetSort(sort) => self.state.sort_by = Some(sort),
            FilterAction::Clear => self.state = FilterState::default(),
        }

        navigator.replace_query(&query::to_query(&self.state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::MemoryHistory;

    #[test]
    fn test_every_action_replaces_the_url() {
        let mut history = MemoryHistory::default();
        let mut store = FilterStore::new();

        store.update(FilterAction::SetSearch("joh".to_string()), &mut history);
        assert_eq!(history.location().query, "search=joh");

        store.update(FilterAction::SetMode(ConsultationMode::InClinic), &mut history);
        store.update(FilterAction::ToggleSpeciality("Dentist".to_string()), &mut history);
        store.update(FilterAction::SetSort(SortOption::Experience), &mut history);
        assert_eq!(
            history.location().query,
            "search=joh&mode=In+Clinic&specialities=Dentist&sort=experience"
        );
        assert_eq!(history.len(), 1);

        store.update(FilterAction::Clear, &mut history);
        assert!(store.state().is_unset());
        assert_eq!(history.location().query, "");
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_toggle_speciality_twice_removes_it() {
        let mut history = MemoryHistory::default();
        let mut store = FilterStore::new();

        store.update(FilterAction::ToggleSpeciality("Dentist".to_string()), &mut history);
        store.update(FilterAction::ToggleSpeciality("Surgeon".to_string()), &mut history);
        store.update(FilterAction::ToggleSpeciality("Dentist".to_string()), &mut history);

        assert_eq!(store.state().specialities.len(), 1);
        assert!(store.state().specialities.contains("Surgeon"));
        assert_eq!(history.location().query, "specialities=Surgeon");
    }

    #[test]
    fn test_state_and_url_agree_after_updates() {
        let mut history = MemoryHistory::default();
        let mut store = FilterStore::new();

        store.update(FilterAction::SetSearch("Dr. A".to_string()), &mut history);
        store.update(FilterAction::SetSort(SortOption::Fees), &mut history);

        assert_eq!(&query::from_query(&history.location().query), store.state());
    }

    #[test]
    fn test_sync_from_location() {
        let mut store = FilterStore::from_query("sort=fees");
        assert_eq!(store.state().sort_by, Some(SortOption::Fees));

        store.sync_from_location("?mode=Video+Consult");
        assert_eq!(store.state().sort_by, None);
        assert_eq!(
            store.state().consultation_mode,
            Some(ConsultationMode::VideoConsult)
        );
    }

    #[test]
    fn test_blank_speciality_is_ignored() {
        let mut history = MemoryHistory::default();
        let mut store = FilterStore::new();

        store.update(FilterAction::ToggleSpeciality("".to_string()), &mut history);
        assert!(store.state().specialities.is_empty());
        assert_eq!(history.location().query, "");

        store.update(FilterAction::ToggleSpeciality("Dentist".to_string()), &mut history);
        store.update(FilterAction::ToggleSpeciality("   ".to_string()), &mut history);
        store.update(FilterAction::ToggleSpeciality("".to_string()), &mut history);

        assert_eq!(history.location().query, "specialities=Dentist");
        let reopened = FilterStore::from_query(&history.location().query);
        assert_eq!(reopened.state(), store.state());
        assert_eq!(query::from_query(&query::to_query(store.state())), *store.state());
    }
}
