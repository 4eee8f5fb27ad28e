use crate::adapters::sample::sample_doctors;
use crate::domain::model::Doctor;
use crate::domain::ports::DoctorSource;
use crate::utils::error::FetchError;
use std::collections::BTreeSet;

/// 一次抓取的識別；只有最新一次抓取的結果會被套用
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// 持有原始醫師清單與載入／錯誤狀態
#[derive(Debug, Clone)]
pub struct Directory {
    doctors: Vec<Doctor>,
    loading: bool,
    error: Option<String>,
    generation: u64,
    fallback_enabled: bool,
}

impl Directory {
    pub fn new(fallback_enabled: bool) -> Self {
        Self {
            doctors: Vec::new(),
            loading: false,
            error: None,
            generation: 0,
            fallback_enabled,
        }
    }

    pub fn with_doctors(doctors: Vec<Doctor>) -> Self {
        Self {
            doctors,
            ..Self::new(true)
        }
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// 套用抓取結果；若之後已經開始新的抓取則丟棄並回傳 `false`
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Doctor>, FetchError>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::warn!(
                "Discarding stale response (fetch #{}, latest is #{})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        match result {
            Ok(doctors) => {
                tracing::info!("✅ Loaded {} doctors", doctors.len());
                self.doctors = doctors;
                self.error = None;
            }
            Err(e) => {
                tracing::error!("❌ Error fetching doctors: {}", e);
                self.error = Some(e.to_string());
                if self.fallback_enabled {
                    tracing::warn!("Falling back to sample data");
                    self.doctors = sample_doctors();
                }
            }
        }
        self.loading = false;
        true
    }

    /// 啟動時與使用者按下重試時呼叫；每次恰好一個請求
    pub async fn load<S: DoctorSource + ?Sized>(&mut self, source: &S) -> bool {
        let ticket = self.begin_fetch();
        let result = source.fetch_doctors().await;
        self.complete_fetch(ticket, result)
    }

    pub fn find(&self, id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    /// 篩選面板上的專科選項：排序、去重、略過空字串
    pub fn all_specialities(&self) -> Vec<String> {
        self.doctors
            .iter()
            .flat_map(|d| d.specialities.iter())
            .filter(|s| !s.is_empty())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ConsultationMode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FailingSource {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl DoctorSource for FailingSource {
        async fn fetch_doctors(&self) -> Result<Vec<Doctor>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(FetchError::Network { status: 503 })
        }
    }

    fn doctor(id: &str, specialities: &[&str]) -> Doctor {
        Doctor::new(id, format!("Dr. {}", id), specialities, 1, 100.0, ConsultationMode::InClinic)
    }

    #[tokio::test]
    async fn test_failure_sets_error_and_fallback() {
        let source = FailingSource {
            calls: AtomicUsize::new(0),
        };
        let mut directory = Directory::default();

        assert!(directory.load(&source).await);

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert!(!directory.is_loading());
        assert_eq!(directory.error(), Some("HTTP error! status: 503"));
        assert!(!directory.doctors().is_empty());
    }

    #[tokio::test]
    async fn test_failure_without_fallback_keeps_list() {
        let source = FailingSource {
            calls: AtomicUsize::new(0),
        };
        let mut directory = Directory::new(false);
        directory.load(&source).await;
        assert!(directory.doctors().is_empty());
        assert!(directory.error().is_some());
    }

    #[test]
    fn test_success_clears_previous_error() {
        let mut directory = Directory::default();
        let ticket = directory.begin_fetch();
        directory.complete_fetch(ticket, Err(FetchError::format("bad")));
        assert!(directory.error().is_some());

        let ticket = directory.begin_fetch();
        assert!(directory.is_loading());
        directory.complete_fetch(ticket, Ok(vec![doctor("a", &[])]));
        assert!(directory.error().is_none());
        assert_eq!(directory.doctors().len(), 1);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut directory = Directory::default();
        let first = directory.begin_fetch();
        let second = directory.begin_fetch();

        assert!(directory.complete_fetch(second, Ok(vec![doctor("new", &[])])));
        assert!(!directory.complete_fetch(first, Err(FetchError::Network { status: 500 })));

        assert_eq!(directory.doctors()[0].id, "new");
        assert!(directory.error().is_none());
    }

    #[test]
    fn test_stale_response_does_not_end_loading() {
        let mut directory = Directory::default();
        let first = directory.begin_fetch();
        let _second = directory.begin_fetch();
        directory.complete_fetch(first, Ok(vec![]));
        assert!(directory.is_loading());
    }

    #[test]
    fn test_all_specialities_sorted_and_unique() {
        let directory = Directory::with_doctors(vec![
            doctor("a", &["Dentist", "Surgeon"]),
            doctor("b", &["Cardiologist", "Dentist", ""]),
            doctor("c", &[]),
        ]);
        assert_eq!(
            directory.all_specialities(),
            vec!["Cardiologist", "Dentist", "Surgeon"]
        );
        assert!(directory.find("b").is_some());
        assert!(directory.find("z").is_none());
    }
}
