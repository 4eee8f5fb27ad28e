use crate::domain::model::Doctor;
use crate::domain::ports::Navigator;

pub const LISTING_PATH: &str = "/";
pub const BOOKED_PATH: &str = "/appointment-booked";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Listing,
    AppointmentBooked,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path {
            LISTING_PATH | "" => Route::Listing,
            BOOKED_PATH => Route::AppointmentBooked,
            _ => Route::NotFound,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub path: String,
    pub query: String,
    /// 導覽時附帶的暫存資料，重新載入後即消失
    pub state: Option<Doctor>,
}

impl Location {
    pub fn route(&self) -> Route {
        Route::from_path(&self.path)
    }

    /// 可分享的相對網址，例如 `/?search=joh&sort=fees`
    pub fn href(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }
}

/// 記憶體內的瀏覽歷史，模擬瀏覽器的網址列與 history 堆疊
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<Location>,
    index: usize,
}

impl MemoryHistory {
    /// 從 `/path?query` 形式的網址建立
    pub fn new(initial: &str) -> Self {
        let (path, query) = match initial.split_once('?') {
            Some((path, query)) => (path, query),
            None => (initial, ""),
        };
        let path = if path.is_empty() { LISTING_PATH } else { path };
        Self {
            entries: vec![Location {
                path: path.to_string(),
                query: query.to_string(),
                state: None,
            }],
            index: 0,
        }
    }

    pub fn location(&self) -> &Location {
        &self.entries[self.index]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 重新整理頁面：網址保留，暫存的導覽資料全部遺失
    pub fn reload(&mut self) {
        for entry in &mut self.entries {
            entry.state = None;
        }
        tracing::debug!("Reloaded {}", self.location().href());
    }

    pub fn go_back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new(LISTING_PATH)
    }
}

impl Navigator for MemoryHistory {
    fn replace_query(&mut self, query: &str) {
        let entry = &mut self.entries[self.index];
        entry.query = query.to_string();
        tracing::debug!("Replaced location with {}", entry.href());
    }

    fn push(&mut self, path: &str, payload: Option<Doctor>) {
        // 從歷史中間推入時捨棄前進的紀錄
        self.entries.truncate(self.index + 1);
        let (path, query) = match path.split_once('?') {
            Some((path, query)) => (path.to_string(), query.to_string()),
            None => (path.to_string(), String::new()),
        };
        self.entries.push(Location {
            path,
            query,
            state: payload,
        });
        self.index = self.entries.len() - 1;
        tracing::debug!("Navigated to {}", self.location().href());
    }
}
