//! 篩選狀態與網址查詢字串之間的雙向轉換。
//!
//! 參數：`search`、`mode`、`specialities`（以逗號串接）、`sort`。
//! 未設定的值一律省略；無法辨識的值解析為未設定，不會回報錯誤。
//! 專科名稱本身含逗號或為空字串時無法完整往返。

use crate::domain::model::{ConsultationMode, FilterState, SortOption};
use url::form_urlencoded;

pub const SEARCH_PARAM: &str = "search";
pub const MODE_PARAM: &str = "mode";
pub const SPECIALITIES_PARAM: &str = "specialities";
pub const SORT_PARAM: &str = "sort";

const SPECIALITY_SEPARATOR: char = ',';

pub fn to_query(state: &FilterState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if !state.search_query.is_empty() {
        serializer.append_pair(SEARCH_PARAM, &state.search_query);
    }
    if let Some(mode) = state.consultation_mode {
        serializer.append_pair(MODE_PARAM, mode.as_str());
    }
    // 空字串的專科無法表示，略過
    let specialities: Vec<&str> = state
        .specialities
        .iter()
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .collect();
    if !specialities.is_empty() {
        if let Some(bad) = specialities.iter().find(|s| s.contains(SPECIALITY_SEPARATOR)) {
            tracing::warn!(
                "Speciality '{}' contains a comma and will not survive the URL round-trip",
                bad
            );
        }
        serializer.append_pair(SPECIALITIES_PARAM, &specialities.join(","));
    }
    if let Some(sort) = state.sort_by {
        serializer.append_pair(SORT_PARAM, sort.as_str());
    }

    serializer.finish()
}

pub fn from_query(query: &str) -> FilterState {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut search: Option<String> = None;
    let mut mode: Option<String> = None;
    let mut specialities: Option<String> = None;
    let mut sort: Option<String> = None;

    // 同名參數重複出現時取第一個
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let slot = match &*key {
            SEARCH_PARAM => &mut search,
            MODE_PARAM => &mut mode,
            SPECIALITIES_PARAM => &mut specialities,
            SORT_PARAM => &mut sort,
            other => {
                tracing::debug!("Ignoring unknown query parameter '{}'", other);
                continue;
            }
        };
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }

    FilterState {
        search_query: search.unwrap_or_default(),
        consultation_mode: mode.and_then(|m| m.parse::<ConsultationMode>().ok()),
        specialities: specialities
            .map(|joined| {
                joined
                    .split(SPECIALITY_SEPARATOR)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
        sort_by: sort.and_then(|s| s.parse::<SortOption>().ok()),
    }
}
