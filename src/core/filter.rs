use crate::domain::model::{Doctor, FilterState, SortOption};

/// 由醫師清單與篩選狀態推導出要顯示的清單。
///
/// 依序套用：名稱搜尋、看診方式、專科、排序。純函式，回傳新的清單，
/// 不會修改輸入。
pub fn apply(doctors: &[Doctor], state: &FilterState) -> Vec<Doctor> {
    let query = state.search_query.to_lowercase();

    let mut result: Vec<Doctor> = doctors
        .iter()
        .filter(|doctor| matches_search(doctor, &query))
        .filter(|doctor| {
            state
                .consultation_mode
                .map_or(true, |mode| doctor.consultation_mode == mode)
        })
        .filter(|doctor| {
            state.specialities.is_empty()
                || doctor
                    .specialities
                    .iter()
                    .any(|s| state.specialities.contains(s))
        })
        .cloned()
        .collect();

    // sort_by 是穩定排序，同值保留原本順序
    match state.sort_by {
        Some(SortOption::Fees) => result.sort_by(|a, b| a.fees.total_cmp(&b.fees)),
        Some(SortOption::Experience) => result.sort_by(|a, b| b.experience.cmp(&a.experience)),
        None => {}
    }

    tracing::debug!(
        "Displayed {} of {} doctors (sort: {:?})",
        result.len(),
        doctors.len(),
        state.sort_by
    );

    result
}

/// 自動完成候選：名稱符合查詢的前 `limit` 位醫師
pub fn suggestions<'a>(doctors: &'a [Doctor], query: &str, limit: usize) -> Vec<&'a Doctor> {
    if query.is_empty() {
        return Vec::new();
    }
    let query = query.to_lowercase();
    doctors
        .iter()
        .filter(|doctor| matches_search(doctor, &query))
        .take(limit)
        .collect()
}

fn matches_search(doctor: &Doctor, lowered_query: &str) -> bool {
    lowered_query.is_empty() || doctor.name.to_lowercase().contains(lowered_query)
}
