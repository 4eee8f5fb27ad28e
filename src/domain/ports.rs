use crate::domain::model::Doctor;
use crate::utils::error::FetchError;
use async_trait::async_trait;

/// 醫師資料來源；每次呼叫恰好發出一次請求，不做自動重試
#[async_trait]
pub trait DoctorSource: Send + Sync {
    async fn fetch_doctors(&self) -> Result<Vec<Doctor>, FetchError>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
    fn fallback_enabled(&self) -> bool;
    fn avatar_base_url(&self) -> &str;
    fn currency_symbol(&self) -> &str;
}

/// 網址列與路由的抽象
pub trait Navigator {
    /// 以 replace 語意更新目前位置的查詢字串，不新增歷史紀錄
    fn replace_query(&mut self, query: &str);

    /// 推入新的路由，並附帶只存在於這次導覽的醫師資料
    fn push(&mut self, path: &str, payload: Option<Doctor>);
}
