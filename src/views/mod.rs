//! 純文字畫面：醫師清單、篩選面板與預約確認頁

pub mod confirmation;
pub mod listing;

use crate::domain::ports::ConfigProvider;

pub const DEFAULT_AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    pub avatar_base_url: String,
    pub currency_symbol: String,
}

impl ViewOptions {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            avatar_base_url: config.avatar_base_url().to_string(),
            currency_symbol: config.currency_symbol().to_string(),
        }
    }

    pub fn avatar_url(&self, doctor_id: &str) -> String {
        let seed: String = url::form_urlencoded::byte_serialize(doctor_id.as_bytes()).collect();
        format!("{}?seed={}", self.avatar_base_url, seed)
    }

    /// 整數金額不顯示小數
    pub fn format_fee(&self, fees: f64) -> String {
        if fees.fract() == 0.0 {
            format!("{}{:.0}", self.currency_symbol, fees)
        } else {
            format!("{}{:.2}", self.currency_symbol, fees)
        }
    }
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            avatar_base_url: DEFAULT_AVATAR_BASE_URL.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}
