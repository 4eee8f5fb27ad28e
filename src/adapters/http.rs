use crate::domain::model::{ConsultationMode, Doctor};
use crate::domain::ports::{ConfigProvider, DoctorSource};
use crate::utils::error::{FetchError, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

pub const INVALID_FORMAT_MESSAGE: &str = "Invalid data format received from API";

/// 透過 HTTP GET 取得醫師清單
pub struct HttpDoctorSource {
    endpoint: String,
    client: Client,
}

impl HttpDoctorSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds() {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build().map_err(FetchError::from)?;

        Ok(Self {
            endpoint: config.api_endpoint().to_string(),
            client,
        })
    }
}

#[async_trait::async_trait]
impl DoctorSource for HttpDoctorSource {
    async fn fetch_doctors(&self) -> std::result::Result<Vec<Doctor>, FetchError> {
        tracing::debug!("Fetching doctors from: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(FetchError::Network {
                status: status.as_u16(),
            });
        }

        // 讀取失敗屬於傳輸錯誤；內容不是 JSON 才算格式錯誤
        let body = response.bytes().await?;
        let payload: Value = serde_json::from_slice(&body).map_err(|e| {
            FetchError::format(format!("{}: body is not valid JSON ({})", INVALID_FORMAT_MESSAGE, e))
        })?;

        let doctors = parse_doctors(payload)?;
        tracing::debug!("Fetched {} doctors", doctors.len());
        Ok(doctors)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

#[derive(Deserialize)]
struct RawDoctor {
    id: RawId,
    name: String,
    #[serde(default)]
    speciality: Option<Value>,
    experience: u32,
    fees: f64,
    #[serde(rename = "consultationMode")]
    consultation_mode: ConsultationMode,
}

/// 驗證回應格式並正規化每一筆資料。
///
/// 回應必須是陣列；缺少或不是陣列的 `speciality` 視為空清單。
pub fn parse_doctors(payload: Value) -> std::result::Result<Vec<Doctor>, FetchError> {
    let Value::Array(items) = payload else {
        return Err(FetchError::format(INVALID_FORMAT_MESSAGE));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let raw: RawDoctor = serde_json::from_value(item).map_err(|e| {
                FetchError::format(format!("{}: entry {} ({})", INVALID_FORMAT_MESSAGE, index, e))
            })?;
            normalize(raw).map_err(|reason| {
                FetchError::format(format!("{}: entry {} ({})", INVALID_FORMAT_MESSAGE, index, reason))
            })
        })
        .collect()
}

fn normalize(raw: RawDoctor) -> std::result::Result<Doctor, String> {
    if !raw.fees.is_finite() || raw.fees < 0.0 {
        return Err(format!("fees must be a non-negative number, got {}", raw.fees));
    }

    let id = match raw.id {
        RawId::Text(id) => id,
        RawId::Number(n) => n.to_string(),
    };

    let specialities = match raw.speciality {
        Some(Value::Array(values)) => values
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };

    Ok(Doctor {
        id,
        name: raw.name,
        specialities,
        experience: raw.experience,
        fees: raw.fees,
        consultation_mode: raw.consultation_mode,
    })
}
