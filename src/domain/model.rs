use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsultationMode {
    #[serde(rename = "Video Consult")]
    VideoConsult,
    #[serde(rename = "In Clinic")]
    InClinic,
}

impl ConsultationMode {
    pub const ALL: [ConsultationMode; 2] = [ConsultationMode::VideoConsult, ConsultationMode::InClinic];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationMode::VideoConsult => "Video Consult",
            ConsultationMode::InClinic => "In Clinic",
        }
    }
}

impl fmt::Display for ConsultationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsultationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Video Consult" => Ok(ConsultationMode::VideoConsult),
            "In Clinic" => Ok(ConsultationMode::InClinic),
            other => Err(format!("unknown consultation mode: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    /// 診療費由低到高
    Fees,
    /// 年資由高到低
    Experience,
}

impl SortOption {
    pub const ALL: [SortOption; 2] = [SortOption::Fees, SortOption::Experience];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Fees => "fees",
            SortOption::Experience => "experience",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Fees => "Fees: Low to High",
            SortOption::Experience => "Experience: High to Low",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fees" => Ok(SortOption::Fees),
            "experience" => Ok(SortOption::Experience),
            other => Err(format!("unknown sort option: {}", other)),
        }
    }
}

/// 已驗證並正規化的醫師資料，取得後不再變動
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    #[serde(rename = "speciality")]
    pub specialities: Vec<String>,
    pub experience: u32,
    pub fees: f64,
    #[serde(rename = "consultationMode")]
    pub consultation_mode: ConsultationMode,
}

impl Doctor {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        specialities: &[&str],
        experience: u32,
        fees: f64,
        consultation_mode: ConsultationMode,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            specialities: specialities.iter().map(|s| s.to_string()).collect(),
            experience,
            fees,
            consultation_mode,
        }
    }
}

/// 目前的搜尋、篩選與排序選項；預設值即「全部未設定」
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_query: String,
    pub consultation_mode: Option<ConsultationMode>,
    pub specialities: BTreeSet<String>,
    pub sort_by: Option<SortOption>,
}

impl FilterState {
    pub fn is_unset(&self) -> bool {
        self.search_query.is_empty()
            && self.consultation_mode.is_none()
            && self.specialities.is_empty()
            && self.sort_by.is_none()
    }
}
