use thiserror::Error;

/// 資料來源錯誤：在 `Directory` 邊界被攔截，轉為畫面上的訊息與重試動作
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error! status: {status}")]
    Network { status: u16 },

    #[error("Network request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Format { message: String },
}

impl FetchError {
    pub fn format(message: impl Into<String>) -> Self {
        FetchError::Format {
            message: message.into(),
        }
    }

    /// HTTP 狀態錯誤或傳輸失敗都算網路錯誤
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Network { .. } | FetchError::Transport(_))
    }
}

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Failed to fetch doctors: {0}")]
    FetchError(#[from] FetchError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Doctor not found: {id}")]
    DoctorNotFound { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DirectoryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DirectoryError::FetchError(e) if e.is_network() => ErrorCategory::Network,
            DirectoryError::FetchError(_) => ErrorCategory::Data,
            DirectoryError::ConfigValidationError { .. }
            | DirectoryError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DirectoryError::IoError(_) => ErrorCategory::System,
            DirectoryError::DoctorNotFound { .. } => ErrorCategory::User,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::User => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DirectoryError::FetchError(e) => {
                format!("Could not load the doctor list: {}", e)
            }
            DirectoryError::DoctorNotFound { id } => {
                format!("No doctor with id '{}' is listed", id)
            }
            DirectoryError::ConfigValidationError { .. }
            | DirectoryError::InvalidConfigValueError { .. } => {
                format!("The configuration is invalid: {}", self)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check the network connection and retry",
            ErrorCategory::Data => "Check that the endpoint returns a JSON array of doctors",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags",
            ErrorCategory::System => "Check file permissions and available disk space",
            ErrorCategory::User => "Pick an id from the displayed list",
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
