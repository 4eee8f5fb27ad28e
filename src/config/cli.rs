use crate::domain::model::{ConsultationMode, SortOption};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "doctor-directory")]
#[command(about = "Search, filter and book doctors from a remote directory")]
pub struct CliConfig {
    #[arg(long, help = "Doctor list endpoint (overrides the config file)")]
    pub api_endpoint: Option<String>,

    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Request timeout in seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Do not fall back to sample doctors when the fetch fails")]
    pub no_fallback: bool,

    #[arg(long, help = "If the first fetch fails, retry it once before rendering")]
    pub retry: bool,

    #[arg(long, default_value = "", help = "Initial location query, e.g. \"search=joh&sort=fees\"")]
    pub query: String,

    #[arg(long)]
    pub search: Option<String>,

    #[arg(long, help = "\"Video Consult\" or \"In Clinic\"")]
    pub mode: Option<ConsultationMode>,

    #[arg(long = "speciality", help = "Toggle a speciality filter (repeatable)")]
    pub specialities: Vec<String>,

    #[arg(long, help = "\"fees\" or \"experience\"")]
    pub sort: Option<SortOption>,

    #[arg(long, help = "Clear all filters before applying the other filter flags")]
    pub clear: bool,

    #[arg(long, value_name = "ID", help = "Book an appointment with the doctor")]
    pub book: Option<String>,

    #[arg(long, help = "Reload the page after booking (drops the navigation payload)")]
    pub reload: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter_flags() {
        let config = CliConfig::try_parse_from([
            "doctor-directory",
            "--search",
            "joh",
            "--mode",
            "In Clinic",
            "--speciality",
            "Dentist",
            "--speciality",
            "Surgeon",
            "--sort",
            "experience",
        ])
        .unwrap();

        assert_eq!(config.search.as_deref(), Some("joh"));
        assert_eq!(config.mode, Some(ConsultationMode::InClinic));
        assert_eq!(config.specialities, vec!["Dentist", "Surgeon"]);
        assert_eq!(config.sort, Some(SortOption::Experience));
        assert!(config.query.is_empty());
        assert!(!config.retry);
    }

    #[test]
    fn test_parse_retry_flag() {
        let config = CliConfig::try_parse_from(["doctor-directory", "--retry"]).unwrap();
        assert!(config.retry);
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(CliConfig::try_parse_from(["doctor-directory", "--mode", "Home Visit"]).is_err());
    }
}
