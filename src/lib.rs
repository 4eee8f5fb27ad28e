pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod views;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::HttpDoctorSource;
pub use config::{toml_config::TomlConfig, Settings};
pub use self::core::{
    app::DirectoryApp,
    directory::Directory,
    navigation::MemoryHistory,
    store::{FilterAction, FilterStore},
};
pub use utils::error::{DirectoryError, FetchError, Result};
