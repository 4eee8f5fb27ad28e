pub mod app;
pub mod booking;
pub mod directory;
pub mod filter;
pub mod navigation;
pub mod query;
pub mod store;

pub use crate::domain::model::{ConsultationMode, Doctor, FilterState, SortOption};
pub use crate::domain::ports::{ConfigProvider, DoctorSource, Navigator};
pub use crate::utils::error::Result;
