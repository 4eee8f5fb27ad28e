// Adapters layer: concrete implementations for external systems.

pub mod http;
pub mod sample;

pub use http::HttpDoctorSource;
pub use sample::sample_doctors;
