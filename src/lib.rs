pub mod config;
pub mod error;
pub mod export;
pub mod icon;
pub mod logger;
pub mod models;

pub use config::ExportConfig;
pub use error::{IconError, Result};
pub use export::export_all;
pub use icon::generate_icon;
