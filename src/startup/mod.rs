//! Startup configuration and logging.

mod config;
mod logging;

pub use config::{AppConfig, Environment, SPLASH_DURATION};
pub use logging::{init_logging, log_file_path};

pub(crate) use config::parse_budget;
