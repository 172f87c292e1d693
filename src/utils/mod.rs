// Utility module for logging and configuration

mod config;
mod logging;

pub use config::*;
pub use logging::*;
