//! Shared utilities for the Mobigate workspace.

pub mod currency;
pub mod error;
pub mod logging;

pub use currency::format_mobi;
pub use error::LoggingError;
pub use logging::{init_logging, LogFormat};
