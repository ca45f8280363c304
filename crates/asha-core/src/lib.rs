//! Shared domain types, configuration and the top-level error for Asha.

pub mod config;
pub mod error;
pub mod serde_lenient;
pub mod types;

pub use config::AshaConfig;
pub use error::{AshaError, Result};
pub use types::*;
