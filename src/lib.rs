pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliArgs;

pub use crate::adapters::ReqwestClient;
pub use crate::config::ServiceConfig;
pub use crate::core::{lookup::LookupProxy, LookupOutcome, ValidationResult, Word};
pub use crate::server::AppState;
pub use crate::utils::error::{LookupError, Result};
pub use crate::utils::validation::validate;
