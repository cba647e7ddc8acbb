//! # Hueshift
//!
//! Command line front end for the `hueshift-core` theme engine.
//!
//! ## Modules
//!
//! - [`app`] - Command runner wiring the theme manager to its sources and settings
//! - [`cli`] - Argument parsing
//! - [`config`] - Configuration loading, validation and first-run setup
//! - [`error`] - Error types and centralized error reporting
//! - [`logger`] - Logging configuration
//!
//! This library interface enables integration testing by providing access to internal modules.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logger;

pub use app::App;
pub use error::{AppError, AppResult};
