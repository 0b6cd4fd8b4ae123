//! LinkScout Core - OSINT lookup link catalog
//!
//! This crate provides:
//! - The registry of OSINT categories and their lookup URL templates
//! - The builder that fills those templates for a target identifier
//! - The catalog model and its JSON export

pub mod registry;
pub mod catalog;
pub mod builder;
pub mod store;
pub mod config;
pub mod error;

pub use registry::*;
pub use catalog::*;
pub use builder::*;
pub use store::*;
pub use config::*;
pub use error::*;

/// Default `--rate-limit` in seconds
pub const DEFAULT_RATE_LIMIT_SECS: u64 = 1;

/// Default `--timeout` in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Extension of exported catalog files
pub const EXPORT_EXTENSION: &str = "json";

/// Prefix of default export file names
pub const EXPORT_PREFIX: &str = "osint";
