//! # Checkup - Self-Diagnostic Property Reports
//!
//! Checkup reports on key/value properties resources shipped with a
//! deployment: build metadata, git information, environment descriptors.
//! A resource is located through an ordered lookup chain (embedded table,
//! search path, filesystem), parsed as a properties document, and rendered
//! into a single human-readable report line.
//!
//! ## Quick Start
//!
//! ```bash
//! # Install checkup
//! cargo install checkup
//!
//! # Report every key in a properties file
//! checkup report git.properties
//!
//! # Filter, rename, and reformat
//! checkup report git.properties \
//!     --key git.branch,git.commit.id \
//!     --rename git.commit.id=commit \
//!     --template 'git.commit.id=sha={value}'
//! ```

pub mod cli;
pub mod config;
pub mod diagnose;
pub mod properties;
pub mod report;
pub mod resolve;

pub use cli::{Cli, Output};
pub use config::CheckupConfig;

/// Result type alias for Checkup operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
