//! Diagnostic report tasks

pub mod properties;

pub use properties::{KeyFormat, PropertiesReporter};
