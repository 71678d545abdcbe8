//! Diagnostic harness surfaces
//!
//! The small contract between the harness and its tasks: an execution
//! context handed to every task, a mutable result the task writes into, a
//! severity attached to each task, and the error taxonomy tasks use before
//! converting failures to result text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::resolve::ResourceResolver;

/// How much a failed task should count against an overall checkup run
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational only, a failure never fails the run
    #[default]
    None,
    /// Worth surfacing, but not fatal to the run
    Warning,
    /// A failure fails the run
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::None => write!(f, "none"),
            Severity::Warning => write!(f, "warning"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// Errors a task can raise while setting up or gathering its data
#[derive(Debug, Error)]
pub enum DiagnoseError {
    /// A required identifying parameter was absent at setup time
    #[error("required parameter '{parameter}' is missing for {task}")]
    MissingParameter {
        parameter: &'static str,
        task: &'static str,
    },

    /// Every lookup strategy missed
    #[error("properties resource '{name}' not found (tried embedded resources, search path, and disk)")]
    ResourceNotFound { name: String },

    /// The resource stream was found but reading or parsing it failed
    #[error("error while reading properties resource '{name}': {reason}")]
    ResourceRead { name: String, reason: String },
}

/// Per-run state handed to every task
#[derive(Debug, Default)]
pub struct ExecutionContext {
    resolver: ResourceResolver,
}

impl ExecutionContext {
    pub fn new(resolver: ResourceResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &ResourceResolver {
        &self.resolver
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaskStatus {
    Unknown,
    Passed,
    Failed,
}

/// Mutable result a task writes into. Owned by the caller; tasks only set
/// the passed or error message.
#[derive(Debug)]
pub struct TaskResult {
    task: String,
    severity: Severity,
    status: TaskStatus,
    message: Option<String>,
}

impl TaskResult {
    pub fn new(task: impl Into<String>, severity: Severity) -> Self {
        Self {
            task: task.into(),
            severity,
            status: TaskStatus::Unknown,
            message: None,
        }
    }

    /// Record success along with the report text
    pub fn set_passed_message(&mut self, message: impl Into<String>) {
        self.status = TaskStatus::Passed;
        self.message = Some(message.into());
    }

    /// Record failure along with the failure text
    pub fn set_error_message(&mut self, message: impl Into<String>) {
        self.status = TaskStatus::Failed;
        self.message = Some(message.into());
    }

    pub fn is_passed(&self) -> bool {
        self.status == TaskStatus::Passed
    }

    pub fn is_failed(&self) -> bool {
        self.status == TaskStatus::Failed
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}

/// A single diagnostic task: validated once, then run to completion
///
/// `run` never propagates an error past its own boundary; every failure is
/// converted to text on the result's error channel.
pub trait DiagnosticTask {
    /// Human-readable description of what this task reports on
    fn description(&self) -> String;

    fn severity(&self) -> Severity {
        Severity::Critical
    }

    /// Validate configuration before the task is ever run
    fn set_up(&mut self, ctx: &ExecutionContext) -> Result<(), DiagnoseError> {
        let _ = ctx;
        Ok(())
    }

    fn run(&self, ctx: &ExecutionContext, result: &mut TaskResult);
}
