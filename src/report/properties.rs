//! Reporting on key/value pairs from a properties resource
//!
//! [`PropertiesReporter`] loads a properties resource through the resolver's
//! lookup chain, selects a subset of keys, and joins `key: value` pairs into
//! a single report message. Keys can be renamed and values reformatted
//! per key.
//!
//! A typical use is surfacing build metadata written at release time, for
//! example making commit ids clickable:
//!
//! ```
//! use checkup::report::PropertiesReporter;
//!
//! let commit_url = "<a href=\"https://example.org/acme/commits/{value}\">{value}</a>";
//! let mut git_info = PropertiesReporter::new("git.properties");
//! git_info.set_keys_to_report(
//!     ["git.closest.tag.name", "git.commit.id", "git.branch"]
//!         .map(String::from)
//!         .into(),
//! );
//! git_info.add_format_for_key("git.commit.id", Some("commit".into()), Some(commit_url.into()));
//! git_info.add_format_for_key("git.branch", Some("branch".into()), None);
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use tracing::debug;

use crate::config::ReportSpec;
use crate::diagnose::{DiagnoseError, DiagnosticTask, ExecutionContext, Severity, TaskResult};
use crate::properties::Properties;

/// Placeholder expanded to the raw property value inside a value template
const VALUE_PLACEHOLDER: &str = "{value}";

/// How a single key is displayed in the report message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyFormat {
    /// Shown instead of the raw key when present
    pub alternative_name: Option<String>,
    /// Every `{value}` occurrence expands to the raw value; the raw value is
    /// shown unchanged when absent
    pub value_template: Option<String>,
}

/// Reports keys and values from a properties resource
pub struct PropertiesReporter {
    resource: Option<String>,
    severity: Severity,
    keys_to_report: HashSet<String>,
    key_formats: HashMap<String, KeyFormat>,
}

impl Default for PropertiesReporter {
    fn default() -> Self {
        Self {
            resource: None,
            severity: Severity::None,
            keys_to_report: HashSet::new(),
            key_formats: HashMap::new(),
        }
    }
}

impl PropertiesReporter {
    /// Create a reporter for the named resource. A failed properties report
    /// is informational by default and does not fail an overall run.
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: Some(resource.into()),
            ..Self::default()
        }
    }

    /// Build a reporter from a declarative report spec
    pub fn from_spec(spec: &ReportSpec) -> Self {
        let mut reporter = Self::new(&spec.resource);
        reporter.set_severity(spec.severity);
        if !spec.keys.is_empty() {
            reporter.set_keys_to_report(spec.keys.iter().cloned().collect());
        }
        for format in &spec.formats {
            reporter.add_format_for_key(&format.key, format.name.clone(), format.template.clone());
        }
        reporter
    }

    pub fn set_severity(&mut self, severity: Severity) {
        self.severity = severity;
    }

    /// Limit which keys are reported. Replaces any earlier filter wholesale;
    /// an empty set means every key in the source is reported.
    pub fn set_keys_to_report(&mut self, keys: HashSet<String>) {
        self.keys_to_report = keys;
    }

    /// Specify how a key is reported: an alternative display name and/or a
    /// value template. A later call for the same key overwrites the earlier
    /// format entirely.
    pub fn add_format_for_key(
        &mut self,
        key: impl Into<String>,
        alternative_name: Option<String>,
        value_template: Option<String>,
    ) {
        self.key_formats.insert(
            key.into(),
            KeyFormat {
                alternative_name,
                value_template,
            },
        );
    }

    fn read_properties(
        &self,
        ctx: &ExecutionContext,
        name: &str,
    ) -> Result<Properties, DiagnoseError> {
        let stream = ctx
            .resolver()
            .open(name)
            .ok_or_else(|| DiagnoseError::ResourceNotFound { name: name.into() })?;

        Properties::load(stream).map_err(|err| {
            debug!(resource = name, error = %err, "properties load failed");
            DiagnoseError::ResourceRead {
                name: name.into(),
                reason: err.to_string(),
            }
        })
    }

    /// Join the selected keys into the report message. Keys are sorted
    /// lexicographically regardless of source order; a non-empty filter
    /// restricts membership without affecting the order.
    fn report_message(&self, properties: &Properties) -> String {
        let mut keys: BTreeSet<&str> = properties.keys().collect();
        if !self.keys_to_report.is_empty() {
            keys.retain(|key| self.keys_to_report.contains(*key));
        }

        let pairs: Vec<String> = keys
            .iter()
            .map(|key| {
                format!(
                    "{}: {}",
                    self.display_name(key),
                    self.display_value(key, properties)
                )
            })
            .collect();
        pairs.join(", ")
    }

    fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.key_formats
            .get(key)
            .and_then(|format| format.alternative_name.as_deref())
            .unwrap_or(key)
    }

    fn display_value(&self, key: &str, properties: &Properties) -> String {
        let value = properties.get(key).unwrap_or("");
        match self
            .key_formats
            .get(key)
            .and_then(|format| format.value_template.as_deref())
        {
            Some(template) => template.replace(VALUE_PLACEHOLDER, value),
            None => value.to_string(),
        }
    }
}

impl DiagnosticTask for PropertiesReporter {
    fn description(&self) -> String {
        match &self.resource {
            Some(name) => format!("reports keys and values from properties resource '{name}'"),
            None => "reports keys and values from a properties resource".to_string(),
        }
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn set_up(&mut self, _ctx: &ExecutionContext) -> Result<(), DiagnoseError> {
        match self.resource.as_deref() {
            Some(name) if !name.trim().is_empty() => Ok(()),
            _ => Err(DiagnoseError::MissingParameter {
                parameter: "resource",
                task: "properties report",
            }),
        }
    }

    fn run(&self, ctx: &ExecutionContext, result: &mut TaskResult) {
        let Some(name) = self.resource.as_deref() else {
            result.set_error_message(
                DiagnoseError::MissingParameter {
                    parameter: "resource",
                    task: "properties report",
                }
                .to_string(),
            );
            return;
        };

        match self.read_properties(ctx, name) {
            Ok(properties) => result.set_passed_message(self.report_message(&properties)),
            Err(err) => {
                // Full diagnostic detail goes to the log; the result only
                // carries the message text
                debug!(resource = name, error = ?err, "properties report failed");
                result.set_error_message(err.to_string());
            }
        }
    }
}

/// Merge `--rename` and `--template` style overrides keyed by property name
/// into complete [`KeyFormat`] entries
pub fn merge_key_formats(
    renames: impl IntoIterator<Item = (String, String)>,
    templates: impl IntoIterator<Item = (String, String)>,
) -> BTreeMap<String, KeyFormat> {
    let mut formats: BTreeMap<String, KeyFormat> = BTreeMap::new();
    for (key, name) in renames {
        formats.entry(key).or_default().alternative_name = Some(name);
    }
    for (key, template) in templates {
        formats.entry(key).or_default().value_template = Some(template);
    }
    formats
}
