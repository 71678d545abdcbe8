//! One-off properties report from command-line flags

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::Output;
use crate::config::CheckupConfig;
use crate::diagnose::{DiagnosticTask, ExecutionContext, Severity, TaskResult};
use crate::report::PropertiesReporter;
use crate::report::properties::merge_key_formats;
use crate::resolve::ResourceResolver;

#[derive(Args)]
pub struct ReportArgs {
    /// Properties resource to report: an embedded name, a search-path entry,
    /// or a file path
    #[arg(value_name = "RESOURCE")]
    pub resource: String,

    /// Only report these keys (comma-separated or repeated)
    #[arg(short, long, value_delimiter = ',')]
    pub key: Vec<String>,

    /// Rename a key in the report, as KEY=NAME
    #[arg(long, value_name = "KEY=NAME")]
    pub rename: Vec<String>,

    /// Format a key's value, as KEY=TEMPLATE; every literal '{value}' in the
    /// template expands to the raw value
    #[arg(long, value_name = "KEY=TEMPLATE")]
    pub template: Vec<String>,

    /// Extra directories to search before falling back to a direct path
    #[arg(long, value_delimiter = ',')]
    pub search_path: Vec<String>,

    /// Severity used for the process exit code when the report fails
    #[arg(long, value_enum, default_value_t = Severity::None)]
    pub severity: Severity,
}

pub fn execute(args: ReportArgs, config_path: Option<&str>, output: &Output) -> Result<()> {
    let config = CheckupConfig::load(config_path)?;

    let mut resolver = ResourceResolver::from_config(&config.resolver);
    for dir in &args.search_path {
        resolver.add_search_dir(dir);
    }
    let ctx = ExecutionContext::new(resolver);

    let mut reporter = PropertiesReporter::new(&args.resource);
    reporter.set_severity(args.severity);
    if !args.key.is_empty() {
        reporter.set_keys_to_report(args.key.iter().cloned().collect());
    }

    let renames = split_pairs(&args.rename, "--rename")?;
    let templates = split_pairs(&args.template, "--template")?;
    for (key, format) in merge_key_formats(renames, templates) {
        if !args.key.is_empty() && !args.key.contains(&key) {
            output.warning(&format!("format for key '{key}' is outside the --key filter"));
        }
        reporter.add_format_for_key(key, format.alternative_name, format.value_template);
    }

    reporter
        .set_up(&ctx)
        .context("Report is not configured correctly")?;

    let mut result = TaskResult::new(args.resource.clone(), reporter.severity());
    reporter.run(&ctx, &mut result);

    if result.is_passed() {
        // The report itself goes to stdout unstyled so it can be piped
        println!("{}", result.message().unwrap_or(""));
        output.verbose(&format!("reported from '{}'", args.resource));
        Ok(())
    } else {
        output.error(result.message().unwrap_or("report failed"));
        if result.severity() == Severity::Critical {
            std::process::exit(1);
        }
        Ok(())
    }
}

/// Split repeated KEY=VALUE flags, rejecting entries without a '='
fn split_pairs(specs: &[String], flag: &str) -> Result<Vec<(String, String)>> {
    specs
        .iter()
        .map(|spec| {
            spec.split_once('=')
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .with_context(|| format!("Expected KEY=VALUE in {flag}, got '{spec}'"))
        })
        .collect()
}
