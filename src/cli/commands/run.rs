//! Run every report defined in configuration

use anyhow::Result;

use crate::cli::Output;
use crate::config::CheckupConfig;
use crate::diagnose::{DiagnosticTask, ExecutionContext, Severity, TaskResult};
use crate::report::PropertiesReporter;
use crate::resolve::ResourceResolver;

pub fn execute(config_path: Option<&str>, output: &Output) -> Result<()> {
    let config = CheckupConfig::load(config_path)?;
    config.validate()?;

    if config.reports.is_empty() {
        output.info("No reports configured");
        return Ok(());
    }

    let resolver = ResourceResolver::from_config(&config.resolver);
    let ctx = ExecutionContext::new(resolver);

    let mut passed = 0usize;
    let mut failed = 0usize;
    let mut critical_failures = 0usize;

    for spec in &config.reports {
        let mut reporter = PropertiesReporter::from_spec(spec);
        let mut result = TaskResult::new(spec.resource.clone(), reporter.severity());

        match reporter.set_up(&ctx) {
            Ok(()) => reporter.run(&ctx, &mut result),
            Err(err) => result.set_error_message(err.to_string()),
        }

        let line = match result.message() {
            Some(message) if !message.is_empty() => {
                format!("{}: {}", result.task(), message)
            }
            _ => result.task().to_string(),
        };

        if result.is_passed() {
            passed += 1;
            output.status_indicator("PASS", &line, true);
        } else {
            failed += 1;
            output.status_indicator("FAIL", &line, false);
            if result.severity() == Severity::Critical {
                critical_failures += 1;
            } else {
                output.verbose("failure is informational and does not affect the exit code");
            }
        }
    }

    output.blank_line();
    output.summary_stats("Passed:", passed);
    output.summary_stats("Failed:", failed);

    if critical_failures > 0 {
        anyhow::bail!("{critical_failures} critical report(s) failed");
    }

    Ok(())
}
