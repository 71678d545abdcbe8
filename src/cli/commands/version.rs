//! Version command implementation
//!
//! Displays version information about Checkup.

use anyhow::Result;

use crate::cli::Output;

/// Execute the version command
pub fn execute(output: &Output) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let name = env!("CARGO_PKG_NAME");
    let description = env!("CARGO_PKG_DESCRIPTION");
    let repository = env!("CARGO_PKG_REPOSITORY");

    output.header("Checkup Version Information");
    output.status_indicator("VERSION", &format!("{name} v{version}"), true);
    output.blank_line();

    output.category("About");
    output.key_value("Description:", description, false);
    output.key_value("Repository:", repository, false);
    output.blank_line();

    output.category("Build Information");
    output.key_value("Rust edition:", "2024", false);
    output.key_value("Target:", std::env::consts::ARCH, false);
    output.key_value(
        "Profile:",
        if cfg!(debug_assertions) { "debug" } else { "release" },
        false,
    );

    output.blank_line();
    output.success("Run 'checkup --help' for usage information");

    Ok(())
}
