use anyhow::Result;
use clap::Parser;

use checkup::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
