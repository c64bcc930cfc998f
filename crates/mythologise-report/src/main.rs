//! `mythologise-report`: print collision odds for handle tag lengths.

use clap::Parser;
use mythologise_report::{cli::ReportCli, logging::init_logging, run};

fn main() -> anyhow::Result<()> {
    let cli = ReportCli::parse();
    init_logging(&cli.log_level, cli.log_format);

    let output = run(&cli)?;
    println!("{output}");
    Ok(())
}
