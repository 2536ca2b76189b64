use anyhow::{Context, Result};
use clap::Parser;
use userdb_tool::cli;

fn main() -> Result<()> {
    ctrlc::set_handler(|| {
        let status = cli::report_interrupt(&mut std::io::stdout());
        std::process::exit(status);
    })
    .context("install Ctrl+C handler")?;

    let args = cli::Cli::parse();
    args.run()
}
