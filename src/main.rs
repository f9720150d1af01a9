use anyhow::Result;
use clap::Parser;
use outlay::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
