mod args;
mod cli;

use anyhow::Result;

fn main() -> Result<()> {
    let args = args::Args::parse().unwrap_or_else(|e| e.exit());
    args.init_logging();
    cli::run(&args)
}
