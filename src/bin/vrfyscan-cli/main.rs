mod args;
mod output;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use vrfyscan_lib::{Verbosity, resolve_candidates, run};

use args::Cli;

fn init_tracing(verbosity: Verbosity) {
    let default = match verbosity {
        Verbosity::Silent => "warn",
        Verbosity::Info => "info",
        Verbosity::Detail => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity());

    // port/format problems surface before any connection is attempted
    let config = cli.scan_config()?;
    let candidates = resolve_candidates(&cli.usernames).context("resolve usernames")?;
    output::check_format(&cli.format)?;

    let result = run(&config, &candidates);
    print!("{}", output::render(&result, &cli.format)?);

    // exit codes: 0 completed, 2 aborted, 1 fatal
    if !result.status.is_completed() {
        std::process::exit(2);
    }
    Ok(())
}
