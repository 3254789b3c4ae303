use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use vrfyscan_lib::{ScanConfig, Verbosity, parse_port, scan::DEFAULT_TIMEOUT_SECS};

#[derive(Parser, Debug)]
#[command(
    name = "vrfyscan-cli",
    version,
    about = "Verify usernames using SMTP VRFY commands."
)]
pub struct Cli {
    /// file containing usernames, or a list of usernames/URLs
    pub usernames: String,

    /// target host or IP address
    pub host: String,

    /// increase verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// connection/read timeout in seconds (0 aborts on the first connect)
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// pause between username checks, in seconds
    #[arg(short, long, default_value_t = 0)]
    pub sleep: u64,

    /// SMTP port; blank means 25
    #[arg(short, long, default_value = "25")]
    pub port: String,

    /// format: human|json
    #[arg(long, default_value = "human")]
    pub format: String,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_count(self.verbose)
    }

    /// Validate the connection parameters. Runs before any candidate is
    /// resolved or checked.
    pub fn scan_config(&self) -> Result<ScanConfig> {
        let port = parse_port(&self.port).context("invalid --port")?;
        Ok(ScanConfig::new(self.host.clone())
            .with_port(port)
            .with_timeout_secs(self.timeout)
            .with_delay_secs(self.sleep)
            .with_verbosity(self.verbosity()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("valid arguments")
    }

    #[test]
    fn defaults() {
        let cli = parse(&["vrfyscan-cli", "root admin", "10.0.0.5"]);
        let config = cli.scan_config().expect("config");
        assert_eq!(config.host, "10.0.0.5");
        assert_eq!(config.port, 25);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.delay, Duration::ZERO);
        assert_eq!(config.verbosity, Verbosity::Silent);
        assert_eq!(cli.format, "human");
    }

    #[test]
    fn flags_map_onto_config() {
        let cli = parse(&[
            "vrfyscan-cli", "-vv", "-t", "2", "-s", "1", "-p", "2525", "users.txt", "mx.local",
        ]);
        let config = cli.scan_config().expect("config");
        assert_eq!(config.port, 2525);
        assert_eq!(config.timeout, Duration::from_secs(2));
        assert_eq!(config.delay, Duration::from_secs(1));
        assert_eq!(config.verbosity, Verbosity::Detail);
    }

    #[test]
    fn blank_port_is_default() {
        let cli = parse(&["vrfyscan-cli", "-p", " ", "root", "mx.local"]);
        assert_eq!(cli.scan_config().expect("config").port, 25);
    }

    #[test]
    fn non_numeric_port_fails_before_scan() {
        let cli = parse(&["vrfyscan-cli", "--port", "smtp", "root", "mx.local"]);
        assert!(cli.scan_config().is_err());
    }
}
