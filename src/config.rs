//! Command line arguments and runtime configuration.

use crate::processing::DEFAULT_HOST_LIMIT;
use clap::Parser;
use std::path::PathBuf;

/// Default cap on subnet rows shown or exported.
pub const DEFAULT_SUBNET_LIMIT: u128 = 1024;
/// Default log4rs configuration file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Parser, Debug)]
#[command(name = "maskerade")]
#[command(about = "A network analyzer tool for IPv4 and IPv6.")]
pub struct CommandLine {
    /// Network to load at startup, e.g. 192.168.1.0/24 or 2001:db8::/32
    #[arg(short, long)]
    pub network: Option<String>,
    /// Print the summary of --network as JSON and exit
    #[arg(long, requires = "network")]
    pub json: bool,
    /// Default number of hosts to list or export
    #[arg(long, default_value_t = DEFAULT_HOST_LIMIT as u64)]
    pub max_hosts: u64,
    /// Maximum number of subnets to list or export
    #[arg(long, default_value_t = DEFAULT_SUBNET_LIMIT as u64)]
    pub max_subnets: u64,
    /// Directory for exported CSV files
    #[arg(long, default_value = ".")]
    pub export_dir: PathBuf,
    /// log4rs configuration file
    #[arg(long, default_value = DEFAULT_LOG_CONFIG)]
    pub log_config: PathBuf,
    /// Skip the startup banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Settings used by the interactive menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub max_hosts: u128,
    pub max_subnets: u128,
    pub export_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_hosts: DEFAULT_HOST_LIMIT,
            max_subnets: DEFAULT_SUBNET_LIMIT,
            export_dir: PathBuf::from("."),
        }
    }
}

impl From<&CommandLine> for Config {
    fn from(args: &CommandLine) -> Self {
        Config {
            max_hosts: args.max_hosts as u128,
            max_subnets: args.max_subnets as u128,
            export_dir: args.export_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CommandLine::try_parse_from(["maskerade"]).unwrap();
        assert_eq!(args.network, None);
        assert!(!args.json);
        assert_eq!(args.log_config, PathBuf::from("log4rs.yml"));
        assert_eq!(Config::from(&args), Config::default());
    }

    #[test]
    fn test_overrides() {
        let args = CommandLine::try_parse_from([
            "maskerade",
            "-n",
            "10.0.0.0/8",
            "--json",
            "--max-hosts",
            "50",
            "--export-dir",
            "/tmp/out",
        ])
        .unwrap();
        assert_eq!(args.network.as_deref(), Some("10.0.0.0/8"));
        assert!(args.json);
        let config = Config::from(&args);
        assert_eq!(config.max_hosts, 50);
        assert_eq!(config.max_subnets, DEFAULT_SUBNET_LIMIT);
        assert_eq!(config.export_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_json_requires_network() {
        assert!(CommandLine::try_parse_from(["maskerade", "--json"]).is_err());
    }
}
