//! Command line options.

use crate::config;
use clap::{CommandFactory, Parser};

#[derive(Parser, Debug)]
#[command(version)]
#[command(about = "Generate a subnet inventory from SoftLayer VLANs")]
pub struct Cli {
    /// vCenter association json
    #[arg(long)]
    pub vcenter: Option<String>,

    /// IBM Authentication json
    #[arg(long)]
    pub auth: Option<String>,

    /// Read VLANs from a cache file instead of the SoftLayer API
    #[arg(long)]
    pub vlan_cache: Option<String>,

    /// SoftLayer REST API base URL
    #[arg(long, default_value = config::SOFTLAYER_API_URL)]
    pub api_url: String,
}

/// Validated options for a run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub vcenter: String,
    pub auth: String,
    pub vlan_cache: Option<String>,
    pub api_url: String,
}

impl Cli {
    /// `None` when either required input file was not given.
    pub fn run_options(self) -> Option<RunOptions> {
        Some(RunOptions {
            vcenter: self.vcenter.filter(|p| !p.is_empty())?,
            auth: self.auth.filter(|p| !p.is_empty())?,
            vlan_cache: self.vlan_cache,
            api_url: self.api_url,
        })
    }
}

/// Usage error text, printed to stdout.
pub fn usage() -> String {
    format!(
        "Error: Both vcenter and auth options are required.\n{}",
        Cli::command().render_help()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_options() {
        let cli = Cli::parse_from(["bin", "--vcenter", "vc.json", "--auth", "auth.json"]);
        let options = cli.run_options().unwrap();
        assert_eq!(options.vcenter, "vc.json");
        assert_eq!(options.auth, "auth.json");
        assert_eq!(options.api_url, config::SOFTLAYER_API_URL);
        assert!(options.vlan_cache.is_none());
    }

    #[test]
    fn test_run_options_requires_both() {
        assert!(Cli::parse_from(["bin", "--vcenter", "vc.json"])
            .run_options()
            .is_none());
        assert!(Cli::parse_from(["bin", "--auth", "a.json", "--vcenter", ""])
            .run_options()
            .is_none());
    }

    #[test]
    fn test_usage_mentions_flags() {
        let text = usage();
        assert!(text.starts_with("Error: Both vcenter and auth options are required."));
        assert!(text.contains("--vcenter"));
        assert!(text.contains("--auth"));
    }
}
