use clap::{Parser, Subcommand};
use stockscan_core::RfidTag;
use stockscan_inventory::{SIMULATOR_SCAN_TAG, ScanAction};

#[derive(Parser)]
#[command(name = "stockscan")]
#[command(about = "View the RFID inventory and simulate tag scans.")]
pub struct CommandLine {
    /// Base URL of the inventory API (overrides STOCKSCAN_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the inventory and print the table
    #[command(alias = "l")]
    List {
        /// Print the table body as HTML instead of plain text
        #[arg(long)]
        html: bool,
    },
    /// Scan the demo tag (TAG003) and reload the table
    #[command(alias = "s")]
    Scan {
        /// `add` or `remove`
        action: ScanAction,
    },
    /// Keep scanning a tag on a fixed interval until Ctrl-C
    Simulate {
        #[arg(long, default_value = SIMULATOR_SCAN_TAG)]
        tag: RfidTag,
        #[arg(long, default_value = "remove")]
        action: ScanAction,
        #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
        interval_secs: u64,
        /// Stop after this many scans
        #[arg(long)]
        count: Option<u64>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scan_action() {
        let cli = CommandLine::try_parse_from(["stockscan", "scan", "add"]).unwrap();
        assert!(matches!(cli.command, Commands::Scan { action: ScanAction::Add }));
        assert_eq!(cli.api_url, None);
    }

    #[test]
    fn rejects_unknown_action() {
        assert!(CommandLine::try_parse_from(["stockscan", "scan", "delete"]).is_err());
    }

    #[test]
    fn simulate_defaults_match_reader() {
        let cli = CommandLine::try_parse_from([
            "stockscan",
            "simulate",
            "--api-url",
            "http://127.0.0.1:9000/api",
        ])
        .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://127.0.0.1:9000/api"));
        match cli.command {
            Commands::Simulate { tag, action, interval_secs, count } => {
                assert_eq!(tag.as_str(), "TAG002");
                assert_eq!(action, ScanAction::Remove);
                assert_eq!(interval_secs, 5);
                assert_eq!(count, None);
            }
            _ => panic!("expected simulate"),
        }
    }

    #[test]
    fn zero_interval_is_rejected() {
        assert!(
            CommandLine::try_parse_from(["stockscan", "simulate", "--interval-secs", "0"]).is_err()
        );
    }
}
