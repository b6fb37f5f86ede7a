use clap::{ArgAction, Parser};

use super::settings::SnmpVersion;

/// Check that 802.3ad LAG member ports are attached to their aggregate
#[derive(Debug, Parser)]
#[command(name = "check_lag", version, about)]
pub struct Cli {
    /// Host name or IP address of the switch
    #[arg(short = 'H', long = "host", value_name = "HOST")]
    pub host: Option<String>,

    /// SNMP community name
    #[arg(short, long, default_value = "public")]
    pub community: String,

    /// Agent UDP port (ignored when HOST already carries one)
    #[arg(short, long, default_value_t = 161)]
    pub port: u16,

    /// SNMP protocol version; v1 walks with GETNEXT
    #[arg(short = 'P', long = "snmp-version", value_enum, default_value = "2c")]
    pub snmp_version: SnmpVersion,

    /// Per-request timeout in seconds
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Retries after a request times out
    #[arg(short, long, default_value_t = 2)]
    pub retries: u32,

    /// GETBULK max-repetitions
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_repetitions: u32,

    /// Log diagnostics to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
