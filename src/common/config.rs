use clap::Parser;

use crate::{common::logging::LogFormat, domain::factory::FIRST_ACCOUNT_NUMBER};

#[derive(Parser, Debug)]
#[command(name = "bank_account")]
#[command(about = "Menu-driven single bank account", long_about = None)]
pub struct Cli {
    /// Number given to the first account opened in this run
    #[arg(long, default_value_t = FIRST_ACCOUNT_NUMBER)]
    pub first_account_number: u64,

    /// Do not log how long deposits and withdrawals take
    #[arg(long)]
    pub no_timing: bool,

    /// Log filter directive, e.g. "info" or "bank_account=debug"
    #[arg(long, default_value = "info")]
    pub log_filter: String,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Runtime settings for one interactive session.
#[derive(Debug, Clone)]
pub struct Config {
    pub first_account_number: u64,
    pub timing: bool,
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            first_account_number: FIRST_ACCOUNT_NUMBER,
            timing: true,
            log_filter: "info".to_string(),
            log_format: LogFormat::Compact,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            first_account_number: cli.first_account_number,
            timing: !cli.no_timing,
            log_filter: cli.log_filter,
            log_format: cli.log_format,
        }
    }
}
