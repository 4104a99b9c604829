//! Command-line and environment configuration.

use crate::lifecycle::SystemConfig;
use clap::{Parser, ValueEnum};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Restaurant table service.
#[derive(Debug, Clone, Parser)]
#[command(name = "table-actors", version, about)]
pub struct Config {
    /// Address the HTTP server binds to.
    #[arg(long, env = "TABLES_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "TABLES_PORT", default_value_t = 8080)]
    pub port: u16,

    /// How long a request waits for its table, in milliseconds.
    #[arg(long, env = "TABLES_ASK_TIMEOUT_MS", default_value_t = 1000)]
    pub ask_timeout_ms: u64,

    /// Capacity of the router's mailbox.
    #[arg(
        long,
        env = "TABLES_MAILBOX_CAPACITY",
        default_value_t = 256,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub mailbox_capacity: u64,

    #[arg(long, env = "TABLES_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Config {
    pub fn system(&self) -> SystemConfig {
        SystemConfig {
            ask_timeout: Duration::from_millis(self.ask_timeout_ms),
            mailbox_capacity: self.mailbox_capacity as usize,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
