//! CLI module for the campus helpdesk
//!
//! - `serve`: HTTP server
//! - `ask`: answer one message and exit

pub mod ask;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;

/// Campus helpdesk - answers student questions about results, fees and registration
#[derive(Debug, Parser)]
#[command(name = "campus-helpdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Answer a single message and print the reply
    Ask(ask::AskArgs),
}

/// Load `.env` and layered configuration; unreadable configuration falls
/// back to defaults.
pub(crate) fn load_config() -> (AppConfig, Option<config::ConfigError>) {
    dotenvy::dotenv().ok();

    match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}
