// src/cli/mod.rs
use clap::Parser;
use log::LevelFilter;

pub mod clipboard;
pub mod commands;
pub mod handlers;
pub mod menu;

use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate random passwords and rate their strength", long_about = None)]
pub struct Args {
    /// Print results as JSON objects, one per line
    #[arg(long, global = true)]
    pub json: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, value_parser = parse_log_level)]
    pub log_level: Option<LevelFilter>,

    /// Command to execute (defaults to `generate`)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

fn parse_log_level(level: &str) -> Result<LevelFilter, String> {
    crate::core::config::parse_level(level).ok_or_else(|| format!("unknown log level '{}'", level))
}
