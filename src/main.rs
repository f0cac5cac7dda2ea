use clap::Parser;
use serde_json::json;
use std::path::Path;
use std::process::ExitCode;

mod cli;
mod core;
mod generators;
mod logging;
mod models;

use crate::cli::Args;
use crate::core::config::Config;

fn main() -> ExitCode {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let (config, warnings) = Config::load();

    if let Err(e) = logging::init(&config, args.log_level) {
        eprintln!("⚠️ Failed to open log file: {}", e);
    }
    for warning in &warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Loaded config: {:?}", config);

    match cli::handlers::run(&args, &config, &mut std::io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            if args.json {
                let response = json!({
                    "success": false,
                    "error": format!("{:#}", e),
                });
                println!("{}", response);
            } else {
                eprintln!("❌ {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}
