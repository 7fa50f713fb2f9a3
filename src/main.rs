//! webserv - Entry Point
//!
//! Loads a configuration file, validates it and prints the parsed tree.

use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::process;

use webserv_config::error::handlers::{error_to_exit_code, handle_error};
use webserv_config::utils::logging::setup_logging;
use webserv_config::{Report, Settings, load_config};

/// sysexits: tool configuration error
const EXIT_CONFIG: i32 = 78;

#[derive(Parser, Debug)]
#[command(name = "webserv", version, about = "Parse and validate a webserv configuration file")]
struct Cli {
    /// Path to the configuration file
    config: PathBuf,

    /// Only validate; do not print the parsed configuration
    #[arg(long)]
    check: bool,

    /// Log level (overrides WEBSERV_LOG_LEVEL and webserv.toml)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let mut settings = match Settings::load(cli.log_level.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Invalid webserv settings: {}", e);
            process::exit(EXIT_CONFIG);
        }
    };
    if cli.check {
        settings.dump = false;
    }

    setup_logging(&settings.log_level);

    info!("Loading configuration from {}", cli.config.display());
    match load_config(&cli.config) {
        Ok(config) => {
            if settings.dump {
                print!("{}", Report(&config));
            } else {
                println!("{}: ok ({} server(s))", cli.config.display(), config.len());
            }
        }
        Err(e) => {
            handle_error(&e);
            eprintln!("Error: {}", e);
            process::exit(error_to_exit_code(&e));
        }
    }
}
