//! Go OpenAPI Generator - Command-line tool for discovering HTTP routes in Go code.
//!
//! This binary analyses Go source files (or whole directories) for imports of
//! supported web frameworks and their route registrations, then emits a minimal
//! OpenAPI 3.0 document per framework usage per file.
//!
//! # Usage
//!
//! ```bash
//! openapi-from-go [OPTIONS] <SOURCE_PATH>
//! ```
//!
//! # Examples
//!
//! Analyse a single file:
//! ```bash
//! openapi-from-go ./cmd/server/main.go
//! ```
//!
//! Scan a whole service and write JSON output:
//! ```bash
//! openapi-from-go ./my-service -f json -o routes.json
//! ```
//!
//! Enable verbose logging:
//! ```bash
//! openapi-from-go ./my-service -v
//! ```

mod analysis;
mod cli;
mod detector;
mod error;
mod extractor;
mod openapi_builder;
mod parser;
mod scanner;
mod serializer;

use anyhow::Result;
use clap::Parser;
use log::info;

fn main() -> Result<()> {
    // We need to parse args twice: once to get verbose flag, then again after logger init
    // First, do a quick parse just to check for verbose flag
    let args_for_verbose = cli::CliArgs::parse();

    // Initialize logger based on verbose flag
    let log_level = if args_for_verbose.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("Go OpenAPI Generator starting...");

    // Now do the full parse with validation
    let args = cli::parse_args_from_parsed(args_for_verbose)?;

    // Run the main workflow
    cli::run(args)?;

    info!("Route discovery completed successfully");

    Ok(())
}
