use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Go OpenAPI Generator - Discover HTTP routes in Go source by static analysis
#[derive(Parser, Debug)]
#[command(name = "openapi-from-go")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to a Go source file or a directory to scan
    #[arg(value_name = "SOURCE_PATH")]
    pub source_path: PathBuf,

    /// Output format (yaml or json)
    #[arg(short = 'f', long = "format", value_enum, default_value = "yaml")]
    pub output_format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// YAML format
    Yaml,
    /// JSON format
    Json,
}

/// Parse command line arguments
pub fn parse_args() -> Result<CliArgs> {
    let args = CliArgs::parse();
    parse_args_from_parsed(args)
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    if !args.source_path.exists() {
        anyhow::bail!("Source path does not exist: {}", args.source_path.display());
    }

    if args.source_path.is_file() && !is_go_file(&args.source_path) {
        anyhow::bail!(
            "Source file is not a Go file: {}",
            args.source_path.display()
        );
    }

    info!("Source path: {}", args.source_path.display());
    info!("Output format: {:?}", args.output_format);
    if let Some(ref output) = args.output_path {
        info!("Output file: {}", output.display());
    } else {
        info!("Output: stdout");
    }

    Ok(args)
}

fn is_go_file(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("go")
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    use crate::analysis::{analyse, Analysis};
    use crate::scanner::GoFileScanner;
    use crate::serializer::{serialize_json, serialize_yaml, write_to_file};

    info!("Starting Go route discovery...");

    // Step 1: Resolve the set of files to analyse
    let go_files: Vec<PathBuf> = if args.source_path.is_file() {
        vec![args.source_path.clone()]
    } else {
        info!("Scanning directory for Go files...");
        let scanner = GoFileScanner::new(args.source_path.clone());
        let scan_result = scanner.scan()?;

        for warning in &scan_result.warnings {
            warn!("{}", warning);
        }

        if scan_result.go_files.is_empty() {
            anyhow::bail!("No Go files found in: {}", args.source_path.display());
        }

        scan_result.go_files
    };

    info!("Analysing {} Go file(s)", go_files.len());

    // Step 2: Analyse each file independently and merge the results. Document keys
    // embed the file path, so merging cannot collide across files.
    let mut merged = Analysis {
        frameworks_identified: HashMap::new(),
        openapi_specs: HashMap::new(),
    };
    let mut analysed_count = 0usize;

    let single_file = go_files.len() == 1;
    for path in &go_files {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let file_path = path.to_string_lossy();

        match analyse(&file_path, &contents) {
            Ok(analysis) => {
                debug!(
                    "{}: {} framework(s), {} document(s)",
                    file_path,
                    analysis.frameworks_identified.len(),
                    analysis.openapi_specs.len()
                );
                merged
                    .frameworks_identified
                    .extend(analysis.frameworks_identified);
                merged.openapi_specs.extend(analysis.openapi_specs);
                analysed_count += 1;
            }
            Err(e) if single_file => {
                return Err(e).with_context(|| format!("Failed to analyse {}", file_path));
            }
            Err(e) => {
                warn!("Skipping {}: {}", file_path, e);
            }
        }
    }

    if analysed_count == 0 {
        anyhow::bail!("No Go files could be parsed successfully");
    }

    info!(
        "Analysis complete: {} framework(s), {} document(s)",
        merged.frameworks_identified.len(),
        merged.openapi_specs.len()
    );

    if merged.openapi_specs.is_empty() {
        warn!("No routes found in the analysed files");
    }

    // Step 3: Serialize to the requested format
    let content = match args.output_format {
        OutputFormat::Yaml => serialize_yaml(&merged)?,
        OutputFormat::Json => serialize_json(&merged)?,
    };

    // Step 4: Output to file or stdout
    if let Some(output_path) = &args.output_path {
        write_to_file(&content, output_path)?;
        info!("Wrote analysis result to {}", output_path.display());
    } else {
        println!("{}", content);
    }

    // Step 5: Display summary
    info!("Summary:");
    info!("  - Files analysed: {}/{}", analysed_count, go_files.len());
    info!(
        "  - Frameworks: {:?}",
        merged.frameworks_identified.keys().collect::<Vec<_>>()
    );
    info!("  - Documents: {}", merged.openapi_specs.len());

    Ok(())
}
