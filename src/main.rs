// Rust Data Profiling Engine - Main executable

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{App, Arg};
use log::info;

use rust_data_profiling_engine::{
    data::{CsvRowSource, JsonRowSource, RowSet},
    profiling::Profiler,
    utils::{init_logging, Config},
};

fn main() -> Result<()> {
    // Parse command line arguments
    let matches = App::new("Rust Data Profiling Engine")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Profiles tabular datasets into structured metadata reports")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Sets a custom config file")
                .takes_value(true),
        )
        .subcommand(
            App::new("profile")
                .about("Profile a dataset file and print the metadata report")
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .value_name("FILE")
                        .help("Dataset file to profile")
                        .takes_value(true)
                        .required(true),
                )
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .value_name("FORMAT")
                        .help("Input format: csv or json (default: from the file extension)")
                        .takes_value(true),
                )
                .arg(
                    Arg::new("name")
                        .short('n')
                        .long("name")
                        .value_name("NAME")
                        .help("Dataset name for the report (default: the file name)")
                        .takes_value(true),
                )
                .arg(
                    Arg::new("compact")
                        .long("compact")
                        .help("Print compact JSON instead of pretty-printed"),
                ),
        )
        .get_matches();

    // Load configuration
    let config = match matches.value_of("config") {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config file '{}'", path))?,
        None => Config::default(),
    };

    // Initialize logging
    if let Err(err) = init_logging(config.log_level_filter()) {
        eprintln!("Error initializing logger: {}", err);
    }

    if let Some(matches) = matches.subcommand_matches("profile") {
        let input = matches
            .value_of("input")
            .context("missing required input argument")?;

        let format = matches
            .value_of("format")
            .map(str::to_lowercase)
            .unwrap_or_else(|| detect_format(input));

        let mut rows: RowSet = match format.as_str() {
            "csv" => CsvRowSource::new()
                .from_path(input)
                .with_context(|| format!("failed to read CSV file '{}'", input))?,
            "json" => JsonRowSource::new()
                .from_path(input)
                .with_context(|| format!("failed to read JSON file '{}'", input))?,
            other => bail!("unsupported input format '{}'", other),
        };

        if let Some(name) = matches.value_of("name") {
            rows.source_name = name.to_string();
        }

        info!(
            "profiling '{}': {} rows acquired",
            rows.source_name,
            rows.row_count()
        );

        let profiler = Profiler::new(config.profiler).context("invalid profiler configuration")?;
        let report = profiler.profile(&rows);

        let output = if matches.is_present("compact") {
            serde_json::to_string(&report)?
        } else {
            serde_json::to_string_pretty(&report)?
        };
        println!("{}", output);
    } else {
        println!("No subcommand specified. Use --help for usage information.");
    }

    Ok(())
}

/// Guess the input format from the file extension, defaulting to CSV.
fn detect_format(input: &str) -> String {
    match Path::new(input).extension().and_then(|ext| ext.to_str()) {
        Some("json") => "json".to_string(),
        _ => "csv".to_string(),
    }
}
