//! plos-identifiers CLI
//!
//! Validate, classify, and extract PLOS identifiers from the command line.
//! Commands that take a list read one item per line from stdin when no
//! arguments are given.

use std::io::{self, BufRead, Read};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use plos_identifiers::{
    classify, currents_doi_filter, extract_all, parse_doi, show_invalid_dois, DoiBody, DoiSuffix,
    IdentifierKind,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "plos-identifiers")]
#[command(about = "Validate and extract PLOS identifiers", version)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Log at debug level when RUST_LOG is not set
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate values as one identifier kind
    Check {
        /// doi, currents-doi (or currents), filename, file-url or plos-url
        kind: IdentifierKind,
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Detect the identifier kind of each value
    Classify {
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Find PLOS DOIs in text
    Find {
        /// Text to search (stdin when omitted)
        text: Option<String>,
    },
    /// List DOIs that are not valid PLOS DOIs
    Invalid { dois: Vec<String> },
    /// List DOIs that are not valid PLOS Currents DOIs
    Currents { dois: Vec<String> },
    /// Break a DOI into its parts
    Parse { doi: String },
}

#[derive(Serialize)]
struct CheckResult<'a> {
    value: &'a str,
    kind: IdentifierKind,
    valid: bool,
}

#[derive(Serialize)]
struct ClassifyResult<'a> {
    value: &'a str,
    kind: Option<IdentifierKind>,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check { kind, values } => Ok(run_check(kind, &values, cli.json)?),
        Commands::Classify { values } => {
            let results: Vec<ClassifyResult> = values
                .iter()
                .map(|value| ClassifyResult {
                    value,
                    kind: classify(value),
                })
                .collect();

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                for r in &results {
                    let kind = r.kind.map(|k| k.name()).unwrap_or("unknown");
                    println!("{}\t{}", r.value, kind);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Find { text } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let found = extract_all(&text);
            tracing::debug!(count = found.len(), "extracted DOIs");

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&found)?);
            } else {
                for id in &found {
                    println!("{}", id.value);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Invalid { dois } => {
            let dois = args_or_stdin(dois)?;
            print_list(&show_invalid_dois(dois), cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Currents { dois } => {
            let dois = args_or_stdin(dois)?;
            print_list(&currents_doi_filter(dois), cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Parse { doi } => {
            let parsed = match parse_doi(&doi) {
                Ok(parsed) => parsed,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return Ok(ExitCode::FAILURE);
                }
            };

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&parsed)?);
                return Ok(ExitCode::SUCCESS);
            }

            println!("doi:\t{}", parsed.doi);
            match &parsed.body {
                DoiBody::Journal { code, number } => {
                    println!("journal:\t{}", code);
                    println!("article:\t{}", number);
                }
                DoiBody::Annotation { uuid } => println!("annotation:\t{}", uuid),
            }
            match parsed.suffix {
                Some(DoiSuffix::Review { index }) => println!("review:\t{}", index),
                Some(DoiSuffix::Supplementary { index }) => println!("supplementary:\t{}", index),
                None => {}
            }
            println!("file url:\t{}", parsed.file_url());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Validate every value as `kind` and print one result per value.
///
/// Fails when any value is invalid.
fn run_check(
    kind: IdentifierKind,
    values: &[String],
    json: bool,
) -> Result<ExitCode, serde_json::Error> {
    let results = check_values(kind, values);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for r in &results {
            let status = if r.valid { "valid" } else { "invalid" };
            println!("{}\t{}", r.value, status);
        }
    }

    if results.iter().all(|r| r.valid) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn check_values(kind: IdentifierKind, values: &[String]) -> Vec<CheckResult<'_>> {
    values
        .iter()
        .map(|value| CheckResult {
            value,
            kind,
            valid: kind.validate(value),
        })
        .collect()
}

fn args_or_stdin(args: Vec<String>) -> io::Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }
    let lines = read_lines(io::stdin().lock())?;
    tracing::debug!(count = lines.len(), "read DOIs from stdin");
    Ok(lines)
}

/// Trimmed, non-blank lines of `reader`
fn read_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

fn print_list(items: &[String], json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        for item in items {
            println!("{}", item);
        }
    }
    Ok(())
}
