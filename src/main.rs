//! jsoncheck CLI.
//!
//! Validates one JSON document from a file or stdin and prints either
//! `Successful parse!` or the first syntax error.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;

use clap::{Parser, ValueEnum};
use jsoncheck::json::{TracingTrace, TreeTrace, Validator};
use jsoncheck::{CheckResult, Limits, Report};
use tracing_subscriber::EnvFilter;

/// Exit status for a syntax error.
const EXIT_INVALID: u8 = 1;
/// Exit status for I/O errors.
const EXIT_IO: u8 = 2;
/// Largest accepted `--max-depth`; bounds the validator thread's stack.
const MAX_DEPTH_LIMIT: u64 = 16_384;

#[derive(Parser)]
#[command(name = "jsoncheck")]
#[command(about = "Validate JSON syntax and report the first error", long_about = None)]
#[command(version)]
struct Cli {
    /// File to validate; reads stdin when absent or `-`
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Maximum nesting depth of arrays and objects
    #[arg(
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u64).range(..=MAX_DEPTH_LIMIT)
    )]
    max_depth: Option<u64>,

    /// Trace grammar rules to stderr
    #[arg(long, value_enum, value_name = "MODE")]
    trace: Option<TraceMode>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// `Successful parse!` or `ERROR(row:col): ...`
    Text,
    /// A single JSON object with a `status` field
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum TraceMode {
    /// Indented rule call tree
    Tree,
    /// `tracing` events at TRACE level
    Events,
}

fn init_logging(verbose: u8, trace: Option<TraceMode>) {
    let level = match (verbose, trace) {
        (_, Some(TraceMode::Events)) => "jsoncheck=trace",
        (0, _) => "warn",
        (1, _) => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(file: Option<&PathBuf>) -> io::Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path),
        _ => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn validate(input: &str, limits: Limits, trace: Option<TraceMode>) -> CheckResult<()> {
    let validator = Validator::new(input.chars()).with_limits(limits);
    match trace {
        None => validator.validate(),
        Some(TraceMode::Tree) => validator
            .with_trace(TreeTrace::new(io::stderr().lock()))
            .validate(),
        Some(TraceMode::Events) => validator.with_trace(TracingTrace::new()).validate(),
    }
}

/// Run the validator on a thread whose stack fits `limits`.
fn validate_on_thread(
    input: String,
    limits: Limits,
    trace: Option<TraceMode>,
) -> io::Result<CheckResult<()>> {
    let worker = thread::Builder::new()
        .name("validator".into())
        .stack_size(limits.stack_size())
        .spawn(move || validate(&input, limits, trace))?;
    worker
        .join()
        .map_err(|_| io::Error::new(io::ErrorKind::Other, "validator thread panicked"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.trace);

    let input = match read_input(cli.file.as_ref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("jsoncheck: cannot read input: {}", e);
            return ExitCode::from(EXIT_IO);
        }
    };
    tracing::info!(chars = input.chars().count(), "validating");

    let mut limits = Limits::default();
    if let Some(depth) = cli.max_depth {
        limits = limits.with_max_nesting_depth(depth);
    }

    let result = match validate_on_thread(input, limits, cli.trace) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("jsoncheck: cannot run validator: {}", e);
            return ExitCode::from(EXIT_IO);
        }
    };
    let report = Report::from(&result);
    match cli.format {
        Format::Text => println!("{}", report),
        Format::Json => match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("jsoncheck: cannot encode report: {}", e);
                return ExitCode::from(EXIT_IO);
            }
        },
    }

    if report.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_INVALID)
    }
}
