//! CLI binary for edgequake-receipts.
//!
//! A thin shim over the library crate: one path in, one JSON line out.
//! Stdout carries nothing but that line so callers can parse it directly;
//! logs go to stderr.

use anyhow::{anyhow, Result};
use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;
use edgequake_receipts::{extract, render_json, ExtractionConfig, ReceiptError, ReceiptLines};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"OUTPUT:
  Exactly one line of JSON on stdout: an array of strings.
    ["Дата и время: 01.01.2024", "Оплачено 1500 ₸"]   success
    ["Language not recognized."]                      no language marker on page 1 (exit 0)
    ["Error: File not found: receipt.pdf"]            any failure (exit 1)

PDFIUM:
  The pdfium shared library is looked up in this order:
    1. --pdfium-lib / PDFIUM_LIB_PATH
    2. libpdfium in the current directory
    3. the system library search path
"#;

/// Extract keyword lines from Russian/Kazakh fiscal receipt PDFs as JSON.
#[derive(Parser, Debug)]
#[command(
    name = "receipt-lines",
    version,
    about = "Extract keyword lines from Russian/Kazakh fiscal receipt PDFs as JSON",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Receipt PDF to process (exactly one).
    paths: Vec<PathBuf>,

    /// Path to the pdfium shared library.
    #[arg(long, env = "PDFIUM_LIB_PATH")]
    pdfium_lib: Option<PathBuf>,

    /// PDF user password for encrypted receipts.
    #[arg(long, env = "RECEIPTS_PASSWORD")]
    password: Option<String>,

    /// Enable DEBUG-level tracing logs on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion) => {
            e.exit()
        }
        // Stray flags are extra arguments: arity decides the message.
        Err(e)
            if matches!(
                e.kind(),
                ClapErrorKind::UnknownArgument | ClapErrorKind::TooManyValues
            ) =>
        {
            return emit(&Err(ReceiptError::NoFilePath));
        }
        Err(e) => {
            let message = e.kind().as_str().unwrap_or("invalid arguments");
            return emit(&Err(ReceiptError::InvalidArguments(message.to_string())));
        }
    };

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("warning: {e:#}");
    }

    emit(&run(&cli))
}

/// Validate arity, build the config, and run the pipeline.
fn run(cli: &Cli) -> Result<ReceiptLines, ReceiptError> {
    let [path] = cli.paths.as_slice() else {
        return Err(ReceiptError::NoFilePath);
    };
    let config = build_config(cli)?;
    extract(path, &config)
}

/// Map CLI args to `ExtractionConfig`.
fn build_config(cli: &Cli) -> Result<ExtractionConfig, ReceiptError> {
    let mut builder = ExtractionConfig::builder();
    if let Some(ref lib) = cli.pdfium_lib {
        builder = builder.pdfium_library_path(lib);
    }
    if let Some(ref pwd) = cli.password {
        builder = builder.password(pwd);
    }
    builder.build()
}

/// Print the JSON line and map the result to a process exit code.
fn emit(result: &Result<ReceiptLines, ReceiptError>) -> ExitCode {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if writeln!(handle, "{}", render_json(result))
        .and_then(|()| handle.flush())
        .is_err()
    {
        return ExitCode::FAILURE;
    }
    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))
}
