//! Print the fixed-arity `or`/`and` implementations.
//!
//! ```bash
//! gen-arity          # maximum arity 10
//! gen-arity 4        # tuples of 2 to 4 guards
//! TYPEGUARD_LOG=debug gen-arity 4 > arity.rs
//! ```
//!
//! The output is Rust source on stdout. Logs go to stderr. The command
//! always exits with status 0: a missing or malformed arity falls back to
//! the default.

use std::io::IsTerminal;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use typeguard::codegen::{self, Family, DEFAULT_MAX_ARITY};

/// Generate the fixed-arity `or`/`and` implementations.
#[derive(Parser, Debug, Default)]
#[command(name = "gen-arity", version, about)]
struct Args {
    /// Maximum number of guards a tuple implementation accepts
    /// (default 10).
    #[arg(allow_hyphen_values = true)]
    max_arity: Option<String>,

    // Only the first positional is read.
    #[arg(hide = true, allow_hyphen_values = true)]
    rest: Vec<String>,
}

/// Build an `EnvFilter` from `TYPEGUARD_LOG`, falling back to `RUST_LOG`
/// and then to warnings only.
fn build_filter() -> EnvFilter {
    match std::env::var("TYPEGUARD_LOG") {
        Ok(val) => EnvFilter::builder().parse_lossy(val),
        Err(_) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return;
        }
        Err(err) => {
            tracing::warn!(error = %err.kind(), "ignoring arguments");
            Args::default()
        }
    };

    if !args.rest.is_empty() {
        tracing::debug!(ignored = ?args.rest, "ignoring extra arguments");
    }
    let max_arity = codegen::parse_max_arity(args.max_arity.as_deref());
    if args.max_arity.is_some() && max_arity == DEFAULT_MAX_ARITY {
        tracing::debug!(arg = ?args.max_arity, "using default maximum arity");
    }
    for family in Family::ALL {
        tracing::debug!(
            family = family.trait_name(),
            declarations = codegen::declarations(family, max_arity).len(),
            "generated family"
        );
    }

    print!("{}", codegen::render(max_arity));
}
