//! Incisor CLI -- command-line front end for the include-usage analyzer.
//!
//! # Usage
//!
//! ```bash
//! # Analyze one translation unit
//! incisor check src/widget.cpp -I include
//!
//! # Analyze every translation unit under a directory
//! incisor scan src --format json
//!
//! # Apply the suggested removals for every unused include
//! incisor check src/widget.cpp --fix
//! ```

mod config;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use incisor_core::diagnostics::{Diagnostic, DiagnosticKind, Severity};
use output::OutputFormat;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "incisor")]
#[command(about = "Finds #include directives a C/C++ translation unit doesn't need, and uses it doesn't declare", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to an `.incisor.toml` file, overriding discovery.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value = "text", env = "INCISOR_FORMAT")]
    format: OutputFormat,

    /// Additional header search path, may be repeated.
    #[arg(short = 'I', long = "include", global = true, env = "INCISOR_INCLUDE", value_delimiter = ':')]
    search_path: Vec<PathBuf>,

    /// Also print the Remark-level diagnostics: a reference already
    /// satisfied by an existing include, and the include that satisfies
    /// it. Suppressed by default.
    #[arg(long, global = true, env = "INCISOR_SATISFIED")]
    satisfied: bool,

    /// Don't deduplicate repeated "no header" diagnostics that name the
    /// same missing provider; report every occurrence.
    #[arg(long, global = true, env = "INCISOR_NO_RECOVER")]
    no_recover: bool,
}

/// The flags shared by `check` and `scan`, bundled so adding one doesn't
/// keep growing `check_one`'s parameter list.
struct RunFlags<'a> {
    search_paths: &'a [PathBuf],
    config: Option<&'a Path>,
    format: OutputFormat,
    satisfied: bool,
    recover: bool,
    fix: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single translation unit.
    Check {
        /// Path to the `.c`/`.cpp`/`.cc` file to analyze.
        path: PathBuf,

        /// Apply every unused-include removal this run suggests.
        #[arg(long)]
        fix: bool,
    },

    /// Analyze every translation unit under a directory.
    Scan {
        /// Directory to walk.
        path: PathBuf,

        /// Apply every unused-include removal this run suggests.
        #[arg(long)]
        fix: bool,
    },
}

const TRANSLATION_UNIT_EXTENSIONS: &[&str] = &["c", "cc", "cpp", "cxx"];

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        process::exit(2);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let saw_warnings = match &cli.command {
        Commands::Check { path, fix } => {
            let flags = RunFlags {
                search_paths: &cli.search_path,
                config: cli.config.as_deref(),
                format: cli.format,
                satisfied: cli.satisfied,
                recover: !cli.no_recover,
                fix: *fix,
            };
            check_one(path, &flags)?
        }
        Commands::Scan { path, fix } => {
            let flags = RunFlags {
                search_paths: &cli.search_path,
                config: cli.config.as_deref(),
                format: cli.format,
                satisfied: cli.satisfied,
                recover: !cli.no_recover,
                fix: *fix,
            };
            scan_dir(path, &flags)?
        }
    };

    if saw_warnings {
        process::exit(1);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("incisor=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("incisor=info,warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

/// Analyzes one file, prints its diagnostics, optionally applies fixes.
/// Returns whether any warning-severity diagnostic was produced.
fn check_one(path: &Path, flags: &RunFlags<'_>) -> Result<bool> {
    let mut options = config::load(path, flags.config)?;
    options.search_paths.extend(flags.search_paths.iter().cloned());
    options.recover = flags.recover;

    let mut diagnostics = incisor_core::analyze_file(path, &options)
        .with_context(|| format!("failed to analyze {}", path.display()))?;
    if !flags.satisfied {
        diagnostics.retain(|d| d.severity != Severity::Remark);
    }

    match flags.format {
        OutputFormat::Text => output::print_text(path, &diagnostics),
        OutputFormat::Json => println!("{}", output::to_json(path, &diagnostics)),
    }

    if flags.fix {
        let applied = apply_fixes(path, &diagnostics)?;
        if applied > 0 {
            tracing::info!(file = %path.display(), removed = applied, "applied unused-include fixes");
        }
    }

    Ok(output::has_warnings(&diagnostics))
}

/// Walks `dir` for translation units and analyzes each one in parallel,
/// mirroring the teacher crate's `walkdir` + `rayon` ingestion pattern.
fn scan_dir(dir: &Path, flags: &RunFlags<'_>) -> Result<bool> {
    let files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| TRANSLATION_UNIT_EXTENSIONS.contains(&ext))
        })
        .collect();

    let results: Vec<Result<bool>> = files.par_iter().map(|path| check_one(path, flags)).collect();

    let mut any_warnings = false;
    for (path, result) in files.iter().zip(results) {
        match result {
            Ok(warned) => any_warnings |= warned,
            Err(e) => tracing::warn!(file = %path.display(), error = %e, "skipped file"),
        }
    }
    Ok(any_warnings)
}

/// Applies every `UnusedInclude` diagnostic's whole-line removal fix to
/// `path` on disk. Fixes only ever delete one complete line (see
/// `diagnostics::suggest_removal`), so this rewrites the file with the
/// flagged line numbers dropped rather than splicing byte ranges.
fn apply_fixes(path: &Path, diagnostics: &[Diagnostic]) -> Result<usize> {
    let lines_to_remove: std::collections::HashSet<usize> = diagnostics
        .iter()
        .filter(|d| matches!(d.kind, DiagnosticKind::UnusedInclude))
        .filter_map(|d| d.fix.as_ref())
        .map(|edit| edit.range.start.line)
        .collect();

    if lines_to_remove.is_empty() {
        return Ok(0);
    }

    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {} for fixing", path.display()))?;
    let kept: Vec<&str> = source
        .lines()
        .enumerate()
        .filter(|(i, _)| !lines_to_remove.contains(&(i + 1)))
        .map(|(_, line)| line)
        .collect();

    let mut rewritten = kept.join("\n");
    if source.ends_with('\n') {
        rewritten.push('\n');
    }
    std::fs::write(path, rewritten)
        .with_context(|| format!("failed to write {} after fixing", path.display()))?;
    Ok(lines_to_remove.len())
}
