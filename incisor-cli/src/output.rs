//! Output formatting for the Incisor CLI: plain terminal text for a human,
//! `serde_json::json!` objects for a script. Follows the teacher crate's
//! convention of building ad-hoc JSON with the `json!` macro at the CLI
//! boundary rather than deriving `Serialize` on the core's domain types --
//! the wire shape belongs to the CLI, not to `incisor-core`.

use incisor_core::diagnostics::{Diagnostic, DiagnosticKind, Severity};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Note => "note",
        Severity::Remark => "remark",
    }
}

fn kind_label(kind: &DiagnosticKind) -> &'static str {
    match kind {
        DiagnosticKind::SatisfiedReference { .. } => "satisfied-reference",
        DiagnosticKind::UnsatisfiedReference { .. } => "unsatisfied-reference",
        DiagnosticKind::UnknownHeader { .. } => "unknown-header",
        DiagnosticKind::Note { .. } => "note",
        DiagnosticKind::UsedInclude { .. } => "used-include",
        DiagnosticKind::UnusedInclude => "unused-include",
    }
}

/// Prints one file's diagnostics as plain text, one line per diagnostic,
/// in `path:line:column: severity: message` form.
pub fn print_text(path: &Path, diagnostics: &[Diagnostic]) {
    for d in diagnostics {
        println!(
            "{}:{}:{}: {}: {}",
            path.display(),
            d.location.line,
            d.location.column,
            severity_label(d.severity),
            d.message()
        );
    }
}

/// Builds the `serde_json::Value` for one file's worth of diagnostics.
pub fn to_json(path: &Path, diagnostics: &[Diagnostic]) -> serde_json::Value {
    serde_json::json!({
        "file": path.display().to_string(),
        "diagnostics": diagnostics.iter().map(|d| {
            serde_json::json!({
                "kind": kind_label(&d.kind),
                "severity": severity_label(d.severity),
                "line": d.location.line,
                "column": d.location.column,
                "message": d.message(),
                "fixable": d.fix.is_some(),
            })
        }).collect::<Vec<_>>(),
    })
}

/// True if any diagnostic in the set is an Error or Warning -- the CLI's
/// exit-code signal for "this file has something worth looking at".
/// Remarks and Notes never affect the exit code on their own.
pub fn has_warnings(diagnostics: &[Diagnostic]) -> bool {
    diagnostics
        .iter()
        .any(|d| matches!(d.severity, Severity::Error | Severity::Warning))
}
