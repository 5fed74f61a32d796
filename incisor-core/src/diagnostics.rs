//! C9: Diagnostics. Spec.md §6.4's six user-facing diagnostic kinds, and
//! the one-shot fix-suggestion model of §6.5, adapted from the teacher
//! crate's `ast_editor.rs` `Position`/`Range`/`Edit` triple.

use crate::driver::{DriverResult, IncludeStatus};
use crate::include_matcher::MatchOutcome;
use crate::types::{Header, RecordedIncludes, SourceLocation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// A Satisfied reference / Used include. Shown only under `-satisfied`.
    Remark,
    Note,
    Warning,
    Error,
}

/// Whether diagnostics are being produced for the standalone tool or for
/// an editor/IDE integration (spec.md §6.4 footnote: "Unused include" is
/// `Error` in the former, `Warning` in the latter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
pub enum Context {
    #[default]
    Tool,
    Editor,
}

/// A 1-based line, 0-based column position, matching `SourceLocation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

/// A single textual replacement: delete everything in `range`, insert
/// `replacement`. For an unused-include fix, `range` spans from column 1
/// of the directive's line to column 1 of the following line, and
/// `replacement` is empty -- deleting the whole line including its
/// newline, never leaving a blank line behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub range: Range,
    pub replacement: String,
}

pub fn suggest_removal(line: usize) -> Edit {
    Edit {
        range: Range {
            start: Position { line, column: 1 },
            end: Position {
                line: line + 1,
                column: 1,
            },
        },
        replacement: String::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A reference resolved to a header that is already `#include`d.
    SatisfiedReference {
        nodekind: &'static str,
        name: String,
        header: String,
    },
    /// A reference has a known candidate provider, but it's not included.
    UnsatisfiedReference { nodekind: &'static str, name: String },
    /// A reference's provider could not be determined at all: no physical
    /// file and no recognized standard-library header (§7: "unresolvable
    /// provider").
    UnknownHeader { nodekind: &'static str, name: String },
    /// Supplementary context pointing at an additional ranked candidate
    /// header beyond the one named in the diagnostic it follows.
    Note { header: String },
    /// A recorded `#include` that is the provider for at least one
    /// satisfied reference.
    UsedInclude { nodekind: &'static str, name: String },
    /// A recorded `#include` nothing in the file references.
    UnusedInclude,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub location: SourceLocation,
    pub fix: Option<Edit>,
}

impl Diagnostic {
    /// Renders the exact user-facing message text for this diagnostic's
    /// kind, per spec.md §6.4.
    pub fn message(&self) -> String {
        match &self.kind {
            DiagnosticKind::SatisfiedReference { nodekind, name, header } => {
                format!("{nodekind} '{name}' provided by {header}")
            }
            DiagnosticKind::UnsatisfiedReference { nodekind, name } => {
                format!("no header included for {nodekind} '{name}'")
            }
            DiagnosticKind::UnknownHeader { nodekind, name } => {
                format!("unknown header provides {nodekind} '{name}'")
            }
            DiagnosticKind::Note { header } => format!("provided by {header}"),
            DiagnosticKind::UsedInclude { nodekind, name } => {
                format!("include provides {nodekind} '{name}'")
            }
            DiagnosticKind::UnusedInclude => "include is unused".to_string(),
        }
    }
}

fn header_spelling(header: &Header) -> String {
    match header {
        Header::Physical(path) => path.display().to_string(),
        Header::StandardLibrary(spelling) | Header::Verbatim(spelling) => spelling.clone(),
        Header::Builtin => "<builtin>".to_string(),
        Header::MainFile => "<main file>".to_string(),
    }
}

/// Builds the full diagnostic set from a finished `DriverResult`. This is
/// the boundary where internal types (`Header`, `AnalyzedReference`) turn
/// into the plain-text, severity-tagged output spec.md §6.3 promises
/// callers: nothing downstream of this function needs to know about
/// `Symbol`/`Location`/`Hint` at all.
///
/// `-recover` (the default) deduplicates repeated "no header"-class
/// diagnostics per `Header` identity (§7): after the first Unsatisfied or
/// Unknown diagnostic naming a given provider, later references to that
/// same provider are silently dropped.
pub fn build(
    result: &DriverResult,
    includes: &RecordedIncludes,
    context: Context,
    recover: bool,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut reported_providers: std::collections::HashSet<Header> = std::collections::HashSet::new();

    for (analyzed, outcome) in &result.outcomes {
        match outcome {
            MatchOutcome::Satisfied(ordinal) => {
                if let Some(include) = includes.get(*ordinal) {
                    diagnostics.push(Diagnostic {
                        kind: DiagnosticKind::SatisfiedReference {
                            nodekind: analyzed.nodekind,
                            name: analyzed.name.clone(),
                            header: include.spelled.clone(),
                        },
                        severity: Severity::Remark,
                        location: analyzed.reference.location.clone(),
                        fix: None,
                    });
                    diagnostics.push(Diagnostic {
                        kind: DiagnosticKind::UsedInclude {
                            nodekind: analyzed.nodekind,
                            name: analyzed.name.clone(),
                        },
                        severity: Severity::Remark,
                        location: include.hash_location.clone(),
                        fix: None,
                    });
                }
            }
            MatchOutcome::Unsatisfied(header) => {
                if recover && reported_providers.contains(header) {
                    continue;
                }
                diagnostics.push(Diagnostic {
                    kind: DiagnosticKind::UnsatisfiedReference {
                        nodekind: analyzed.nodekind,
                        name: analyzed.name.clone(),
                    },
                    severity: Severity::Error,
                    location: analyzed.reference.location.clone(),
                    fix: None,
                });
                emit_extra_candidate_notes(&mut diagnostics, analyzed, header);
                reported_providers.insert(header.clone());
            }
            MatchOutcome::TriviallySatisfied => {}
            MatchOutcome::Unresolvable => {
                diagnostics.push(Diagnostic {
                    kind: DiagnosticKind::UnknownHeader {
                        nodekind: analyzed.nodekind,
                        name: analyzed.name.clone(),
                    },
                    severity: Severity::Warning,
                    location: analyzed.reference.location.clone(),
                    fix: None,
                });
            }
        }
    }

    for (ordinal, status) in &result.include_status {
        let Some(include) = includes.get(*ordinal) else {
            continue;
        };
        match status {
            IncludeStatus::Used => {}
            IncludeStatus::Unused => diagnostics.push(Diagnostic {
                kind: DiagnosticKind::UnusedInclude,
                severity: unused_include_severity(context),
                location: include.hash_location.clone(),
                fix: Some(suggest_removal(include.line)),
            }),
            IncludeStatus::Excluded => {}
        }
    }

    diagnostics
}

fn unused_include_severity(context: Context) -> Severity {
    match context {
        Context::Tool => Severity::Error,
        Context::Editor => Severity::Warning,
    }
}

fn emit_extra_candidate_notes(
    diagnostics: &mut Vec<Diagnostic>,
    analyzed: &crate::analyzer::AnalyzedReference,
    primary: &Header,
) {
    for provider in &analyzed.providers {
        if !provider.header.is_diagnosable() || &provider.header == primary {
            continue;
        }
        diagnostics.push(Diagnostic {
            kind: DiagnosticKind::Note {
                header: header_spelling(&provider.header),
            },
            severity: Severity::Note,
            location: analyzed.reference.location.clone(),
            fix: None,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unused_include_carries_a_whole_line_removal_fix() {
        let edit = suggest_removal(7);
        assert_eq!(edit.range.start, Position { line: 7, column: 1 });
        assert_eq!(edit.range.end, Position { line: 8, column: 1 });
        assert_eq!(edit.replacement, "");
    }

    #[test]
    fn unused_include_message_matches_exact_wording() {
        let d = Diagnostic {
            kind: DiagnosticKind::UnusedInclude,
            severity: Severity::Error,
            location: SourceLocation::new("main.cpp", 3, 0),
            fix: None,
        };
        assert_eq!(d.message(), "include is unused");
    }

    #[test]
    fn unused_include_severity_depends_on_context() {
        assert_eq!(unused_include_severity(Context::Tool), Severity::Error);
        assert_eq!(unused_include_severity(Context::Editor), Severity::Warning);
    }

    #[test]
    fn unsatisfied_reference_message_has_no_header_name() {
        let d = Diagnostic {
            kind: DiagnosticKind::UnsatisfiedReference {
                nodekind: "declaration",
                name: "Widget".into(),
            },
            severity: Severity::Error,
            location: SourceLocation::new("main.cpp", 3, 0),
            fix: None,
        };
        assert_eq!(d.message(), "no header included for declaration 'Widget'");
    }

    #[test]
    fn unknown_header_message_matches_exact_wording() {
        let d = Diagnostic {
            kind: DiagnosticKind::UnknownHeader {
                nodekind: "declaration",
                name: "Widget".into(),
            },
            severity: Severity::Warning,
            location: SourceLocation::new("main.cpp", 3, 0),
            fix: None,
        };
        assert_eq!(d.message(), "unknown header provides declaration 'Widget'");
    }
}
