//! Analysis-time options: everything besides the parsed source that
//! affects what `frontend::analyze_file` records and diagnoses. Grounded
//! in the shape of the teacher crate's `GlobalConfig` (`cortex-core`'s
//! `config.rs`), trimmed down to a plain value struct the caller owns and
//! passes in -- no global singleton, no directories::BaseDirs lookup: the
//! core crate has no notion of a user config directory, only the CLI does.

use crate::diagnostics::Context;
use crate::types::Policy;
use serde::Deserialize;
use std::path::PathBuf;

/// The textual marker a `#include` directive's own line can carry to opt
/// out of the unused-include exclusion rule (spec.md §4.10). Deliberately
/// plain and crate-specific rather than mimicking any external tool's
/// pragma syntax.
pub const KEEP_MARKER: &str = "incisor: keep";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Directories searched, in order, for a quoted or angle-bracket
    /// `#include` target that isn't found relative to the including file.
    pub search_paths: Vec<PathBuf>,
    /// The three soft-reference toggles (§6.2).
    pub policy: Policy,
    /// Off by default (§8's stdlib scenario): whether `std::`-qualified
    /// names are resolved against the standard-library table at all.
    pub check_stdlib: bool,
    /// On by default (§6.4/§7's `-recover` flag): after the first
    /// "no header" diagnostic naming a given provider, suppress further
    /// diagnostics naming that same provider (deduplication by Header
    /// identity). Unrelated to header readability; see
    /// `skip_unreadable_headers` for that.
    pub recover: bool,
    /// On by default: when a directly-included header can't be read or
    /// parsed, log it and keep analyzing the main file with that header
    /// contributing no declarations, instead of failing the whole run.
    /// With this off, the same failure is returned as an `IncisorError`.
    /// An ambient robustness knob, not part of spec.md's `-recover` flag.
    pub skip_unreadable_headers: bool,
    /// Standalone tool vs. editor/IDE integration (§6.4 footnote):
    /// governs only the severity of the Unused-include diagnostic.
    pub context: Context,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            search_paths: Vec::new(),
            policy: Policy::default(),
            check_stdlib: false,
            recover: true,
            skip_unreadable_headers: true,
            context: Context::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_all_off() {
        let opts = AnalysisOptions::default();
        assert!(!opts.check_stdlib);
        assert!(!opts.policy.construction);
        assert!(opts.search_paths.is_empty());
        assert!(opts.recover);
        assert!(opts.skip_unreadable_headers);
        assert_eq!(opts.context, Context::Tool);
    }
}
