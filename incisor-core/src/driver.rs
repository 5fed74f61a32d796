//! Ties the Analyzer (C7) and Include matcher (C8) together into the
//! final used/unused decision for every recorded `#include`, applying the
//! three exclusion rules spec.md §4.10 carves out of the otherwise
//! mechanical "did any reference match this directive" rule: a kept
//! directive is never unused, an angle-bracket include is only considered
//! when standard-library analysis recognizes its spelling, and a header
//! with no include guard is never considered unused since it may exist
//! purely for its side effects.

use crate::analyzer::AnalyzedReference;
use crate::include_matcher::{match_reference, used_ordinals, MatchOutcome};
use crate::stdlib;
use crate::types::{Include, IncludeOrdinal, RecordedIncludes};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncludeStatus {
    Used,
    Unused,
    /// Excluded from the unused/used decision entirely by one of the
    /// three §4.10 rules (kept, unrecognized angle-bracket spelling with
    /// stdlib analysis off, or no include guard).
    Excluded,
}

#[derive(Debug)]
pub struct DriverResult {
    pub outcomes: Vec<(AnalyzedReference, MatchOutcome)>,
    pub include_status: Vec<(IncludeOrdinal, IncludeStatus)>,
}

pub fn decide(
    analyzed: Vec<AnalyzedReference>,
    includes: &RecordedIncludes,
    check_stdlib: bool,
) -> DriverResult {
    let mut used: HashSet<IncludeOrdinal> = HashSet::new();
    let mut outcomes = Vec::with_capacity(analyzed.len());

    for reference in analyzed {
        used.extend(used_ordinals(&reference, includes));
        let outcome = match_reference(&reference, includes);
        outcomes.push((reference, outcome));
    }

    let mut include_status = Vec::with_capacity(includes.len());
    for (ordinal, include) in includes.all().iter().enumerate() {
        let status = if is_excluded(include, check_stdlib) {
            IncludeStatus::Excluded
        } else if used.contains(&ordinal) {
            IncludeStatus::Used
        } else {
            IncludeStatus::Unused
        };
        include_status.push((ordinal, status));
    }

    DriverResult {
        outcomes,
        include_status,
    }
}

/// The three exclusion rules of spec.md §4.10, applied before an Include
/// can ever be reported unused.
fn is_excluded(include: &Include, check_stdlib: bool) -> bool {
    if include.keep {
        return true;
    }
    if include.angled && !(check_stdlib && stdlib::is_known_header(&include.spelled)) {
        return true;
    }
    if !include.has_guard {
        return true;
    }
    false
}
