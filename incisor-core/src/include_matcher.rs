//! C8: the Include matcher. Given a Header, returns every recorded
//! directive that satisfies it (spec.md §4.8) -- a set, not a single
//! pick, since a header can legitimately be `#include`d more than once.

use crate::analyzer::AnalyzedReference;
use crate::types::{Header, IncludeOrdinal, RecordedIncludes};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// At least one of the reference's diagnosable candidate headers is
    /// satisfied by a recorded `#include`; `IncludeOrdinal` is the first
    /// one found, in rank order, for use in the diagnostic message.
    Satisfied(IncludeOrdinal),
    /// At least one diagnosable provider exists, but none of them is
    /// included; `Header` is the best-ranked one, used in the diagnostic.
    Unsatisfied(Header),
    /// Every candidate provider is `MainFile`/`Builtin` (never
    /// diagnosable) -- nothing to report, the symbol is always reachable.
    TriviallySatisfied,
    /// The ranked provider list came back empty: no physical file and no
    /// recognized standard-library header. §7's "unresolvable provider".
    Unresolvable,
}

/// All diagnosable headers a reference ranked, each against every
/// directive that satisfies it -- this is what the driver folds into the
/// used set (§4.9: "for each header in the ranked list, mark every
/// matching Include used"), independent of which single header ends up
/// named in that reference's own diagnostic.
pub fn used_ordinals(analyzed: &AnalyzedReference, includes: &RecordedIncludes) -> HashSet<IncludeOrdinal> {
    let mut used = HashSet::new();
    for provider in &analyzed.providers {
        if !provider.header.is_diagnosable() {
            continue;
        }
        used.extend(matching_ordinals(&provider.header, includes));
    }
    used
}

pub fn match_reference(analyzed: &AnalyzedReference, includes: &RecordedIncludes) -> MatchOutcome {
    if analyzed.providers.is_empty() {
        return MatchOutcome::Unresolvable;
    }

    let diagnosable: Vec<&Header> = analyzed
        .providers
        .iter()
        .map(|p| &p.header)
        .filter(|h| h.is_diagnosable())
        .collect();

    if diagnosable.is_empty() {
        return MatchOutcome::TriviallySatisfied;
    }

    for header in &diagnosable {
        if let Some(&ordinal) = matching_ordinals(header, includes).iter().min() {
            return MatchOutcome::Satisfied(ordinal);
        }
    }

    MatchOutcome::Unsatisfied((*diagnosable[0]).clone())
}

/// Every recorded directive satisfying `header`, per the variant-specific
/// predicate of spec.md §4.8: a physical header by resolved file identity,
/// a standard-library/verbatim header by its canonical spelling with
/// leading/trailing angle brackets or quotes trimmed -- an exact match
/// only, never a substring or suffix match, so a project header spelled
/// e.g. `"project_vector"` can never be mistaken for `<vector>`.
fn matching_ordinals(header: &Header, includes: &RecordedIncludes) -> Vec<IncludeOrdinal> {
    match header {
        Header::Physical(path) => includes.by_file(path).to_vec(),
        Header::StandardLibrary(spelling) | Header::Verbatim(spelling) => {
            includes.by_spelling(spelling).to_vec()
        }
        Header::Builtin | Header::MainFile => Vec::new(),
    }
}
