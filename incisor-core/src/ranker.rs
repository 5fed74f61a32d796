//! C6: the Ranker. Orders a symbol's candidate headers so the Analyzer
//! picks a provider deterministically when more than one header could
//! satisfy the same reference (spec.md §8's name-match tiebreak scenario).
//!
//! `Hint::complete` reflects the real §4.4 signal carried up from the
//! Locator/Header resolver: a candidate is marked complete only when the
//! particular redeclaration it came from is the definition, not merely a
//! forward declaration or prototype. `Hint::name_match` is computed for
//! real: a header whose file stem matches the symbol's name
//! case-insensitively outranks one that doesn't, which is what lets
//! `widget.h` win over `misc.h` when both declare `Widget`.

use crate::types::{Header, Hint};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedHeader {
    pub header: Header,
    pub hint: Hint,
}

/// `headers` pairs each candidate with whether the redeclaration it was
/// resolved from is a definition (see `header_resolver::resolve_all`).
pub fn rank(symbol_name: &str, headers: Vec<(Header, bool)>) -> Vec<RankedHeader> {
    let mut ranked: Vec<RankedHeader> = headers
        .into_iter()
        .map(|(header, is_definition)| {
            let mut hint = Hint::NONE;
            if is_definition {
                hint = hint.union(Hint::complete());
            }
            if name_matches(&header, symbol_name) {
                hint = hint.union(Hint::name_match());
            }
            RankedHeader { header, hint }
        })
        .collect();

    ranked.sort_by(|a, b| {
        let a_score = (a.hint.has_name_match(), a.hint.has_complete());
        let b_score = (b.hint.has_name_match(), b.hint.has_complete());
        b_score.cmp(&a_score).then_with(|| a.header.cmp(&b.header))
    });
    ranked.dedup_by(|a, b| {
        if a.header == b.header {
            b.hint = b.hint.union(a.hint);
            true
        } else {
            false
        }
    });
    ranked
}

fn name_matches(header: &Header, symbol_name: &str) -> bool {
    let Header::Physical(path) = header else {
        return false;
    };
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|stem| stem.eq_ignore_ascii_case(symbol_name))
        .unwrap_or(false)
}
