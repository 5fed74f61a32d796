//! Core data model: Symbol, Location, Header, Hint, Policy, Include.
//!
//! Mirrors spec.md §3 exactly. These are closed sum types (Design Notes §9:
//! "Sum types... implement as tagged variants... adding a variant is a
//! type-system-visible change"): every match on a Header or a Symbol in
//! this crate is written exhaustively, with no wildcard arm, so the
//! compiler catches an incomplete rewrite if a variant is ever added.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// A location in a parsed translation unit: a file plus a 1-based line and
/// 0-based column. This is the concrete stand-in for the opaque
/// "source-manager" handles spec.md §6.1 says the parser driver owns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub file: PathBuf,
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(file: impl Into<PathBuf>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl PartialOrd for SourceLocation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SourceLocation {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.file, self.line, self.column).cmp(&(&other.file, other.line, other.column))
    }
}

/// Opaque identifier for an interned declaration (§3: "Multiple
/// redeclarations of the same entity are one symbol; the canonical
/// declaration identifies it."). Index into a `DeclarationTable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeclId(pub usize);

/// Opaque identifier for an interned macro symbol, keyed by
/// `(name, definition-location)` per §3 and Design Notes §9
/// ("Redefined-macro identity... do not intern by name alone").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MacroId(pub usize);

/// A referenceable entity (spec.md §3). Closed union of Declaration and
/// Macro. Equality/hash/order are derived because identity already lives
/// entirely in the wrapped id: two `DeclId`/`MacroId` values are equal iff
/// the cache produced them for equal keys (name+def-location for macros,
/// canonicalized declaration for declarations).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Declaration(DeclId),
    Macro(MacroId),
}

/// A (source-location, Symbol) pair (spec.md §3).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolReference {
    pub location: SourceLocation,
    pub symbol: Symbol,
}

impl SymbolReference {
    pub fn new(location: SourceLocation, symbol: Symbol) -> Self {
        Self { location, symbol }
    }
}

/// Where a symbol is provided (spec.md §3).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    /// A raw source location in the translation unit (or a reachable header).
    Physical(SourceLocation),
    /// A logical identifier for a standard-library symbol, opaque but
    /// comparable -- in this crate, the canonical header spelling the
    /// symbol belongs to (e.g. `"vector"` for `std::vector`).
    StandardLibrary(String),
}

/// An includable unit (spec.md §3). Equality/order are hand-written
/// (Design Notes §9: "Header equality. Variant-aware equality: physical by
/// file-entry identity, stdlib by logical identifier, verbatim by textual
/// spelling"), not derived, because two Verbatim headers must compare equal
/// on spelling and two StandardLibrary headers by logical identifier alone
/// -- derive(PartialOrd) would additionally order by variant-then-value,
/// which happens to be what we want, but we write it out so the ordering
/// contract stays explicit as variants are added.
#[derive(Debug, Clone, Eq)]
pub enum Header {
    Physical(PathBuf),
    StandardLibrary(String),
    Verbatim(String),
    Builtin,
    MainFile,
}

/// Stable rank used only to order variants relative to each other; never
/// exposed, never compared across crates, just a Header-internal detail so
/// `Ord` has a total order to fall back on before per-variant comparison.
fn variant_rank(h: &Header) -> u8 {
    match h {
        Header::Physical(_) => 0,
        Header::StandardLibrary(_) => 1,
        Header::Verbatim(_) => 2,
        Header::Builtin => 3,
        Header::MainFile => 4,
    }
}

impl PartialEq for Header {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Header::Physical(a), Header::Physical(b)) => a == b,
            (Header::StandardLibrary(a), Header::StandardLibrary(b)) => a == b,
            (Header::Verbatim(a), Header::Verbatim(b)) => a == b,
            (Header::Builtin, Header::Builtin) => true,
            (Header::MainFile, Header::MainFile) => true,
            _ => false,
        }
    }
}

impl std::hash::Hash for Header {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        variant_rank(self).hash(state);
        match self {
            Header::Physical(p) => p.hash(state),
            Header::StandardLibrary(s) | Header::Verbatim(s) => s.hash(state),
            Header::Builtin | Header::MainFile => {}
        }
    }
}

impl PartialOrd for Header {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Header {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Header::Physical(a), Header::Physical(b)) => a.cmp(b),
            (Header::StandardLibrary(a), Header::StandardLibrary(b)) => a.cmp(b),
            (Header::Verbatim(a), Header::Verbatim(b)) => a.cmp(b),
            (Header::Builtin, Header::Builtin) => Ordering::Equal,
            (Header::MainFile, Header::MainFile) => Ordering::Equal,
            _ => variant_rank(self).cmp(&variant_rank(other)),
        }
    }
}

impl Header {
    pub fn is_diagnosable(&self) -> bool {
        !matches!(self, Header::Builtin | Header::MainFile)
    }

    /// Canonical spelling without angle brackets/quotes, used by the
    /// Include matcher (§4.8) to compare against a recorded directive's
    /// spelling.
    pub fn canonical_spelling(&self) -> Option<&str> {
        match self {
            Header::StandardLibrary(s) | Header::Verbatim(s) => Some(s.as_str()),
            Header::Physical(_) | Header::Builtin | Header::MainFile => None,
        }
    }
}

/// Advisory bitset over {Complete, NameMatch} (spec.md §3, Design Notes §9:
/// "a plain small integer suffices"). Hints never affect correctness of
/// membership, only the preference order the Ranker produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hint(u8);

impl Hint {
    pub const NONE: Hint = Hint(0);
    const COMPLETE: u8 = 1 << 0;
    const NAME_MATCH: u8 = 1 << 1;

    pub fn complete() -> Self {
        Hint(Self::COMPLETE)
    }

    pub fn name_match() -> Self {
        Hint(Self::NAME_MATCH)
    }

    pub fn has_complete(&self) -> bool {
        self.0 & Self::COMPLETE != 0
    }

    pub fn has_name_match(&self) -> bool {
        self.0 & Self::NAME_MATCH != 0
    }

    /// OR-combine, used by the Ranker's dedup step (§4.6.2).
    pub fn union(self, other: Hint) -> Hint {
        Hint(self.0 | other.0)
    }
}

/// The three-flag analysis Policy of spec.md §6.2. Read-only during
/// analysis; every flag defaults to off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(default)]
pub struct Policy {
    /// Count an un-named constructor call as a reference to its type.
    pub construction: bool,
    /// Count member accesses and unresolved member lookups.
    pub members: bool,
    /// Count uses of overloaded operators.
    pub operators: bool,
}

/// One `#include` written in the main file (spec.md §3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Include {
    /// Text between the quote/angle delimiters, no delimiters.
    pub spelled: String,
    /// The concrete physical file the preprocessor resolved, if any.
    pub resolved: Option<PathBuf>,
    /// Source location of the leading `#`.
    pub hash_location: SourceLocation,
    /// 1-based line number of the `#`.
    pub line: usize,
    /// True if this directive used angle brackets (`<...>`) rather than
    /// quotes. Needed by the §4.10 exclusion rule for stdlib-only analysis
    /// of angle-bracket includes.
    pub angled: bool,
    /// True if a "keep" annotation was recorded for this directive
    /// (§4.10); see `frontend::KEEP_MARKER` for the textual convention.
    pub keep: bool,
    /// True if the resolved header carries `#pragma once` or a classic
    /// `#ifndef`/`#define` include guard. A header that can't be resolved
    /// at all is treated as unguarded (§4.10 rule 3 fails closed: an
    /// unreadable header is never assumed safe to flag unused).
    pub has_guard: bool,
}

/// An ordinal into `RecordedIncludes::all`.
pub type IncludeOrdinal = usize;

/// The full sequence of `#include` directives recorded in the main file,
/// plus the two secondary indices spec.md §3 requires to stay consistent
/// with the sequence.
#[derive(Debug, Clone, Default)]
pub struct RecordedIncludes {
    all: Vec<Include>,
    by_spelling: std::collections::HashMap<String, Vec<IncludeOrdinal>>,
    by_file: std::collections::HashMap<PathBuf, Vec<IncludeOrdinal>>,
}

impl RecordedIncludes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an Include, updating both secondary indices atomically
    /// (invariant 2 of spec.md §3). Duplicates are preserved: the same
    /// spelling recorded twice yields two ordinals in `by_spelling`.
    pub fn push(&mut self, include: Include) -> IncludeOrdinal {
        let ordinal = self.all.len();
        self.by_spelling
            .entry(include.spelled.clone())
            .or_default()
            .push(ordinal);
        if let Some(file) = include.resolved.clone() {
            self.by_file.entry(file).or_default().push(ordinal);
        }
        self.all.push(include);
        ordinal
    }

    pub fn all(&self) -> &[Include] {
        &self.all
    }

    pub fn get(&self, ordinal: IncludeOrdinal) -> Option<&Include> {
        self.all.get(ordinal)
    }

    pub fn by_spelling(&self, spelling: &str) -> &[IncludeOrdinal] {
        self.by_spelling
            .get(spelling)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn by_file(&self, file: &Path) -> &[IncludeOrdinal] {
        self.by_file.get(file).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_equality_is_variant_aware() {
        assert_eq!(
            Header::Physical(PathBuf::from("/a/b.h")),
            Header::Physical(PathBuf::from("/a/b.h"))
        );
        assert_ne!(
            Header::Physical(PathBuf::from("/a/b.h")),
            Header::Verbatim("b.h".into())
        );
        assert_eq!(
            Header::StandardLibrary("vector".into()),
            Header::StandardLibrary("vector".into())
        );
        assert_eq!(Header::Builtin, Header::Builtin);
        assert_eq!(Header::MainFile, Header::MainFile);
    }

    #[test]
    fn header_never_diagnosable_for_builtin_or_main() {
        assert!(!Header::Builtin.is_diagnosable());
        assert!(!Header::MainFile.is_diagnosable());
        assert!(Header::Physical(PathBuf::from("x.h")).is_diagnosable());
    }

    #[test]
    fn hint_union_ors_bits() {
        let h = Hint::complete().union(Hint::name_match());
        assert!(h.has_complete());
        assert!(h.has_name_match());
    }

    #[test]
    fn recorded_includes_indices_match_sequence() {
        let mut r = RecordedIncludes::new();
        r.push(Include {
            spelled: "a.h".into(),
            resolved: Some(PathBuf::from("/project/a.h")),
            hash_location: SourceLocation::new("main.cpp", 1, 0),
            line: 1,
            angled: false,
            keep: false,
            has_guard: true,
        });
        r.push(Include {
            spelled: "a.h".into(),
            resolved: Some(PathBuf::from("/project/a.h")),
            hash_location: SourceLocation::new("main.cpp", 2, 0),
            line: 2,
            angled: false,
            keep: false,
            has_guard: true,
        });

        assert_eq!(r.all().len(), 2);
        assert_eq!(r.by_spelling("a.h"), &[0, 1]);
        assert_eq!(r.by_file(Path::new("/project/a.h")), &[0, 1]);
        for &k in r.by_spelling("a.h") {
            assert_eq!(r.all()[k].spelled, "a.h");
        }
    }
}
