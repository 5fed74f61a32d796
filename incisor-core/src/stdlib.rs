//! A small, curated standard-library symbol table.
//!
//! Spec.md §4.10 treats standard-library symbols as resolvable to a
//! `Header::StandardLibrary` location without ever reading libstdc++/libc++
//! headers (Non-goal: no compiler sysroot dependency). This module is the
//! table that makes that possible: a fixed map from an unqualified name
//! (as it appears after `std::` is stripped, or a bare C name) to the
//! header that the C++ standard requires it to come from.
//!
//! The table is intentionally small -- it covers the containers,
//! smart pointers and streams an analyzer demo or test suite is likely to
//! exercise, not the whole standard library. Extending it is additive and
//! never changes behavior for names already listed.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static TABLE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for (names, header) in ENTRIES {
        for name in *names {
            m.insert(*name, *header);
        }
    }
    m
});

static HEADERS: Lazy<std::collections::HashSet<&'static str>> =
    Lazy::new(|| ENTRIES.iter().map(|(_, header)| *header).collect());

/// `(names sharing a header, header spelling)`.
static ENTRIES: &[(&[&str], &str)] = &[
    (&["vector"], "vector"),
    (&["array"], "array"),
    (&["deque"], "deque"),
    (&["list", "forward_list"], "list"),
    (&["map", "multimap"], "map"),
    (&["set", "multiset"], "set"),
    (&["unordered_map", "unordered_multimap"], "unordered_map"),
    (&["unordered_set", "unordered_multiset"], "unordered_set"),
    (&["stack"], "stack"),
    (&["queue", "priority_queue"], "queue"),
    (&["pair"], "utility"),
    (&["tuple"], "tuple"),
    (&["optional", "nullopt_t"], "optional"),
    (&["variant"], "variant"),
    (&["string", "basic_string"], "string"),
    (&["string_view"], "string_view"),
    (&["unique_ptr", "make_unique"], "memory"),
    (&["shared_ptr", "make_shared", "weak_ptr"], "memory"),
    (&["function"], "functional"),
    (&["thread"], "thread"),
    (&["mutex", "lock_guard", "unique_lock"], "mutex"),
    (&["atomic"], "atomic"),
    (&["ifstream", "ofstream", "fstream"], "fstream"),
    (&["istream", "ostream", "iostream"], "iostream"),
    (&["stringstream", "istringstream", "ostringstream"], "sstream"),
    (&["runtime_error", "logic_error", "out_of_range", "invalid_argument"], "stdexcept"),
    (&["size_t", "ptrdiff_t"], "cstddef"),
    (&["int8_t", "int16_t", "int32_t", "int64_t", "uint8_t", "uint16_t", "uint32_t", "uint64_t"], "cstdint"),
];

/// Look up the header an unqualified standard-library name is declared in.
pub fn resolve(name: &str) -> Option<&'static str> {
    TABLE.get(name).copied()
}

/// True if `spelling` (an angle-bracket include's text, with no `.h`
/// extension expected for these) names a header this table knows provides
/// standard-library symbols. Used by the §4.10 exclusion rule that skips
/// angle-bracket includes whose spelling isn't a recognized standard
/// header when standard-library analysis is off.
pub fn is_known_header(spelling: &str) -> bool {
    HEADERS.contains(spelling)
}
