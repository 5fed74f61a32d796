//! Identifiers that look like macro uses but are never user-defined:
//! standard-library feature-test macros (from `<cstdint>`/`<cinttypes>`-style
//! headers) and compiler/preprocessor builtins. Adapted from the teacher
//! crate's `c_predefined_macros.rs` list, extended with the `__FILE__`-style
//! builtins the original list didn't need to cover.
//!
//! The analyzer treats a reference to one of these as satisfied by the
//! standard library or the compiler itself, never by a project header, so
//! the header resolver (§4.5) can skip searching for their definitions.

pub static PREDEFINED_MACROS: &[&str] = &[
    "INT8_MAX", "INT16_MAX", "INT32_MAX", "INT64_MAX", "INT8_MIN", "INT16_MIN", "INT32_MIN",
    "INT64_MIN", "UINT8_MAX", "UINT16_MAX", "UINT32_MAX", "UINT64_MAX", "INTPTR_MIN",
    "INTPTR_MAX", "UINTPTR_MAX", "INTMAX_MIN", "INTMAX_MAX", "UINTMAX_MAX", "SIZE_MAX",
    "PTRDIFF_MIN", "PTRDIFF_MAX", "SIG_ATOMIC_MIN", "SIG_ATOMIC_MAX", "WCHAR_MIN", "WCHAR_MAX",
    "WINT_MIN", "WINT_MAX", "PRId8", "PRId16", "PRId32", "PRId64", "PRIu8", "PRIu16", "PRIu32",
    "PRIu64", "PRIx8", "PRIx16", "PRIx32", "PRIx64", "SCNd8", "SCNd16", "SCNd32", "SCNd64",
    "NULL", "EOF", "errno", "assert",
];

/// Compiler/preprocessor builtins that are never declared anywhere, not
/// even in a header -- referencing one is always satisfied.
pub static COMPILER_BUILTIN_MACROS: &[&str] = &[
    "__FILE__",
    "__LINE__",
    "__DATE__",
    "__TIME__",
    "__func__",
    "__FUNCTION__",
    "__PRETTY_FUNCTION__",
    "__cplusplus",
    "__STDC__",
    "__STDC_VERSION__",
    "__COUNTER__",
    "__has_include",
    "__has_cpp_attribute",
];

pub fn is_predefined_macro(name: &str) -> bool {
    PREDEFINED_MACROS.contains(&name)
}

pub fn is_compiler_builtin_macro(name: &str) -> bool {
    COMPILER_BUILTIN_MACROS.contains(&name)
}
