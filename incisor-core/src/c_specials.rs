//! Identifiers the AST walker must never treat as an ordinary symbol
//! reference: language keywords and contextual specifiers that tree-sitter
//! parses as plain `identifier`/`type_identifier` nodes in some grammar
//! productions. Adapted from the teacher crate's `c_specials.rs` list,
//! trimmed to C/C++ and extended with a few C++20 contextual keywords the
//! teacher's C-only list didn't need.

/// Keywords tree-sitter-cpp sometimes surfaces through a generic
/// `identifier` node rather than a dedicated anonymous token, e.g. inside
/// attribute lists or in grammar error-recovery productions.
pub static SPECIAL_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "asm", "auto", "bool", "break", "case", "catch", "char", "char8_t",
    "char16_t", "char32_t", "class", "concept", "const", "consteval", "constexpr", "constinit",
    "const_cast", "continue", "co_await", "co_return", "co_yield", "decltype", "default",
    "delete", "do", "double", "dynamic_cast", "else", "enum", "explicit", "export", "extern",
    "false", "final", "float", "for", "friend", "goto", "if", "inline", "int", "long", "mutable",
    "namespace", "new", "noexcept", "nullptr", "operator", "override", "private", "protected",
    "public", "register", "reinterpret_cast", "requires", "return", "short", "signed", "sizeof",
    "static", "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local",
    "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
    "virtual", "void", "volatile", "wchar_t", "while",
];

pub fn is_special_keyword(name: &str) -> bool {
    SPECIAL_KEYWORDS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_keywords() {
        assert!(is_special_keyword("constexpr"));
        assert!(is_special_keyword("co_await"));
        assert!(!is_special_keyword("MyClass"));
    }
}
