//! C3: the AST walker. Adapted from the teacher crate's
//! `dependency_extractor.rs` -- same node-kind-by-node-kind dispatch over a
//! tree-sitter tree, redirected from "what does this Rust item depend on"
//! to "what symbol does this C++ token refer to".
//!
//! Two passes share this module:
//!
//! - `collect_declarations` walks a header's (or the main file's) top
//!   level and interns every named declaration it finds into the
//!   Recorder, keyed into a `NameIndex` so later reference-walking can
//!   resolve an identifier back to the symbol it names.
//! - `walk_references` walks executable code, and for every identifier
//!   that isn't a keyword (`c_specials`), records a `SymbolReference`
//!   against whatever the `NameIndex` (ordinary declarations), the
//!   `MacroCache` (macro uses, §9 redefinition semantics) or the standard
//!   library table (§4.10) resolves it to.
//!
//! This is a deliberate simplification of Clang's real name lookup (no
//! scope nesting, no overload resolution, no ADL): spec.md treats symbol
//! resolution as an external collaborator's job, so this frontend's job is
//! only to produce *a* plausible resolution, not the textbook-correct one.

use crate::c_specials::is_special_keyword;
use crate::node::Node;
use crate::recorder::Recorder;
use crate::traits::Search;
use crate::types::{Header, Location, Policy, SourceLocation, Symbol, SymbolReference};
use std::collections::HashMap;

/// Maps an unqualified name to the symbol it was last declared as. Shared
/// between the declaration-collection pass and the reference-walking pass.
#[derive(Debug, Default)]
pub struct NameIndex {
    by_name: HashMap<String, Symbol>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, symbol: Symbol) {
        self.by_name.insert(name.to_string(), symbol);
    }

    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.by_name.get(name).copied()
    }
}

/// Monotonic position counter shared by declaration collection and
/// reference walking so `MacroCache::live_macro_at` sees a consistent
/// "where are we in the translation unit" clock across files (see
/// `c_macro`).
#[derive(Debug, Default)]
pub struct Sequencer(usize);

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> usize {
        let seq = self.0;
        self.0 += 1;
        seq
    }

    pub fn current(&self) -> usize {
        self.0
    }
}

const DECLARATION_KINDS: &[&str] = &[
    "function_definition",
    "declaration",
    "class_specifier",
    "struct_specifier",
    "union_specifier",
    "enum_specifier",
    "alias_declaration",
    "type_definition",
    "namespace_definition",
];

/// Walk a parsed file's top level, interning every named declaration this
/// simplified frontend recognizes. `header` is the providing Header these
/// declarations belong to (used to build each `Location::Physical`).
///
/// Only the file's direct top-level declarations are collected, not the
/// members of any class/struct/union/enum found among them: a header like
/// `class Widget { public: int value; };` interns `Widget`, never the
/// field `value`, matching spec.md §4.1's "top-level declaration...
/// rejecting declarations that are semantically nested". Only direct
/// named children of `root` are considered, so a declaration's own body
/// never gets walked a second time looking for more declarations inside.
pub fn collect_declarations(
    root: Node,
    header: &Header,
    recorder: &mut Recorder,
    index: &mut NameIndex,
) {
    for node in root.named_children() {
        if !DECLARATION_KINDS.contains(&node.kind()) {
            continue;
        }
        let Some(name_node) = declared_name(node) else {
            continue;
        };
        let name = name_node.text().to_string();
        if is_special_keyword(&name) {
            continue;
        }
        let (line, column) = name_node.start_position();
        let location = match header {
            Header::Physical(path) => Location::Physical(SourceLocation::new(path.clone(), line, column)),
            Header::MainFile => {
                Location::Physical(SourceLocation::new(MAIN_FILE_SENTINEL, line, column))
            }
            Header::StandardLibrary(spelling) => Location::StandardLibrary(spelling.clone()),
            Header::Verbatim(_) | Header::Builtin => continue,
        };
        let is_definition = is_definition_node(node);
        let symbol = recorder.intern_declaration(&name, location, is_definition);
        index.insert(&name, symbol);
    }
}

/// True if `node` is the declaration that actually provides a complete
/// type/body, rather than a bare forward declaration or prototype (spec.md
/// §4.4's "Complete iff that redeclaration is the definition"). Feeds the
/// Ranker's `Hint::complete` by way of the Locator (§4.4/§4.6); advisory
/// only, so under-marking a real definition as incomplete only weakens a
/// preference tie-break, never the used/unused decision itself.
fn is_definition_node(node: Node) -> bool {
    match node.kind() {
        "function_definition" | "namespace_definition" | "alias_declaration" | "type_definition" => {
            true
        }
        "class_specifier" | "struct_specifier" | "union_specifier" | "enum_specifier" => {
            node.child_by_field_name("body").is_some()
        }
        // A bare `declaration` node reaching here is a prototype or an
        // extern-style forward declaration in this simplified model; treat
        // it as incomplete rather than guess.
        _ => false,
    }
}

/// Find the identifier node that names a declaration node, e.g. the
/// `field: "declarator"` subtree's innermost `identifier`/`type_identifier`.
fn declared_name(node: Node) -> Option<Node> {
    match node.kind() {
        "class_specifier" | "struct_specifier" | "union_specifier" | "enum_specifier" => {
            node.child_by_field_name("name")
        }
        "namespace_definition" => node.child_by_field_name("name"),
        "type_definition" | "alias_declaration" => node
            .child_by_field_name("name")
            .or_else(|| node.first_occurrence(&["type_identifier"])),
        // `operator_name` covers an operator's own declaration, e.g.
        // `bool operator==(...)`, whose declared name is the token
        // `operator==` itself rather than a plain identifier.
        "function_definition" | "declaration" => node
            .child_by_field_name("declarator")
            .and_then(|d| d.first_occurrence(&["identifier", "field_identifier", "operator_name"])),
        _ => None,
    }
}

const REFERENCE_KINDS: &[&str] = &[
    "identifier",
    "type_identifier",
    "namespace_identifier",
    "field_identifier",
];

/// Walk executable code, recording one `SymbolReference` per identifier
/// this frontend can resolve to something. `policy` gates which
/// categories of "soft" use (construction, member access, operator use)
/// count at all, per spec.md §6.2. `check_stdlib` gates whether a
/// `std::`-qualified name is looked up in the standard-library table at
/// all (off by default, per spec.md §8's stdlib scenario): with it off,
/// `std::vector` simply produces no reference, so it can never be
/// diagnosed as missing or flagged as the reason a `<vector>` include is
/// used.
pub fn walk_references(
    root: Node,
    policy: &Policy,
    check_stdlib: bool,
    recorder: &mut Recorder,
    index: &NameIndex,
    sequencer: &mut Sequencer,
) {
    for node in root.iter_preorder() {
        let seq = sequencer.next();
        record_reference_if_resolvable(node, seq, policy, check_stdlib, recorder, index);
    }
}

/// The single-node body of `walk_references`, factored out so
/// `frontend`'s combined include/macro/reference sweep can drive it
/// node-by-node from its own traversal while sharing one `Sequencer`
/// across both includes' and the main file's declarations.
pub fn record_reference_if_resolvable(
    node: Node,
    seq: usize,
    policy: &Policy,
    check_stdlib: bool,
    recorder: &mut Recorder,
    index: &NameIndex,
) {
    // A binary expression's operator token (`a == b`) is the real call site
    // spec.md §8's Operators scenario means to gate, not the `operator_name`
    // node tree-sitter-cpp only emits inside an operator's own declaration
    // (`bool operator==(...)`) -- that node kind never reaches the
    // `REFERENCE_KINDS` filter below at all.
    if node.kind() == "binary_expression" {
        if policy.operators {
            record_operator_use(node, seq, recorder, index);
        }
        return;
    }

    if !REFERENCE_KINDS.contains(&node.kind()) {
        return;
    }

    let name = node.text();
    if is_special_keyword(name) {
        return;
    }

    // A live macro use is recorded unconditionally: whether `LOG(x)` reads
    // as "construction" of something named LOG is irrelevant, it's a
    // macro invocation, not a type use, and the soft-reference policy
    // flags only gate ordinary declaration references.
    let is_macro_use = is_builtin_or_predefined(name) || recorder.macros().live_macro_at(name, seq).is_some();

    if !is_macro_use {
        if !policy.members && node.kind() == "field_identifier" {
            return;
        }
        if is_construction_callee(node) && !policy.construction {
            return;
        }
    }

    let symbol = if check_stdlib && is_std_qualified(node) {
        crate::stdlib::resolve(name).map(|header| {
            recorder.intern_declaration(name, Location::StandardLibrary(header.to_string()), true)
        })
    } else {
        resolve(name, seq, recorder, index)
    };
    if let Some(symbol) = symbol {
        let (line, column) = node.start_position();
        recorder.record_reference(SymbolReference::new(
            SourceLocation::new(current_file_placeholder(), line, column),
            symbol,
        ));
    }
}

/// Resolves a binary operator's token (e.g. the `==` in `a == b`) against a
/// declared `operator==` and records a reference to it. Reuses `resolve`
/// rather than a bare `index.get` so an operator shadowed by a live macro
/// still behaves consistently with every other reference in this frontend.
fn record_operator_use(node: Node, seq: usize, recorder: &mut Recorder, index: &NameIndex) {
    let Some(op_node) = node.child_by_field_name("operator") else {
        return;
    };
    let name = format!("operator{}", op_node.text());
    if let Some(symbol) = resolve(&name, seq, recorder, index) {
        let (line, column) = op_node.start_position();
        recorder.record_reference(SymbolReference::new(
            SourceLocation::new(current_file_placeholder(), line, column),
            symbol,
        ));
    }
}

/// True for the rightmost name of a `std::whatever` qualified identifier.
fn is_std_qualified(node: Node) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };
    if parent.kind() != "qualified_identifier" {
        return false;
    }
    parent
        .child_by_field_name("scope")
        .map(|scope| scope.text() == "std")
        .unwrap_or(false)
}

/// The main file's own path isn't known to this free function; the real
/// path is filled in by `frontend::analyze_file`, which post-processes
/// each recorded reference's location. Kept as a named placeholder rather
/// than an empty literal so a missed substitution is obvious in a dump.
fn current_file_placeholder() -> std::path::PathBuf {
    std::path::PathBuf::from("<main>")
}

/// Sentinel location `header_resolver` recognizes as "never needs an
/// include": compiler builtins (`__LINE__`) and the stdint/errno-style
/// predefined macros the teacher's `c_predefined_macros.rs` lists, which
/// this frontend doesn't try to map to their exact standard header.
pub const BUILTIN_SENTINEL_FILE: &str = "<builtin>";

/// Sentinel location for declarations the main file makes about itself
/// (a `struct` or function defined directly in the `.cpp`, not pulled in
/// from any header); `header_resolver` maps it straight to
/// `Header::MainFile` regardless of the translation unit's actual path.
pub const MAIN_FILE_SENTINEL: &str = "<main-file>";

fn is_builtin_or_predefined(name: &str) -> bool {
    crate::c_predefined_macros::is_compiler_builtin_macro(name)
        || crate::c_predefined_macros::is_predefined_macro(name)
}

fn resolve(name: &str, seq: usize, recorder: &mut Recorder, index: &NameIndex) -> Option<Symbol> {
    if is_builtin_or_predefined(name) {
        return Some(recorder.intern_declaration(
            name,
            Location::Physical(SourceLocation::new(BUILTIN_SENTINEL_FILE, 0, 0)),
            true,
        ));
    }
    if let Some(id) = recorder.macros().live_macro_at(name, seq) {
        return Some(Symbol::Macro(id));
    }
    index.get(name)
}

/// A call expression whose callee is a bare type name and which has no
/// `new` keyword ancestor is read as value construction, e.g. `Widget(1)`.
fn is_construction_callee(node: Node) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };
    parent.kind() == "call_expression"
        && parent
            .child_by_field_name("function")
            .map(|f| f.id() == node.id())
            .unwrap_or(false)
        && node.text().chars().next().is_some_and(|c| c.is_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> (tree_sitter::Tree, Vec<u8>) {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_cpp::LANGUAGE.into())
            .unwrap();
        let tree = parser.parse(src, None).unwrap();
        (tree, src.as_bytes().to_vec())
    }

    #[test]
    fn collects_a_class_declaration() {
        let (tree, source) = parse("class Widget {};");
        let root = Node::new(tree.root_node(), &source);
        let mut recorder = Recorder::new();
        let mut index = NameIndex::new();
        collect_declarations(
            root,
            &Header::Physical(std::path::PathBuf::from("widget.h")),
            &mut recorder,
            &mut index,
        );
        assert!(index.get("Widget").is_some());
    }

    #[test]
    fn resolves_a_plain_reference() {
        let (header_tree, header_src) = parse("class Widget {};");
        let header_root = Node::new(header_tree.root_node(), &header_src);
        let mut recorder = Recorder::new();
        let mut index = NameIndex::new();
        collect_declarations(
            header_root,
            &Header::Physical(std::path::PathBuf::from("widget.h")),
            &mut recorder,
            &mut index,
        );

        let (main_tree, main_src) = parse("Widget w;");
        let main_root = Node::new(main_tree.root_node(), &main_src);
        let policy = Policy::default();
        let mut sequencer = Sequencer::new();
        walk_references(main_root, &policy, false, &mut recorder, &index, &mut sequencer);

        assert_eq!(recorder.references().len(), 1);
    }

    #[test]
    fn construction_is_gated_by_policy() {
        let (header_tree, header_src) = parse("class Widget {};");
        let header_root = Node::new(header_tree.root_node(), &header_src);
        let mut recorder = Recorder::new();
        let mut index = NameIndex::new();
        collect_declarations(
            header_root,
            &Header::Physical(std::path::PathBuf::from("widget.h")),
            &mut recorder,
            &mut index,
        );

        let (main_tree, main_src) = parse("auto w = Widget(1);");
        let main_root = Node::new(main_tree.root_node(), &main_src);

        let off = Policy::default();
        let mut sequencer = Sequencer::new();
        walk_references(main_root, &off, false, &mut recorder, &index, &mut sequencer);
        assert!(recorder.references().is_empty());

        let mut recorder = Recorder::new();
        let mut index2 = NameIndex::new();
        collect_declarations(
            Node::new(header_tree.root_node(), &header_src),
            &Header::Physical(std::path::PathBuf::from("widget.h")),
            &mut recorder,
            &mut index2,
        );
        let on = Policy {
            construction: true,
            ..Policy::default()
        };
        let mut sequencer = Sequencer::new();
        walk_references(main_root, &on, false, &mut recorder, &index2, &mut sequencer);
        assert_eq!(recorder.references().len(), 1);
    }

    #[test]
    fn collect_declarations_does_not_descend_into_class_members() {
        let (tree, source) = parse("class Widget { public: int value; };");
        let root = Node::new(tree.root_node(), &source);
        let mut recorder = Recorder::new();
        let mut index = NameIndex::new();
        collect_declarations(
            root,
            &Header::Physical(std::path::PathBuf::from("widget.h")),
            &mut recorder,
            &mut index,
        );
        assert!(index.get("Widget").is_some());
        assert!(index.get("value").is_none());
    }

    #[test]
    fn operator_use_is_gated_by_policy() {
        let (header_tree, header_src) = parse("bool operator==(int a, int b);");
        let header_root = Node::new(header_tree.root_node(), &header_src);
        let mut recorder = Recorder::new();
        let mut index = NameIndex::new();
        collect_declarations(
            header_root,
            &Header::Physical(std::path::PathBuf::from("ops.h")),
            &mut recorder,
            &mut index,
        );
        assert!(index.get("operator==").is_some());

        let (main_tree, main_src) = parse("bool r = 1 == 2;");
        let main_root = Node::new(main_tree.root_node(), &main_src);

        let off = Policy::default();
        let mut sequencer = Sequencer::new();
        walk_references(main_root, &off, false, &mut recorder, &index, &mut sequencer);
        assert!(recorder.references().is_empty());

        let mut recorder = Recorder::new();
        let mut index2 = NameIndex::new();
        collect_declarations(
            Node::new(header_tree.root_node(), &header_src),
            &Header::Physical(std::path::PathBuf::from("ops.h")),
            &mut recorder,
            &mut index2,
        );
        let on = Policy {
            operators: true,
            ..Policy::default()
        };
        let mut sequencer = Sequencer::new();
        walk_references(main_root, &on, false, &mut recorder, &index2, &mut sequencer);
        assert_eq!(recorder.references().len(), 1);
    }
}
