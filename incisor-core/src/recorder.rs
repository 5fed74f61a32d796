//! C2: the Recorder. Owns the append-only symbol cache and the two
//! callback hooks spec.md §4.1/§4.2 describes as the whole surface the
//! parser driver talks to during the Record phase. Nothing downstream of
//! the Recorder ever mutates state again (§5: phase separation).

use crate::c_macro::MacroCache;
use crate::types::{DeclId, Location, RecordedIncludes, Symbol, SymbolReference};
use std::collections::HashMap;

/// A canonicalized declaration: the identity the cache interns once per
/// name, accumulating every redeclaration's location (§3 invariant:
/// "redeclarations of the same entity collapse to one symbol"; Design
/// Notes §9 notes real semantic-equivalence checking is out of scope for
/// this frontend, so identity here is name-based within the translation
/// unit rather than Clang's full canonical-declaration resolution).
#[derive(Debug, Clone)]
pub struct Declaration {
    pub id: DeclId,
    pub name: String,
    /// Each recorded redeclaration's location, paired with whether that
    /// particular redeclaration is the definition (spec.md §4.4: "Complete
    /// iff that redeclaration is the definition") rather than a forward
    /// declaration or prototype.
    pub locations: Vec<(Location, bool)>,
}

/// Append-only cache of interned declarations, keyed by name, so a forward
/// declaration in one header and a definition in another collapse onto the
/// same `DeclId` with two recorded locations, and the Locator (§4.4) can
/// offer every one of them as a candidate provider.
#[derive(Debug, Default)]
pub struct DeclarationTable {
    decls: Vec<Declaration>,
    index: HashMap<String, DeclId>,
}

impl DeclarationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a declaration, appending `location` to the existing entry if
    /// this name was already seen, or starting a fresh one otherwise.
    /// `is_definition` records whether this particular redeclaration is the
    /// definition rather than a forward declaration or prototype.
    pub fn intern(&mut self, name: &str, location: Location, is_definition: bool) -> DeclId {
        if let Some(&id) = self.index.get(name) {
            self.decls[id.0].locations.push((location, is_definition));
            return id;
        }
        let id = DeclId(self.decls.len());
        self.decls.push(Declaration {
            id,
            name: name.to_string(),
            locations: vec![(location, is_definition)],
        });
        self.index.insert(name.to_string(), id);
        id
    }

    pub fn get(&self, id: DeclId) -> &Declaration {
        &self.decls[id.0]
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }
}

/// The Recorder (C2): the single mutable surface touched during the
/// Record phase. Frontend code calls `record_reference` once per use it
/// finds while walking the AST and `record_include` once per `#include`
/// directive it sees while walking preprocessor tokens; everything else in
/// this crate only reads what accumulates here.
#[derive(Debug, Default)]
pub struct Recorder {
    declarations: DeclarationTable,
    macros: MacroCache,
    references: Vec<SymbolReference>,
    includes: RecordedIncludes,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declarations(&self) -> &DeclarationTable {
        &self.declarations
    }

    pub fn declarations_mut(&mut self) -> &mut DeclarationTable {
        &mut self.declarations
    }

    pub fn macros(&self) -> &MacroCache {
        &self.macros
    }

    pub fn macros_mut(&mut self) -> &mut MacroCache {
        &mut self.macros
    }

    pub fn includes(&self) -> &RecordedIncludes {
        &self.includes
    }

    /// §4.1: called once per `#include` directive encountered while
    /// walking the main file's preprocessor token stream.
    pub fn record_include(&mut self, include: crate::types::Include) {
        self.includes.push(include);
    }

    /// §4.2: called once per symbol reference the AST walker finds.
    pub fn record_reference(&mut self, reference: SymbolReference) {
        self.references.push(reference);
    }

    pub fn intern_declaration(&mut self, name: &str, location: Location, is_definition: bool) -> Symbol {
        Symbol::Declaration(self.declarations.intern(name, location, is_definition))
    }

    pub fn references(&self) -> &[SymbolReference] {
        &self.references
    }

    pub fn references_mut(&mut self) -> &mut [SymbolReference] {
        &mut self.references
    }
}
