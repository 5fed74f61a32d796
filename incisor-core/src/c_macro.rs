//! Tracks which macro, if any, is "live" for a given name at a given point
//! in the translation unit's preprocessing order.
//!
//! The teacher crate's `c_macro.rs` suppresses macro identifiers by
//! replacing them with a placeholder byte-for-byte before parsing --
//! that works for the teacher's line-oriented analysis but would corrupt
//! tree-sitter-cpp's grammar (an expression missing an operand becomes an
//! ERROR node, which breaks every later stage of the walk). This module
//! reaches the same goal -- "don't treat a macro invocation as an ordinary
//! declaration reference" -- without touching the source text: it replays
//! `#define`/`#undef` events against a single monotonically increasing
//! sequence counter supplied by the frontend, so `live_macro_at` can answer
//! "was this name a macro right here" for any identifier the AST walker
//! visits, including across `#undef`/redefinition (Design Notes §9:
//! "Redefined-macro identity... a later #define with the same name opens a
//! new identity; the old one still satisfies references that preceded it").

use crate::types::{MacroId, SourceLocation};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct MacroDef {
    pub id: MacroId,
    pub name: String,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, Copy)]
enum Event {
    Define(MacroId),
    Undef,
}

/// Ordered macro-definition history, keyed by name, queryable at any
/// sequence point. Sequence numbers are assigned by whatever walks the
/// translation unit top to bottom (see `frontend::Sequencer`); this cache
/// only needs them to be strictly increasing in encounter order.
#[derive(Debug, Default)]
pub struct MacroCache {
    defs: Vec<MacroDef>,
    events: HashMap<String, Vec<(usize, Event)>>,
}

impl MacroCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a `#define name` at `location`/`seq`, returning the fresh
    /// identity for this definition (distinct from any earlier definition
    /// of the same name).
    pub fn define(&mut self, name: &str, location: SourceLocation, seq: usize) -> MacroId {
        let id = MacroId(self.defs.len());
        self.defs.push(MacroDef {
            id,
            name: name.to_string(),
            location,
        });
        self.events
            .entry(name.to_string())
            .or_default()
            .push((seq, Event::Define(id)));
        id
    }

    /// Record a `#undef name` at `seq`.
    pub fn undef(&mut self, name: &str, seq: usize) {
        self.events
            .entry(name.to_string())
            .or_default()
            .push((seq, Event::Undef));
    }

    /// The macro identity live for `name` at `seq`, if any definition is in
    /// effect (defined at or before `seq` and not since `#undef`-ed).
    pub fn live_macro_at(&self, name: &str, seq: usize) -> Option<MacroId> {
        let events = self.events.get(name)?;
        events
            .iter()
            .filter(|(s, _)| *s <= seq)
            .max_by_key(|(s, _)| *s)
            .and_then(|(_, event)| match event {
                Event::Define(id) => Some(*id),
                Event::Undef => None,
            })
    }

    pub fn def(&self, id: MacroId) -> &MacroDef {
        &self.defs[id.0]
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(seq: usize) -> SourceLocation {
        SourceLocation::new("main.cpp", seq, 0)
    }

    #[test]
    fn redefinition_opens_a_new_identity() {
        let mut cache = MacroCache::new();
        let first = cache.define("LOG", loc(1), 1);
        let second = cache.define("LOG", loc(5), 5);
        assert_ne!(first, second);

        assert_eq!(cache.live_macro_at("LOG", 3), Some(first));
        assert_eq!(cache.live_macro_at("LOG", 5), Some(second));
        assert_eq!(cache.live_macro_at("LOG", 10), Some(second));
    }

    #[test]
    fn undef_clears_liveness_until_redefined() {
        let mut cache = MacroCache::new();
        let first = cache.define("FLAG", loc(1), 1);
        cache.undef("FLAG", 4);
        assert_eq!(cache.live_macro_at("FLAG", 3), Some(first));
        assert_eq!(cache.live_macro_at("FLAG", 4), None);
        assert_eq!(cache.live_macro_at("FLAG", 100), None);

        let second = cache.define("FLAG", loc(10), 10);
        assert_eq!(cache.live_macro_at("FLAG", 10), Some(second));
    }

    #[test]
    fn unknown_name_is_never_live() {
        let cache = MacroCache::new();
        assert_eq!(cache.live_macro_at("NOPE", 100), None);
    }
}
