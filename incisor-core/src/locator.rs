//! C4: the Locator. Given a `Symbol`, returns every `Location` recorded
//! for it -- one per redeclaration the declaration-collection pass saw, or
//! the single definition location for a macro -- paired with whether that
//! redeclaration is the definition (spec.md §4.4's Complete hint). Pure
//! lookup over the Recorder's tables; the Header resolver (C5) turns these
//! into `Header`s.

use crate::recorder::Recorder;
use crate::types::{Location, Symbol};

pub fn locate(symbol: Symbol, recorder: &Recorder) -> Vec<(Location, bool)> {
    match symbol {
        Symbol::Declaration(id) => recorder.declarations().get(id).locations.clone(),
        // A macro has no forward-declaration concept: its one recorded
        // location is always the definition.
        Symbol::Macro(id) => vec![(Location::Physical(recorder.macros().def(id).location.clone()), true)],
    }
}
