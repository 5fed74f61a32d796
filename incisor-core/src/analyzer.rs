//! C7: the Analyzer. `walk_used` is the single entry point spec.md §4.7
//! describes: given a finished Recorder, it locates, resolves and ranks
//! every recorded reference's providers, producing the per-reference view
//! the Include matcher (C8) and Driver consume. Pure function of the
//! Recorder's frozen state -- this is the Analyze phase of §5's
//! phase-separated concurrency model, and it never mutates anything.

use crate::header_resolver::HeaderResolver;
use crate::locator::locate;
use crate::ranker::{rank, RankedHeader};
use crate::recorder::Recorder;
use crate::types::SymbolReference;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct AnalyzedReference {
    pub reference: SymbolReference,
    pub name: String,
    /// "declaration" or "macro", the two node kinds spec.md §3 recognizes --
    /// surfaced in diagnostic messages as `<nodekind> '<name>'`.
    pub nodekind: &'static str,
    pub providers: Vec<RankedHeader>,
}

/// Resolve and rank a provider list for every reference the Recorder
/// collected, in the order they were recorded.
pub fn walk_used(recorder: &Recorder, main_file: &Path) -> Vec<AnalyzedReference> {
    let resolver = HeaderResolver::new(main_file);
    recorder
        .references()
        .iter()
        .map(|reference| {
            let name = symbol_name(recorder, reference);
            let nodekind = symbol_nodekind(reference);
            let locations = locate(reference.symbol, recorder);
            let candidates = resolver.resolve_all(&locations);
            let providers = rank(&name, candidates);
            AnalyzedReference {
                reference: reference.clone(),
                name,
                nodekind,
                providers,
            }
        })
        .collect()
}

fn symbol_name(recorder: &Recorder, reference: &SymbolReference) -> String {
    match reference.symbol {
        crate::types::Symbol::Declaration(id) => recorder.declarations().get(id).name.clone(),
        crate::types::Symbol::Macro(id) => recorder.macros().def(id).name.clone(),
    }
}

fn symbol_nodekind(reference: &SymbolReference) -> &'static str {
    match reference.symbol {
        crate::types::Symbol::Declaration(_) => "declaration",
        crate::types::Symbol::Macro(_) => "macro",
    }
}
