//! Include-usage analysis for a single C/C++ translation unit: given a
//! source file and the headers it reaches, decide which of its own
//! `#include` directives are actually needed and which of its symbol uses
//! are missing one.
//!
//! The crate is organized as the pipeline spec.md §2 lays out, one module
//! per stage:
//!
//! - [`types`] -- the shared data model (`Symbol`, `Location`, `Header`, ...).
//! - [`recorder`] -- the mutable state built during the Record phase.
//! - [`node`], [`traits`] -- tree-sitter AST plumbing.
//! - [`c_specials`], [`c_predefined_macros`], [`c_macro`], [`stdlib`] --
//!   small static tables and the macro-liveness sweep.
//! - [`ast_walker`] -- turns parsed C++ into Recorder calls.
//! - [`locator`], [`header_resolver`], [`ranker`] -- map a used symbol to
//!   its ranked candidate providing headers.
//! - [`analyzer`] -- the Analyze-phase entry point tying those three together.
//! - [`include_matcher`], [`driver`] -- the used/unused decision.
//! - [`diagnostics`] -- the user-facing output.
//! - [`frontend`] -- the tree-sitter-backed adapter that drives all of the
//!   above from real files on disk.
//! - [`config`] -- analysis options.
//! - [`error`] -- the crate's error type.

pub mod analyzer;
pub mod ast_walker;
pub mod c_macro;
pub mod c_predefined_macros;
pub mod c_specials;
pub mod config;
pub mod diagnostics;
pub mod driver;
pub mod error;
pub mod frontend;
pub mod header_resolver;
pub mod include_matcher;
pub mod locator;
pub mod node;
pub mod ranker;
pub mod recorder;
pub mod stdlib;
pub mod traits;
pub mod types;

pub use config::AnalysisOptions;
pub use diagnostics::Diagnostic;
pub use error::{IncisorError, Result};
pub use frontend::analyze_file;
