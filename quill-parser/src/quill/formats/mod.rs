//! Output formats for parsed documents
//!
//! Text renderings of the document tree used by tests and tooling. These
//! are consumers of the core, never required by it.

pub mod sexpr;
pub mod treeviz;
