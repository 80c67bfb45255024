//! AST types for parsed quill documents
//!
//! Blocks and rich-text nodes are immutable values built in one pass from
//! source text. There is no mutation after construction and no persistent
//! store; renderers consume the tree and drop it.

pub mod document;
pub mod elements;

pub use document::{Document, DocumentBlock};
pub use elements::block::Block;
pub use elements::nodes::{RichText, RichTextContent};
