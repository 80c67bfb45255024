//! Inline parsing primitives
//!
//! This module exposes the inline AST nodes plus the recursive parser that
//! turns a disambiguated token stream into a rich-text tree.

pub mod parser;

pub use crate::quill::ast::elements::nodes::{RichText, RichTextContent};
pub use parser::{find_closing_delim, parse};
