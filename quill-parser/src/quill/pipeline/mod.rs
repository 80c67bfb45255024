//! Processing pipeline for the quill format
//!
//! Combines the block segmenter with the inline engine to produce the
//! final document tree. This is the sole seam external renderers and
//! editors call: they receive blocks in source order, each paired with an
//! inline tree when the block is a paragraph, and do all rendering and
//! styling themselves.
//!
//! The pipeline is pure computation over an immutable input: no I/O, no
//! shared state, no incremental mode. A document either assembles
//! completely or surfaces the single
//! [`DelimiterMismatch`](crate::quill::lexing::DelimiterMismatch) error
//! from the triple asterisk rewrite.

use crate::quill::ast::{Block, Document, DocumentBlock};
use crate::quill::inlines::parser::parse;
use crate::quill::lexing::{tokenize, DelimiterMismatch};
use crate::quill::parsing::blocks::segment;

/// Assemble a document from its lines.
///
/// Runs the segmenter over the whole input, then tokenizes and parses the
/// text of every paragraph block. Code, math, and list blocks pass through
/// with `inlines: None`.
pub fn assemble(lines: &[String]) -> Result<Document, DelimiterMismatch> {
    let mut blocks = Vec::new();

    for block in segment(lines) {
        let inlines = match &block {
            Block::Paragraph { text } => Some(parse(&tokenize(text)?)),
            _ => None,
        };
        blocks.push(DocumentBlock { block, inlines });
    }

    Ok(Document { blocks })
}

/// Parse a whole document from source text.
///
/// Splits on `\n` and assembles. The recommended entry point for typical
/// callers.
pub fn parse_document(source: &str) -> Result<Document, DelimiterMismatch> {
    let lines: Vec<String> = source.split('\n').map(str::to_owned).collect();
    assemble(&lines)
}
