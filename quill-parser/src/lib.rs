//! # quill-parser
//!
//! A parser for the quill post markup format.
//!
//! Quill is the small markup language used for author-written posts:
//! bold/italic/underline spans, inline and display math, fenced code
//! blocks, and unordered lists. Parsing runs in two stages. The block
//! segmenter partitions a document's lines into typed blocks, and the
//! rich-text engine tokenizes and recursively parses the inline markup of
//! each paragraph block, including disambiguation of `***` sequences.
//!
//! The whole pipeline is pure computation over an immutable input: the one
//! entry point most callers want is
//! [`parse_document`](quill::pipeline::parse_document), and the one error
//! it can surface is [`DelimiterMismatch`](quill::lexing::DelimiterMismatch).
//! Unterminated spans and fences are not errors; the input is live author
//! text, possibly mid-keystroke, and resolves to end of stream or input.
//!
//! Renderers and editors consume the resulting
//! [`Document`](quill::ast::Document) tree; no rendering, styling, or I/O
//! happens in this crate.

pub mod quill;
