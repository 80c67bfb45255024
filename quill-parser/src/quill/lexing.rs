//! Lexer
//!
//!     This module orchestrates tokenization of paragraph lines for the
//!     inline grammar. Lexing happens in two passes. First the logos lexer
//!     produces the raw token stream: greedy longest-match delimiters and
//!     maximal text runs. Then the triple asterisk rewrite runs over the raw
//!     stream and replaces every `***` token with an ordered `*`/`**` pair,
//!     so the parser only ever sees the four base delimiters.
//!
//! Losslessness
//!
//!     At every stage, concatenating the source text of the tokens in order
//!     reproduces the input line exactly. Tooling (editors, round-trip
//!     formatters) relies on this, so no pass may drop or reorder text.
//!
//! Errors
//!
//!     The rewrite pass is the single place lexing can fail: a `***` that
//!     would have to close exactly one open delimiter is contradictory input
//!     and surfaces as [`DelimiterMismatch`]. Everything else about a
//!     paragraph line tokenizes, however malformed.

pub mod base_tokenization;
pub mod common;
pub mod line_classification;
pub mod transformations;

pub use common::DelimiterMismatch;
pub use line_classification::classify;

use crate::quill::token::Token;

/// Tokenize one paragraph line for the inline parser.
///
/// Runs base tokenization followed by the triple asterisk rewrite. The
/// resulting stream contains only the four base delimiters plus text runs.
pub fn tokenize(line: &str) -> Result<Vec<Token>, DelimiterMismatch> {
    let raw = base_tokenization::tokenize(line);
    transformations::triple_asterisk::split_triple_asterisks(raw)
}
