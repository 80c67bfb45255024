//! Token stream formatting
//!
//! Reconstructs source text from a token stream. Tokenization is lossless,
//! so `detokenize` over an unmodified stream reproduces the original line
//! byte for byte. The triple asterisk rewrite preserves this: a `***` is
//! replaced by a `*` and a `**`, which concatenate back to three asterisks.

use super::core::Token;

/// Concatenate the source text of every token, in order.
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(Token::as_str).collect()
}
