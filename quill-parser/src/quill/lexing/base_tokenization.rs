//! Base tokenization
//!
//! Converts one paragraph line into a flat token stream using the logos
//! lexer. See [`Token`](crate::quill::token::Token) for the token set.

use logos::Logos;

use crate::quill::token::Token;

/// Tokenize a line into the raw stream, `***` tokens included.
///
/// The delimiter and text patterns together cover every character, so the
/// scan is total; an error slice from logos is folded back into a text run
/// to keep the stream lossless.
pub fn tokenize(line: &str) -> Vec<Token> {
    let mut lexer = Token::lexer(line);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push(token),
            Err(()) => tokens.push(Token::Text(lexer.slice().to_owned())),
        }
    }
    tokens
}
