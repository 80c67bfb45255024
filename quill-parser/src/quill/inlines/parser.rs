//! Recursive inline parser
//!
//! Consumes the token stream of one paragraph line (after the triple
//! asterisk rewrite) and builds the rich-text tree. Span delimiters match
//! through [`find_closing_delim`], a pure bracket-stack search over the
//! slice; a span whose close is missing extends to the end of the stream.
//! The input is live author text, possibly mid-keystroke, so structural
//! oddity is never a parse failure here.

use crate::quill::ast::elements::nodes::{RichText, RichTextContent};
use crate::quill::token::{detokenize, Token};

/// Parse a token stream into a sequence of rich-text nodes.
///
/// Total over any stream the tokenizer can produce: unterminated spans
/// default to end of stream, and math pairs by the next `$` with no
/// nesting. Node order matches source order; recursion depth equals markup
/// nesting depth.
pub fn parse(tokens: &[Token]) -> RichTextContent {
    let mut nodes = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        match &tokens[i] {
            token @ (Token::Asterisk | Token::DoubleAsterisk | Token::Underscore) => {
                let closing = find_closing_delim(tokens, token, i + 1).unwrap_or(tokens.len());
                let children = parse(&tokens[i + 1..closing]);
                let raw = detokenize(&tokens[i..(closing + 1).min(tokens.len())]);
                nodes.push(match token {
                    Token::Asterisk => RichText::Italic { children, raw },
                    Token::DoubleAsterisk => RichText::Bold { children, raw },
                    _ => RichText::Underline { children, raw },
                });
                i = closing + 1;
            }

            Token::Dollar => {
                // Math never nests: the next $ closes, whatever lies between.
                let closing = tokens[i + 1..]
                    .iter()
                    .position(|token| *token == Token::Dollar)
                    .map(|offset| i + 1 + offset)
                    .unwrap_or(tokens.len());
                nodes.push(RichText::Math {
                    content: detokenize(&tokens[i + 1..closing]),
                    raw: detokenize(&tokens[i..(closing + 1).min(tokens.len())]),
                });
                i = closing + 1;
            }

            Token::Text(text) => {
                nodes.push(RichText::Plain(text.clone()));
                i += 1;
            }

            // The rewrite pass removes these before parsing; one arriving
            // through the public API anyway reads as plain text.
            Token::TripleAsterisk => {
                nodes.push(RichText::Plain(
                    Token::TripleAsterisk.as_str().to_owned(),
                ));
                i += 1;
            }
        }
    }

    nodes
}

/// Find the index of the token closing the span opened by `delim`.
///
/// Scans forward from `start` with a stack of open delimiters, seeded with
/// `delim`: every delimiter token equal to the stack top pops it, any other
/// delimiter token pushes. The opened span closes where the stack empties,
/// which correctly skips nested pairs of other delimiters that open and
/// close in between. Returns `None` when the span never closes.
pub fn find_closing_delim(tokens: &[Token], delim: &Token, start: usize) -> Option<usize> {
    let mut open_delims = vec![delim.clone()];

    for (i, token) in tokens.iter().enumerate().skip(start) {
        if !token.is_delimiter() {
            continue;
        }

        if open_delims.last() == Some(token) {
            open_delims.pop();
        } else {
            open_delims.push(token.clone());
        }

        if open_delims.is_empty() {
            return Some(i);
        }
    }

    None
}
