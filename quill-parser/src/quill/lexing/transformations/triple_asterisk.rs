//! Triple asterisk rewrite
//!
//! The inline grammar only knows single (`*`, italic) and double (`**`,
//! bold) asterisk delimiters, so a `***` is always shorthand for one of
//! each, in some order. This pass scans the raw token stream
//! left to right with a stack of currently open asterisk delimiters and
//! rewrites every `***` into an ordered `*`/`**` pair:
//!
//!     - Two or more delimiters open: the `***` closes the top two. Top two
//!       `**` then `*` (bold wrapping italic) emit `*`, `**`: the inner
//!       italic closes first. Top two `*` then `**` emit `**`, `*`.
//!     - Nothing open: the `***` opens both spans. The next asterisk-family
//!       token in the rest of the stream decides the nesting: a `*` means
//!       the italic closes first, so bold wraps italic and the pair is
//!       `**`, `*`; a `**` or another `***` means the bold closes first and
//!       the pair is `*`, `**`. With no later asterisk token the pair
//!       defaults to `*`, `**`.
//!     - Exactly one delimiter open: the `***` would have to close a single
//!       span, which it cannot. This is the one contradictory input and
//!       surfaces as [`DelimiterMismatch`].
//!
//! Only literal `*` and `**` tokens drive the stack; the pair emitted for a
//! `***` is not pushed back through it.

use crate::quill::lexing::common::DelimiterMismatch;
use crate::quill::token::Token;

/// Rewrite every `***` token into an ordered `*`/`**` pair.
pub fn split_triple_asterisks(tokens: Vec<Token>) -> Result<Vec<Token>, DelimiterMismatch> {
    let mut open_delims: Vec<Token> = Vec::new();
    let mut rewritten = Vec::with_capacity(tokens.len());

    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::Asterisk | Token::DoubleAsterisk => {
                if open_delims.last() == Some(token) {
                    open_delims.pop();
                } else {
                    open_delims.push(token.clone());
                }
                rewritten.push(token.clone());
            }

            Token::TripleAsterisk => match open_delims.len() {
                0 => match next_asterisk_delim(&tokens[i + 1..]) {
                    Some(Token::Asterisk) => {
                        rewritten.push(Token::DoubleAsterisk);
                        rewritten.push(Token::Asterisk);
                    }
                    _ => {
                        rewritten.push(Token::Asterisk);
                        rewritten.push(Token::DoubleAsterisk);
                    }
                },
                1 => {
                    return Err(DelimiterMismatch {
                        open: open_delims[0].as_str().to_owned(),
                    });
                }
                _ => {
                    let top = &open_delims[open_delims.len() - 1];
                    let below = &open_delims[open_delims.len() - 2];
                    if *below == Token::DoubleAsterisk && *top == Token::Asterisk {
                        rewritten.push(Token::Asterisk);
                        rewritten.push(Token::DoubleAsterisk);
                    } else {
                        rewritten.push(Token::DoubleAsterisk);
                        rewritten.push(Token::Asterisk);
                    }
                }
            },

            other => rewritten.push(other.clone()),
        }
    }

    Ok(rewritten)
}

/// First asterisk-family token in `tokens`, if any.
fn next_asterisk_delim(tokens: &[Token]) -> Option<&Token> {
    tokens.iter().find(|token| token.is_asterisk_family())
}
