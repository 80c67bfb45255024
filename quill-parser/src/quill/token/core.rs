//! Token definitions for the quill inline markup
//!
//! This module defines the tokens produced by the inline tokenizer. The tokens
//! are defined using the logos derive macro: logos picks the longest match at
//! each position, which is exactly the greedy `***` > `**` > `*` ordering the
//! inline grammar needs.
//!
//! `TripleAsterisk` only exists between base tokenization and the triple
//! asterisk rewrite (see
//! [`split_triple_asterisks`](crate::quill::lexing::transformations::triple_asterisk::split_triple_asterisks));
//! the stream handed to the inline parser contains only the four base
//! delimiters plus text runs.

use logos::Logos;

/// All possible tokens in a quill paragraph line
#[derive(Logos, Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Token {
    // `***` is shorthand for a `*` and a `**` in some order; the rewrite pass
    // decides which.
    #[token("***")]
    TripleAsterisk,

    /// Bold delimiter
    #[token("**")]
    DoubleAsterisk,

    /// Italic delimiter
    #[token("*")]
    Asterisk,

    /// Underline delimiter
    #[token("_")]
    Underscore,

    /// Inline math delimiter
    #[token("$")]
    Dollar,

    /// Maximal run of characters that are not part of any delimiter
    #[regex(r"[^*_$]+", |lex| lex.slice().to_owned())]
    Text(String),
}

impl Token {
    /// The exact source text of this token.
    pub fn as_str(&self) -> &str {
        match self {
            Token::TripleAsterisk => "***",
            Token::DoubleAsterisk => "**",
            Token::Asterisk => "*",
            Token::Underscore => "_",
            Token::Dollar => "$",
            Token::Text(text) => text,
        }
    }

    /// Check if this token is one of the four base span delimiters.
    ///
    /// `TripleAsterisk` is not a base delimiter; it never survives the
    /// rewrite pass.
    pub fn is_delimiter(&self) -> bool {
        matches!(
            self,
            Token::Asterisk | Token::DoubleAsterisk | Token::Underscore | Token::Dollar
        )
    }

    /// Check if this token belongs to the asterisk family (`*`, `**`, `***`).
    pub fn is_asterisk_family(&self) -> bool {
        matches!(
            self,
            Token::Asterisk | Token::DoubleAsterisk | Token::TripleAsterisk
        )
    }

    /// Check if this token is a plain text run.
    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text(_))
    }
}
