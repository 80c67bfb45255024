//! Line Classification
//!
//! Core classification logic for determining line kinds from leading
//! characters. Classification is pure and context free: a line of LaTeX
//! between two `$$` lines still classifies as a paragraph here, and it is
//! the segmenter's cursor that decides it belongs to the fence interior.
//!
//! Precedence order matters only in principle (the prefixes are disjoint in
//! practice): math fence first, then code fence, then list item, with
//! paragraph as the catch-all.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::quill::token::LineKind;

/// Matches lines the segmenter skips entirely: empty, or made only of the
/// fixed whitespace set tab / LF / form feed / CR / space.
static BLANK_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\t\n\x0C\r ]*$").unwrap());

/// Determine the kind of a line from its leading characters.
pub fn classify(line: &str) -> LineKind {
    if line.starts_with("$$") {
        return LineKind::MathFence;
    }

    if line.starts_with("```") {
        return LineKind::CodeFence;
    }

    if line.starts_with('-') {
        return LineKind::UnorderedListItem;
    }

    LineKind::Paragraph
}

/// Check if a line is blank (empty or whitespace only).
pub fn is_blank_line(line: &str) -> bool {
    BLANK_LINE.is_match(line)
}
