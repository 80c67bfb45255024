//! Block elements
//!
//! A quill document is a flat sequence of blocks; blocks never nest. Each
//! non-blank source line belongs to exactly one block, in source order.
//!
//! Fenced blocks (`Code`, `Math`) always own a start marker line, which is
//! consumed and not stored. They end at the next line classifying as the
//! same fence kind, or at end of input: an unterminated fence consumes the
//! rest of the document rather than failing.

/// A top-level block of a quill document
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Block {
    /// Exactly one source line of running text. Paragraphs are never merged
    /// across lines.
    Paragraph { text: String },

    /// Fenced code. `language` is the verbatim remainder of the opening
    /// fence line after the three backticks, untrimmed; `lines` are the
    /// fence-interior lines, verbatim.
    Code { language: String, lines: Vec<String> },

    /// Fenced display math between `$$` lines, interior verbatim.
    Math { lines: Vec<String> },

    /// Maximal run of consecutive `-` lines. Each item is its source line
    /// with exactly one character (the marker) removed, not trimmed.
    UnorderedList { items: Vec<String> },
}

impl Block {
    /// The paragraph text, when this block is a paragraph.
    pub fn paragraph_text(&self) -> Option<&str> {
        match self {
            Block::Paragraph { text } => Some(text),
            _ => None,
        }
    }

    /// Check if this block carries rich text (i.e. gets an inline parse).
    pub fn has_rich_text(&self) -> bool {
        matches!(self, Block::Paragraph { .. })
    }
}
