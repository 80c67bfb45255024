//! Line-level classification for the block segmenter
//!
//! A quill document is line oriented: every non-blank line belongs to exactly
//! one block, and which block is decided by the line's leading characters
//! alone. Blank lines are never classified; the segmenter skips them before
//! classification runs.
//!
//! See [`classify`](crate::quill::lexing::line_classification::classify) for
//! the classification logic and its precedence order.

/// The classification of a single source line
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LineKind {
    /// Any line not claimed by a more specific kind
    Paragraph,

    /// Line starting with `$$` (opens or closes a math fence)
    MathFence,

    /// Line starting with ``` (opens or closes a code fence)
    CodeFence,

    /// Line starting with `-`
    UnorderedListItem,
}
