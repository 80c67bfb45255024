//! Inline AST nodes
//!
//! These nodes are intentionally lightweight so the inline parser can be
//! exercised from unit tests before anything renders them. Container nodes
//! keep the exact source text they consumed (`raw`), delimiters included;
//! editors use it for syntax highlighting and round-trip reconstruction.

/// Sequence of inline nodes produced from one paragraph line.
pub type RichTextContent = Vec<RichText>;

/// Inline node variants of the quill rich-text grammar.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RichText {
    /// Plain text segment with no formatting.
    Plain(String),
    /// Bold span delimited by `**`.
    Bold {
        children: RichTextContent,
        raw: String,
    },
    /// Italic span delimited by `*`.
    Italic {
        children: RichTextContent,
        raw: String,
    },
    /// Underlined span delimited by `_`.
    Underline {
        children: RichTextContent,
        raw: String,
    },
    /// Inline math between `$` delimiters. The content is raw math source,
    /// never parsed as markup.
    Math { content: String, raw: String },
}

impl RichText {
    /// Returns nested inline content for container nodes.
    pub fn children(&self) -> Option<&RichTextContent> {
        match self {
            RichText::Bold { children, .. }
            | RichText::Italic { children, .. }
            | RichText::Underline { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Returns `true` when this node is plain text.
    pub fn is_plain(&self) -> bool {
        matches!(self, RichText::Plain(_))
    }

    /// The exact source text this node was built from.
    pub fn raw_text(&self) -> &str {
        match self {
            RichText::Plain(text) => text,
            RichText::Bold { raw, .. }
            | RichText::Italic { raw, .. }
            | RichText::Underline { raw, .. }
            | RichText::Math { raw, .. } => raw,
        }
    }
}
