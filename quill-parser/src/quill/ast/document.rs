//! Assembled document
//!
//! The document is the seam external renderers and editors attach to: an
//! ordered sequence of blocks, each paired with an inline tree when the
//! block is a paragraph.

use super::elements::block::Block;
use super::elements::nodes::RichTextContent;

/// One block of an assembled document, paired with its inline parse.
///
/// `inlines` is `Some` exactly when the block is a paragraph; code, math,
/// and list blocks pass through without an inline parse.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DocumentBlock {
    pub block: Block,
    pub inlines: Option<RichTextContent>,
}

/// A fully assembled document, blocks in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Document {
    pub blocks: Vec<DocumentBlock>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Iterate over blocks in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, DocumentBlock> {
        self.blocks.iter()
    }
}
