//! Treeviz formatter for document trees
//!
//! One line per node, structure encoded as two spaces of indentation per
//! nesting level, an icon per node kind, and a label truncated so the tree
//! scans quickly:
//!
//!     ⧉ document
//!       ¶ "Plain, *italic*, plain."
//!         ◦ "Plain, "
//!         𝐼 "italic"
//!         ◦ ", plain."
//!       ƒ code [c] (5 lines)
//!       ☰ list (2 items)
//!         • " item A"
//!
//! Icons
//!     Document: ⧉   Paragraph: ¶   Code: ƒ   Math (block and inline): √
//!     List: ☰   ListItem: •   Plain: ◦   Bold: 𝐁   Italic: 𝐼   Underline: _

use crate::quill::ast::{Block, Document, RichText};

const LABEL_MAX_CHARS: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        s.to_string()
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

/// Render a whole document as a treeviz string.
pub fn to_treeviz(doc: &Document) -> String {
    let mut out = String::from("⧉ document\n");
    for entry in doc.iter() {
        format_block(&mut out, &entry.block, entry.inlines.as_deref(), 1);
    }
    out
}

fn format_block(out: &mut String, block: &Block, inlines: Option<&[RichText]>, depth: usize) {
    indent(out, depth);
    match block {
        Block::Paragraph { text } => {
            out.push_str(&format!("¶ {:?}\n", truncate(text, LABEL_MAX_CHARS)));
            for node in inlines.unwrap_or_default() {
                format_node(out, node, depth + 1);
            }
        }
        Block::Code { language, lines } => {
            out.push_str(&format!("ƒ code [{}] ({} lines)\n", language, lines.len()));
        }
        Block::Math { lines } => {
            out.push_str(&format!("√ math ({} lines)\n", lines.len()));
        }
        Block::UnorderedList { items } => {
            out.push_str(&format!("☰ list ({} items)\n", items.len()));
            for item in items {
                indent(out, depth + 1);
                out.push_str(&format!("• {:?}\n", truncate(item, LABEL_MAX_CHARS)));
            }
        }
    }
}

fn format_node(out: &mut String, node: &RichText, depth: usize) {
    indent(out, depth);
    match node {
        RichText::Plain(text) => {
            out.push_str(&format!("◦ {:?}\n", truncate(text, LABEL_MAX_CHARS)));
        }
        RichText::Bold { children, raw } => {
            out.push_str(&format!("𝐁 {:?}\n", truncate(raw, LABEL_MAX_CHARS)));
            for child in children {
                format_node(out, child, depth + 1);
            }
        }
        RichText::Italic { children, raw } => {
            out.push_str(&format!("𝐼 {:?}\n", truncate(raw, LABEL_MAX_CHARS)));
            for child in children {
                format_node(out, child, depth + 1);
            }
        }
        RichText::Underline { children, raw } => {
            out.push_str(&format!("_ {:?}\n", truncate(raw, LABEL_MAX_CHARS)));
            for child in children {
                format_node(out, child, depth + 1);
            }
        }
        RichText::Math { content, .. } => {
            out.push_str(&format!("√ {:?}\n", truncate(content, LABEL_MAX_CHARS)));
        }
    }
}
