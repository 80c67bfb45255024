//! S-expression formatter
//!
//! Renders rich-text trees (and whole documents) as compact S-expressions.
//! The format is stable enough to assert against in tests and scan in a
//! terminal:
//!
//!     ("a " (bold "b") " c")
//!
//! Plain text and math content are rendered with `{:?}` so control
//! characters and quotes stay readable.

use crate::quill::ast::{Block, Document, RichText};

/// Render a sequence of inline nodes as one parenthesized list.
pub fn to_sexpr(nodes: &[RichText]) -> String {
    let elems: Vec<String> = nodes.iter().map(format_node).collect();
    format!("({})", elems.join(" "))
}

fn format_node(node: &RichText) -> String {
    match node {
        RichText::Plain(text) => format!("{:?}", text),
        RichText::Bold { children, .. } => format_container("bold", children),
        RichText::Italic { children, .. } => format_container("italic", children),
        RichText::Underline { children, .. } => format_container("underline", children),
        RichText::Math { content, .. } => format!("(math {:?})", content),
    }
}

fn format_container(label: &str, children: &[RichText]) -> String {
    let elems: Vec<String> = children.iter().map(format_node).collect();
    if elems.is_empty() {
        format!("({})", label)
    } else {
        format!("({} {})", label, elems.join(" "))
    }
}

/// Render a whole document, one block per line.
pub fn to_document_sexpr(doc: &Document) -> String {
    let mut out = String::from("(document");
    for entry in doc.iter() {
        out.push_str("\n  ");
        out.push_str(&format_block(&entry.block, entry.inlines.as_deref()));
    }
    out.push(')');
    out
}

fn format_block(block: &Block, inlines: Option<&[RichText]>) -> String {
    match block {
        Block::Paragraph { .. } => {
            let elems: Vec<String> = inlines
                .unwrap_or_default()
                .iter()
                .map(format_node)
                .collect();
            if elems.is_empty() {
                "(paragraph)".to_string()
            } else {
                format!("(paragraph {})", elems.join(" "))
            }
        }
        Block::Code { language, lines } => {
            let mut parts = vec![format!("{:?}", language)];
            parts.extend(lines.iter().map(|line| format!("{:?}", line)));
            format!("(code {})", parts.join(" "))
        }
        Block::Math { lines } => {
            let body: Vec<String> = lines.iter().map(|line| format!("{:?}", line)).collect();
            if body.is_empty() {
                "(math)".to_string()
            } else {
                format!("(math {})", body.join(" "))
            }
        }
        Block::UnorderedList { items } => {
            let body: Vec<String> = items.iter().map(|item| format!("{:?}", item)).collect();
            if body.is_empty() {
                "(list)".to_string()
            } else {
                format!("(list {})", body.join(" "))
            }
        }
    }
}
