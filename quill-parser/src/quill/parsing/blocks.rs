//! Block segmentation
//!
//! Walks the document's lines with a cursor and groups contiguous runs into
//! typed blocks. Every non-blank line lands in exactly one block, and block
//! order matches source order. Blank lines are silently dropped: they are
//! not block separators, so two paragraph lines around a blank line come
//! out as two sibling paragraph blocks.

use crate::quill::ast::elements::block::Block;
use crate::quill::lexing::line_classification::{classify, is_blank_line};
use crate::quill::token::LineKind;

/// Partition a document's lines into typed blocks.
///
/// Fenced blocks run until the next line of the same fence kind, which is
/// consumed and not stored; a fence that never closes consumes the rest of
/// the input. The closing fence need not be bare: any line classifying as
/// the fence kind terminates the block.
pub fn segment(lines: &[String]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if is_blank_line(&lines[i]) {
            i += 1;
            continue;
        }

        match classify(&lines[i]) {
            LineKind::Paragraph => {
                blocks.push(Block::Paragraph {
                    text: lines[i].clone(),
                });
                i += 1;
            }

            LineKind::CodeFence => {
                let language = lines[i]["```".len()..].to_owned();
                let start = i + 1;
                i += 1;
                while i < lines.len() && classify(&lines[i]) != LineKind::CodeFence {
                    i += 1;
                }
                blocks.push(Block::Code {
                    language,
                    lines: lines[start..i].to_vec(),
                });
                i += 1;
            }

            LineKind::MathFence => {
                let start = i + 1;
                i += 1;
                while i < lines.len() && classify(&lines[i]) != LineKind::MathFence {
                    i += 1;
                }
                blocks.push(Block::Math {
                    lines: lines[start..i].to_vec(),
                });
                i += 1;
            }

            LineKind::UnorderedListItem => {
                let start = i;
                i += 1;
                while i < lines.len() && classify(&lines[i]) == LineKind::UnorderedListItem {
                    i += 1;
                }
                // One character stripped, the marker itself; whatever
                // spacing follows it is part of the item.
                let items = lines[start..i]
                    .iter()
                    .map(|line| line[1..].to_owned())
                    .collect();
                blocks.push(Block::UnorderedList { items });
            }
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|line| (*line).to_owned()).collect()
    }

    #[test]
    fn segments_a_mixed_document() {
        let blocks = segment(&lines(&[
            "para one",
            "",
            "```js",
            "code()",
            "```",
            "- item A",
            "- item B",
        ]));
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph {
                    text: "para one".to_string(),
                },
                Block::Code {
                    language: "js".to_string(),
                    lines: vec!["code()".to_string()],
                },
                Block::UnorderedList {
                    items: vec![" item A".to_string(), " item B".to_string()],
                },
            ]
        );
    }

    #[test]
    fn paragraphs_are_one_line_each() {
        let blocks = segment(&lines(&["first", "second"]));
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].paragraph_text(), Some("first"));
        assert_eq!(blocks[1].paragraph_text(), Some("second"));
    }

    #[test]
    fn blank_lines_are_dropped_not_separators() {
        let with_blank = segment(&lines(&["one", "", "two"]));
        let without_blank = segment(&lines(&["one", "two"]));
        assert_eq!(with_blank, without_blank);
    }

    #[test]
    fn code_fence_keeps_interior_verbatim() {
        let blocks = segment(&lines(&[
            "```c",
            "#include <stdio.h>",
            "",
            "int main() {",
            "    printf(\"Hello, world!\\n\");",
            "}",
            "```",
        ]));
        assert_eq!(
            blocks,
            vec![Block::Code {
                language: "c".to_string(),
                lines: vec![
                    "#include <stdio.h>".to_string(),
                    "".to_string(),
                    "int main() {".to_string(),
                    "    printf(\"Hello, world!\\n\");".to_string(),
                    "}".to_string(),
                ],
            }]
        );
    }

    #[test]
    fn code_language_is_verbatim_untrimmed() {
        let blocks = segment(&lines(&["```rust ", "```"]));
        assert_eq!(
            blocks,
            vec![Block::Code {
                language: "rust ".to_string(),
                lines: Vec::new(),
            }]
        );
    }

    #[test]
    fn unterminated_code_fence_consumes_to_end_of_input() {
        let blocks = segment(&lines(&["```py", "print(1)", "print(2)"]));
        assert_eq!(
            blocks,
            vec![Block::Code {
                language: "py".to_string(),
                lines: vec!["print(1)".to_string(), "print(2)".to_string()],
            }]
        );
    }

    #[test]
    fn math_fence_collects_interior_lines() {
        let blocks = segment(&lines(&["$$", "x^2 = 1", "$$", "after"]));
        assert_eq!(
            blocks,
            vec![
                Block::Math {
                    lines: vec!["x^2 = 1".to_string()],
                },
                Block::Paragraph {
                    text: "after".to_string(),
                },
            ]
        );
    }

    #[test]
    fn unterminated_math_fence_is_tolerated() {
        let blocks = segment(&lines(&["$$", "x = y"]));
        assert_eq!(
            blocks,
            vec![Block::Math {
                lines: vec!["x = y".to_string()],
            }]
        );
    }

    #[test]
    fn list_run_is_maximal() {
        let blocks = segment(&lines(&["- one", "-two", "not a list", "- three"]));
        assert_eq!(
            blocks,
            vec![
                Block::UnorderedList {
                    items: vec![" one".to_string(), "two".to_string()],
                },
                Block::Paragraph {
                    text: "not a list".to_string(),
                },
                Block::UnorderedList {
                    items: vec![" three".to_string()],
                },
            ]
        );
    }

    #[test]
    fn bare_hyphen_yields_empty_item() {
        let blocks = segment(&lines(&["-"]));
        assert_eq!(
            blocks,
            vec![Block::UnorderedList {
                items: vec!["".to_string()],
            }]
        );
    }

    #[test]
    fn empty_input_yields_no_blocks() {
        assert_eq!(segment(&[]), Vec::new());
        assert_eq!(segment(&lines(&["", "   ", "\t"])), Vec::new());
    }

    #[test]
    fn consecutive_fences_reopen() {
        let blocks = segment(&lines(&["```a", "one", "```", "```b", "two", "```"]));
        assert_eq!(blocks.len(), 2);
        assert!(matches!(
            &blocks[0],
            Block::Code { language, .. } if language == "a"
        ));
        assert!(matches!(
            &blocks[1],
            Block::Code { language, .. } if language == "b"
        ));
    }
}
