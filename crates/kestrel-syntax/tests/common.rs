//! Shared helpers for parser tests.
#![allow(dead_code, unused_imports)]

pub use kestrel_syntax::parser::{parse, parse_file, parse_script, Parse, ParseMode};
pub use kestrel_syntax::syntax::{SyntaxKind, SyntaxNode};

/// Helper to format a parse result for tree-shape assertions.
///
/// Whitespace, comments, and newline tokens are suppressed so expectations
/// stay readable; their text is still part of every node's range.
pub fn snapshot_parse(parse: &Parse) -> String {
    let syntax = parse.syntax();

    let mut output = String::new();
    format_node(&syntax, &mut output, 0);

    if !parse.ok() {
        output.push_str("\n---\nErrors:\n");
        for err in parse.errors() {
            output.push_str(&format!("  - {}\n", err));
        }
    }

    output
}

fn format_node(node: &SyntaxNode, out: &mut String, depth: usize) {
    let indent = "  ".repeat(depth);

    // Print node kind
    out.push_str(&format!(
        "{}{:?}@{:?}\n",
        indent,
        node.kind(),
        node.text_range()
    ));

    // Print children
    for child in node.children_with_tokens() {
        match child {
            rowan::NodeOrToken::Node(n) => format_node(&n, out, depth + 1),
            rowan::NodeOrToken::Token(t) => {
                let kind = t.kind();
                if !kind.is_trivia() && kind != SyntaxKind::Newline {
                    out.push_str(&format!(
                        "{}{:?}@{:?} {:?}\n",
                        "  ".repeat(depth + 1),
                        kind,
                        t.text_range(),
                        t.text()
                    ));
                }
            }
        }
    }
}

/// Asserts that the tree reproduces the source text exactly.
pub fn assert_lossless(source: &str, parse: &Parse) {
    assert_eq!(
        parse.syntax().text().to_string(),
        source,
        "tree must reproduce the source byte for byte"
    );
}

/// Returns the kinds of the root's child nodes, in order.
pub fn top_level_kinds(parse: &Parse) -> Vec<SyntaxKind> {
    parse.syntax().children().map(|node| node.kind()).collect()
}

/// Returns the kinds of a node's child nodes, in order.
pub fn child_kinds(node: &SyntaxNode) -> Vec<SyntaxKind> {
    node.children().map(|node| node.kind()).collect()
}

/// Finds the first descendant node of the given kind.
pub fn find_node(parse: &Parse, kind: SyntaxKind) -> Option<SyntaxNode> {
    parse.syntax().descendants().find(|node| node.kind() == kind)
}
