//! Parser for the Kestrel language.
//!
//! This module provides a hand-written recursive descent parser that builds
//! a lossless concrete syntax tree (CST) using the `rowan` library.
//!
//! # Design
//!
//! The parser is designed for IDE use:
//!
//! - **Error-tolerant**: Continues parsing after errors
//! - **Lossless**: Preserves all source text including whitespace, comments,
//!   and newlines
//! - **Newline-aware**: Statements end at significant newlines; the token
//!   source decides significance from grammar context
//!
//! # Architecture
//!
//! The parser uses a three-phase approach:
//!
//! 1. **Lexing**: Tokenize source text (see `lexer` module)
//! 2. **Parsing**: Build a flat stream of events (start node, add token,
//!    finish node), consuming tokens through the whitespace-aware source
//! 3. **Tree Building**: Convert events into a `rowan` green tree
//!
//! Parsing is a pure function of the source text and the [`ParseMode`]; it
//! performs no I/O and holds no state across invocations.

#![allow(clippy::module_inception)]

pub mod event;
pub mod grammar;
mod parser;
mod sink;
mod source;

pub use parser::{parse, parse_file, parse_script};
pub(crate) use parser::{CompletedMarker, Parser};

use crate::syntax::SyntaxNode;

/// Which top-level grammar to parse with.
///
/// The classification of an input unit as a file or a script is external
/// policy (a file extension, a unit kind); the parser only follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseMode {
    /// A declaration file: only declarations at the top level.
    File,
    /// A script: statements and declarations interleaved at the top level.
    Script,
}

/// Result of parsing source text.
#[derive(Debug)]
pub struct Parse {
    /// The root syntax node.
    green_node: rowan::GreenNode,
    /// Parsing errors.
    errors: Vec<ParseError>,
}

impl Parse {
    /// Returns the root syntax node.
    #[must_use]
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green_node.clone())
    }

    /// Returns the parsing errors.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Returns `true` if parsing produced no errors.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A parsing error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at {range:?}")]
pub struct ParseError {
    /// The error message.
    pub message: String,
    /// The byte range where the error occurred.
    pub range: text_size::TextRange,
}
