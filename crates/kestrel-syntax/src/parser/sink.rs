//! Sink for converting parser events into a syntax tree.
//!
//! The sink replays the flat event stream against the raw token slice and
//! builds the `rowan` green tree. Trivia placement happens here: whitespace,
//! comments, and newlines the parser folded away are attached around the
//! significant tokens so the tree reproduces the source exactly.
//!
//! Newlines need care. The same raw kind appears in two roles: as a folded
//! separator (attached like trivia) and as a statement terminator (consumed
//! by the parser as a token event). The sink does not re-derive
//! significance; it trusts the event stream. A `Newline` token event syncs
//! to the next raw newline; any other token event absorbs every pending
//! newline as trivia, which is exactly the folding the parser decided on.

use crate::lexer::{Token, TokenKind};
use crate::parser::event::Event;
use crate::parser::ParseError;
use crate::syntax::SyntaxKind;

/// Builds a syntax tree from parser events.
pub struct Sink<'t, 'src> {
    tokens: &'t [Token],
    source: &'src str,
    events: Vec<Event>,
    cursor: usize,
    builder: rowan::GreenNodeBuilder<'static>,
    errors: Vec<ParseError>,
}

impl<'t, 'src> Sink<'t, 'src> {
    /// Creates a new sink.
    pub fn new(tokens: &'t [Token], source: &'src str, events: Vec<Event>) -> Self {
        Self {
            tokens,
            source,
            events,
            cursor: 0,
            builder: rowan::GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    /// Consumes the sink and returns the green tree and errors.
    pub fn finish(mut self) -> (rowan::GreenNode, Vec<ParseError>) {
        let last_event = self.events.len().saturating_sub(1);

        for i in 0..self.events.len() {
            match std::mem::replace(&mut self.events[i], Event::Placeholder) {
                Event::Start {
                    kind,
                    forward_parent,
                } => {
                    // Handle forward parent chain
                    let mut kinds = vec![kind];
                    let mut idx = i;
                    let mut fp = forward_parent;

                    while let Some(fp_idx) = fp {
                        idx += fp_idx as usize;
                        if let Event::Start {
                            kind,
                            forward_parent,
                        } = std::mem::replace(&mut self.events[idx], Event::Placeholder)
                        {
                            kinds.push(kind);
                            fp = forward_parent;
                        } else {
                            break;
                        }
                    }

                    for kind in kinds.into_iter().rev() {
                        self.builder.start_node(rowan::SyntaxKind(kind as u16));
                    }
                }
                Event::Token { kind, n_tokens } => {
                    if kind == SyntaxKind::Newline {
                        self.eat_trivia();
                    } else {
                        self.eat_trivia_and_newlines();
                    }
                    for _ in 0..n_tokens {
                        self.token(kind);
                    }
                }
                Event::Finish => {
                    if i == last_event {
                        // The root finish; everything left is trailing
                        // trivia and folded newlines.
                        self.eat_remaining();
                    } else {
                        self.eat_trivia();
                    }
                    self.builder.finish_node();
                }
                Event::Placeholder => {}
            }
        }

        (self.builder.finish(), self.errors)
    }

    /// Adds trivia (whitespace, comments) to the tree, stopping at newlines.
    fn eat_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.cursor) {
            if !token.kind.is_trivia() {
                break;
            }
            self.token(SyntaxKind::from(token.kind));
        }
    }

    /// Adds trivia and folded newline tokens to the tree.
    fn eat_trivia_and_newlines(&mut self) {
        while let Some(token) = self.tokens.get(self.cursor) {
            if !token.kind.is_trivia() && token.kind != TokenKind::Newline {
                break;
            }
            self.token(SyntaxKind::from(token.kind));
        }
    }

    /// Flushes every remaining raw token before the root node closes.
    fn eat_remaining(&mut self) {
        while let Some(token) = self.tokens.get(self.cursor) {
            self.token(SyntaxKind::from(token.kind));
        }
    }

    /// Adds a token to the tree.
    fn token(&mut self, kind: SyntaxKind) {
        if let Some(token) = self.tokens.get(self.cursor) {
            let text =
                &self.source[usize::from(token.range.start())..usize::from(token.range.end())];
            self.builder.token(rowan::SyntaxKind(kind as u16), text);
            self.cursor += 1;
        }
    }

    /// Adds an error.
    // Unused in current parser flow; kept for future diagnostics.
    #[allow(dead_code)]
    pub fn error(&mut self, error: ParseError) {
        self.errors.push(error);
    }
}
