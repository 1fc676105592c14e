//! Whitespace-aware token source for the parser.
//!
//! This is the layer that makes Kestrel's newline rules work. The raw token
//! stream contains a `Newline` token per line break; this source overlays a
//! classification on top: a newline is surfaced as a significant token (a
//! statement terminator) in contexts where a statement may end, and folded
//! into the surrounding trivia everywhere else.
//!
//! The classification of a given newline depends on three things:
//!
//! 1. the current [`NewlineContext`] at the top of the context stack,
//! 2. the nearest real token before the newline (a trailing `+` or `,`
//!    keeps the line going),
//! 3. the nearest real token after the newline (a leading `.` or `else`
//!    continues the previous statement).
//!
//! The context stack is pushed/popped by the grammar as it enters and leaves
//! constructs. It always holds at least the bottom sentinel; popping the
//! sentinel is a parser bug and panics.

use crate::lexer::{Token, TokenKind};
use text_size::{TextRange, TextSize};

/// Grammar context deciding how newlines are classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NewlineContext {
    /// A newline may terminate the current statement or declaration.
    Terminator,
    /// Newlines are plain trivia (inside parentheses and brackets).
    Transparent,
}

/// A token source that provides significance-classified tokens to the parser.
pub(crate) struct Source<'t, 'src> {
    tokens: &'t [Token],
    source: &'src str,
    cursor: usize,
    contexts: Vec<NewlineContext>,
}

impl<'t, 'src> Source<'t, 'src> {
    /// Creates a new source from tokens and source text.
    ///
    /// The context stack starts with a single `Terminator` sentinel: at the
    /// top level a newline separates declarations.
    pub fn new(tokens: &'t [Token], source: &'src str) -> Self {
        Self {
            tokens,
            source,
            cursor: 0,
            contexts: vec![NewlineContext::Terminator],
        }
    }

    /// Pushes a newline context. Must be paired with `pop_newline_context`
    /// on every exit path of the construct that pushed it.
    pub fn push_newline_context(&mut self, context: NewlineContext) {
        self.contexts.push(context);
    }

    /// Pops the most recently pushed newline context.
    ///
    /// # Panics
    ///
    /// Panics when only the sentinel is left; an unbalanced pop is a bug in
    /// the grammar, not a property of the input.
    pub fn pop_newline_context(&mut self) {
        assert!(
            self.contexts.len() > 1,
            "newline context stack underflow: pop without matching push"
        );
        self.contexts.pop();
    }

    /// Returns the current newline context.
    pub fn newline_context(&self) -> NewlineContext {
        *self
            .contexts
            .last()
            .expect("newline context stack holds at least the sentinel")
    }

    /// Returns the depth of the context stack (1 = just the sentinel).
    pub fn context_depth(&self) -> usize {
        self.contexts.len()
    }

    /// Returns the current token kind, or `Eof` if at end.
    pub fn current(&self) -> TokenKind {
        self.peek_kind_n(0)
    }

    /// Returns the current token, or `None` if at end.
    pub fn current_token(&self) -> Option<&Token> {
        self.peek_token_n(0)
    }

    /// Peeks at the nth significant token ahead (0 = current).
    ///
    /// Insignificant tokens (trivia and folded newlines) are skipped. The
    /// result is stable for a fixed position and context stack.
    pub fn peek_kind_n(&self, n: usize) -> TokenKind {
        self.peek_token_n(n)
            .map_or(TokenKind::Eof, |token| token.kind)
    }

    /// Peeks at the nth significant token ahead and returns the token.
    pub fn peek_token_n(&self, n: usize) -> Option<&Token> {
        let mut significant_seen = 0;

        for index in self.cursor..self.tokens.len() {
            if self.is_significant_at(index) {
                if significant_seen == n {
                    return Some(&self.tokens[index]);
                }
                significant_seen += 1;
            }
        }

        None
    }

    /// Advances past the next significant token.
    ///
    /// Skipped insignificant tokens stay attached to it when the tree is
    /// built. Does nothing at end of input.
    pub fn bump(&mut self) {
        for index in self.cursor..self.tokens.len() {
            if self.is_significant_at(index) {
                self.cursor = index + 1;
                return;
            }
        }
        self.cursor = self.tokens.len();
    }

    /// Returns `true` if at end of input.
    pub fn at_end(&self) -> bool {
        self.peek_kind_n(0) == TokenKind::Eof
    }

    /// Returns an empty range at the end of the source, for diagnostics when
    /// no token is left to point at.
    pub fn end_range(&self) -> TextRange {
        TextRange::empty(TextSize::of(self.source))
    }

    /// Returns true if a top-level `=` appears before the end of the current
    /// statement. Used to tell assignments from expression statements.
    pub fn has_assign_ahead(&self) -> bool {
        let mut paren_depth = 0u32;
        let mut bracket_depth = 0u32;

        for index in self.cursor..self.tokens.len() {
            let kind = self.tokens[index].kind;

            if kind.is_trivia() {
                continue;
            }

            if kind == TokenKind::Newline {
                if paren_depth == 0 && bracket_depth == 0 && self.newline_is_terminator(index) {
                    return false;
                }
                continue;
            }

            match kind {
                TokenKind::LParen => paren_depth += 1,
                TokenKind::RParen => paren_depth = paren_depth.saturating_sub(1),
                TokenKind::LBracket => bracket_depth += 1,
                TokenKind::RBracket => bracket_depth = bracket_depth.saturating_sub(1),
                TokenKind::Eq if paren_depth == 0 && bracket_depth == 0 => {
                    return true;
                }
                TokenKind::Semicolon | TokenKind::LBrace | TokenKind::RBrace
                    if paren_depth == 0 && bracket_depth == 0 =>
                {
                    return false;
                }
                _ => {}
            }
        }

        false
    }

    fn is_significant_at(&self, index: usize) -> bool {
        match self.tokens.get(index) {
            Some(token) if token.kind == TokenKind::Newline => self.newline_is_terminator(index),
            Some(token) => !token.kind.is_trivia(),
            None => false,
        }
    }

    /// The core significance rule. A newline is a statement terminator only
    /// when the current context permits one, the previous real token does
    /// not keep the line going, and the next real token does not continue
    /// the statement.
    fn newline_is_terminator(&self, index: usize) -> bool {
        if self.newline_context() != NewlineContext::Terminator {
            return false;
        }

        let Some(previous) = self.real_token_before(index) else {
            // Leading newlines have nothing to terminate.
            return false;
        };
        if previous.continues_line_before_newline() {
            return false;
        }

        match self.real_token_after(index) {
            Some(next) if next.continues_line_after_newline() => false,
            _ => true,
        }
    }

    fn real_token_before(&self, index: usize) -> Option<TokenKind> {
        self.tokens[..index]
            .iter()
            .rev()
            .map(|token| token.kind)
            .find(|kind| !kind.is_trivia() && *kind != TokenKind::Newline)
    }

    fn real_token_after(&self, index: usize) -> Option<TokenKind> {
        self.tokens[index + 1..]
            .iter()
            .map(|token| token.kind)
            .find(|kind| !kind.is_trivia() && *kind != TokenKind::Newline)
    }
}
