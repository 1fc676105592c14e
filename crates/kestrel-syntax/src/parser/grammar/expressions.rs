//! Expression parsing using Pratt parsing.
//!
//! Operator precedence (low to high):
//! - || (1-2)
//! - && (3-4)
//! - ==, != (5-6)
//! - <, <=, >, >= (7-8)
//! - ?: (10-9, right associative)
//! - .. (11-12)
//! - +, - (13-14)
//! - *, /, % (15-16)
//! - !, unary - (17)
//!
//! A significant newline never sits in the middle of an expression: the
//! token source folds newlines after trailing operators and before leading
//! `.`/`?.`/`?:`, and inside any parenthesized or bracketed region the whole
//! expression is parsed in a transparent newline context.

use crate::lexer::TokenKind;
use crate::parser::source::NewlineContext;
use crate::syntax::SyntaxKind;

use super::super::CompletedMarker;
use super::super::Parser;

impl Parser<'_, '_> {
    /// Parse an expression using Pratt parsing.
    pub(crate) fn parse_expression(&mut self) -> CompletedMarker {
        self.parse_expr_bp(0)
    }

    /// Parse expression with minimum binding power.
    pub(crate) fn parse_expr_bp(&mut self, min_bp: u8) -> CompletedMarker {
        let mut lhs = if let Some(bp) = self.current().prefix_binding_power() {
            let marker = self.start();
            self.bump();
            self.parse_expr_bp(bp);
            marker.complete(self, SyntaxKind::UnaryExpr)
        } else {
            self.parse_primary_expr()
        };

        loop {
            if let Some(next) = self.parse_postfix_expr(lhs) {
                lhs = next;
                continue;
            }

            let op = self.current();
            if let Some((l_bp, r_bp)) = op.infix_binding_power() {
                if l_bp < min_bp {
                    break;
                }

                let marker = lhs.precede(self);
                self.bump(); // operator
                self.parse_expr_bp(r_bp);
                lhs = marker.complete(self, SyntaxKind::BinaryExpr);
                continue;
            }

            break;
        }

        lhs
    }

    /// Parse postfix expressions (field access, calls, indexing).
    pub(crate) fn parse_postfix_expr(&mut self, lhs: CompletedMarker) -> Option<CompletedMarker> {
        match self.current() {
            TokenKind::Dot | TokenKind::SafeDot => {
                let marker = lhs.precede(self);
                self.bump();
                if self.at(TokenKind::Ident) {
                    self.parse_name();
                } else {
                    self.error("expected field name");
                }
                Some(marker.complete(self, SyntaxKind::FieldExpr))
            }
            TokenKind::LParen => {
                let marker = lhs.precede(self);
                self.parse_arg_list();
                Some(marker.complete(self, SyntaxKind::CallExpr))
            }
            TokenKind::LBracket => {
                let marker = lhs.precede(self);
                self.bump();
                self.in_context(NewlineContext::Transparent, |p| {
                    p.parse_expression();
                    if p.at(TokenKind::RBracket) {
                        p.bump();
                    } else {
                        p.error("expected ']'");
                    }
                });
                Some(marker.complete(self, SyntaxKind::IndexExpr))
            }
            _ => None,
        }
    }

    /// Parse primary expressions (literals, identifiers, etc.).
    pub(crate) fn parse_primary_expr(&mut self) -> CompletedMarker {
        match self.current() {
            TokenKind::IntLiteral
            | TokenKind::FloatLiteral
            | TokenKind::StringLiteral
            | TokenKind::KwTrue
            | TokenKind::KwFalse
            | TokenKind::KwNull => {
                let marker = self.start();
                self.bump();
                marker.complete(self, SyntaxKind::Literal)
            }
            TokenKind::Ident => {
                let marker = self.start();
                self.bump();
                marker.complete(self, SyntaxKind::NameRef)
            }
            TokenKind::LParen => {
                let marker = self.start();
                self.bump();
                self.in_context(NewlineContext::Transparent, |p| {
                    p.parse_expression();
                    if p.at(TokenKind::RParen) {
                        p.bump();
                    } else {
                        p.error("expected ')'");
                    }
                });
                marker.complete(self, SyntaxKind::ParenExpr)
            }
            _ => {
                let marker = self.start();
                self.error("expected expression");
                if !self.at_end() {
                    self.bump();
                }
                marker.complete(self, SyntaxKind::Error)
            }
        }
    }

    /// Parse argument list for calls.
    pub(crate) fn parse_arg_list(&mut self) {
        self.start_node(SyntaxKind::ArgList);
        self.bump(); // (

        self.in_context(NewlineContext::Transparent, |p| {
            while !p.at(TokenKind::RParen) && !p.at_end() {
                p.start_node(SyntaxKind::Arg);

                // Check for named argument: `name = value`
                if p.at(TokenKind::Ident) && p.peek_kind_n(1) == TokenKind::Eq {
                    p.start_node(SyntaxKind::Name);
                    p.bump();
                    p.finish_node();
                    p.bump(); // =
                }

                p.parse_expression();
                p.finish_node();

                if p.at(TokenKind::Comma) {
                    p.bump();
                } else {
                    break;
                }
            }

            if p.at(TokenKind::RParen) {
                p.bump();
            } else {
                p.error("expected ')'");
            }
        });

        self.finish_node();
    }
}
