//! Statement parsing.
//!
//! Supported statements:
//! - Binding declarations: `let x = 1`, `var y = 2`
//! - Local functions
//! - Assignment: `x = expr`
//! - Expression statement: `f()`
//! - `if (cond) { ... } else if ... else { ... }`
//! - `while (cond) { ... }`
//! - `for x in expr { ... }`
//! - `return [expr]`, `break`, `continue`
//! - Block: `{ ... }`
//!
//! The opening brace of a control-flow body must start on the same line as
//! its header; after a significant newline the brace would begin a new
//! statement instead.

use crate::lexer::TokenKind;
use crate::parser::source::NewlineContext;
use crate::syntax::SyntaxKind;

use super::super::Parser;

impl Parser<'_, '_> {
    /// Parse a single statement.
    pub(crate) fn parse_statement(&mut self) {
        if self.at(TokenKind::KwLet) || self.at(TokenKind::KwVar) {
            self.parse_var_decl();
        } else if self.at(TokenKind::KwFun) {
            self.parse_fun_decl();
        } else if self.at(TokenKind::KwIf) {
            self.parse_if_stmt();
        } else if self.at(TokenKind::KwWhile) {
            self.parse_while_stmt();
        } else if self.at(TokenKind::KwFor) {
            self.parse_for_stmt();
        } else if self.at(TokenKind::KwReturn) {
            self.parse_return_stmt();
        } else if self.at(TokenKind::KwBreak) {
            self.start_node(SyntaxKind::BreakStmt);
            self.bump();
            self.expect_terminator();
            self.finish_node();
        } else if self.at(TokenKind::KwContinue) {
            self.start_node(SyntaxKind::ContinueStmt);
            self.bump();
            self.expect_terminator();
            self.finish_node();
        } else if self.at(TokenKind::LBrace) {
            self.parse_block();
        } else if self.current().can_start_expr() {
            self.parse_assign_or_expr_stmt();
        } else {
            self.parse_error_item("expected statement");
        }
    }

    /// Parse a block of statements.
    pub(crate) fn parse_block(&mut self) {
        self.start_node(SyntaxKind::Block);
        self.bump(); // {

        self.in_context(NewlineContext::Terminator, |p| {
            p.eat_terminators();
            while !p.at(TokenKind::RBrace) && !p.at_end() {
                p.parse_statement();
                p.eat_terminators();
            }

            if p.at(TokenKind::RBrace) {
                p.bump();
            } else {
                p.error("expected '}'");
            }
        });

        self.finish_node();
    }

    /// Parse IF statement.
    pub(crate) fn parse_if_stmt(&mut self) {
        self.start_node(SyntaxKind::IfStmt);
        self.bump(); // if

        self.parse_condition();

        if self.at(TokenKind::LBrace) {
            self.parse_block();
        } else {
            self.error("expected '{'");
        }

        if self.at(TokenKind::KwElse) {
            self.start_node(SyntaxKind::ElseBranch);
            self.bump();
            if self.at(TokenKind::KwIf) {
                self.parse_if_stmt();
            } else if self.at(TokenKind::LBrace) {
                self.parse_block();
            } else {
                self.error("expected 'if' or '{' after 'else'");
            }
            self.finish_node();
        }

        self.finish_node();
    }

    /// Parse WHILE statement.
    pub(crate) fn parse_while_stmt(&mut self) {
        self.start_node(SyntaxKind::WhileStmt);
        self.bump(); // while

        self.parse_condition();

        if self.at(TokenKind::LBrace) {
            self.parse_block();
        } else {
            self.error("expected '{'");
        }

        self.finish_node();
    }

    /// Parse FOR statement.
    pub(crate) fn parse_for_stmt(&mut self) {
        self.start_node(SyntaxKind::ForStmt);
        self.bump(); // for

        if self.at(TokenKind::Ident) {
            self.parse_name();
        } else {
            self.error("expected loop variable");
        }

        if self.at(TokenKind::KwIn) {
            self.bump();
            self.parse_expression();
        } else {
            self.error("expected 'in'");
        }

        if self.at(TokenKind::LBrace) {
            self.parse_block();
        } else {
            self.error("expected '{'");
        }

        self.finish_node();
    }

    /// Parse RETURN statement.
    pub(crate) fn parse_return_stmt(&mut self) {
        self.start_node(SyntaxKind::ReturnStmt);
        self.bump(); // return

        // A newline right after `return` is a terminator, so the returned
        // expression has to start on the same line.
        if self.current().can_start_expr() {
            self.parse_expression();
        }

        self.expect_terminator();
        self.finish_node();
    }

    /// Parse a parenthesized condition.
    pub(crate) fn parse_condition(&mut self) {
        self.start_node(SyntaxKind::Condition);

        if self.at(TokenKind::LParen) {
            self.bump();
            self.in_context(NewlineContext::Transparent, |p| {
                p.parse_expression();
                if p.at(TokenKind::RParen) {
                    p.bump();
                } else {
                    p.error("expected ')'");
                }
            });
        } else {
            self.error("expected '(' before condition");
            if self.current().can_start_expr() {
                self.parse_expression();
            }
        }

        self.finish_node();
    }

    /// Parse assignment or expression statement.
    pub(crate) fn parse_assign_or_expr_stmt(&mut self) {
        let is_assign = self.source.has_assign_ahead();
        if is_assign {
            self.start_node(SyntaxKind::AssignStmt);
        } else {
            self.start_node(SyntaxKind::ExprStmt);
        }

        self.parse_expression();

        if is_assign {
            if self.at(TokenKind::Eq) {
                self.bump();
                self.parse_expression();
            } else {
                self.error("expected '='");
            }
        }

        self.expect_terminator();
        self.finish_node();
    }
}
