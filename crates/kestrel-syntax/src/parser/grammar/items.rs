//! Declaration parsing.
//!
//! Handles:
//! - `import a.b.c`
//! - `fun name(params) [: Type] { ... }` and `fun name(params) = expr`
//! - `class Name [(params)] [{ members }]`
//! - `let name [: Type] [= expr]` and `var ...`
//!
//! Declarations are terminated like statements: by a significant newline, an
//! explicit `;`, the end of the enclosing block, or end of input. A
//! declaration whose last token is `}` needs no terminator of its own.

use crate::lexer::TokenKind;
use crate::parser::source::NewlineContext;
use crate::syntax::SyntaxKind;

use super::super::Parser;

impl Parser<'_, '_> {
    /// Parse an import directive.
    pub(crate) fn parse_import(&mut self) {
        self.start_node(SyntaxKind::ImportDecl);
        self.bump(); // import

        if self.at(TokenKind::Ident) {
            self.parse_qualified_name();
        } else {
            self.error("expected module path after 'import'");
        }

        self.expect_terminator();
        self.finish_node();
    }

    /// Parse a `let` or `var` binding declaration.
    pub(crate) fn parse_var_decl(&mut self) {
        self.start_node(SyntaxKind::VarDecl);
        self.bump(); // let or var

        if self.at(TokenKind::Ident) {
            self.parse_name();
        } else {
            self.error("expected binding name");
        }

        if self.at(TokenKind::Colon) {
            self.bump();
            self.parse_type_ref();
        }

        if self.at(TokenKind::Eq) {
            self.bump();
            self.parse_expression();
        }

        self.expect_terminator();
        self.finish_node();
    }

    /// Parse a function declaration.
    pub(crate) fn parse_fun_decl(&mut self) {
        self.start_node(SyntaxKind::FunDecl);
        self.bump(); // fun

        if self.at(TokenKind::Ident) {
            self.parse_name();
        } else {
            self.error("expected function name");
        }

        if self.at(TokenKind::LParen) {
            self.parse_param_list();
        } else {
            self.error("expected '('");
        }

        // Parse return type
        if self.at(TokenKind::Colon) {
            self.bump();
            self.parse_type_ref();
        }

        // Body: a block, or `= expr`
        if self.at(TokenKind::LBrace) {
            self.parse_block();
        } else if self.at(TokenKind::Eq) {
            self.bump();
            self.parse_expression();
            self.expect_terminator();
        } else {
            self.error("expected '{' or '=' for function body");
        }

        self.finish_node();
    }

    /// Parse a class declaration.
    pub(crate) fn parse_class_decl(&mut self) {
        self.start_node(SyntaxKind::ClassDecl);
        self.bump(); // class

        if self.at(TokenKind::Ident) {
            self.parse_name();
        } else {
            self.error("expected class name");
        }

        if self.at(TokenKind::LParen) {
            self.parse_param_list();
        }

        if self.at(TokenKind::LBrace) {
            self.parse_class_body();
        } else {
            self.expect_terminator();
        }

        self.finish_node();
    }

    fn parse_class_body(&mut self) {
        self.start_node(SyntaxKind::ClassBody);
        self.bump(); // {

        self.in_context(NewlineContext::Terminator, |p| {
            p.eat_terminators();
            while !p.at(TokenKind::RBrace) && !p.at_end() {
                if p.at(TokenKind::KwFun) {
                    p.parse_fun_decl();
                } else if p.at(TokenKind::KwLet) || p.at(TokenKind::KwVar) {
                    p.parse_var_decl();
                } else {
                    p.parse_error_item("expected member declaration");
                }
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

    /// Parse a parenthesized parameter list.
    pub(crate) fn parse_param_list(&mut self) {
        self.start_node(SyntaxKind::ParamList);
        self.bump(); // (

        self.in_context(NewlineContext::Transparent, |p| {
            while !p.at(TokenKind::RParen) && !p.at_end() {
                if !p.at(TokenKind::Ident) {
                    p.error("expected parameter name");
                    break;
                }

                p.start_node(SyntaxKind::Param);
                p.parse_name();
                if p.at(TokenKind::Colon) {
                    p.bump();
                    p.parse_type_ref();
                } else {
                    p.error("expected ':' and parameter type");
                }
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

    /// Parse a name (identifier being declared).
    pub(crate) fn parse_name(&mut self) {
        self.start_node(SyntaxKind::Name);
        if self.at(TokenKind::Ident) {
            self.bump();
        }
        self.finish_node();
    }

    /// Parse a qualified name (e.g., `core.math`).
    pub(crate) fn parse_qualified_name(&mut self) {
        self.start_node(SyntaxKind::QualifiedName);
        if self.at(TokenKind::Ident) {
            self.parse_name();
        } else {
            self.error("expected name");
        }

        while self.at(TokenKind::Dot) {
            self.bump();
            if self.at(TokenKind::Ident) {
                self.parse_name();
            } else {
                self.error("expected name after '.'");
                break;
            }
        }

        self.finish_node();
    }

    /// Parse a type reference.
    pub(crate) fn parse_type_ref(&mut self) {
        self.start_node(SyntaxKind::TypeRef);
        if self.at(TokenKind::Ident) {
            self.parse_qualified_name();
        } else {
            self.error("expected type");
        }
        self.finish_node();
    }
}
