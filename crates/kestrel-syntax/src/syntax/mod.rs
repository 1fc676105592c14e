//! Syntax tree types for the Kestrel language.
//!
//! This module provides the `rowan`-based syntax tree implementation,
//! including the `SyntaxKind` enum that covers both tokens and composite
//! nodes.

use crate::lexer::TokenKind;
use crate::token_kinds::for_each_token_kind;

macro_rules! define_syntax_kind {
    ($($token:ident),* $(,)?) => {
        /// All syntax node and token kinds in the Kestrel language.
        ///
        /// This enum includes both token kinds (from the lexer) and composite
        /// node kinds (produced by the parser).
        // Variants mirror lexer/token names; documenting each would be noisy.
        #[allow(missing_docs)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        pub enum SyntaxKind {
            // =========================================================================
            // TOKEN KINDS (mirrors TokenKind)
            // =========================================================================
            $($token,)*

            // COMPOSITE NODE KINDS (produced by parser)
            // =========================================================================
            /// Root node of a declaration file
            SourceFile,

            /// Root node of a script
            Script,

            /// An import directive: `import a.b.c`
            ImportDecl,

            /// A function declaration: `fun name(params) [: Type] body`
            FunDecl,

            /// Parameter list in a declaration: `(a: Int, b: String)`
            ParamList,

            /// Single parameter: `name: Type`
            Param,

            /// A class declaration: `class Name [(params)] [{ members }]`
            ClassDecl,

            /// A class body: `{ members }`
            ClassBody,

            /// A binding declaration: `let name [: Type] [= expr]` or `var ...`
            VarDecl,

            /// A name being declared
            Name,

            /// A qualified name: `a.b.c`
            QualifiedName,

            /// A type reference
            TypeRef,

            /// A block of statements: `{ ... }`
            Block,

            /// A parenthesized condition for `if` / `while`
            Condition,

            /// If statement: `if (cond) { ... } [else ...]`
            IfStmt,

            /// Else branch (either a block or a chained `if`)
            ElseBranch,

            /// While statement: `while (cond) { ... }`
            WhileStmt,

            /// For statement: `for name in expr { ... }`
            ForStmt,

            /// Return statement: `return [expr]`
            ReturnStmt,

            /// Break statement: `break`
            BreakStmt,

            /// Continue statement: `continue`
            ContinueStmt,

            /// Assignment statement: `lvalue = expr`
            AssignStmt,

            /// Expression statement
            ExprStmt,

            // Expressions
            /// Binary expression: `a + b`, `a .. b`
            BinaryExpr,

            /// Unary expression: `-x`, `!x`
            UnaryExpr,

            /// Parenthesized expression: `(expr)`
            ParenExpr,

            /// Function/method call: `f(args)`
            CallExpr,

            /// Argument list in a call: `(a, b)`
            ArgList,

            /// Single argument
            Arg,

            /// Index expression: `xs[i]`
            IndexExpr,

            /// Field access: `value.field` or `value?.field`
            FieldExpr,

            /// Name reference (variable, function, etc.)
            NameRef,

            /// Literal value
            Literal,
        }
    };
}

for_each_token_kind!(define_syntax_kind);

impl SyntaxKind {
    /// Returns `true` if this is a trivia kind (whitespace or a comment).
    ///
    /// Newline is not trivia here either: newline tokens appear in the tree
    /// both as folded separators and as statement terminators.
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::LineComment | Self::BlockComment
        )
    }

    /// Returns `true` if this is a token kind (not a composite node).
    #[must_use]
    pub fn is_token(self) -> bool {
        (self as u16) <= (Self::Eof as u16)
    }

    /// Returns `true` if this is a composite node kind.
    #[must_use]
    pub fn is_node(self) -> bool {
        !self.is_token()
    }
}

macro_rules! map_token_kinds {
    ($($name:ident),* $(,)?) => {
        impl From<TokenKind> for SyntaxKind {
            fn from(kind: TokenKind) -> Self {
                match kind {
                    $(TokenKind::$name => SyntaxKind::$name,)*
                }
            }
        }
    };
}

for_each_token_kind!(map_token_kinds);

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// The language type for Kestrel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KestrelLanguage {}

macro_rules! define_syntax_kinds {
    ($($token:ident),* $(,)?) => {
        const SYNTAX_KINDS: &[SyntaxKind] = &[
            $(SyntaxKind::$token,)*
            SyntaxKind::SourceFile,
            SyntaxKind::Script,
            SyntaxKind::ImportDecl,
            SyntaxKind::FunDecl,
            SyntaxKind::ParamList,
            SyntaxKind::Param,
            SyntaxKind::ClassDecl,
            SyntaxKind::ClassBody,
            SyntaxKind::VarDecl,
            SyntaxKind::Name,
            SyntaxKind::QualifiedName,
            SyntaxKind::TypeRef,
            SyntaxKind::Block,
            SyntaxKind::Condition,
            SyntaxKind::IfStmt,
            SyntaxKind::ElseBranch,
            SyntaxKind::WhileStmt,
            SyntaxKind::ForStmt,
            SyntaxKind::ReturnStmt,
            SyntaxKind::BreakStmt,
            SyntaxKind::ContinueStmt,
            SyntaxKind::AssignStmt,
            SyntaxKind::ExprStmt,
            SyntaxKind::BinaryExpr,
            SyntaxKind::UnaryExpr,
            SyntaxKind::ParenExpr,
            SyntaxKind::CallExpr,
            SyntaxKind::ArgList,
            SyntaxKind::Arg,
            SyntaxKind::IndexExpr,
            SyntaxKind::FieldExpr,
            SyntaxKind::NameRef,
            SyntaxKind::Literal,
        ];
    };
}

for_each_token_kind!(define_syntax_kinds);

impl rowan::Language for KestrelLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        SYNTAX_KINDS
            .get(raw.0 as usize)
            .copied()
            .unwrap_or(SyntaxKind::Error)
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// A syntax node in the Kestrel syntax tree.
pub type SyntaxNode = rowan::SyntaxNode<KestrelLanguage>;

/// A syntax token in the Kestrel syntax tree.
pub type SyntaxToken = rowan::SyntaxToken<KestrelLanguage>;

/// A syntax element (either node or token) in the Kestrel syntax tree.
pub type SyntaxElement = rowan::SyntaxElement<KestrelLanguage>;

/// A builder for syntax trees.
pub type SyntaxTreeBuilder = rowan::GreenNodeBuilder<'static>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_kind_to_syntax_kind() {
        assert_eq!(SyntaxKind::from(TokenKind::KwFun), SyntaxKind::KwFun);
        assert_eq!(SyntaxKind::from(TokenKind::Ident), SyntaxKind::Ident);
        assert_eq!(SyntaxKind::from(TokenKind::Newline), SyntaxKind::Newline);
    }

    #[test]
    fn test_is_trivia() {
        assert!(SyntaxKind::Whitespace.is_trivia());
        assert!(SyntaxKind::LineComment.is_trivia());
        assert!(SyntaxKind::BlockComment.is_trivia());
        assert!(!SyntaxKind::Newline.is_trivia());
        assert!(!SyntaxKind::Ident.is_trivia());
    }

    #[test]
    fn test_is_token_vs_node() {
        assert!(SyntaxKind::Ident.is_token());
        assert!(SyntaxKind::KwIf.is_token());
        assert!(!SyntaxKind::IfStmt.is_token());
        assert!(!SyntaxKind::FunDecl.is_token());

        assert!(!SyntaxKind::Ident.is_node());
        assert!(SyntaxKind::IfStmt.is_node());
    }

    #[test]
    fn test_raw_round_trip() {
        use rowan::Language;
        for kind in [
            SyntaxKind::Whitespace,
            SyntaxKind::Eof,
            SyntaxKind::SourceFile,
            SyntaxKind::Literal,
        ] {
            let raw = KestrelLanguage::kind_to_raw(kind);
            assert_eq!(KestrelLanguage::kind_from_raw(raw), kind);
        }
    }
}
