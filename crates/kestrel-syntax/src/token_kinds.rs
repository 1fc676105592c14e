//! Single source of truth for the raw token kind list.
//!
//! `TokenKind` in the lexer and the token half of `SyntaxKind` in the syntax
//! tree must stay in lockstep; the `SyntaxKind` side is generated from this
//! macro. Keep the order here identical to the variant order in
//! `lexer::tokens::TokenKind`.

macro_rules! for_each_token_kind {
    ($callback:ident) => {
        $callback! {
            Whitespace,
            Newline,
            LineComment,
            BlockComment,
            Semicolon,
            Colon,
            Comma,
            Dot,
            SafeDot,
            DotDot,
            Arrow,
            LParen,
            RParen,
            LBrace,
            RBrace,
            LBracket,
            RBracket,
            Eq,
            EqEq,
            NotEq,
            Lt,
            LtEq,
            Gt,
            GtEq,
            Plus,
            Minus,
            Star,
            Slash,
            Percent,
            AndAnd,
            OrOr,
            Bang,
            Elvis,
            KwImport,
            KwFun,
            KwClass,
            KwLet,
            KwVar,
            KwIf,
            KwElse,
            KwWhile,
            KwFor,
            KwIn,
            KwReturn,
            KwBreak,
            KwContinue,
            KwTrue,
            KwFalse,
            KwNull,
            IntLiteral,
            FloatLiteral,
            StringLiteral,
            Ident,
            Error,
            Eof,
        }
    };
}

pub(crate) use for_each_token_kind;
