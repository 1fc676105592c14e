//! Token definitions for the Kestrel language.
//!
//! Newlines are lexed as their own token kind rather than folded into
//! whitespace: whether a newline terminates a statement depends on grammar
//! context, which only the parser's token source can decide. Everything the
//! lexer produces carries its exact source range so the syntax tree can
//! reproduce the input byte for byte.

use logos::Logos;

fn lex_block_comment(lex: &mut logos::Lexer<TokenKind>) -> bool {
    // Nested /* ... */ comments.
    let mut depth = 1usize;
    let bytes = lex.remainder().as_bytes();
    let mut i = 0usize;

    while i + 1 < bytes.len() {
        if bytes[i] == b'/' && bytes[i + 1] == b'*' {
            depth += 1;
            i += 2;
            continue;
        }
        if bytes[i] == b'*' && bytes[i + 1] == b'/' {
            depth -= 1;
            i += 2;
            if depth == 0 {
                lex.bump(i);
                return true;
            }
            continue;
        }
        i += 1;
    }

    lex.bump(bytes.len());
    false
}

/// All token kinds in Kestrel source code.
///
/// Token kinds are divided into categories:
/// - Trivia (whitespace, comments) - preserved but never significant
/// - Newline - conditionally significant, classified by the parser
/// - Punctuation and operators
/// - Keywords
/// - Literals
/// - Identifiers
/// - Special tokens (errors, EOF)
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[derive(Default)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    /// Horizontal whitespace (spaces, tabs, stray carriage returns)
    #[regex(r"[ \t\r]+")]
    Whitespace,

    /// A single line break. Lexed one per line so each can be classified
    /// independently by the parser.
    #[regex(r"\r?\n")]
    Newline,

    /// Single-line comment: // ...
    #[regex(r"//[^\r\n]*", allow_greedy = true)]
    LineComment,

    /// Block comment: /* ... */ (supports nesting)
    #[token("/*", lex_block_comment)]
    BlockComment,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    /// `;`
    #[token(";")]
    Semicolon,

    /// `:`
    #[token(":")]
    Colon,

    /// `,`
    #[token(",")]
    Comma,

    /// `.`
    #[token(".")]
    Dot,

    /// `?.`
    #[token("?.")]
    SafeDot,

    /// `..`
    #[token("..")]
    DotDot,

    /// `->`
    #[token("->")]
    Arrow,

    /// `(`
    #[token("(")]
    LParen,

    /// `)`
    #[token(")")]
    RParen,

    /// `{`
    #[token("{")]
    LBrace,

    /// `}`
    #[token("}")]
    RBrace,

    /// `[`
    #[token("[")]
    LBracket,

    /// `]`
    #[token("]")]
    RBracket,

    // =========================================================================
    // OPERATORS
    // =========================================================================
    /// `=`
    #[token("=")]
    Eq,

    /// `==`
    #[token("==")]
    EqEq,

    /// `!=`
    #[token("!=")]
    NotEq,

    /// `<`
    #[token("<")]
    Lt,

    /// `<=`
    #[token("<=")]
    LtEq,

    /// `>`
    #[token(">")]
    Gt,

    /// `>=`
    #[token(">=")]
    GtEq,

    /// `+`
    #[token("+")]
    Plus,

    /// `-`
    #[token("-")]
    Minus,

    /// `*`
    #[token("*")]
    Star,

    /// `/`
    #[token("/")]
    Slash,

    /// `%`
    #[token("%")]
    Percent,

    /// `&&`
    #[token("&&")]
    AndAnd,

    /// `||`
    #[token("||")]
    OrOr,

    /// `!`
    #[token("!")]
    Bang,

    /// `?:`
    #[token("?:")]
    Elvis,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    /// `import`
    #[token("import")]
    KwImport,

    /// `fun`
    #[token("fun")]
    KwFun,

    /// `class`
    #[token("class")]
    KwClass,

    /// `let`
    #[token("let")]
    KwLet,

    /// `var`
    #[token("var")]
    KwVar,

    /// `if`
    #[token("if")]
    KwIf,

    /// `else`
    #[token("else")]
    KwElse,

    /// `while`
    #[token("while")]
    KwWhile,

    /// `for`
    #[token("for")]
    KwFor,

    /// `in`
    #[token("in")]
    KwIn,

    /// `return`
    #[token("return")]
    KwReturn,

    /// `break`
    #[token("break")]
    KwBreak,

    /// `continue`
    #[token("continue")]
    KwContinue,

    /// `true`
    #[token("true")]
    KwTrue,

    /// `false`
    #[token("false")]
    KwFalse,

    /// `null`
    #[token("null")]
    KwNull,

    // =========================================================================
    // LITERALS
    // =========================================================================
    /// Integer literal: `42`, `1_000`, `0xFF`
    #[regex(r"[0-9][0-9_]*")]
    #[regex(r"0[xX][0-9a-fA-F][0-9a-fA-F_]*")]
    IntLiteral,

    /// Float literal: `3.14`, `1.0e10`, `2e-3`
    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+")]
    FloatLiteral,

    /// String literal with backslash escapes: `"hello\n"`
    #[regex(r#""([^"\\\r\n]|\\[^\r\n])*""#)]
    StringLiteral,

    // =========================================================================
    // IDENTIFIERS
    // =========================================================================
    /// Identifier
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    // =========================================================================
    // SPECIAL
    // =========================================================================
    /// Lexer error - unrecognized character or unterminated string
    #[regex(r#""([^"\\\r\n]|\\[^\r\n])*"#, priority = 1)]
    #[default]
    Error,

    /// End of file marker (not produced by lexer, surfaced by the parser)
    Eof,
}

impl TokenKind {
    /// Returns `true` if this token is trivia (whitespace or a comment).
    ///
    /// Newlines are not trivia at this level: the parser's token source
    /// decides per occurrence whether a newline is a statement terminator or
    /// gets folded away.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::LineComment | Self::BlockComment)
    }

    /// Returns `true` if this token is a keyword.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::KwImport
                | Self::KwFun
                | Self::KwClass
                | Self::KwLet
                | Self::KwVar
                | Self::KwIf
                | Self::KwElse
                | Self::KwWhile
                | Self::KwFor
                | Self::KwIn
                | Self::KwReturn
                | Self::KwBreak
                | Self::KwContinue
                | Self::KwTrue
                | Self::KwFalse
                | Self::KwNull
        )
    }

    /// Returns `true` if this token starts a declaration.
    pub fn is_declaration_start(self) -> bool {
        matches!(
            self,
            Self::KwImport | Self::KwFun | Self::KwClass | Self::KwLet | Self::KwVar
        )
    }

    /// Returns `true` if this token can start an expression.
    pub fn can_start_expr(self) -> bool {
        matches!(
            self,
            Self::Ident
                | Self::IntLiteral
                | Self::FloatLiteral
                | Self::StringLiteral
                | Self::KwTrue
                | Self::KwFalse
                | Self::KwNull
                | Self::Bang
                | Self::Minus
                | Self::LParen
        )
    }

    /// Returns `true` if this token can start a statement.
    pub fn can_start_statement(self) -> bool {
        self.can_start_expr()
            || matches!(
                self,
                Self::KwLet
                    | Self::KwVar
                    | Self::KwFun
                    | Self::KwIf
                    | Self::KwWhile
                    | Self::KwFor
                    | Self::KwReturn
                    | Self::KwBreak
                    | Self::KwContinue
                    | Self::LBrace
            )
    }

    /// Returns `true` if a newline directly after this token never ends the
    /// statement: the token promises a continuation (a trailing operator, an
    /// open delimiter, a separator).
    pub fn continues_line_before_newline(self) -> bool {
        matches!(
            self,
            Self::Plus
                | Self::Minus
                | Self::Star
                | Self::Slash
                | Self::Percent
                | Self::EqEq
                | Self::NotEq
                | Self::Lt
                | Self::LtEq
                | Self::Gt
                | Self::GtEq
                | Self::AndAnd
                | Self::OrOr
                | Self::Eq
                | Self::Elvis
                | Self::DotDot
                | Self::Comma
                | Self::Dot
                | Self::SafeDot
                | Self::Colon
                | Self::Arrow
                | Self::LParen
                | Self::LBracket
                | Self::Bang
        )
    }

    /// Returns `true` if a newline directly before this token never ends the
    /// statement: the token continues the previous line (a member access, an
    /// `else` branch).
    pub fn continues_line_after_newline(self) -> bool {
        matches!(self, Self::Dot | Self::SafeDot | Self::Elvis | Self::KwElse)
    }

    /// Returns the binding power for Pratt parsing (left, right).
    /// Returns None if not an infix operator.
    pub fn infix_binding_power(self) -> Option<(u8, u8)> {
        Some(match self {
            Self::OrOr => (1, 2),
            Self::AndAnd => (3, 4),
            Self::EqEq | Self::NotEq => (5, 6),
            Self::Lt | Self::LtEq | Self::Gt | Self::GtEq => (7, 8),
            Self::Elvis => (10, 9), // Right associative
            Self::DotDot => (11, 12),
            Self::Plus | Self::Minus => (13, 14),
            Self::Star | Self::Slash | Self::Percent => (15, 16),
            _ => return None,
        })
    }

    /// Returns the binding power for prefix operators.
    pub fn prefix_binding_power(self) -> Option<u8> {
        Some(match self {
            Self::Bang | Self::Minus => 17,
            _ => return None,
        })
    }
}

impl From<TokenKind> for rowan::SyntaxKind {
    fn from(kind: TokenKind) -> Self {
        Self(kind as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<(TokenKind, &str)> {
        TokenKind::lexer(input)
            .spanned()
            .map(|(kind, span)| (kind.unwrap_or(TokenKind::Error), &input[span]))
            .collect()
    }

    #[test]
    fn test_keywords() {
        let tokens = lex("import fun class let var if else while for in return break continue");
        let kinds: Vec<_> = tokens
            .iter()
            .map(|(k, _)| *k)
            .filter(|k| !k.is_trivia())
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::KwImport,
                TokenKind::KwFun,
                TokenKind::KwClass,
                TokenKind::KwLet,
                TokenKind::KwVar,
                TokenKind::KwIf,
                TokenKind::KwElse,
                TokenKind::KwWhile,
                TokenKind::KwFor,
                TokenKind::KwIn,
                TokenKind::KwReturn,
                TokenKind::KwBreak,
                TokenKind::KwContinue,
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_is_ident() {
        let tokens = lex("lettuce format classify");
        assert!(tokens
            .iter()
            .filter(|(k, _)| !k.is_trivia())
            .all(|(kind, _)| *kind == TokenKind::Ident));
    }

    #[test]
    fn test_basic_operators() {
        let tokens = lex("= == != < <= > >= + - * / % && || ! ?: ?. ->");
        let kinds: Vec<_> = tokens
            .iter()
            .map(|(k, _)| *k)
            .filter(|k| !k.is_trivia())
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Eq,
                TokenKind::EqEq,
                TokenKind::NotEq,
                TokenKind::Lt,
                TokenKind::LtEq,
                TokenKind::Gt,
                TokenKind::GtEq,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Percent,
                TokenKind::AndAnd,
                TokenKind::OrOr,
                TokenKind::Bang,
                TokenKind::Elvis,
                TokenKind::SafeDot,
                TokenKind::Arrow,
            ]
        );
    }

    #[test]
    fn test_newline_is_its_own_token() {
        let tokens = lex("a\nb\r\nc");
        let kinds: Vec<_> = tokens.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Ident,
                TokenKind::Newline,
                TokenKind::Ident,
                TokenKind::Newline,
                TokenKind::Ident,
            ]
        );
    }

    #[test]
    fn test_blank_lines_lex_one_newline_each() {
        let tokens = lex("a\n\n\nb");
        let newlines = tokens
            .iter()
            .filter(|(k, _)| *k == TokenKind::Newline)
            .count();
        assert_eq!(newlines, 3);
    }

    #[test]
    fn test_integer_literals() {
        let tokens = lex("123 1_000_000 0xFF 0x1_F");
        let kinds: Vec<_> = tokens
            .iter()
            .map(|(k, _)| *k)
            .filter(|k| !k.is_trivia())
            .collect();
        assert!(kinds.iter().all(|k| *k == TokenKind::IntLiteral));
    }

    #[test]
    fn test_float_literals() {
        let tokens = lex("3.14 1.0e10 2.5e-3 1e9");
        let kinds: Vec<_> = tokens
            .iter()
            .map(|(k, _)| *k)
            .filter(|k| !k.is_trivia())
            .collect();
        assert!(kinds.iter().all(|k| *k == TokenKind::FloatLiteral));
    }

    #[test]
    fn test_range_does_not_lex_as_float() {
        let tokens = lex("1..10");
        let kinds: Vec<_> = tokens.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::IntLiteral,
                TokenKind::DotDot,
                TokenKind::IntLiteral,
            ]
        );
    }

    #[test]
    fn test_strings() {
        let tokens = lex(r#""hello" "with \"escape\"" "tab\t""#);
        let kinds: Vec<_> = tokens
            .iter()
            .map(|(k, _)| *k)
            .filter(|k| !k.is_trivia())
            .collect();
        assert!(kinds.iter().all(|k| *k == TokenKind::StringLiteral));
    }

    #[test]
    fn test_unterminated_string_is_error() {
        let tokens = lex("\"oops\nx");
        let kinds: Vec<_> = tokens.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Error, TokenKind::Newline, TokenKind::Ident]
        );
    }

    #[test]
    fn test_comments() {
        let tokens = lex("// line\n/* block /* nested */ still */");
        let kinds: Vec<_> = tokens.iter().map(|(k, _)| *k).collect();
        assert!(kinds.contains(&TokenKind::LineComment));
        assert!(kinds.contains(&TokenKind::BlockComment));
    }

    #[test]
    fn test_nested_block_comment_spans_whole_comment() {
        let tokens = lex("/* a /* b */ c */x");
        assert_eq!(tokens[0].0, TokenKind::BlockComment);
        assert_eq!(tokens[0].1, "/* a /* b */ c */");
        assert_eq!(tokens[1].0, TokenKind::Ident);
    }
}
