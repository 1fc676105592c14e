//! Main parser implementation.

use crate::lexer::{lex, Token, TokenKind};
use crate::parser::event::Event;
use crate::parser::sink::Sink;
use crate::parser::source::{NewlineContext, Source};
use crate::parser::{Parse, ParseError, ParseMode};
use crate::syntax::SyntaxKind;
use drop_bomb::DropBomb;

/// Parses source text into a syntax tree.
///
/// The mode selects the top-level grammar: [`ParseMode::File`] accepts only
/// declarations, [`ParseMode::Script`] also accepts statements. The choice
/// of mode is the caller's; the parser never guesses from content.
#[must_use]
pub fn parse(source: &str, mode: ParseMode) -> Parse {
    let tokens = lex(source);
    let parser = Parser::new(&tokens, source);
    let (events, errors) = parser.parse(mode);

    let sink = Sink::new(&tokens, source, events);
    let (green_node, mut sink_errors) = sink.finish();

    let mut all_errors = errors;
    all_errors.append(&mut sink_errors);

    Parse {
        green_node,
        errors: all_errors,
    }
}

/// Parses source text as a declaration file.
#[must_use]
pub fn parse_file(source: &str) -> Parse {
    parse(source, ParseMode::File)
}

/// Parses source text as a script.
#[must_use]
pub fn parse_script(source: &str) -> Parse {
    parse(source, ParseMode::Script)
}

/// The parser state.
pub(crate) struct Parser<'t, 'src> {
    pub(crate) source: Source<'t, 'src>,
    pub(crate) events: Vec<Event>,
    errors: Vec<ParseError>,
}

pub(crate) struct Marker {
    pos: usize,
    bomb: DropBomb,
}

impl Marker {
    pub(crate) fn complete(
        mut self,
        parser: &mut Parser<'_, '_>,
        kind: SyntaxKind,
    ) -> CompletedMarker {
        self.bomb.defuse();
        match parser.events.get_mut(self.pos) {
            Some(Event::Placeholder) => {
                parser.events[self.pos] = Event::Start {
                    kind,
                    forward_parent: None,
                };
            }
            Some(Event::Start {
                kind: existing_kind,
                ..
            }) => {
                *existing_kind = kind;
            }
            _ => {}
        }
        parser.events.push(Event::Finish);
        CompletedMarker { pos: self.pos }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct CompletedMarker {
    pub(crate) pos: usize,
}

impl CompletedMarker {
    pub(crate) fn precede(self, parser: &mut Parser<'_, '_>) -> Marker {
        let new_pos = parser.events.len();
        parser.events.push(Event::Placeholder);
        set_forward_parent(&mut parser.events, self.pos, new_pos);
        Marker {
            pos: new_pos,
            bomb: DropBomb::new("uncompleted marker"),
        }
    }
}

fn set_forward_parent(events: &mut [Event], from: usize, to: usize) {
    let mut current = from;
    loop {
        match &mut events[current] {
            Event::Start {
                forward_parent: Some(fp),
                ..
            } => {
                current += *fp as usize;
            }
            Event::Start { forward_parent, .. } => {
                *forward_parent = Some((to - current) as u32);
                break;
            }
            _ => break,
        }
    }
}

impl<'t, 'src> Parser<'t, 'src> {
    fn new(tokens: &'t [Token], source: &'src str) -> Self {
        Self {
            source: Source::new(tokens, source),
            events: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn parse(mut self, mode: ParseMode) -> (Vec<Event>, Vec<ParseError>) {
        // Start the root node
        let root = match mode {
            ParseMode::File => SyntaxKind::SourceFile,
            ParseMode::Script => SyntaxKind::Script,
        };
        self.start_node(root);

        self.eat_terminators();
        while !self.at_end() {
            match mode {
                ParseMode::File => self.parse_item(),
                ParseMode::Script => self.parse_script_item(),
            }
            self.eat_terminators();
        }

        self.finish_node();

        debug_assert_eq!(
            self.source.context_depth(),
            1,
            "newline context stack must return to the sentinel"
        );

        (self.events, self.errors)
    }

    /// Parse one top-level item in File mode: declarations only.
    fn parse_item(&mut self) {
        if self.at(TokenKind::KwImport) {
            self.parse_import();
        } else if self.at(TokenKind::KwFun) {
            self.parse_fun_decl();
        } else if self.at(TokenKind::KwClass) {
            self.parse_class_decl();
        } else if self.at(TokenKind::KwLet) || self.at(TokenKind::KwVar) {
            self.parse_var_decl();
        } else {
            self.parse_error_item("expected 'import', 'fun', 'class', 'let', or 'var'");
        }
    }

    /// Parse one top-level item in Script mode: declarations and statements.
    fn parse_script_item(&mut self) {
        if self.at(TokenKind::KwImport) {
            self.parse_import();
        } else if self.at(TokenKind::KwClass) {
            self.parse_class_decl();
        } else if self.current().can_start_statement() {
            self.parse_statement();
        } else {
            self.parse_error_item("expected declaration or statement");
        }
    }

    // =========================================================================
    // Helper Methods
    // =========================================================================

    pub(crate) fn current(&self) -> TokenKind {
        self.source.current()
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.source.peek_kind_n(0) == kind
    }

    pub(crate) fn at_end(&self) -> bool {
        self.source.at_end()
    }

    pub(crate) fn peek_kind_n(&self, n: usize) -> TokenKind {
        self.source.peek_kind_n(n)
    }

    pub(crate) fn bump(&mut self) {
        let kind = self.source.current();
        if kind == TokenKind::Eof {
            return;
        }
        self.events.push(Event::token(SyntaxKind::from(kind)));
        self.source.bump();
    }

    pub(crate) fn start(&mut self) -> Marker {
        let pos = self.events.len();
        self.events.push(Event::Placeholder);
        Marker {
            pos,
            bomb: DropBomb::new("uncompleted marker"),
        }
    }

    pub(crate) fn start_node(&mut self, kind: SyntaxKind) {
        self.events.push(Event::start(kind));
    }

    pub(crate) fn finish_node(&mut self) {
        self.events.push(Event::Finish);
    }

    pub(crate) fn error(&mut self, message: &str) {
        let range = self
            .source
            .current_token()
            .map(|t| t.range)
            .unwrap_or_else(|| self.source.end_range());

        self.errors.push(ParseError {
            message: message.to_string(),
            range,
        });
    }

    /// Runs `f` with `context` pushed onto the newline context stack.
    ///
    /// The pop happens on the way out of this call, so the stack stays
    /// balanced on every exit path of the grammar.
    pub(crate) fn in_context<T>(
        &mut self,
        context: NewlineContext,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        self.source.push_newline_context(context);
        let result = f(self);
        self.source.pop_newline_context();
        result
    }

    /// Returns `true` if the current token terminates a statement: a
    /// significant newline or an explicit `;`.
    pub(crate) fn at_terminator(&self) -> bool {
        matches!(self.current(), TokenKind::Newline | TokenKind::Semicolon)
    }

    /// Consumes a run of statement terminators and blank lines.
    pub(crate) fn eat_terminators(&mut self) {
        while self.at_terminator() {
            self.bump();
        }
    }

    /// Consume a statement terminator, or accept the end of the enclosing
    /// block in its place.
    pub(crate) fn expect_terminator(&mut self) {
        if self.at_terminator() {
            self.bump();
            return;
        }

        if self.at(TokenKind::RBrace) || self.at_end() {
            return;
        }

        self.error("expected newline or ';'");
        self.recover_statement();
    }

    /// Returns true if the current token is a synchronization point.
    pub(crate) fn is_recovery_point(&self) -> bool {
        matches!(
            self.current(),
            // Statement terminators
            TokenKind::Newline
            | TokenKind::Semicolon
            // End of blocks
            | TokenKind::RBrace
            // Start of new constructs (recover at next item)
            | TokenKind::KwImport
            | TokenKind::KwFun
            | TokenKind::KwClass
            | TokenKind::KwLet
            | TokenKind::KwVar
            | TokenKind::KwIf
            | TokenKind::KwWhile
            | TokenKind::KwFor
            | TokenKind::KwReturn
            | TokenKind::KwBreak
            | TokenKind::KwContinue
        )
    }

    /// Recover at statement level - skip to the next statement boundary.
    pub(crate) fn recover_statement(&mut self) {
        while !self.at_end() {
            if self.at_terminator() {
                self.bump();
                break;
            }
            if self.is_recovery_point() {
                break;
            }
            self.bump();
        }
    }

    /// Wrap a run of unrecognized tokens in an error node and resynchronize.
    ///
    /// Always consumes at least one token, so recovery strictly advances.
    pub(crate) fn parse_error_item(&mut self, message: &str) {
        let marker = self.start();
        self.error(message);
        self.bump();
        while !self.at_end() && !self.is_recovery_point() {
            self.bump();
        }
        marker.complete(self, SyntaxKind::Error);
    }
}
