//! Hand-written SQL tokenizer for strata-db.
//!
//! The [`Lexer`] takes a raw statement string and eagerly produces the full
//! token stream (terminated by [`TokenKind::Eof`]). Keywords are matched
//! case-insensitively against a table owned by the lexer instance.
//!
//! Lexical problems are deliberately non-fatal: an unterminated string or
//! an unexpected character is recorded as a [`Diagnostic`] and scanning
//! continues, so one bad character never hides the rest of the input.

use std::collections::HashMap;

/// The kind of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // -----------------------------------------------------------------------
    // Punctuation & operators
    // -----------------------------------------------------------------------
    LeftParen,
    RightParen,
    Semicolon,
    Equals,
    Comma,
    Less,
    LessEq,
    Greater,
    GreaterEq,
    Plus,
    Minus,
    Star,
    Slash,

    // -----------------------------------------------------------------------
    // Literals & identifiers
    // -----------------------------------------------------------------------
    Number,
    StringLiteral,
    Identifier,

    // -----------------------------------------------------------------------
    // Keywords
    // -----------------------------------------------------------------------
    Select,
    Where,
    Insert,
    Into,
    Delete,
    From,
    And,
    Or,
    Not,
    In,
    Create,
    Table,
    Primary,
    Foreign,
    References,
    Unique,
    Join,
    On,
    As,
    Order,
    Group,
    Having,
    Limit,
    Update,
    Set,
    Values,
    Alter,
    Add,
    Drop,
    Rename,
    Column,
    Database,
    If,
    Exists,
    /// The declared type keyword `string`.
    StringType,
    /// The declared type keyword `number` (distinct from a [`TokenKind::Number`] literal).
    NumberType,
    Key,
    Null,

    /// End-of-input sentinel.
    Eof,
}

/// A typed literal carried by a token (and later by a `Literal` AST node).
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A numeric literal, parsed as a 64-bit float.
    Number(f64),
    /// A quoted string's contents, or an identifier's original-case text.
    Text(String),
}

/// A single token: kind, raw source text, optional typed literal, and the
/// source line it started on. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub line: u32,
}

/// A non-fatal lexical problem. Scanning continues past it.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub message: String,
    pub line: u32,
}

/// The result of one full scan: every token plus every diagnostic, in
/// source order. The token list always ends with [`TokenKind::Eof`].
#[derive(Debug)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

fn keyword_table() -> HashMap<&'static str, TokenKind> {
    HashMap::from([
        ("select", TokenKind::Select),
        ("where", TokenKind::Where),
        ("insert", TokenKind::Insert),
        ("into", TokenKind::Into),
        ("delete", TokenKind::Delete),
        ("from", TokenKind::From),
        ("and", TokenKind::And),
        ("or", TokenKind::Or),
        ("not", TokenKind::Not),
        ("in", TokenKind::In),
        ("create", TokenKind::Create),
        ("table", TokenKind::Table),
        ("primary", TokenKind::Primary),
        ("foreign", TokenKind::Foreign),
        ("references", TokenKind::References),
        ("unique", TokenKind::Unique),
        ("join", TokenKind::Join),
        ("on", TokenKind::On),
        ("as", TokenKind::As),
        ("order", TokenKind::Order),
        ("group", TokenKind::Group),
        ("having", TokenKind::Having),
        ("limit", TokenKind::Limit),
        ("update", TokenKind::Update),
        ("set", TokenKind::Set),
        ("values", TokenKind::Values),
        ("alter", TokenKind::Alter),
        ("add", TokenKind::Add),
        ("drop", TokenKind::Drop),
        ("rename", TokenKind::Rename),
        ("column", TokenKind::Column),
        ("database", TokenKind::Database),
        ("if", TokenKind::If),
        ("exists", TokenKind::Exists),
        ("string", TokenKind::StringType),
        ("number", TokenKind::NumberType),
        ("key", TokenKind::Key),
        ("null", TokenKind::Null),
    ])
}

/// A hand-written tokenizer.
///
/// Create one with [`Lexer::new`], then call [`Lexer::tokenize`] to obtain
/// the full [`LexOutput`]. The scan is eager and single-use; tokenizing the
/// same text again means constructing a new lexer.
pub struct Lexer<'a> {
    input: &'a [u8],
    start: usize,
    pos: usize,
    line: u32,
    /// Reserved-word lookup, owned by this instance.
    keywords: HashMap<&'static str, TokenKind>,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer over the given statement text.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.as_bytes(),
            start: 0,
            pos: 0,
            line: 1,
            keywords: keyword_table(),
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the entire input.
    pub fn tokenize(mut self) -> LexOutput {
        while !self.at_end() {
            self.start = self.pos;
            self.scan_token();
        }
        self.tokens.push(Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            literal: None,
            line: self.line,
        });
        LexOutput {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    // -- helpers ------------------------------------------------------------

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn advance(&mut self) -> u8 {
        let ch = self.input[self.pos];
        self.pos += 1;
        ch
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn peek_next(&self) -> Option<u8> {
        self.input.get(self.pos + 1).copied()
    }

    /// Consume the next character only if it matches `expected`.
    fn matches(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn lexeme(&self) -> &str {
        // The scanner only ever slices at ASCII boundaries.
        std::str::from_utf8(&self.input[self.start..self.pos]).unwrap_or_default()
    }

    fn add_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = self.lexeme().to_string();
        self.tokens.push(Token {
            kind,
            lexeme,
            literal,
            line: self.line,
        });
    }

    fn report(&mut self, message: String) {
        self.diagnostics.push(Diagnostic {
            message,
            line: self.line,
        });
    }

    // -- main scanner -------------------------------------------------------

    fn scan_token(&mut self) {
        let ch = self.advance();
        match ch {
            b'(' => self.add_token(TokenKind::LeftParen, None),
            b')' => self.add_token(TokenKind::RightParen, None),
            b';' => self.add_token(TokenKind::Semicolon, None),
            b'=' => self.add_token(TokenKind::Equals, None),
            b',' => self.add_token(TokenKind::Comma, None),
            b'+' => self.add_token(TokenKind::Plus, None),
            b'-' => self.add_token(TokenKind::Minus, None),
            b'*' => self.add_token(TokenKind::Star, None),
            b'/' => self.add_token(TokenKind::Slash, None),
            b'<' => {
                let kind = if self.matches(b'=') {
                    TokenKind::LessEq
                } else {
                    TokenKind::Less
                };
                self.add_token(kind, None);
            }
            b'>' => {
                let kind = if self.matches(b'=') {
                    TokenKind::GreaterEq
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind, None);
            }
            b'"' => self.scan_string(),
            b' ' | b'\t' | b'\r' => {}
            b'\n' => self.line += 1,
            _ if ch.is_ascii_digit() => self.scan_number(),
            _ if ch.is_ascii_alphabetic() => self.scan_identifier(),
            _ => self.report(format!("unexpected character: '{}'", ch as char)),
        }
    }

    fn scan_string(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == b'"' {
                break;
            }
            if ch == b'\n' {
                self.line += 1;
            }
            self.pos += 1;
        }
        if self.at_end() {
            self.report("unterminated string".to_string());
            return;
        }
        self.pos += 1; // closing quote

        let value =
            std::str::from_utf8(&self.input[self.start + 1..self.pos - 1]).unwrap_or_default();
        self.add_token(TokenKind::StringLiteral, Some(Literal::Text(value.into())));
    }

    fn scan_number(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        // A trailing dot is only part of the number when a digit follows it.
        if self.peek() == Some(b'.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.pos += 1;
            }
        }

        match self.lexeme().parse::<f64>() {
            Ok(value) => self.add_token(TokenKind::Number, Some(Literal::Number(value))),
            Err(_) => {
                let lexeme = self.lexeme().to_string();
                self.report(format!("invalid number literal: {lexeme}"));
            }
        }
    }

    fn scan_identifier(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_alphanumeric()) {
            self.pos += 1;
        }
        let word = self.lexeme().to_string();

        match self.keywords.get(word.to_ascii_lowercase().as_str()) {
            Some(&kind) => self.add_token(kind, None),
            None => self.add_token(TokenKind::Identifier, Some(Literal::Text(word))),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
