//! Lexer for condition expression source text.

use crate::{ParseError, ParseResult, Span};

/// Token types.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    Ident(String),
    Number(f64),
    String(String),
    True,
    False,
    Null,

    // Operators
    AndAnd,   // &&
    OrOr,     // ||
    Bang,     // !
    Eq,       // == and ===
    NotEq,    // != and !==
    Lt,       // <
    LtEq,     // <=
    Gt,       // >
    GtEq,     // >=
    LParen,   // (
    RParen,   // )

    // End of input
    Eof,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Ident(_) => "identifier",
            TokenKind::Number(_) => "number",
            TokenKind::String(_) => "string",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
            TokenKind::AndAnd => "&&",
            TokenKind::OrOr => "||",
            TokenKind::Bang => "!",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Eof => "end of input",
        }
    }
}

/// A token with its source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Tokenize condition source text.
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    lexer.run()?;
    Ok(lexer.tokens)
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            tokens: Vec::new(),
        }
    }

    fn run(&mut self) -> ParseResult<()> {
        while self.pos < self.chars.len() {
            let c = self.chars[self.pos];

            if c.is_whitespace() {
                self.pos += 1;
                continue;
            }

            let start = self.pos;
            let kind = match c {
                '(' => {
                    self.pos += 1;
                    TokenKind::LParen
                }
                ')' => {
                    self.pos += 1;
                    TokenKind::RParen
                }
                '&' => {
                    if self.peek_at(1) == Some('&') {
                        self.pos += 2;
                        TokenKind::AndAnd
                    } else {
                        return Err(self.error(start, "expected '&&'"));
                    }
                }
                '|' => {
                    if self.peek_at(1) == Some('|') {
                        self.pos += 2;
                        TokenKind::OrOr
                    } else {
                        return Err(self.error(start, "expected '||'"));
                    }
                }
                '=' => {
                    // == and === (strict form parses to the same token)
                    if self.peek_at(1) == Some('=') {
                        self.pos += 2;
                        if self.peek_at(0) == Some('=') {
                            self.pos += 1;
                        }
                        TokenKind::Eq
                    } else {
                        return Err(self.error(start, "expected '==' or '==='"));
                    }
                }
                '!' => {
                    if self.peek_at(1) == Some('=') {
                        self.pos += 2;
                        if self.peek_at(0) == Some('=') {
                            self.pos += 1;
                        }
                        TokenKind::NotEq
                    } else {
                        self.pos += 1;
                        TokenKind::Bang
                    }
                }
                '<' => {
                    if self.peek_at(1) == Some('=') {
                        self.pos += 2;
                        TokenKind::LtEq
                    } else {
                        self.pos += 1;
                        TokenKind::Lt
                    }
                }
                '>' => {
                    if self.peek_at(1) == Some('=') {
                        self.pos += 2;
                        TokenKind::GtEq
                    } else {
                        self.pos += 1;
                        TokenKind::Gt
                    }
                }
                '\'' | '"' => self.lex_string(c)?,
                c if c.is_ascii_digit() => self.lex_number()?,
                c if c.is_alphabetic() || c == '_' || c == '$' => self.lex_ident(),
                other => {
                    return Err(self.error(start, format!("unexpected character '{}'", other)));
                }
            };

            self.push(kind, start);
        }

        let end = self.chars.len();
        self.tokens.push(Token {
            kind: TokenKind::Eof,
            span: Span::new(end, end, end + 1),
        });
        Ok(())
    }

    fn lex_string(&mut self, quote: char) -> ParseResult<TokenKind> {
        let start = self.pos;
        self.pos += 1;
        let mut text = String::new();

        while self.pos < self.chars.len() {
            let c = self.chars[self.pos];
            if c == quote {
                self.pos += 1;
                return Ok(TokenKind::String(text));
            }
            if c == '\\' {
                // Escapes: \' \" \\ pass the escaped character through
                self.pos += 1;
                match self.peek_at(0) {
                    Some(escaped) => {
                        text.push(escaped);
                        self.pos += 1;
                    }
                    None => break,
                }
                continue;
            }
            text.push(c);
            self.pos += 1;
        }

        Err(self.error(start, "unterminated string literal"))
    }

    fn lex_number(&mut self) -> ParseResult<TokenKind> {
        let start = self.pos;
        while self
            .peek_at(0)
            .map(|c| c.is_ascii_digit() || c == '.')
            .unwrap_or(false)
        {
            self.pos += 1;
        }

        let text: String = self.chars[start..self.pos].iter().collect();
        text.parse::<f64>()
            .map(TokenKind::Number)
            .map_err(|_| self.error(start, format!("malformed number '{}'", text)))
    }

    fn lex_ident(&mut self) -> TokenKind {
        let start = self.pos;
        while self
            .peek_at(0)
            .map(|c| c.is_alphanumeric() || c == '_' || c == '$')
            .unwrap_or(false)
        {
            self.pos += 1;
        }

        let text: String = self.chars[start..self.pos].iter().collect();
        match text.as_str() {
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "null" => TokenKind::Null,
            _ => TokenKind::Ident(text),
        }
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token {
            kind,
            span: Span::new(start, self.pos, start + 1),
        });
    }

    fn error(&self, start: usize, message: impl Into<String>) -> ParseError {
        ParseError::new(message, Span::new(start, self.pos.max(start + 1), start + 1))
    }
}
