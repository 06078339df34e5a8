//! Condition expression parsing.
//!
//! Recursive-descent precedence chain, loosest to tightest:
//! - Logical: `||`, `&&`
//! - Equality: `==` / `===`, `!=` / `!==`
//! - Comparison: `<`, `<=`, `>`, `>=`
//! - Unary: `!`
//! - Primary: literals, references, parenthesized expressions

use crate::ast::{BinaryOp, Expr, Literal, LiteralKind, Span, UnaryOp};
use crate::error::{ParseError, ParseResult};
use crate::lexer::{tokenize, Token, TokenKind};

/// Parse a condition expression from source text.
///
/// The entire input must form one expression; trailing tokens are an error.
pub fn parse_condition(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    let mut parser = Parser::new(tokens);
    let expr = parser.parse_expr()?;
    parser.expect_eof()?;
    Ok(expr)
}

/// Condition expression parser.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Create a parser over a token stream.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse an expression.
    pub fn parse_expr(&mut self) -> ParseResult<Expr> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_and()?;

        while self.check(&TokenKind::OrOr) {
            let start = left.span();
            self.advance();
            let right = self.parse_and()?;
            let span = self.span_from(start);
            left = Expr::BinaryOp(BinaryOp::Or, Box::new(left), Box::new(right), span);
        }

        Ok(left)
    }

    fn parse_and(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_equality()?;

        while self.check(&TokenKind::AndAnd) {
            let start = left.span();
            self.advance();
            let right = self.parse_equality()?;
            let span = self.span_from(start);
            left = Expr::BinaryOp(BinaryOp::And, Box::new(left), Box::new(right), span);
        }

        Ok(left)
    }

    fn parse_equality(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_comparison()?;

        loop {
            let op = if self.check(&TokenKind::Eq) {
                BinaryOp::Eq
            } else if self.check(&TokenKind::NotEq) {
                BinaryOp::NotEq
            } else {
                break;
            };

            let start = left.span();
            self.advance();
            let right = self.parse_comparison()?;
            let span = self.span_from(start);
            left = Expr::BinaryOp(op, Box::new(left), Box::new(right), span);
        }

        Ok(left)
    }

    fn parse_comparison(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_unary()?;

        loop {
            let op = if self.check(&TokenKind::Lt) {
                BinaryOp::Lt
            } else if self.check(&TokenKind::LtEq) {
                BinaryOp::LtEq
            } else if self.check(&TokenKind::Gt) {
                BinaryOp::Gt
            } else if self.check(&TokenKind::GtEq) {
                BinaryOp::GtEq
            } else {
                break;
            };

            let start = left.span();
            self.advance();
            let right = self.parse_unary()?;
            let span = self.span_from(start);
            left = Expr::BinaryOp(op, Box::new(left), Box::new(right), span);
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> ParseResult<Expr> {
        if self.check(&TokenKind::Bang) {
            let start = self.advance().span;
            let operand = self.parse_unary()?;
            let span = self.span_from(start);
            return Ok(Expr::UnaryOp(UnaryOp::Not, Box::new(operand), span));
        }

        self.parse_primary()
    }

    fn parse_primary(&mut self) -> ParseResult<Expr> {
        let token = self.advance().clone();

        match token.kind {
            TokenKind::Null => Ok(Expr::Literal(Literal {
                kind: LiteralKind::Null,
                span: token.span,
            })),
            TokenKind::True => Ok(Expr::Literal(Literal {
                kind: LiteralKind::Bool(true),
                span: token.span,
            })),
            TokenKind::False => Ok(Expr::Literal(Literal {
                kind: LiteralKind::Bool(false),
                span: token.span,
            })),
            TokenKind::Number(n) => Ok(Expr::Literal(Literal {
                kind: LiteralKind::Number(n),
                span: token.span,
            })),
            TokenKind::String(s) => Ok(Expr::Literal(Literal {
                kind: LiteralKind::String(s),
                span: token.span,
            })),
            TokenKind::Ident(name) => Ok(Expr::Ref(name, token.span)),
            TokenKind::LParen => {
                let expr = self.parse_expr()?;
                self.expect(&TokenKind::RParen)?;
                Ok(expr)
            }
            TokenKind::Eof => Err(ParseError::unexpected_eof(token.span, "expression")),
            other => Err(ParseError::unexpected_token(
                token.span,
                "expression",
                other.name(),
            )),
        }
    }

    // ========== Token helpers ==========

    fn peek(&self) -> &Token {
        // The token stream always ends with Eof, so this cannot run past it.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn check(&self, kind: &TokenKind) -> bool {
        &self.peek().kind == kind
    }

    fn advance(&mut self) -> &Token {
        let pos = self.pos.min(self.tokens.len() - 1);
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        &self.tokens[pos]
    }

    fn expect(&mut self, kind: &TokenKind) -> ParseResult<()> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            let token = self.peek();
            Err(ParseError::unexpected_token(
                token.span,
                kind.name(),
                token.kind.name(),
            ))
        }
    }

    fn expect_eof(&mut self) -> ParseResult<()> {
        self.expect(&TokenKind::Eof)
    }

    fn span_from(&self, start: Span) -> Span {
        let end = self.tokens[self.pos.saturating_sub(1)].span;
        Span::new(start.start, end.end, start.column)
    }
}
