//! Recursive-descent parser: surface LTL text to [`Formula`].
//!
//! Precedence, loosest to tightest:
//! `<->`  <  `->`  <  `|`  <  `&`  <  `U`/`W`/`R`  <  unary prefix  <  atom
//!
//! Temporal binary operators (`U`, `W`, `R`) are right-associative, matching
//! their usual reading as `phi U (psi U chi)`; unary prefixes (`!`, `X`, `G`,
//! `F`) bind to the single following unary expression, so `G F p` parses as
//! `G(F(p))` without requiring parens.

use std::fmt;

use ltlmeasure_kernel::Formula;

use crate::lexer::{LexError, Lexer, Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub offset: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.message, self.offset)
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        ParseError {
            message: e.message,
            offset: e.offset,
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a complete surface LTL expression. The entire input must be
/// consumed; trailing tokens other than `Eof` are an error.
pub fn parse(source: &str) -> Result<Formula, ParseError> {
    let tokens = Lexer::new(source).tokenize()?;
    let mut parser = Parser { tokens, pos: 0 };
    let formula = parser.parse_iff()?;
    parser.expect_eof()?;
    Ok(formula)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> &TokenKind {
        &self.tokens[self.pos].kind
    }

    fn offset(&self) -> usize {
        self.tokens[self.pos].offset
    }

    fn advance(&mut self) -> TokenKind {
        let kind = self.tokens[self.pos].kind.clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        kind
    }

    fn expect_eof(&self) -> Result<(), ParseError> {
        if matches!(self.peek(), TokenKind::Eof) {
            Ok(())
        } else {
            Err(ParseError {
                message: format!("unexpected trailing token '{}'", self.peek()),
                offset: self.offset(),
            })
        }
    }

    fn parse_iff(&mut self) -> Result<Formula, ParseError> {
        let lhs = self.parse_implies()?;
        if matches!(self.peek(), TokenKind::Iff) {
            self.advance();
            let rhs = self.parse_iff()?;
            Ok(Formula::Iff(Box::new(lhs), Box::new(rhs)))
        } else {
            Ok(lhs)
        }
    }

    fn parse_implies(&mut self) -> Result<Formula, ParseError> {
        let lhs = self.parse_or()?;
        if matches!(self.peek(), TokenKind::Implies) {
            self.advance();
            let rhs = self.parse_implies()?;
            Ok(Formula::Implies(Box::new(lhs), Box::new(rhs)))
        } else {
            Ok(lhs)
        }
    }

    fn parse_or(&mut self) -> Result<Formula, ParseError> {
        let mut lhs = self.parse_and()?;
        while matches!(self.peek(), TokenKind::Or) {
            self.advance();
            let rhs = self.parse_and()?;
            lhs = Formula::Or(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_and(&mut self) -> Result<Formula, ParseError> {
        let mut lhs = self.parse_temporal_binary()?;
        while matches!(self.peek(), TokenKind::And) {
            self.advance();
            let rhs = self.parse_temporal_binary()?;
            lhs = Formula::And(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_temporal_binary(&mut self) -> Result<Formula, ParseError> {
        let lhs = self.parse_unary()?;
        match self.peek() {
            TokenKind::Until => {
                self.advance();
                let rhs = self.parse_temporal_binary()?;
                Ok(Formula::Until(Box::new(lhs), Box::new(rhs)))
            }
            TokenKind::WeakUntil => {
                self.advance();
                let rhs = self.parse_temporal_binary()?;
                Ok(Formula::WeakUntil(Box::new(lhs), Box::new(rhs)))
            }
            TokenKind::Release => {
                self.advance();
                let rhs = self.parse_temporal_binary()?;
                Ok(Formula::Release(Box::new(lhs), Box::new(rhs)))
            }
            _ => Ok(lhs),
        }
    }

    fn parse_unary(&mut self) -> Result<Formula, ParseError> {
        match self.peek().clone() {
            TokenKind::Not => {
                self.advance();
                Ok(self.parse_unary()?.not())
            }
            TokenKind::Next => {
                self.advance();
                Ok(Formula::Next(Box::new(self.parse_unary()?)))
            }
            TokenKind::Globally => {
                self.advance();
                Ok(Formula::Globally(Box::new(self.parse_unary()?)))
            }
            TokenKind::Eventually => {
                self.advance();
                Ok(Formula::Eventually(Box::new(self.parse_unary()?)))
            }
            _ => self.parse_atom(),
        }
    }

    fn parse_atom(&mut self) -> Result<Formula, ParseError> {
        match self.advance() {
            TokenKind::True => Ok(Formula::True),
            TokenKind::False => Ok(Formula::False),
            TokenKind::Ident(name) => Ok(Formula::Literal(name)),
            TokenKind::LParen => {
                let inner = self.parse_iff()?;
                match self.advance() {
                    TokenKind::RParen => Ok(inner),
                    other => Err(ParseError {
                        message: format!("expected ')', found '{other}'"),
                        offset: self.offset(),
                    }),
                }
            }
            other => Err(ParseError {
                message: format!("expected an expression, found '{other}'"),
                offset: self.offset(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_atom() {
        assert_eq!(parse("p").unwrap(), Formula::Literal("p".into()));
    }

    #[test]
    fn parses_true_false() {
        assert_eq!(parse("true").unwrap(), Formula::True);
        assert_eq!(parse("false").unwrap(), Formula::False);
    }

    #[test]
    fn and_binds_tighter_than_or() {
        let f = parse("p | q & r").unwrap();
        assert_eq!(
            f,
            Formula::Literal("p".into())
                .or(Formula::Literal("q".into()).and(Formula::Literal("r".into())))
        );
    }

    #[test]
    fn until_binds_tighter_than_and() {
        let f = parse("p & q U r").unwrap();
        assert_eq!(
            f,
            Formula::Literal("p".into()).and(Formula::Until(
                Box::new(Formula::Literal("q".into())),
                Box::new(Formula::Literal("r".into()))
            ))
        );
    }

    #[test]
    fn until_is_right_associative() {
        let f = parse("p U q U r").unwrap();
        assert_eq!(
            f,
            Formula::Until(
                Box::new(Formula::Literal("p".into())),
                Box::new(Formula::Until(
                    Box::new(Formula::Literal("q".into())),
                    Box::new(Formula::Literal("r".into()))
                ))
            )
        );
    }

    #[test]
    fn unary_prefixes_stack_without_parens() {
        let f = parse("G F p").unwrap();
        assert_eq!(
            f,
            Formula::Globally(Box::new(Formula::Eventually(Box::new(Formula::Literal(
                "p".into()
            )))))
        );
    }

    #[test]
    fn parens_override_precedence() {
        let f = parse("(p | q) & r").unwrap();
        assert_eq!(
            f,
            Formula::Literal("p".into())
                .or(Formula::Literal("q".into()))
                .and(Formula::Literal("r".into()))
        );
    }

    #[test]
    fn implies_and_iff_parse() {
        assert_eq!(
            parse("p -> q").unwrap(),
            Formula::Implies(
                Box::new(Formula::Literal("p".into())),
                Box::new(Formula::Literal("q".into()))
            )
        );
        assert_eq!(
            parse("p <-> q").unwrap(),
            Formula::Iff(
                Box::new(Formula::Literal("p".into())),
                Box::new(Formula::Literal("q".into()))
            )
        );
    }

    #[test]
    fn trailing_garbage_is_an_error() {
        assert!(parse("p q").is_err());
    }

    #[test]
    fn unbalanced_parens_is_an_error() {
        assert!(parse("(p & q").is_err());
    }
}
