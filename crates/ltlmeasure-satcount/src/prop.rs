//! A minimal propositional formula: the unroller's output text, parsed back
//! into a tree so it can be converted to CNF.
//!
//! This is deliberately narrower than [`ltlmeasure_kernel::Formula`] — no
//! temporal operators survive unrolling, only `T`/`F`/variables/`!`/`&`/`|`.

use std::fmt;

use ltlmeasure_base::SymbolSet;

use crate::error::{SatError, SatResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prop {
    True,
    False,
    Var(String),
    Not(Box<Prop>),
    And(Box<Prop>, Box<Prop>),
    Or(Box<Prop>, Box<Prop>),
}

impl Prop {
    /// Collect every distinct variable name, in first-occurrence order.
    ///
    /// This fixes the DIMACS variable numbering: the first variable seen in
    /// the source text becomes `1`, the second `2`, and so on, so that the
    /// encoding (and therefore the memoization key) is a pure function of
    /// the input text.
    pub fn variables_in_order(&self) -> Vec<String> {
        let mut seen = Vec::new();
        fn walk(node: &Prop, seen: &mut Vec<String>) {
            match node {
                Prop::True | Prop::False => {}
                Prop::Var(name) => {
                    if !seen.contains(name) {
                        seen.push(name.clone());
                    }
                }
                Prop::Not(a) => walk(a, seen),
                Prop::And(l, r) | Prop::Or(l, r) => {
                    walk(l, seen);
                    walk(r, seen);
                }
            }
        }
        walk(self, &mut seen);
        seen
    }
}

impl fmt::Display for Prop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prop::True => write!(f, "T"),
            Prop::False => write!(f, "F"),
            Prop::Var(name) => write!(f, "{name}"),
            Prop::Not(a) => write!(f, "!{a}"),
            Prop::And(l, r) => write!(f, "({l} & {r})"),
            Prop::Or(l, r) => write!(f, "({l} | {r})"),
        }
    }
}

/// Parse propositional text written in `symbols` into a [`Prop`] tree.
///
/// Grammar, loosest to tightest: `|` < `&` < unary `!` < atom/parens. Same
/// recursive-descent shape as `ltlmeasure-syntax`'s LTL parser, narrowed to
/// the five spellings a [`SymbolSet`] provides plus identifiers and parens.
pub fn parse_prop(source: &str, symbols: &SymbolSet) -> SatResult<Prop> {
    let tokens = tokenize(source, symbols)?;
    let mut parser = PropParser { tokens, pos: 0 };
    let prop = parser.parse_or()?;
    if parser.pos != parser.tokens.len() - 1 {
        return Err(SatError::malformed(
            "unexpected trailing text",
            parser.tokens[parser.pos].1,
        ));
    }
    Ok(prop)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PropToken {
    True,
    False,
    Ident(String),
    Not,
    And,
    Or,
    LParen,
    RParen,
    Eof,
}

fn tokenize(source: &str, symbols: &SymbolSet) -> SatResult<Vec<(PropToken, usize)>> {
    let mut tokens = Vec::new();
    let bytes = source.as_bytes();
    let mut pos = 0usize;
    while pos < bytes.len() {
        let b = bytes[pos];
        if b.is_ascii_whitespace() {
            pos += 1;
            continue;
        }
        if b == b'(' {
            tokens.push((PropToken::LParen, pos));
            pos += 1;
            continue;
        }
        if b == b')' {
            tokens.push((PropToken::RParen, pos));
            pos += 1;
            continue;
        }
        if source[pos..].starts_with(symbols.not_sym) {
            tokens.push((PropToken::Not, pos));
            pos += symbols.not_sym.len();
            continue;
        }
        if source[pos..].starts_with(symbols.and_sym) {
            tokens.push((PropToken::And, pos));
            pos += symbols.and_sym.len();
            continue;
        }
        if source[pos..].starts_with(symbols.or_sym) {
            tokens.push((PropToken::Or, pos));
            pos += symbols.or_sym.len();
            continue;
        }
        if b.is_ascii_alphabetic() || b == b'_' {
            let start = pos;
            while pos < bytes.len() && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_') {
                pos += 1;
            }
            let word = &source[start..pos];
            let kind = if word == symbols.true_sym {
                PropToken::True
            } else if word == symbols.false_sym {
                PropToken::False
            } else {
                PropToken::Ident(word.to_string())
            };
            tokens.push((kind, start));
            continue;
        }
        return Err(SatError::malformed(
            format!("unexpected character '{}'", b as char),
            pos,
        ));
    }
    tokens.push((PropToken::Eof, bytes.len()));
    Ok(tokens)
}

struct PropParser {
    tokens: Vec<(PropToken, usize)>,
    pos: usize,
}

impl PropParser {
    fn peek(&self) -> &PropToken {
        &self.tokens[self.pos].0
    }

    fn offset(&self) -> usize {
        self.tokens[self.pos].1
    }

    fn advance(&mut self) -> PropToken {
        let tok = self.tokens[self.pos].0.clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn parse_or(&mut self) -> SatResult<Prop> {
        let mut lhs = self.parse_and()?;
        while matches!(self.peek(), PropToken::Or) {
            self.advance();
            let rhs = self.parse_and()?;
            lhs = Prop::Or(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_and(&mut self) -> SatResult<Prop> {
        let mut lhs = self.parse_unary()?;
        while matches!(self.peek(), PropToken::And) {
            self.advance();
            let rhs = self.parse_unary()?;
            lhs = Prop::And(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> SatResult<Prop> {
        if matches!(self.peek(), PropToken::Not) {
            self.advance();
            return Ok(Prop::Not(Box::new(self.parse_unary()?)));
        }
        self.parse_atom()
    }

    fn parse_atom(&mut self) -> SatResult<Prop> {
        match self.advance() {
            PropToken::True => Ok(Prop::True),
            PropToken::False => Ok(Prop::False),
            PropToken::Ident(name) => Ok(Prop::Var(name)),
            PropToken::LParen => {
                let inner = self.parse_or()?;
                match self.advance() {
                    PropToken::RParen => Ok(inner),
                    _ => Err(SatError::malformed("expected ')'", self.offset())),
                }
            }
            _ => Err(SatError::malformed(
                "expected an expression",
                self.offset(),
            )),
        }
    }
}
