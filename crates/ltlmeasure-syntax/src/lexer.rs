//! Hand-rolled lexer for surface LTL text.
//!
//! This mirrors the lexer/token split used throughout the teacher codebase
//! for its natural-language-to-logic front end: a flat token enum plus a
//! single-pass scanner, no parser-combinator or lexer-generator crate.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    True,
    False,
    Ident(String),
    Not,
    And,
    Or,
    Implies,
    Iff,
    Until,
    WeakUntil,
    Release,
    Next,
    Globally,
    Eventually,
    LParen,
    RParen,
    Eof,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::True => write!(f, "true"),
            TokenKind::False => write!(f, "false"),
            TokenKind::Ident(s) => write!(f, "{s}"),
            TokenKind::Not => write!(f, "!"),
            TokenKind::And => write!(f, "&"),
            TokenKind::Or => write!(f, "|"),
            TokenKind::Implies => write!(f, "->"),
            TokenKind::Iff => write!(f, "<->"),
            TokenKind::Until => write!(f, "U"),
            TokenKind::WeakUntil => write!(f, "W"),
            TokenKind::Release => write!(f, "R"),
            TokenKind::Next => write!(f, "X"),
            TokenKind::Globally => write!(f, "G"),
            TokenKind::Eventually => write!(f, "F"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::Eof => write!(f, "<eof>"),
        }
    }
}

/// A single-pass scanner over a surface LTL source string.
pub struct Lexer<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub message: String,
    pub offset: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.message, self.offset)
    }
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let b = self.peek();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Tokenize the entire source, terminated by one trailing `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let start = self.pos;
            let Some(b) = self.peek() else {
                tokens.push(Token {
                    kind: TokenKind::Eof,
                    offset: start,
                });
                break;
            };
            let kind = match b {
                b'(' => {
                    self.advance();
                    TokenKind::LParen
                }
                b')' => {
                    self.advance();
                    TokenKind::RParen
                }
                b'!' => {
                    self.advance();
                    TokenKind::Not
                }
                b'&' => {
                    self.advance();
                    TokenKind::And
                }
                b'|' => {
                    self.advance();
                    TokenKind::Or
                }
                b'-' => {
                    self.advance();
                    match self.advance() {
                        Some(b'>') => TokenKind::Implies,
                        _ => {
                            return Err(LexError {
                                message: "expected '->'".into(),
                                offset: start,
                            })
                        }
                    }
                }
                b'<' => {
                    self.advance();
                    if self.advance() != Some(b'-') {
                        return Err(LexError {
                            message: "expected '<->'".into(),
                            offset: start,
                        });
                    }
                    if self.advance() != Some(b'>') {
                        return Err(LexError {
                            message: "expected '<->'".into(),
                            offset: start,
                        });
                    }
                    TokenKind::Iff
                }
                c if c.is_ascii_alphabetic() || c == b'_' => {
                    while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == b'_')
                    {
                        self.pos += 1;
                    }
                    let word = &self.source[start..self.pos];
                    match word {
                        "true" => TokenKind::True,
                        "false" => TokenKind::False,
                        // Single-letter temporal/operator keywords, the
                        // conventional LTL abbreviations. Any other
                        // identifier, including longer names that happen to
                        // start with one of these letters, is a literal.
                        "U" => TokenKind::Until,
                        "W" => TokenKind::WeakUntil,
                        "R" => TokenKind::Release,
                        "X" => TokenKind::Next,
                        "G" => TokenKind::Globally,
                        "F" => TokenKind::Eventually,
                        _ => TokenKind::Ident(word.to_string()),
                    }
                }
                other => {
                    return Err(LexError {
                        message: format!("unexpected character '{}'", other as char),
                        offset: start,
                    })
                }
            };
            tokens.push(Token { kind, offset: start });
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::new(src)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn tokenizes_atom() {
        assert_eq!(kinds("p"), vec![TokenKind::Ident("p".into()), TokenKind::Eof]);
    }

    #[test]
    fn tokenizes_connectives() {
        assert_eq!(
            kinds("p & q"),
            vec![
                TokenKind::Ident("p".into()),
                TokenKind::And,
                TokenKind::Ident("q".into()),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn tokenizes_arrows() {
        assert_eq!(
            kinds("p -> q"),
            vec![
                TokenKind::Ident("p".into()),
                TokenKind::Implies,
                TokenKind::Ident("q".into()),
                TokenKind::Eof
            ]
        );
        assert_eq!(
            kinds("p <-> q"),
            vec![
                TokenKind::Ident("p".into()),
                TokenKind::Iff,
                TokenKind::Ident("q".into()),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn bad_arrow_is_an_error() {
        assert!(Lexer::new("p -q").tokenize().is_err());
    }
}
