//! # ltlmeasure-syntax
//!
//! The narrow external-collaborator interface: surface LTL text in,
//! [`Formula`](ltlmeasure_kernel::Formula) out. A hand-rolled lexer and
//! recursive-descent parser, no parser-combinator crate, matching the
//! teacher's natural-language front end.
//!
//! ```
//! use ltlmeasure_syntax::parse;
//!
//! let formula = parse("G (p -> F q)").unwrap();
//! assert_eq!(formula.to_string(), "G((p -> F(q)))");
//! ```

pub mod lexer;
pub mod parser;

pub use lexer::{LexError, Lexer, Token, TokenKind};
pub use parser::{parse, ParseError};
