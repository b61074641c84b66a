//! # ltlmeasure-satcount
//!
//! The #SAT bridge: propositional-text parsing, CNF conversion, DIMACS
//! encoding, and a memoized subprocess wrapper around an external
//! model-counting solver.
//!
//! This crate knows nothing about LTL; it only ever sees the flat
//! propositional text the unroller (`ltlmeasure-measure`) produces.

pub mod cnf;
pub mod counter;
pub mod error;
pub mod prop;

pub use cnf::{to_cnf, to_dimacs, Clause, CnfOutcome};
pub use counter::{SatCounter, DEFAULT_SOLVER_BINARY};
pub use error::{SatError, SatResult};
pub use prop::{parse_prop, Prop};
