//! # ltlmeasure-cli
//!
//! Command-line entry point for the bounded-horizon LTL probabilistic
//! measure engine: `measure [-d] N EXPR1 [EXPR2]`.
//!
//! This crate is a thin dispatcher — all of the actual measurement work
//! happens in `ltlmeasure-syntax` (parsing), `ltlmeasure-kernel` (simplify +
//! dependency analysis), and `ltlmeasure-measure` (unrolling + evaluation).
//! [`cli::execute`] is the testable core; [`run_cli`] adds the real process
//! environment (argv, environment variables, a subprocess-backed
//! [`ltlmeasure_satcount::SatCounter`], and `env_logger`).
//!
//! ```no_run
//! fn main() {
//!     if let Err(e) = ltlmeasure_cli::run_cli() {
//!         eprintln!("Error: {e}");
//!         std::process::exit(1);
//!     }
//! }
//! ```

pub mod cli;
pub mod config;

pub use cli::{run_cli, Args, CliError, CliResult};
pub use config::Config;
