//! `measure` — bounded-horizon LTL probabilistic measure CLI.
//!
//! Thin wrapper around [`ltlmeasure_cli::run_cli`]; all argument parsing and
//! dispatch logic lives in the library crate for testability.

fn main() {
    if let Err(e) = ltlmeasure_cli::run_cli() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
