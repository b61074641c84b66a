//! Command-line argument parsing and dispatch for `measure`.
//!
//! ```text
//! measure [-d] N EXPR1 [EXPR2]
//! ```
//!
//! With one expression, prints its measure. With two, prints the
//! symmetric-difference distance between them, prefixed by `Distance`.
//! Malformed invocation or parse failure prints usage to stdout and exits
//! nonzero — not stderr, per the spec's explicit wording for this one path.

use std::fmt;

use clap::Parser;

use ltlmeasure_measure::{measure_formula, symmetric_difference, Context, MeasureError};
use ltlmeasure_satcount::SatCounter;
use ltlmeasure_syntax::parse;

use crate::config::Config;

const USAGE: &str = "usage: measure [-d] N EXPR1 [EXPR2]";

/// Parsed command-line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "measure", about = "Bounded-horizon LTL probabilistic measure", version)]
pub struct Args {
    /// Disable the disjoint/time-independent closed-form bypass, forcing
    /// `sat_measure` on every non-trivial node.
    #[arg(short = 'd')]
    pub disable_bypass: bool,

    /// The bounded trace-length horizon `N`. Parsed manually (not as `u32`
    /// directly) so a non-numeric argument reports through the same
    /// usage-to-stdout path as any other malformed invocation, rather than
    /// clap's own stderr/exit-code-2 convention.
    pub horizon: String,

    /// The first LTL expression.
    pub expr1: String,

    /// An optional second LTL expression; when present, `measure` reports
    /// the symmetric-difference distance between `expr1` and `expr2`
    /// instead of `expr1`'s own measure.
    pub expr2: Option<String>,
}

/// Errors `execute` can report. `Usage` covers every malformed-invocation or
/// parse-failure case from spec §6/§7; everything else is a fatal structure
/// or external-collaborator error from the measurement pipeline.
#[derive(Debug)]
pub enum CliError {
    /// Bad CLI arguments or an LTL parse failure.
    Usage,
    /// A fatal error surfaced from simplification, analysis, unrolling, or
    /// the #SAT bridge.
    Measure(MeasureError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage => write!(f, "{USAGE}"),
            CliError::Measure(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Usage => None,
            CliError::Measure(e) => Some(e),
        }
    }
}

impl From<MeasureError> for CliError {
    fn from(e: MeasureError) -> Self {
        CliError::Measure(e)
    }
}

pub type CliResult<T> = Result<T, CliError>;

fn print_usage() {
    println!("{USAGE}");
}

/// Parse real process arguments and run against the real environment: a
/// subprocess-backed [`SatCounter`] configured from [`Config::from_env`],
/// and `env_logger` initialized at startup.
///
/// Usage and parse failures print to stdout and terminate the process
/// directly (`std::process::exit(1)`), matching spec §6's exact wording;
/// everything else returns `Err` for `main` to report on stderr.
pub fn run_cli() -> CliResult<()> {
    env_logger::try_init().ok();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(_) => {
            print_usage();
            std::process::exit(1);
        }
    };

    let config = Config::from_env();
    let counter = config.configure_counter(SatCounter::new());

    match execute(&args, counter) {
        Ok(output) => {
            print!("{output}");
            Ok(())
        }
        Err(CliError::Usage) => {
            print_usage();
            std::process::exit(1);
        }
        Err(e) => Err(e),
    }
}

/// Run the measurement for already-parsed `args` against `counter`,
/// returning the exact text `measure` would print to stdout on success.
///
/// Split out from [`run_cli`] — which reaches into the real process
/// environment — so tests can supply a [`SatCounter::brute_force`] counter
/// instead of depending on a real model-counter binary.
pub fn execute(args: &Args, counter: SatCounter) -> CliResult<String> {
    let horizon: u32 = args.horizon.parse().map_err(|_| CliError::Usage)?;
    let expr1 = parse(&args.expr1).map_err(|_| CliError::Usage)?;

    let mut ctx = Context::new(horizon)
        .with_bypass(!args.disable_bypass)
        .with_counter(counter);

    match &args.expr2 {
        None => {
            let value = measure_formula(&expr1, &mut ctx)?;
            Ok(format!("{value}\n"))
        }
        Some(expr2_src) => {
            let expr2 = parse(expr2_src).map_err(|_| CliError::Usage)?;
            let distance_formula = symmetric_difference(expr1, expr2);
            let value = measure_formula(&distance_formula, &mut ctx)?;
            Ok(format!("Distance {value}\n"))
        }
    }
}

/// Parse `args` the way `Args::try_parse_from` would from a real argv, for
/// tests that want to exercise clap's own parsing (arg counts, `-d`
/// placement) rather than constructing [`Args`] by hand.
pub fn parse_args<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Args::try_parse_from(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(disable_bypass: bool, horizon: &str, expr1: &str, expr2: Option<&str>) -> Args {
        Args {
            disable_bypass,
            horizon: horizon.to_string(),
            expr1: expr1.to_string(),
            expr2: expr2.map(str::to_string),
        }
    }

    #[test]
    fn single_expression_prints_its_measure() {
        let out = execute(&args(false, "3", "p", None), SatCounter::brute_force()).unwrap();
        assert_eq!(out, "0.5\n");
    }

    #[test]
    fn globally_measure_matches_scenario_s2() {
        let out = execute(&args(false, "3", "G p", None), SatCounter::brute_force()).unwrap();
        assert_eq!(out, "0.0625\n");
    }

    #[test]
    fn eventually_measure_matches_scenario_s3() {
        let out = execute(&args(false, "3", "F p", None), SatCounter::brute_force()).unwrap();
        assert_eq!(out, "0.9375\n");
    }

    #[test]
    fn conjunction_of_distinct_aps_matches_scenario_s4() {
        let out = execute(&args(false, "2", "p & q", None), SatCounter::brute_force()).unwrap();
        assert_eq!(out, "0.25\n");
    }

    #[test]
    fn tautology_after_simplify_matches_scenario_s5() {
        let out = execute(&args(false, "2", "p | !p", None), SatCounter::brute_force()).unwrap();
        assert_eq!(out, "1\n");
    }

    #[test]
    fn disable_bypass_agrees_with_bypass_within_tolerance() {
        // S6: two runs of `G p`, one with `-d`, one without.
        let bypassed = execute(&args(false, "3", "G p", None), SatCounter::brute_force()).unwrap();
        let forced = execute(&args(true, "3", "G p", None), SatCounter::brute_force()).unwrap();
        let a: f64 = bypassed.trim().parse().unwrap();
        let b: f64 = forced.trim().parse().unwrap();
        assert!((a - b).abs() < 1e-6);
    }

    #[test]
    fn distance_between_identical_formulas_is_zero() {
        // S7: distance between `p` and `p`, prefixed by `Distance`.
        let out = execute(&args(false, "2", "p", Some("p")), SatCounter::brute_force()).unwrap();
        assert!(out.starts_with("Distance "));
        let value: f64 = out.trim_start_matches("Distance ").trim().parse().unwrap();
        assert!(value.abs() < 1e-9);
    }

    #[test]
    fn distance_between_disjoint_formulas_matches_closed_form() {
        let out = execute(&args(false, "2", "p", Some("q")), SatCounter::brute_force()).unwrap();
        let value: f64 = out.trim_start_matches("Distance ").trim().parse().unwrap();
        // measure(p) = measure(q) = 0.5, so the symmetric difference is
        // 0.5*0.5 + 0.5*0.5 = 0.5.
        assert!((value - 0.5).abs() < 1e-9);
    }

    #[test]
    fn non_numeric_horizon_is_a_usage_error() {
        let result = execute(&args(false, "notanumber", "p", None), SatCounter::brute_force());
        assert!(matches!(result, Err(CliError::Usage)));
    }

    #[test]
    fn unparseable_expression_is_a_usage_error() {
        let result = execute(&args(false, "3", "p &", None), SatCounter::brute_force());
        assert!(matches!(result, Err(CliError::Usage)));
    }

    #[test]
    fn unparseable_second_expression_is_a_usage_error() {
        let result = execute(&args(false, "3", "p", Some("q &")), SatCounter::brute_force());
        assert!(matches!(result, Err(CliError::Usage)));
    }

    #[test]
    fn missing_required_arguments_fail_clap_parsing() {
        assert!(parse_args(["measure"]).is_err());
        assert!(parse_args(["measure", "3"]).is_err());
    }

    #[test]
    fn well_formed_argv_parses_with_the_dash_d_flag() {
        let parsed = parse_args(["measure", "-d", "3", "p", "q"]).unwrap();
        assert!(parsed.disable_bypass);
        assert_eq!(parsed.horizon, "3");
        assert_eq!(parsed.expr1, "p");
        assert_eq!(parsed.expr2.as_deref(), Some("q"));
    }

    #[test]
    fn well_formed_argv_parses_without_the_dash_d_flag() {
        let parsed = parse_args(["measure", "3", "p"]).unwrap();
        assert!(!parsed.disable_bypass);
        assert_eq!(parsed.expr2, None);
    }

    #[test]
    fn usage_error_display_matches_spec_signature() {
        assert_eq!(CliError::Usage.to_string(), "usage: measure [-d] N EXPR1 [EXPR2]");
    }
}
