//! # ltlmeasure-measure
//!
//! The bounded-horizon unroller (C5) and measure evaluator (C7), threaded
//! through a [`Context`] carrying the horizon, bypass flag, and #SAT cache
//! instead of process-wide globals.
//!
//! ```
//! use ltlmeasure_measure::{measure_formula, Context};
//! use ltlmeasure_kernel::Formula;
//!
//! let mut ctx = Context::new(3);
//! let p = measure_formula(&Formula::Literal("p".into()), &mut ctx).unwrap();
//! assert_eq!(p, 0.5);
//! ```

pub mod context;
pub mod error;
pub mod eval;
pub mod unroll;

pub use context::Context;
pub use error::{MeasureError, MeasureResult};
pub use eval::{clamp_probability, measure};
pub use unroll::unroll as unroll_formula;

use ltlmeasure_kernel::{compute_deps, simplify, Formula};

/// Simplify, annotate, and evaluate `formula` from `ltlmeasure_kernel` in
/// one call — the path the CLI and the symmetric-difference distance both
/// use. The result is clamped to `[0, 1]` for reporting.
pub fn measure_formula(formula: &Formula, ctx: &mut Context) -> MeasureResult<f64> {
    let simplified = simplify(formula.clone());
    let annotated = compute_deps(&simplified, ctx.horizon)?;
    let raw = measure(&annotated, 0, ctx)?;
    Ok(clamp_probability(raw))
}

/// Build the symmetric-difference formula `(a & !b) | (!a & b)`, the
/// distance the CLI's two-expression mode reports.
pub fn symmetric_difference(a: Formula, b: Formula) -> Formula {
    a.clone().and(b.clone().not()).or(a.not().and(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ltlmeasure_satcount::SatCounter;

    #[test]
    fn measures_a_simple_literal() {
        let mut ctx = Context::new(3);
        let value = measure_formula(&Formula::Literal("p".into()), &mut ctx).unwrap();
        assert_eq!(value, 0.5);
    }

    #[test]
    fn measures_an_implication_via_simplify() {
        // p -> q, distinct APs: simplifies to Or(Not(p), q), which stays
        // disjoint and so never needs the #SAT bridge.
        let f = Formula::Implies(
            Box::new(Formula::Literal("p".into())),
            Box::new(Formula::Literal("q".into())),
        );
        let mut ctx = Context::new(2);
        let value = measure_formula(&f, &mut ctx).unwrap();
        assert!((value - 0.75).abs() < 1e-9);
    }

    #[test]
    fn symmetric_difference_of_a_formula_with_itself_is_zero() {
        // S7: distance between `p` and `p`, horizon 2.
        let f = Formula::Literal("p".into());
        let dist = symmetric_difference(f.clone(), f);
        let mut ctx = Context::new(2).with_counter(SatCounter::brute_force());
        let value = measure_formula(&dist, &mut ctx).unwrap();
        assert!(value < 1e-9);
    }

    #[test]
    fn symmetric_difference_matches_closed_form_for_disjoint_formulas() {
        // Universal property 5, restricted to the disjoint-AP case the
        // closed-form bypass can resolve without a #SAT fallback.
        let p = Formula::Literal("p".into());
        let q = Formula::Literal("q".into());
        let mut ctx = Context::new(2);
        let mp = measure_formula(&p, &mut ctx).unwrap();
        let mq = measure_formula(&q, &mut ctx).unwrap();

        let dist = symmetric_difference(p, q);
        let distance = measure_formula(&dist, &mut ctx).unwrap();

        let expected = mp * (1.0 - mq) + (1.0 - mp) * mq;
        assert!((distance - expected).abs() < 1e-9);
    }
}
