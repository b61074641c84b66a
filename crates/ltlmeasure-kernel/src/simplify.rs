//! Rewrites derived operators (implication, biconditional, release,
//! weak-until) down into a reduced core of
//! `True | False | Literal | Not | Next | Globally | Eventually | And | Or |
//! Until`.

use crate::ast::{traverse, Formula};

/// Simplify a formula bottom-up.
///
/// Post-condition: the result contains only the reduced core operators.
pub fn simplify(formula: Formula) -> Formula {
    traverse(formula, &mut simplify_node)
}

/// Rewrite a single node whose children are already simplified.
fn simplify_node(node: Formula) -> Formula {
    match node {
        Formula::Implies(l, r) => {
            if matches!(*l, Formula::False) || matches!(*r, Formula::True) {
                Formula::True
            } else if matches!(*l, Formula::True) {
                *r
            } else if matches!(*r, Formula::False) {
                Formula::Not(l)
            } else {
                Formula::Or(Box::new(Formula::Not(l)), r)
            }
        }
        Formula::Iff(l, r) => Formula::Or(
            Box::new(Formula::And(l.clone(), r.clone())),
            Box::new(Formula::And(Box::new(Formula::Not(l)), Box::new(Formula::Not(r)))),
        ),
        // psi W (psi & phi), then re-simplify (the freshly built WeakUntil
        // still needs expanding into Or(Until, Globally)).
        Formula::Release(l, r) => {
            let rewritten = Formula::WeakUntil(r.clone(), Box::new(Formula::And(l, r)));
            simplify_node(rewritten)
        }
        // (phi U psi) | G phi
        Formula::WeakUntil(l, r) => Formula::Or(
            Box::new(Formula::Until(l.clone(), r)),
            Box::new(Formula::Globally(l)),
        ),
        other => other,
    }
}
