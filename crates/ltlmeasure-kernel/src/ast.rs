//! Bounded-horizon LTL formula AST.
//!
//! Every expression the measurement engine reasons about is a [`Formula`].
//! There is no distinction between the surface syntax and the core: the
//! parser (`ltlmeasure-syntax`) builds a `Formula` directly.

use std::fmt;

/// The LTL formula AST, pre-simplification.
///
/// `Release`, `WeakUntil`, `Implies`, and `Iff` are derived operators: the
/// simplifier (`crate::simplify`) rewrites them away before the dependency
/// analyzer or unroller ever sees them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formula {
    /// The constant `true`.
    True,
    /// The constant `false`.
    False,
    /// An atomic-proposition reference.
    Literal(String),
    /// `!phi`
    Not(Box<Formula>),
    /// `X phi`
    Next(Box<Formula>),
    /// `G phi`
    Globally(Box<Formula>),
    /// `F phi`
    Eventually(Box<Formula>),
    /// `phi & psi`
    And(Box<Formula>, Box<Formula>),
    /// `phi | psi`
    Or(Box<Formula>, Box<Formula>),
    /// `phi U psi`
    Until(Box<Formula>, Box<Formula>),
    /// `phi W psi` (derived: eliminated by the simplifier)
    WeakUntil(Box<Formula>, Box<Formula>),
    /// `phi R psi` (derived: eliminated by the simplifier)
    Release(Box<Formula>, Box<Formula>),
    /// `phi -> psi` (derived: eliminated by the simplifier)
    Implies(Box<Formula>, Box<Formula>),
    /// `phi <-> psi` (derived: eliminated by the simplifier)
    Iff(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// Convenience constructor: `Not(self)`.
    pub fn not(self) -> Formula {
        Formula::Not(Box::new(self))
    }

    /// Convenience constructor: `And(self, other)`.
    pub fn and(self, other: Formula) -> Formula {
        Formula::And(Box::new(self), Box::new(other))
    }

    /// Convenience constructor: `Or(self, other)`.
    pub fn or(self, other: Formula) -> Formula {
        Formula::Or(Box::new(self), Box::new(other))
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::True => write!(f, "true"),
            Formula::False => write!(f, "false"),
            Formula::Literal(name) => write!(f, "{name}"),
            Formula::Not(a) => write!(f, "!{a}"),
            Formula::Next(a) => write!(f, "X({a})"),
            Formula::Globally(a) => write!(f, "G({a})"),
            Formula::Eventually(a) => write!(f, "F({a})"),
            Formula::And(l, r) => write!(f, "({l} & {r})"),
            Formula::Or(l, r) => write!(f, "({l} | {r})"),
            Formula::Until(l, r) => write!(f, "({l} U {r})"),
            Formula::WeakUntil(l, r) => write!(f, "({l} W {r})"),
            Formula::Release(l, r) => write!(f, "({l} R {r})"),
            Formula::Implies(l, r) => write!(f, "({l} -> {r})"),
            Formula::Iff(l, r) => write!(f, "({l} <-> {r})"),
        }
    }
}

/// Bottom-up rewrite: recurse into children first, replacing them with the
/// transformer's output, then apply `f` to the (possibly restructured)
/// current node.
///
/// `simplify` and `compute_deps`'s node-numbering both build on this shape,
/// though `compute_deps` itself changes the node type (`Formula` ->
/// annotated tree) and is implemented as its own recursive function in
/// `crate::deps` rather than instantiating this generic, since `F` here is
/// fixed to `Formula -> Formula`.
pub fn traverse(node: Formula, f: &mut impl FnMut(Formula) -> Formula) -> Formula {
    let rewritten = match node {
        Formula::True | Formula::False | Formula::Literal(_) => node,
        Formula::Not(a) => Formula::Not(Box::new(traverse(*a, f))),
        Formula::Next(a) => Formula::Next(Box::new(traverse(*a, f))),
        Formula::Globally(a) => Formula::Globally(Box::new(traverse(*a, f))),
        Formula::Eventually(a) => Formula::Eventually(Box::new(traverse(*a, f))),
        Formula::And(l, r) => Formula::And(Box::new(traverse(*l, f)), Box::new(traverse(*r, f))),
        Formula::Or(l, r) => Formula::Or(Box::new(traverse(*l, f)), Box::new(traverse(*r, f))),
        Formula::Until(l, r) => {
            Formula::Until(Box::new(traverse(*l, f)), Box::new(traverse(*r, f)))
        }
        Formula::WeakUntil(l, r) => {
            Formula::WeakUntil(Box::new(traverse(*l, f)), Box::new(traverse(*r, f)))
        }
        Formula::Release(l, r) => {
            Formula::Release(Box::new(traverse(*l, f)), Box::new(traverse(*r, f)))
        }
        Formula::Implies(l, r) => {
            Formula::Implies(Box::new(traverse(*l, f)), Box::new(traverse(*r, f)))
        }
        Formula::Iff(l, r) => Formula::Iff(Box::new(traverse(*l, f)), Box::new(traverse(*r, f))),
    };
    f(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traverse_visits_bottom_up() {
        // Replace every Literal with True, bottom-up; parent nodes should
        // see already-replaced children.
        let f = Formula::And(
            Box::new(Formula::Literal("p".into())),
            Box::new(Formula::Literal("q".into())),
        );
        let result = traverse(f, &mut |n| match n {
            Formula::Literal(_) => Formula::True,
            other => other,
        });
        assert_eq!(result, Formula::And(Box::new(Formula::True), Box::new(Formula::True)));
    }

    #[test]
    fn display_parenthesizes_binary_nodes() {
        let f = Formula::Literal("p".into()).and(Formula::Literal("q".into()));
        assert_eq!(f.to_string(), "(p & q)");
    }
}
