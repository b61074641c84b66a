//! Dependency analyzer (C4): annotates a simplified [`Formula`] with its
//! [`DepSet`] and, for binary nodes, a left/right disjointness flag.
//!
//! The analyzer produces a new, typed tree ([`Annotated`]) rather than
//! mutating the input in place — annotations live with the node that owns
//! them by construction, so there is no identity-keyed side table to keep in
//! sync when the simplifier has already rewritten the tree wholesale.

use ltlmeasure_base::DepSet;

use crate::ast::Formula;
use crate::error::{KernelError, KernelResult};

/// A formula annotated with dependency information at every node.
#[derive(Debug, Clone)]
pub struct Annotated {
    pub node: AnnotatedNode,
    pub deps: DepSet,
}

/// The annotated counterpart of [`Formula`], restricted to the reduced core
/// the simplifier guarantees (`True`, `False`, `Literal`, `Not`, `Next`,
/// `Globally`, `Eventually`, `And`, `Or`, `Until`).
#[derive(Debug, Clone)]
pub enum AnnotatedNode {
    True,
    False,
    Literal(String),
    Not(Box<Annotated>),
    Next(Box<Annotated>),
    Globally(Box<Annotated>),
    Eventually(Box<Annotated>),
    /// `lr_disjoint` is precomputed over `deps(left)`/`deps(right)`.
    And(Box<Annotated>, Box<Annotated>, bool),
    Or(Box<Annotated>, Box<Annotated>, bool),
    /// `lr_disjoint` is computed over the *saturated* left/right dep sets,
    /// per spec 4.4.
    Until(Box<Annotated>, Box<Annotated>, bool),
}

impl Annotated {
    /// Reconstruct the (simplified) [`Formula`] this annotation was built
    /// from, discarding `deps`/`lr_disjoint`. Used by the measure evaluator
    /// when a node's annotation doesn't license a closed-form combinator and
    /// it must fall back to unrolling the node itself.
    pub fn to_formula(&self) -> Formula {
        match &self.node {
            AnnotatedNode::True => Formula::True,
            AnnotatedNode::False => Formula::False,
            AnnotatedNode::Literal(name) => Formula::Literal(name.clone()),
            AnnotatedNode::Not(inner) => Formula::Not(Box::new(inner.to_formula())),
            AnnotatedNode::Next(inner) => Formula::Next(Box::new(inner.to_formula())),
            AnnotatedNode::Globally(inner) => Formula::Globally(Box::new(inner.to_formula())),
            AnnotatedNode::Eventually(inner) => Formula::Eventually(Box::new(inner.to_formula())),
            AnnotatedNode::And(l, r, _) => {
                Formula::And(Box::new(l.to_formula()), Box::new(r.to_formula()))
            }
            AnnotatedNode::Or(l, r, _) => {
                Formula::Or(Box::new(l.to_formula()), Box::new(r.to_formula()))
            }
            AnnotatedNode::Until(l, r, _) => {
                Formula::Until(Box::new(l.to_formula()), Box::new(r.to_formula()))
            }
        }
    }
}

/// Annotate a simplified formula, bottom-up, with dependency information.
///
/// `horizon` is the process-wide bound `N` for this measurement.
pub fn compute_deps(formula: &Formula, horizon: u32) -> KernelResult<Annotated> {
    match formula {
        Formula::True => Ok(Annotated {
            node: AnnotatedNode::True,
            deps: DepSet::empty(),
        }),
        Formula::False => Ok(Annotated {
            node: AnnotatedNode::False,
            deps: DepSet::empty(),
        }),
        Formula::Literal(name) => Ok(Annotated {
            node: AnnotatedNode::Literal(name.clone()),
            deps: DepSet::literal(name.clone(), 0),
        }),
        Formula::Not(inner) => {
            let inner = compute_deps(inner, horizon)?;
            let deps = inner.deps.clone();
            Ok(Annotated {
                node: AnnotatedNode::Not(Box::new(inner)),
                deps,
            })
        }
        Formula::Next(inner) => {
            let inner = compute_deps(inner, horizon)?;
            let deps = inner.deps.shift(1, horizon);
            Ok(Annotated {
                node: AnnotatedNode::Next(Box::new(inner)),
                deps,
            })
        }
        Formula::Globally(inner) => {
            let inner = compute_deps(inner, horizon)?;
            let deps = inner.deps.saturate(horizon);
            Ok(Annotated {
                node: AnnotatedNode::Globally(Box::new(inner)),
                deps,
            })
        }
        Formula::Eventually(inner) => {
            let inner = compute_deps(inner, horizon)?;
            let deps = inner.deps.saturate(horizon);
            Ok(Annotated {
                node: AnnotatedNode::Eventually(Box::new(inner)),
                deps,
            })
        }
        Formula::And(l, r) => {
            let l = compute_deps(l, horizon)?;
            let r = compute_deps(r, horizon)?;
            let lr_disjoint = l.deps.is_disjoint(&r.deps);
            let deps = l.deps.union(&r.deps);
            Ok(Annotated {
                node: AnnotatedNode::And(Box::new(l), Box::new(r), lr_disjoint),
                deps,
            })
        }
        Formula::Or(l, r) => {
            let l = compute_deps(l, horizon)?;
            let r = compute_deps(r, horizon)?;
            let lr_disjoint = l.deps.is_disjoint(&r.deps);
            let deps = l.deps.union(&r.deps);
            Ok(Annotated {
                node: AnnotatedNode::Or(Box::new(l), Box::new(r), lr_disjoint),
                deps,
            })
        }
        Formula::Until(l, r) => {
            let l = compute_deps(l, horizon)?;
            let r = compute_deps(r, horizon)?;
            let left_bound = horizon.saturating_sub(1);
            let l_sat = l.deps.saturate(left_bound);
            let r_sat = r.deps.saturate(horizon);
            let lr_disjoint = l_sat.is_disjoint(&r_sat);
            let deps = l_sat.union(&r_sat);
            Ok(Annotated {
                node: AnnotatedNode::Until(Box::new(l), Box::new(r), lr_disjoint),
                deps,
            })
        }
        other @ (Formula::WeakUntil(..)
        | Formula::Release(..)
        | Formula::Implies(..)
        | Formula::Iff(..)) => Err(KernelError::unsupported_node(node_kind_name(other))),
    }
}

fn node_kind_name(formula: &Formula) -> &'static str {
    match formula {
        Formula::True => "True",
        Formula::False => "False",
        Formula::Literal(_) => "Literal",
        Formula::Not(_) => "Not",
        Formula::Next(_) => "Next",
        Formula::Globally(_) => "Globally",
        Formula::Eventually(_) => "Eventually",
        Formula::And(..) => "And",
        Formula::Or(..) => "Or",
        Formula::Until(..) => "Until",
        Formula::WeakUntil(..) => "WeakUntil",
        Formula::Release(..) => "Release",
        Formula::Implies(..) => "Implies",
        Formula::Iff(..) => "Iff",
    }
}
