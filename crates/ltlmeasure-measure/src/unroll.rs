//! Bounded-horizon expansion of an LTL formula into propositional text.
//!
//! `unroll` walks a simplified [`Formula`] (only `True`/`False`/`Literal`/
//! `Not`/`Next`/`Globally`/`Eventually`/`And`/`Or`/`Until` survive the
//! simplifier) and produces a string in the target [`SymbolSet`], constant-
//! folding as it goes so trivial subtrees never reach the #SAT bridge.
//!
//! `Until` is expanded to its bounded-horizon disjunction of conjunctive
//! chains directly at the string level — accumulating fold results for
//! `X^0 l, X^1 l, ..., X^j l` and the matching `X^{j+1} r` term-by-term —
//! rather than building an intermediate `Formula` tree with `Next` nested to
//! depth `N` and recursing over it. The latter would need a stack budget
//! proportional to the horizon; this way, unrolling one fixed AST node never
//! recurses deeper than that node's own structure.
//!
//! The time offset at which `Until`'s expansion is unrolled is always `0`,
//! regardless of the caller's current time `n` — reproduced from the
//! reference implementation rather than "fixed", since a caller relying on
//! the closed-form bypass (`ltlmeasure_measure::eval`) never observes it and
//! changing it would silently alter `#SAT`-fallback results for formulas
//! like `X(p U q)`.

use ltlmeasure_base::SymbolSet;
use ltlmeasure_kernel::Formula;

/// Unroll `formula` at time `n` over horizon `horizon`, in `symbols`.
pub fn unroll(formula: &Formula, n: u32, horizon: u32, symbols: &SymbolSet) -> String {
    match formula {
        Formula::True => symbols.true_sym.to_string(),
        Formula::False => symbols.false_sym.to_string(),
        Formula::Literal(name) => {
            if n > horizon {
                symbols.false_sym.to_string()
            } else {
                format!("{name}{n}")
            }
        }
        Formula::Not(inner) => {
            let e = unroll(inner, n, horizon, symbols);
            if e == symbols.false_sym {
                symbols.true_sym.to_string()
            } else {
                format!("{}{e}", symbols.not_sym)
            }
        }
        Formula::Next(inner) => unroll(inner, n + 1, horizon, symbols),
        Formula::And(l, r) => {
            let le = unroll(l, n, horizon, symbols);
            let re = unroll(r, n, horizon, symbols);
            and_fold(&le, &re, symbols)
        }
        Formula::Or(l, r) => {
            let le = unroll(l, n, horizon, symbols);
            let re = unroll(r, n, horizon, symbols);
            or_fold(&le, &re, symbols)
        }
        Formula::Globally(inner) => unroll_globally(inner, n, horizon, symbols),
        Formula::Eventually(inner) => unroll_eventually(inner, n, horizon, symbols),
        Formula::Until(l, r) => unroll_until(l, r, horizon, symbols),
        Formula::WeakUntil(..) | Formula::Release(..) | Formula::Implies(..) | Formula::Iff(..) => {
            unreachable!("derived operators are eliminated by ltlmeasure_kernel::simplify")
        }
    }
}

fn and_fold(a: &str, b: &str, symbols: &SymbolSet) -> String {
    if a == symbols.false_sym || b == symbols.false_sym {
        symbols.false_sym.to_string()
    } else if a == symbols.true_sym {
        b.to_string()
    } else if b == symbols.true_sym {
        a.to_string()
    } else {
        format!("({a} {} {b})", symbols.and_sym)
    }
}

fn or_fold(a: &str, b: &str, symbols: &SymbolSet) -> String {
    if a == symbols.true_sym || b == symbols.true_sym {
        symbols.true_sym.to_string()
    } else if a == symbols.false_sym {
        b.to_string()
    } else if b == symbols.false_sym {
        a.to_string()
    } else {
        format!("({a} {} {b})", symbols.or_sym)
    }
}

fn unroll_globally(inner: &Formula, n: u32, horizon: u32, symbols: &SymbolSet) -> String {
    let mut acc = symbols.true_sym.to_string();
    if n > horizon {
        return acc;
    }
    for k in n..=horizon {
        let e = unroll(inner, k, horizon, symbols);
        acc = and_fold(&acc, &e, symbols);
        if acc == symbols.false_sym {
            return acc;
        }
    }
    acc
}

fn unroll_eventually(inner: &Formula, n: u32, horizon: u32, symbols: &SymbolSet) -> String {
    let mut acc = symbols.false_sym.to_string();
    if n > horizon {
        return acc;
    }
    for k in n..=horizon {
        let e = unroll(inner, k, horizon, symbols);
        if e == symbols.false_sym {
            continue;
        }
        acc = or_fold(&acc, &e, symbols);
        if acc == symbols.true_sym {
            return acc;
        }
    }
    acc
}

/// `r ∨ ⋁_{j=0..N-1} ( l ∧ Xl ∧ ... ∧ X^j l ∧ X^{j+1} r )`, unrolled at time
/// `0` (the reproduced quirk — see module docs), built term-by-term.
fn unroll_until(l: &Formula, r: &Formula, horizon: u32, symbols: &SymbolSet) -> String {
    let mut acc = unroll(r, 0, horizon, symbols);
    if acc == symbols.true_sym {
        return acc;
    }
    let mut chain = symbols.true_sym.to_string();
    for j in 0..horizon {
        let l_at_j = unroll(l, j, horizon, symbols);
        chain = and_fold(&chain, &l_at_j, symbols);
        if chain == symbols.false_sym {
            // Every subsequent term also ANDs in this same prefix, so once
            // the prefix is unsatisfiable every remaining term is too.
            break;
        }
        let r_at_next = unroll(r, j + 1, horizon, symbols);
        let term = and_fold(&chain, &r_at_next, symbols);
        acc = or_fold(&acc, &term, symbols);
        if acc == symbols.true_sym {
            return acc;
        }
    }
    acc
}
