//! The `Context` value threaded through unrolling and evaluation.
//!
//! The reference implementation keeps the horizon, the bypass flag, and the
//! #SAT cache as module-level globals. This workspace confines them to a
//! single value instead — the same shape as
//! `logicaffeine_kernel::prelude::StandardLibrary::register(ctx: &mut
//! Context)` threading a context through a pipeline rather than reaching for
//! process-wide state.

use ltlmeasure_base::SymbolSet;
use ltlmeasure_satcount::SatCounter;

/// Everything the evaluator and unroller need beyond the AST itself.
pub struct Context {
    /// The bounded trace-length horizon `N`.
    pub horizon: u32,
    /// Whether disjoint/time-independent subtrees may use the closed-form
    /// combinators. `false` forces `#SAT` on every non-trivial node (`-d`).
    pub bypass: bool,
    /// The symbol set the unroller writes and the #SAT bridge parses.
    pub symbols: SymbolSet,
    /// Owns the #SAT memoization cache and solver-binary configuration.
    pub counter: SatCounter,
}

impl Context {
    pub fn new(horizon: u32) -> Self {
        Self {
            horizon,
            bypass: true,
            symbols: SymbolSet::default(),
            counter: SatCounter::new(),
        }
    }

    pub fn with_bypass(mut self, bypass: bool) -> Self {
        self.bypass = bypass;
        self
    }

    pub fn with_counter(mut self, counter: SatCounter) -> Self {
        self.counter = counter;
        self
    }
}
