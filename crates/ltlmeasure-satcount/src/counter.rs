//! Subprocess bridge to an external #SAT (model-counting) solver.
//!
//! Mirrors the reference implementation's `check_output(["bin/sharpSAT",
//! "input.cnf"])` call, adapted to this workspace's error-handling and
//! scratch-file conventions: a named temp file instead of a fixed
//! `input.cnf` in the working directory (so concurrent counters never
//! collide), and a `SatError` instead of letting the subprocess's own
//! exceptions propagate.

use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use ltlmeasure_base::SymbolSet;

use crate::cnf::{to_cnf, to_dimacs, Clause, CnfOutcome};
use crate::error::{SatError, SatResult};
use crate::prop::parse_prop;

/// Default name of the external model-counter binary, overridable via
/// [`SatCounter::with_binary`].
pub const DEFAULT_SOLVER_BINARY: &str = "sharpSAT";

/// A brute-force counter refuses formulas wider than this many variables;
/// past this it exists only to let tests avoid a real solver binary, not to
/// compete with one.
const BRUTE_FORCE_MAX_VARS: usize = 20;

/// Which engine actually counts satisfying assignments once the input is
/// reduced to CNF.
enum Solver {
    /// Shell out to an external #SAT binary (the production path).
    Subprocess { binary: PathBuf, scratch_dir: Option<PathBuf> },
    /// Enumerate all `2^nvars` assignments in-process. Used by this
    /// workspace's own tests so they can exercise the `sat_measure`
    /// fallback without depending on a real `sharpSAT` install.
    BruteForce,
}

/// Computes `#models(formula) / 2^nvars` for propositional text produced by
/// the unroller, by shelling out to an external #SAT solver.
///
/// Results are memoized by DIMACS text: two formulas that encode to the same
/// CNF (same clauses, same variable count) hit the same cache entry, exactly
/// as in the reference implementation's module-level `cache` dict.
pub struct SatCounter {
    solver: Solver,
    symbols: SymbolSet,
    cache: HashMap<String, f64>,
    memoize: bool,
}

impl SatCounter {
    pub fn new() -> Self {
        Self {
            solver: Solver::Subprocess {
                binary: PathBuf::from(DEFAULT_SOLVER_BINARY),
                scratch_dir: None,
            },
            symbols: SymbolSet::default(),
            cache: HashMap::new(),
            memoize: true,
        }
    }

    /// A counter that never shells out: it counts solutions itself by
    /// brute-force enumeration. Not a production configuration — no CLI flag
    /// or environment variable selects it — but a deterministic stand-in for
    /// the external solver in this workspace's own test suite.
    pub fn brute_force() -> Self {
        Self {
            solver: Solver::BruteForce,
            symbols: SymbolSet::default(),
            cache: HashMap::new(),
            memoize: true,
        }
    }

    /// Point at a specific solver binary (e.g. from `MEASURE_SAT_BIN`). No-op
    /// on a [`Self::brute_force`] counter.
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        if let Solver::Subprocess { binary: slot, .. } = &mut self.solver {
            *slot = binary.into();
        }
        self
    }

    /// Write DIMACS scratch files under a specific directory (e.g. from
    /// `MEASURE_SCRATCH_DIR`) instead of the system temp directory. No-op on
    /// a [`Self::brute_force`] counter.
    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        if let Solver::Subprocess { scratch_dir, .. } = &mut self.solver {
            *scratch_dir = Some(dir.into());
        }
        self
    }

    /// Disable memoization (`MEASURE_CACHE_DISABLE`, or test isolation).
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    /// Number of distinct DIMACS encodings counted so far, for diagnostics.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Count the satisfying-assignment fraction of propositional text written
    /// in this counter's [`SymbolSet`].
    pub fn measure(&mut self, propositional_text: &str) -> SatResult<f64> {
        let prop = parse_prop(propositional_text, &self.symbols)?;
        match to_cnf(&prop) {
            CnfOutcome::Constant(true) => Ok(1.0),
            CnfOutcome::Constant(false) => Ok(0.0),
            CnfOutcome::Clauses { nvars, clauses } => {
                let dimacs = to_dimacs(nvars, &clauses);
                if self.memoize {
                    if let Some(hit) = self.cache.get(&dimacs) {
                        return Ok(*hit);
                    }
                }
                let solutions = self.run_solver(&dimacs, nvars, &clauses)?;
                let fraction = solutions / 2f64.powi(nvars as i32);
                if self.memoize {
                    self.cache.insert(dimacs, fraction);
                }
                Ok(fraction)
            }
        }
    }

    fn run_solver(&self, dimacs: &str, nvars: usize, clauses: &[Clause]) -> SatResult<f64> {
        match &self.solver {
            Solver::Subprocess { binary, scratch_dir } => {
                run_subprocess(binary, scratch_dir.as_deref(), dimacs)
            }
            Solver::BruteForce => brute_force_count(nvars, clauses),
        }
    }
}

fn run_subprocess(binary: &PathBuf, scratch_dir: Option<&std::path::Path>, dimacs: &str) -> SatResult<f64> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("ltlmeasure-").suffix(".cnf");
    let mut scratch = match scratch_dir {
        Some(dir) => builder.tempfile_in(dir),
        None => builder.tempfile(),
    }
    .map_err(|e| SatError::io(e.to_string()))?;
    scratch
        .write_all(dimacs.as_bytes())
        .map_err(|e| SatError::io(e.to_string()))?;
    scratch.flush().map_err(|e| SatError::io(e.to_string()))?;

    log::debug!("invoking {} on {}", binary.display(), scratch.path().display());
    let output = Command::new(binary)
        .arg(scratch.path())
        .output()
        .map_err(|e| SatError::solver_missing(binary.display().to_string(), e.to_string()))?;

    if !output.status.success() {
        return Err(SatError::solver_failed(
            binary.display().to_string(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_solution_count(&stdout)
}

/// Count satisfying assignments of `clauses` over `nvars` variables by
/// trying every assignment. `O(2^nvars * clauses)` — fine for the small
/// unrolled formulas this workspace's tests produce, nothing more.
fn brute_force_count(nvars: usize, clauses: &[Clause]) -> SatResult<f64> {
    if nvars > BRUTE_FORCE_MAX_VARS {
        return Err(SatError::brute_force_too_large(nvars, BRUTE_FORCE_MAX_VARS));
    }
    let mut solutions = 0u64;
    for assignment in 0u64..(1u64 << nvars) {
        let satisfied = clauses.iter().all(|clause| {
            clause.iter().any(|&lit| {
                let var = lit.unsigned_abs() as usize - 1;
                let bit = (assignment >> var) & 1 == 1;
                if lit > 0 {
                    bit
                } else {
                    !bit
                }
            })
        });
        if satisfied {
            solutions += 1;
        }
    }
    Ok(solutions as f64)
}

impl Default for SatCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse sharpSAT's `# solutions \n<digits>\n# END` footer.
fn parse_solution_count(stdout: &str) -> SatResult<f64> {
    let marker = "# solutions";
    let after_marker = stdout
        .find(marker)
        .map(|i| &stdout[i + marker.len()..])
        .ok_or_else(|| SatError::unparseable_output(stdout.to_string()))?;
    let digits: String = after_marker
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return Err(SatError::unparseable_output(stdout.to_string()));
    }
    digits
        .parse::<f64>()
        .map_err(|_| SatError::unparseable_output(stdout.to_string()))
}
