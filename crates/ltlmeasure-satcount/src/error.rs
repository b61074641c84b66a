//! Error types for the propositional #SAT bridge.

use std::fmt;

pub type SatResult<T> = Result<T, SatError>;

/// Failure modes for parsing, encoding, or counting a propositional formula.
#[derive(Debug)]
pub enum SatError {
    /// The propositional text produced by the unroller did not parse.
    ///
    /// Indicates a bug upstream: the unroller's output is expected to always
    /// be well-formed propositional text in the agreed [`SymbolSet`](ltlmeasure_base::SymbolSet).
    Malformed { message: String, offset: usize },
    /// The model-counter binary could not be spawned (not on `PATH`, missing
    /// execute permission, ...).
    SolverMissing { binary: String, source: String },
    /// The model-counter binary ran but exited with a non-zero status.
    SolverFailed { binary: String, stderr: String },
    /// The model-counter's stdout didn't match the expected `# solutions`
    /// footer.
    UnparseableOutput { stdout: String },
    /// A scratch-file write or read failed.
    Io { message: String },
    /// The in-process brute-force counter (test-only) was asked to count a
    /// formula wider than it is willing to enumerate.
    BruteForceTooLarge { nvars: usize, limit: usize },
}

impl fmt::Display for SatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SatError::Malformed { message, offset } => {
                write!(f, "malformed propositional text at offset {offset}: {message}")
            }
            SatError::SolverMissing { binary, source } => {
                write!(f, "could not launch model counter '{binary}': {source}")
            }
            SatError::SolverFailed { binary, stderr } => {
                write!(f, "model counter '{binary}' exited with an error: {stderr}")
            }
            SatError::UnparseableOutput { stdout } => {
                write!(f, "could not find '# solutions' in model counter output: {stdout}")
            }
            SatError::Io { message } => write!(f, "scratch file error: {message}"),
            SatError::BruteForceTooLarge { nvars, limit } => write!(
                f,
                "brute-force counter refuses {nvars} variables (limit {limit})"
            ),
        }
    }
}

impl std::error::Error for SatError {}

impl SatError {
    pub fn malformed(message: impl Into<String>, offset: usize) -> Self {
        SatError::Malformed {
            message: message.into(),
            offset,
        }
    }

    pub fn solver_missing(binary: impl Into<String>, source: impl Into<String>) -> Self {
        SatError::SolverMissing {
            binary: binary.into(),
            source: source.into(),
        }
    }

    pub fn solver_failed(binary: impl Into<String>, stderr: impl Into<String>) -> Self {
        SatError::SolverFailed {
            binary: binary.into(),
            stderr: stderr.into(),
        }
    }

    pub fn unparseable_output(stdout: impl Into<String>) -> Self {
        SatError::UnparseableOutput {
            stdout: stdout.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        SatError::Io {
            message: message.into(),
        }
    }

    pub fn brute_force_too_large(nvars: usize, limit: usize) -> Self {
        SatError::BruteForceTooLarge { nvars, limit }
    }
}
