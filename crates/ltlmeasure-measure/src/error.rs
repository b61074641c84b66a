//! Error types for the measure evaluator, unifying the kernel and #SAT
//! bridge's own error types at this crate's boundary.

use std::fmt;

use ltlmeasure_kernel::KernelError;
use ltlmeasure_satcount::SatError;

pub type MeasureResult<T> = Result<T, MeasureError>;

/// A fatal failure in the measurement pipeline: always either an internal
/// bug (`Kernel`) or an external-collaborator failure (`Sat`).
#[derive(Debug)]
pub enum MeasureError {
    Kernel(KernelError),
    Sat(SatError),
}

impl fmt::Display for MeasureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasureError::Kernel(e) => write!(f, "internal error: {e}"),
            MeasureError::Sat(e) => write!(f, "model counter error: {e}"),
        }
    }
}

impl std::error::Error for MeasureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MeasureError::Kernel(e) => Some(e),
            MeasureError::Sat(e) => Some(e),
        }
    }
}

impl From<KernelError> for MeasureError {
    fn from(e: KernelError) -> Self {
        MeasureError::Kernel(e)
    }
}

impl From<SatError> for MeasureError {
    fn from(e: SatError) -> Self {
        MeasureError::Sat(e)
    }
}
