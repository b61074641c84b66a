//! Error types for the kernel crate.

use std::fmt;

/// Errors produced while analyzing a [`crate::ast::Formula`].
///
/// A `KernelError` always indicates a bug: the simplifier's post-condition
/// guarantees only the reduced-core node kinds reach the dependency
/// analyzer, so reaching any other kind here means simplification was
/// skipped or a new AST variant was added without updating this pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelError {
    /// The node kind that could not be analyzed.
    pub node_kind: String,
}

impl KernelError {
    pub fn unsupported_node(node_kind: impl Into<String>) -> Self {
        Self {
            node_kind: node_kind.into(),
        }
    }
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported AST node reached the dependency analyzer: {}",
            self.node_kind
        )
    }
}

impl std::error::Error for KernelError {}

/// Alias for `std::result::Result<T, KernelError>`.
pub type KernelResult<T> = std::result::Result<T, KernelError>;
