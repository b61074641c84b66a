//! # ltlmeasure-kernel
//!
//! The LTL formula AST, its bottom-up traversal primitive, the derived-
//! operator simplifier, and the dependency analyzer.
//!
//! # Architecture
//!
//! ```text
//! Formula (from ltlmeasure-syntax)
//!        |
//!        v
//!   simplify::simplify        -- rewrites Implies/Iff/Release/WeakUntil away
//!        |
//!        v
//!   deps::compute_deps        -- annotates with DepSet + lr_disjoint
//!        |
//!        v
//!   Annotated                 -- consumed by ltlmeasure-measure
//! ```
//!
//! This crate has no knowledge of surface syntax, #SAT solving, or I/O.

pub mod ast;
pub mod deps;
pub mod error;
pub mod simplify;

pub use ast::{traverse, Formula};
pub use deps::{compute_deps, Annotated, AnnotatedNode};
pub use error::{KernelError, KernelResult};
pub use simplify::simplify;
