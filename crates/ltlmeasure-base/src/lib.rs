//! # ltlmeasure-base
//!
//! Pure structural atoms for the ltlmeasure workspace.
//!
//! This crate provides [`DepSet`], the (AP, time-index) dependency tracker
//! shared by the dependency analyzer and the measure evaluator, and
//! [`SymbolSet`], the five-spelling bundle shared by the surface parser and
//! the unroller's output text. It has no knowledge of LTL syntax or I/O.
//!
//! # Example
//!
//! ```
//! use ltlmeasure_base::DepSet;
//!
//! let p = DepSet::literal("p", 0);
//! let q = DepSet::literal("q", 0);
//! assert!(p.is_disjoint(&q));
//! assert_eq!(p.union(&q).count(), 2);
//! ```

pub mod depset;
pub mod symbolset;

pub use depset::DepSet;
pub use symbolset::SymbolSet;
