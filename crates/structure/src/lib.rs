//! Structural analysis of finite Markov chains.
//!
//! All functions take a row-oriented transition matrix (row = source state)
//! and work on state indices; [`summarize`] and [`canonical_form`] take a
//! [`MarkovChain`](ergo_chain::MarkovChain) and attach state names.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//!  │ reachability │────▶│   classify   │────▶│ canonical_form   │
//!  │  (DFS × n)   │     │ (closed/open)│     │ summarize/period │
//!  └──────────────┘     └──────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```
//! use ergo_structure::{classify, period};
//! use nalgebra::DMatrix;
//!
//! let p = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0]);
//! let classes = classify(&p).unwrap();
//! assert!(classes.is_irreducible());
//! assert_eq!(period(&p).unwrap(), 2);
//! ```

pub mod canonical;
pub mod classes;
pub mod error;
pub mod period;
pub mod reach;
pub mod summary;

pub use canonical::{canonical_form, canonical_order, permute};
pub use classes::{Classification, CommClass, classify, classify_reachability};
pub use error::StructureError;
pub use period::{gcd, period, period_with_root};
pub use reach::{Reachability, reachability};
pub use summary::{ChainSummary, class_labels, summarize};
