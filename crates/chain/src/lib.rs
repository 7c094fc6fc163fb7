//! Markov chain value object and shared input validation.
//!
//! A [`MarkovChain`] bundles a transition matrix, its state names and an
//! [`Orientation`] flag. The analysis crates consume the row-stochastic form
//! and hand results back in the caller's orientation.
//!
//! # Quick start
//!
//! ```
//! use ergo_chain::{MarkovChain, Orientation};
//!
//! let mc = MarkovChain::from_rows(
//!     &[vec![0.9, 0.1], vec![0.5, 0.5]],
//!     ["sunny", "rainy"],
//!     Orientation::ByRow,
//! )
//! .unwrap();
//!
//! assert_eq!(mc.state_index("rainy").unwrap(), 1);
//! ```

pub mod chain;
pub mod error;
pub mod validate;

pub use chain::{MarkovChain, Orientation};
pub use error::ChainError;
pub use validate::{
    STOCHASTIC_TOLERANCE, ensure_row_stochastic, ensure_square, ensure_unique, first_missing,
};
