//! Time-dependent quantities of finite Markov chains.
//!
//! All functions take a row-oriented transition matrix and 0-based state
//! indices.
//!
//! - [`first_passage`]: per-step first-visit probabilities from one state.
//! - [`first_passage_aggregate`]: the same, summed over a set of targets.
//! - [`expected_rewards`]: finite-horizon value recurrence `v ← r + P v`.
//! - [`expected_reward_before_hitting`]: reward collected along the
//!   distribution of a walk from one state.
//!
//! # Quick start
//!
//! ```
//! use ergo_temporal::{expected_rewards, first_passage};
//! use nalgebra::{DMatrix, DVector};
//!
//! let p = DMatrix::from_row_slice(2, 2, &[0.9, 0.1, 0.5, 0.5]);
//! let f = first_passage(&p, 0, 3).unwrap();
//! assert!((f[(1, 1)] - 0.09).abs() < 1e-12);
//!
//! let v = expected_rewards(&p, 1, &DVector::from_vec(vec![1.0, 0.0])).unwrap();
//! assert!((v[0] - 1.9).abs() < 1e-12);
//! ```

pub mod error;
pub mod passage;
pub mod rewards;
mod validate;

pub use error::TemporalError;
pub use passage::{first_passage, first_passage_aggregate};
pub use rewards::{expected_reward_before_hitting, expected_rewards};
