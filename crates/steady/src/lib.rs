//! Long-run behaviour of finite Markov chains.
//!
//! Stationary distributions are computed per recurrent class from the
//! unit-eigenvalue left eigenvector of the class sub-matrix. Hitting
//! probabilities come from one first-step linear system per target state.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────┐     ┌───────────────────┐     ┌──────────────────┐
//!  │ classify │────▶│ per closed class  │────▶│ normalise, sort  │
//!  │          │     │ eigen (rayon)     │     │ steady_states    │
//!  └──────────┘     └───────────────────┘     └──────────────────┘
//!        │          ┌───────────────────┐
//!        └─────────▶│ per target LU     │────▶ hitting_probabilities
//!                   │ solve (rayon)     │
//!                   └───────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```
//! use ergo_chain::{MarkovChain, Orientation};
//! use ergo_steady::{SteadyConfig, hitting_probabilities, steady_states};
//!
//! let chain = MarkovChain::from_rows(
//!     &[vec![0.9, 0.1], vec![0.5, 0.5]],
//!     ["sunny", "rainy"],
//!     Orientation::ByRow,
//! )
//! .unwrap();
//!
//! let pi = steady_states(&chain, &SteadyConfig::default()).unwrap();
//! assert!((pi[(0, 0)] - 5.0 / 6.0).abs() < 1e-10);
//!
//! let h = hitting_probabilities(&chain).unwrap();
//! assert!((h[(1, 0)] - 1.0).abs() < 1e-10);
//! ```

pub mod config;
pub(crate) mod eigen;
pub mod error;
pub mod hitting;
pub mod steady;

pub use config::SteadyConfig;
pub use error::SteadyError;
pub use hitting::{hitting_probabilities, hitting_probabilities_by_row};
pub use steady::{steady_states, steady_states_by_row};
