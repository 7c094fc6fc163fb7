//! Bayesian inference for Markov chain transitions under Dirichlet priors.
//!
//! Each state's outgoing row is modelled as an independent Dirichlet with
//! concentrations taken from a labelled hyperparameter matrix (all ones by
//! default). Labels may arrive in any order; every computation aligns
//! matrices to sorted label order first.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────────────┐
//!  │  sequences   │────▶│ state universe │────▶│ TransitionCounts         │
//!  │  + α (opt.)  │     │ + sorted α     │     │ predictive / posterior   │
//!  └──────────────┘     └────────────────┘     └──────────────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```
//! use ergo_bayes::predictive_log_probability;
//!
//! let lp = predictive_log_probability(&["a", "b", "a"], &["a", "b"], None).unwrap();
//! assert!((lp - (2.0_f64 / 3.0).ln()).abs() < 1e-12);
//! ```

pub mod counts;
pub mod error;
pub mod hyper;
pub mod labeled;
pub mod posterior;
pub mod predictive;
pub mod prior;

pub use counts::TransitionCounts;
pub use error::BayesError;
pub use hyper::validate_hyperparameters;
pub use labeled::LabeledMatrix;
pub use posterior::{posterior_hyperparameters, posterior_mean};
pub use predictive::predictive_log_probability;
pub use prior::{ROW_SUM_TOLERANCE, prior_log_probability};
