//! Evidencia: discrete probability mass functions and Bayes factors.
//!
//! Evidencia models beliefs over a discrete set of hypotheses and measures
//! how strongly data favor one hypothesis over another. The running example
//! is the Euro problem: a Belgian one-euro coin spun 250 times came up heads
//! 140 times. Is that evidence the coin is biased?
//!
//! # Quick Start
//!
//! ```
//! use evidencia::prelude::*;
//!
//! let data = Observation::new(140, 110);
//!
//! // Point hypothesis: the coin's bias is exactly the observed 56%.
//! let point = bayes_factor(data, FAIR_BIAS, &BiasedHypothesis::Point(56.0)).unwrap();
//! assert_eq!(point.rounded(), 6.08);
//!
//! // Composite hypothesis: any bias except 50, equally likely.
//! let prior = uniform_prior_excluding(BIAS_DOMAIN, 50).unwrap();
//! let uniform = bayes_factor(data, FAIR_BIAS, &BiasedHypothesis::Prior(prior)).unwrap();
//! assert_eq!(uniform.rounded(), 0.47);
//! ```
//!
//! # Modules
//!
//! - [`pmf`]: `Pmf` and the `HypothesisSpace` capability trait
//! - [`likelihood`]: observations and the Euro likelihood function
//! - [`bayes_factor`]: point, mixture and prior-weighted Bayes factors
//! - [`prior`]: uniform, uniform-excluding and triangular priors over biases
//! - [`odds`]: odds form of Bayes' theorem for belief updates
//! - [`scenario`]: JSON-configurable scenario evaluating every pattern at once

pub mod bayes_factor;
pub mod error;
pub mod likelihood;
pub mod odds;
pub mod pmf;
pub mod prelude;
pub mod prior;
pub mod scenario;

pub use error::{EvidenciaError, Result};
pub use pmf::{HypothesisSpace, Pmf};

#[cfg(test)]
mod tests_evidence_contract;
