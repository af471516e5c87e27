//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use evidencia::prelude::*;
//! ```

pub use crate::bayes_factor::{
    bayes_factor, mixture_likelihood, prior_likelihood, BayesFactor, BiasedHypothesis,
    EvidenceStrength, FAIR_BIAS,
};
pub use crate::error::EvidenciaError;
pub use crate::likelihood::{euro_likelihood, Observation};
pub use crate::odds::{evidence_factor, odds, probability, probability_from_ratio, update_belief};
pub use crate::pmf::{HypothesisSpace, Pmf};
pub use crate::prior::{triangle_prior, uniform_prior, uniform_prior_excluding, BIAS_DOMAIN};
pub use crate::scenario::{EuroScenario, EvidenceReport, PosteriorSummary};
