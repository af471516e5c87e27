//! Bayes factors between a fair coin and simple or composite biased hypotheses.
//!
//! The biased hypothesis `B` can be a single bias, an unweighted mixture of a
//! few named biases, or a full prior over the bias domain. In every case the
//! factor is `P(D|B) / P(D|F)`.
//!
//! # Example
//!
//! ```
//! use evidencia::bayes_factor::{bayes_factor, BiasedHypothesis, FAIR_BIAS};
//! use evidencia::likelihood::Observation;
//! use evidencia::prior::{uniform_prior_excluding, BIAS_DOMAIN};
//!
//! let data = Observation::new(140, 110);
//!
//! let point = bayes_factor(data, FAIR_BIAS, &BiasedHypothesis::Point(56.0)).expect("valid");
//! assert!((point.factor - 6.076).abs() < 1e-3);
//!
//! let prior = uniform_prior_excluding(BIAS_DOMAIN, 50).expect("valid prior");
//! let uniform = bayes_factor(data, FAIR_BIAS, &BiasedHypothesis::Prior(prior)).expect("valid");
//! assert!(uniform.factor < 1.0);
//! ```

use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{EvidenciaError, Result};
use crate::likelihood::{euro_likelihood, Observation};
use crate::pmf::{HypothesisSpace, Pmf};

/// Bias of a fair coin on the 0–100 scale.
pub const FAIR_BIAS: f64 = 50.0;

/// How `P(D|B)` is computed for the biased hypothesis.
#[derive(Debug, Clone, PartialEq)]
pub enum BiasedHypothesis {
    /// A single bias value.
    Point(f64),
    /// Unweighted mean over a small set of biases.
    Mixture(Vec<f64>),
    /// Weighted sum over every bias of a prior.
    Prior(Pmf<u32>),
}

impl BiasedHypothesis {
    /// `P(D|B)` for this hypothesis.
    ///
    /// # Errors
    ///
    /// Returns [`EvidenciaError::InvalidArgument`] for an out-of-range bias or
    /// an empty mixture.
    pub fn likelihood(&self, observation: Observation) -> Result<f64> {
        match self {
            Self::Point(bias) => euro_likelihood(observation, *bias),
            Self::Mixture(biases) => mixture_likelihood(observation, biases),
            Self::Prior(prior) => prior_likelihood(prior, observation),
        }
    }
}

/// Unweighted mean of the likelihoods of `biases`.
///
/// # Errors
///
/// Returns [`EvidenciaError::InvalidArgument`] if `biases` is empty or any bias
/// is outside `[0, 100]`.
pub fn mixture_likelihood(observation: Observation, biases: &[f64]) -> Result<f64> {
    if biases.is_empty() {
        return Err(EvidenciaError::invalid_argument(
            "biases",
            "[]",
            "at least one sub-hypothesis",
        ));
    }
    let mut sum = 0.0;
    for &bias in biases {
        sum += euro_likelihood(observation, bias)?;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = biases.len() as f64;
    Ok(sum / n)
}

/// `Σ prior(h) · P(D|h)` over every hypothesis of `prior`.
///
/// Works with any [`HypothesisSpace`] whose hypotheses are biases on the
/// 0–100 scale.
///
/// # Errors
///
/// Returns [`EvidenciaError::InvalidArgument`] if a hypothesis lies outside
/// `[0, 100]`.
pub fn prior_likelihood<S>(prior: &S, observation: Observation) -> Result<f64>
where
    S: HypothesisSpace,
    S::Hypothesis: Copy + Into<f64>,
{
    let mut total = 0.0;
    for (&hypothesis, p) in prior.items() {
        let bias: f64 = hypothesis.into();
        let like = euro_likelihood(observation, bias)?;
        trace!(bias, p, like, "prior mixture term");
        total += p * like;
    }
    Ok(total)
}

/// Likelihood ratio `P(D|B) / P(D|F)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BayesFactor {
    /// `P(D|B)`
    pub numerator: f64,
    /// `P(D|F)`
    pub denominator: f64,
    /// `numerator / denominator`
    pub factor: f64,
}

impl BayesFactor {
    /// Builds the ratio of two likelihoods.
    ///
    /// # Errors
    ///
    /// Returns [`EvidenciaError::DegenerateDistribution`] if `denominator` is zero.
    pub fn new(numerator: f64, denominator: f64) -> Result<Self> {
        if denominator == 0.0 {
            return Err(EvidenciaError::degenerate(denominator));
        }
        Ok(Self {
            numerator,
            denominator,
            factor: numerator / denominator,
        })
    }

    /// Factor rounded to two decimals, as it is usually reported.
    #[must_use]
    pub fn rounded(&self) -> f64 {
        (self.factor * 100.0).round() / 100.0
    }

    /// Verbal strength on the Jeffreys scale.
    #[must_use]
    pub fn strength(&self) -> EvidenceStrength {
        EvidenceStrength::from_factor(self.factor)
    }
}

/// Jeffreys' categories for the weight of evidence in favor of `B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EvidenceStrength {
    /// Factor below 1 (or NaN): the data favor the fair coin.
    FavorsFair,
    /// 1 to 10^0.5
    BarelyWorthMentioning,
    /// 10^0.5 to 10
    Substantial,
    /// 10 to 10^1.5
    Strong,
    /// 10^1.5 to 100
    VeryStrong,
    /// Above 100
    Decisive,
}

impl EvidenceStrength {
    /// Classifies a Bayes factor.
    #[must_use]
    pub fn from_factor(factor: f64) -> Self {
        let log10 = factor.log10();
        if !(factor >= 1.0) {
            Self::FavorsFair
        } else if log10 < 0.5 {
            Self::BarelyWorthMentioning
        } else if log10 < 1.0 {
            Self::Substantial
        } else if log10 < 1.5 {
            Self::Strong
        } else if log10 < 2.0 {
            Self::VeryStrong
        } else {
            Self::Decisive
        }
    }
}

impl fmt::Display for EvidenceStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::FavorsFair => "favors fair",
            Self::BarelyWorthMentioning => "barely worth mentioning",
            Self::Substantial => "substantial",
            Self::Strong => "strong",
            Self::VeryStrong => "very strong",
            Self::Decisive => "decisive",
        };
        f.write_str(label)
    }
}

/// Bayes factor of `biased` against a coin with bias `fair_bias`.
///
/// # Errors
///
/// Returns [`EvidenciaError::InvalidArgument`] for out-of-range biases or an
/// empty mixture, and [`EvidenciaError::DegenerateDistribution`] if the data
/// are impossible under `fair_bias`.
pub fn bayes_factor(
    observation: Observation,
    fair_bias: f64,
    biased: &BiasedHypothesis,
) -> Result<BayesFactor> {
    let fair = euro_likelihood(observation, fair_bias)?;
    let numerator = biased.likelihood(observation)?;
    let result = BayesFactor::new(numerator, fair)?;
    debug!(
        heads = observation.heads,
        tails = observation.tails,
        factor = result.factor,
        "computed bayes factor"
    );
    Ok(result)
}
