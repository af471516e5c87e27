//! Odds form of Bayes' theorem.
//!
//! Posterior odds are prior odds times the Bayes factor, which makes belief
//! updates from a reported likelihood ratio a single multiplication.
//!
//! # Example
//!
//! ```
//! use evidencia::odds::{odds, probability, update_belief};
//!
//! // A skeptic who gives ESP 1-in-1000 odds sees an experiment with a
//! // Bayes factor of 6 in its favor.
//! let prior = probability(1.0 / 1000.0).expect("non-negative odds");
//! let posterior = update_belief(prior, 6.0).expect("valid inputs");
//!
//! assert!((odds(posterior).expect("p < 1") - 0.006).abs() < 1e-12);
//! ```

use tracing::debug;

use crate::error::{EvidenciaError, Result};

/// Odds in favor of an event with probability `p`: `p / (1 - p)`.
///
/// # Errors
///
/// Returns [`EvidenciaError::InvalidArgument`] if `p` is not in `[0, 1)`.
pub fn odds(p: f64) -> Result<f64> {
    if !(0.0..1.0).contains(&p) {
        return Err(EvidenciaError::invalid_argument("p", p, "in [0, 1)"));
    }
    Ok(p / (1.0 - p))
}

/// Probability corresponding to odds `o`: `o / (1 + o)`.
///
/// Infinite odds map to certainty.
///
/// # Errors
///
/// Returns [`EvidenciaError::InvalidArgument`] if `o` is negative or NaN.
pub fn probability(o: f64) -> Result<f64> {
    if !(o >= 0.0) {
        return Err(EvidenciaError::invalid_argument("odds", o, ">= 0"));
    }
    if o.is_infinite() {
        return Ok(1.0);
    }
    Ok(o / (1.0 + o))
}

/// Probability from odds given as a ratio `yes : no`.
///
/// # Errors
///
/// Returns [`EvidenciaError::InvalidArgument`] if either side is negative or
/// not finite, or both are zero.
pub fn probability_from_ratio(yes: f64, no: f64) -> Result<f64> {
    for (param, value) in [("yes", yes), ("no", no)] {
        if !(value >= 0.0 && value.is_finite()) {
            return Err(EvidenciaError::invalid_argument(param, value, "finite and >= 0"));
        }
    }
    if yes + no == 0.0 {
        return Err(EvidenciaError::invalid_argument(
            "yes + no",
            0,
            "> 0",
        ));
    }
    Ok(yes / (yes + no))
}

/// Posterior probability after evidence with Bayes factor `factor`.
///
/// # Errors
///
/// Returns [`EvidenciaError::InvalidArgument`] if `prior` is not in `[0, 1)`
/// or `factor` is negative.
pub fn update_belief(prior: f64, factor: f64) -> Result<f64> {
    if !(factor >= 0.0) {
        return Err(EvidenciaError::invalid_argument("factor", factor, ">= 0"));
    }
    let posterior_odds = odds(prior)? * factor;
    let posterior = probability(posterior_odds)?;
    debug!(prior, factor, posterior, "updated belief");
    Ok(posterior)
}

/// Bayes factor implied by moving from `prior` to `posterior` belief.
///
/// # Errors
///
/// Returns [`EvidenciaError::InvalidArgument`] if either probability is not in
/// `[0, 1)`, or `prior` is zero.
pub fn evidence_factor(posterior: f64, prior: f64) -> Result<f64> {
    let prior_odds = odds(prior)?;
    if prior_odds == 0.0 {
        return Err(EvidenciaError::invalid_argument("prior", prior, "in (0, 1)"));
    }
    Ok(odds(posterior)? / prior_odds)
}
