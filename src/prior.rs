//! Prior distributions over coin biases.
//!
//! Each builder returns a normalized [`Pmf`] keyed by integer biases on the
//! 0–100 scale.

use std::ops::RangeInclusive;

use tracing::debug;

use crate::error::{EvidenciaError, Result};
use crate::pmf::Pmf;

/// The full bias domain `0..=100`.
pub const BIAS_DOMAIN: RangeInclusive<u32> = 0..=100;

/// Uniform prior over `domain`.
///
/// # Errors
///
/// Returns [`crate::EvidenciaError::InvalidArgument`] if `domain` is empty.
pub fn uniform_prior(domain: RangeInclusive<u32>) -> Result<Pmf<u32>> {
    Pmf::from_domain(domain)
}

/// Uniform prior over `domain` with `excluded` given zero mass.
///
/// An `excluded` value outside `domain` leaves the prior uniform.
///
/// # Errors
///
/// Returns [`crate::EvidenciaError::InvalidArgument`] if `domain` is empty and
/// [`crate::EvidenciaError::DegenerateDistribution`] if `excluded` was its only
/// member.
///
/// # Example
///
/// ```
/// use evidencia::prior::{uniform_prior_excluding, BIAS_DOMAIN};
///
/// let prior = uniform_prior_excluding(BIAS_DOMAIN, 50).expect("valid prior");
/// assert_eq!(prior.get(&50), 0.0);
/// assert!((prior.get(&0) - 0.01).abs() < 1e-12);
/// ```
pub fn uniform_prior_excluding(domain: RangeInclusive<u32>, excluded: u32) -> Result<Pmf<u32>> {
    let in_domain = domain.contains(&excluded);
    let mut pmf = Pmf::from_domain(domain)?;
    if in_domain {
        pmf.set_mass(excluded, 0.0)?;
        pmf.normalize()?;
    }
    Ok(pmf)
}

/// Triangular prior with weight `|x - median| - median`, then normalized.
///
/// Every weight is `<= 0` while `domain` ends at or below `2 * median`, so
/// normalization divides by a negative total and the resulting masses peak
/// at `median` and fall to zero at `0` and `2 * median`. The weights are kept
/// exactly as written. Past `2 * median` they turn positive and the
/// normalized masses would go negative, so such domains are rejected.
///
/// # Errors
///
/// Returns [`crate::EvidenciaError::InvalidArgument`] if `domain` is empty or
/// extends past `2 * median`, and
/// [`crate::EvidenciaError::DegenerateDistribution`] if the weights sum to zero.
///
/// # Example
///
/// ```
/// use evidencia::prior::{triangle_prior, BIAS_DOMAIN};
///
/// let prior = triangle_prior(BIAS_DOMAIN, 50).expect("valid prior");
/// assert_eq!(prior.max_likelihood(), Some(&50));
/// assert!((prior.get(&25) * 2.0 - prior.get(&50)).abs() < 1e-12);
/// ```
pub fn triangle_prior(domain: RangeInclusive<u32>, median: u32) -> Result<Pmf<u32>> {
    if u64::from(*domain.end()) > 2 * u64::from(median) {
        return Err(EvidenciaError::invalid_argument(
            "median",
            median,
            &format!("at least half the domain end ({})", domain.end()),
        ));
    }
    let centre = f64::from(median);
    let weights: Vec<f64> = domain
        .clone()
        .map(|x| (f64::from(x) - centre).abs() - centre)
        .collect();
    let mut pmf = Pmf::from_domain_weighted(domain, weights)?;
    let total = pmf.normalize()?;
    debug!(median, total, "built triangle prior");
    Ok(pmf)
}
