//! Likelihood of coin-spin observations under a bias hypothesis.
//!
//! A bias is expressed on the 0–100 scale: `56.0` means heads comes up 56%
//! of the time.

use serde::{Deserialize, Serialize};

use crate::error::{EvidenciaError, Result};

/// Observed heads and tails counts.
///
/// # Example
///
/// ```
/// use evidencia::likelihood::Observation;
///
/// let data = Observation::new(140, 110);
/// assert_eq!(data.trials(), 250);
/// assert!((data.observed_bias() - 56.0).abs() < 1e-12);
///
/// assert!(Observation::from_counts(-1, 3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Observation {
    /// Number of heads
    pub heads: u32,
    /// Number of tails
    pub tails: u32,
}

impl Observation {
    /// Creates an observation from non-negative counts.
    #[must_use]
    pub fn new(heads: u32, tails: u32) -> Self {
        Self { heads, tails }
    }

    /// Creates an observation from signed counts.
    ///
    /// # Errors
    ///
    /// Returns [`EvidenciaError::InvalidArgument`] if either count is negative
    /// or does not fit in a `u32`.
    pub fn from_counts(heads: i64, tails: i64) -> Result<Self> {
        let heads = u32::try_from(heads)
            .map_err(|_| EvidenciaError::invalid_argument("heads", heads, "in [0, u32::MAX]"))?;
        let tails = u32::try_from(tails)
            .map_err(|_| EvidenciaError::invalid_argument("tails", tails, "in [0, u32::MAX]"))?;
        Ok(Self { heads, tails })
    }

    /// Total number of spins.
    #[must_use]
    pub fn trials(&self) -> u64 {
        u64::from(self.heads) + u64::from(self.tails)
    }

    /// Fraction of heads on the 0–100 scale; `0.0` for an empty observation.
    #[must_use]
    pub fn observed_bias(&self) -> f64 {
        let trials = self.trials();
        if trials == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let trials = trials as f64;
        100.0 * f64::from(self.heads) / trials
    }
}

/// Probability of `observation` if heads has probability `bias / 100`.
///
/// Computes `p^heads · (1-p)^tails` in `f64`. Values around `1e-76` (250
/// spins) keep full double precision; `(0, 0)` has likelihood one for any
/// bias.
///
/// # Errors
///
/// Returns [`EvidenciaError::InvalidArgument`] if `bias` is outside `[0, 100]`.
///
/// # Example
///
/// ```
/// use evidencia::likelihood::{euro_likelihood, Observation};
///
/// let data = Observation::new(140, 110);
/// let fair = euro_likelihood(data, 50.0).expect("bias in range");
/// assert!((fair / 5.527147875260445e-76 - 1.0).abs() < 1e-12);
/// ```
pub fn euro_likelihood(observation: Observation, bias: f64) -> Result<f64> {
    if !(0.0..=100.0).contains(&bias) {
        return Err(EvidenciaError::invalid_argument(
            "bias",
            bias,
            "in [0, 100]",
        ));
    }
    let p_heads = bias / 100.0;
    let p_tails = 1.0 - p_heads;
    Ok(power(p_heads, observation.heads) * power(p_tails, observation.tails))
}

/// `base^exponent`, falling back to `powf` past `i32::MAX`.
fn power(base: f64, exponent: u32) -> f64 {
    match i32::try_from(exponent) {
        Ok(e) => base.powi(e),
        Err(_) => base.powf(f64::from(exponent)),
    }
}
