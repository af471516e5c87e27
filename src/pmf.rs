//! Discrete probability mass functions over hypothesis spaces.
//!
//! A [`Pmf`] maps hypotheses to non-negative masses. Masses may be left
//! unnormalized while a prior is being shaped (zeroing a hypothesis,
//! reweighting a region) and are rescaled with [`Pmf::normalize`] once the
//! shape is final.
//!
//! # Example
//!
//! ```
//! use evidencia::pmf::Pmf;
//!
//! // Uniform belief over biases 0..=100, then rule out a fair coin.
//! let mut prior = Pmf::from_domain(0..=100u32).expect("non-empty domain");
//! prior.set_mass(50, 0.0).expect("non-negative mass");
//! prior.normalize().expect("non-zero total");
//!
//! assert_eq!(prior.get(&50), 0.0);
//! assert!((prior.get(&49) - 0.01).abs() < 1e-12);
//! assert_eq!(prior.get(&500), 0.0);
//! ```

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::error::{EvidenciaError, Result};

/// Capability interface of a hypothesis space.
///
/// Anything that can enumerate `(hypothesis, probability)` pairs, look up a
/// single mass, overwrite one, and renormalize can be used as a prior.
/// Likelihoods are supplied separately as plain functions.
pub trait HypothesisSpace {
    /// Hypothesis identifier.
    type Hypothesis;

    /// Iterates over `(hypothesis, probability)` pairs in a deterministic order.
    fn items(&self) -> impl Iterator<Item = (&Self::Hypothesis, f64)>;

    /// Mass of `hypothesis`, or `0.0` when absent.
    fn get(&self, hypothesis: &Self::Hypothesis) -> f64;

    /// Overwrites (or inserts) the mass of `hypothesis`.
    ///
    /// # Errors
    ///
    /// Returns [`EvidenciaError::InvalidArgument`] if `mass` is negative or not finite.
    fn set_mass(&mut self, hypothesis: Self::Hypothesis, mass: f64) -> Result<()>;

    /// Rescales all masses to sum to one, returning the total before scaling.
    ///
    /// # Errors
    ///
    /// Returns [`EvidenciaError::DegenerateDistribution`] if the total mass is zero.
    fn normalize(&mut self) -> Result<f64>;
}

/// Probability mass function over hypotheses of type `H`.
///
/// Entries keep insertion order, so iteration is reproducible for a given
/// sequence of construction and mutation calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Pmf<H: Eq + Hash> {
    /// `(hypothesis, mass)` in insertion order
    entries: Vec<(H, f64)>,
    /// Position of each hypothesis in `entries`
    index: HashMap<H, usize>,
}

impl<H: Eq + Hash> Default for Pmf<H> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<H: Eq + Hash + Clone + Debug> Pmf<H> {
    /// Creates a PMF with uniform mass `1/n` over `values`.
    ///
    /// # Errors
    ///
    /// Returns [`EvidenciaError::InvalidArgument`] if `values` is empty or
    /// contains a duplicate.
    ///
    /// # Example
    ///
    /// ```
    /// use evidencia::pmf::Pmf;
    ///
    /// let pmf = Pmf::from_domain(vec!["heads", "tails"]).expect("distinct values");
    /// assert_eq!(pmf.get(&"heads"), 0.5);
    /// assert!(Pmf::from_domain(vec![1, 1]).is_err());
    /// ```
    pub fn from_domain<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = H>,
    {
        let mut pmf = Self::with_domain(values)?;
        #[allow(clippy::cast_precision_loss)]
        let mass = 1.0 / pmf.entries.len() as f64;
        for entry in &mut pmf.entries {
            entry.1 = mass;
        }
        Ok(pmf)
    }

    /// Creates a PMF with `mass[i] = weights[i]`, left unnormalized.
    ///
    /// Negative finite weights are accepted: some prior constructions only
    /// become a valid distribution after [`Pmf::normalize`] divides by a
    /// negative total.
    ///
    /// # Errors
    ///
    /// Returns [`EvidenciaError::InvalidArgument`] if the lengths differ, the
    /// domain is empty or has duplicates, or a weight is not finite.
    pub fn from_domain_weighted<I, W>(values: I, weights: W) -> Result<Self>
    where
        I: IntoIterator<Item = H>,
        W: IntoIterator<Item = f64>,
    {
        let mut pmf = Self::with_domain(values)?;
        let weights: Vec<f64> = weights.into_iter().collect();
        if weights.len() != pmf.entries.len() {
            return Err(EvidenciaError::invalid_argument(
                "weights",
                format!("{} weights", weights.len()),
                &format!("one weight per value ({})", pmf.entries.len()),
            ));
        }
        if let Some(bad) = weights.iter().find(|w| !w.is_finite()) {
            return Err(EvidenciaError::invalid_argument(
                "weights",
                bad,
                "finite values",
            ));
        }
        for (entry, weight) in pmf.entries.iter_mut().zip(weights) {
            entry.1 = weight;
        }
        Ok(pmf)
    }

    fn with_domain<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = H>,
    {
        let mut pmf = Self::default();
        for value in values {
            if pmf.index.contains_key(&value) {
                return Err(EvidenciaError::invalid_argument(
                    "values",
                    format!("{value:?}"),
                    "distinct hypothesis values",
                ));
            }
            pmf.index.insert(value.clone(), pmf.entries.len());
            pmf.entries.push((value, 0.0));
        }
        if pmf.entries.is_empty() {
            return Err(EvidenciaError::invalid_argument(
                "values",
                "[]",
                "non-empty domain",
            ));
        }
        Ok(pmf)
    }
}

impl<H: Eq + Hash + Clone> Pmf<H> {
    /// Creates an empty PMF, to be filled with [`Pmf::set_mass`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of hypotheses, including zero-mass ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no hypothesis has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all masses.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, p)| p).sum()
    }

    /// Mass of `hypothesis`, or `0.0` when absent.
    #[must_use]
    pub fn get(&self, hypothesis: &H) -> f64 {
        self.index
            .get(hypothesis)
            .map_or(0.0, |&i| self.entries[i].1)
    }

    /// Iterates over `(hypothesis, probability)` in insertion order.
    ///
    /// Each call starts a fresh pass over the full distribution.
    pub fn items(&self) -> Items<'_, H> {
        Items {
            inner: self.entries.iter(),
        }
    }

    /// Overwrites the mass of an existing hypothesis or appends a new one.
    ///
    /// # Errors
    ///
    /// Returns [`EvidenciaError::InvalidArgument`] if `mass` is negative or not finite.
    ///
    /// # Example
    ///
    /// ```
    /// use evidencia::pmf::Pmf;
    ///
    /// let mut pmf = Pmf::new();
    /// pmf.set_mass('a', 3.0).expect("valid mass");
    /// pmf.set_mass('b', 1.0).expect("valid mass");
    /// assert!(pmf.set_mass('c', -1.0).is_err());
    ///
    /// pmf.normalize().expect("non-zero total");
    /// assert_eq!(pmf.get(&'a'), 0.75);
    /// ```
    pub fn set_mass(&mut self, hypothesis: H, mass: f64) -> Result<()> {
        if !(mass >= 0.0 && mass.is_finite()) {
            return Err(EvidenciaError::invalid_argument(
                "mass",
                mass,
                "finite and >= 0",
            ));
        }
        match self.index.get(&hypothesis) {
            Some(&i) => self.entries[i].1 = mass,
            None => {
                self.index.insert(hypothesis.clone(), self.entries.len());
                self.entries.push((hypothesis, mass));
            }
        }
        Ok(())
    }

    /// Rescales every mass by `1/total` and returns `total`.
    ///
    /// # Errors
    ///
    /// Returns [`EvidenciaError::DegenerateDistribution`] if the PMF is empty
    /// or its total mass is zero or not finite.
    pub fn normalize(&mut self) -> Result<f64> {
        let total = self.total();
        if total == 0.0 || !total.is_finite() {
            return Err(EvidenciaError::degenerate(total));
        }
        let factor = 1.0 / total;
        for entry in &mut self.entries {
            entry.1 *= factor;
        }
        debug!(total, hypotheses = self.entries.len(), "normalized pmf");
        Ok(total)
    }

    /// Bayesian update: multiplies each mass by `likelihood(hypothesis)` and
    /// renormalizes.
    ///
    /// Returns the normalizing constant, i.e. the probability of the data
    /// under the prior. The PMF is left untouched if any likelihood fails.
    ///
    /// # Errors
    ///
    /// Propagates errors from `likelihood`; returns
    /// [`EvidenciaError::InvalidArgument`] for a negative likelihood and
    /// [`EvidenciaError::DegenerateDistribution`] if every posterior mass is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use evidencia::likelihood::{euro_likelihood, Observation};
    /// use evidencia::pmf::Pmf;
    ///
    /// let mut suite = Pmf::from_domain(0..=100u32).expect("non-empty domain");
    /// let data = Observation::new(140, 110);
    /// suite
    ///     .update(|&bias| euro_likelihood(data, f64::from(bias)))
    ///     .expect("valid likelihoods");
    ///
    /// assert_eq!(suite.max_likelihood(), Some(&56));
    /// ```
    pub fn update<F>(&mut self, mut likelihood: F) -> Result<f64>
    where
        F: FnMut(&H) -> Result<f64>,
    {
        let mut factors = Vec::with_capacity(self.entries.len());
        for (hypothesis, _) in &self.entries {
            let like = likelihood(hypothesis)?;
            if !(like >= 0.0 && like.is_finite()) {
                return Err(EvidenciaError::invalid_argument(
                    "likelihood",
                    like,
                    "finite and >= 0",
                ));
            }
            factors.push(like);
        }
        let prior = self.entries.clone();
        for (entry, like) in self.entries.iter_mut().zip(factors) {
            entry.1 *= like;
        }
        match self.normalize() {
            Ok(evidence) => {
                debug!(evidence, "updated pmf with data");
                Ok(evidence)
            }
            Err(err) => {
                self.entries = prior;
                Err(err)
            }
        }
    }

    /// Hypothesis with the largest mass; the earliest one wins ties.
    #[must_use]
    pub fn max_likelihood(&self) -> Option<&H> {
        let mut best: Option<&(H, f64)> = None;
        for entry in &self.entries {
            let better = match best {
                Some(b) => entry.1 > b.1,
                None => true,
            };
            if better {
                best = Some(entry);
            }
        }
        best.map(|(h, _)| h)
    }
}

impl<H: Eq + Hash + Copy + Into<f64>> Pmf<H> {
    /// Expected hypothesis value `Σ h·p`.
    ///
    /// Assumes the PMF is normalized.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.entries
            .iter()
            .map(|&(h, p)| {
                let h: f64 = h.into();
                h * p
            })
            .sum()
    }
}

impl<H: Eq + Hash + Clone + Ord> Pmf<H> {
    /// Smallest hypothesis whose cumulative probability reaches `fraction`.
    ///
    /// # Errors
    ///
    /// Returns [`EvidenciaError::InvalidArgument`] if `fraction` is outside
    /// `[0, 1]`, and [`EvidenciaError::DegenerateDistribution`] if the PMF
    /// has no mass.
    pub fn percentile(&self, fraction: f64) -> Result<&H> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(EvidenciaError::invalid_argument(
                "fraction",
                fraction,
                "in [0, 1]",
            ));
        }
        let sorted = self.sorted_support()?;
        let total: f64 = sorted.iter().map(|(_, p)| p).sum();
        let mut cumulative = 0.0;
        for &(hypothesis, p) in &sorted {
            cumulative += p;
            if cumulative / total >= fraction {
                return Ok(hypothesis);
            }
        }
        // Rounding can leave the final cumulative sum just under 1.0.
        sorted
            .last()
            .map(|(h, _)| *h)
            .ok_or_else(|| EvidenciaError::degenerate(total))
    }

    /// Central credible interval covering `percentage` percent of the mass.
    ///
    /// # Errors
    ///
    /// Returns [`EvidenciaError::InvalidArgument`] if `percentage` is not in
    /// `(0, 100]`, and [`EvidenciaError::DegenerateDistribution`] if the PMF
    /// has no mass.
    ///
    /// # Example
    ///
    /// ```
    /// use evidencia::pmf::Pmf;
    ///
    /// let pmf = Pmf::from_domain(vec![4, 1, 3, 2]).expect("distinct values");
    /// let (low, high) = pmf.credible_interval(50.0).expect("valid percentage");
    /// assert_eq!((*low, *high), (1, 3));
    /// ```
    pub fn credible_interval(&self, percentage: f64) -> Result<(&H, &H)> {
        if !(percentage > 0.0 && percentage <= 100.0) {
            return Err(EvidenciaError::invalid_argument(
                "percentage",
                percentage,
                "in (0, 100]",
            ));
        }
        let tail = (100.0 - percentage) / 2.0;
        let low = self.percentile(tail / 100.0)?;
        let high = self.percentile((100.0 - tail) / 100.0)?;
        Ok((low, high))
    }

    fn sorted_support(&self) -> Result<Vec<(&H, f64)>> {
        let total = self.total();
        if self.entries.is_empty() || total == 0.0 || !total.is_finite() {
            return Err(EvidenciaError::degenerate(total));
        }
        let mut sorted: Vec<(&H, f64)> = self.items().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));
        Ok(sorted)
    }
}

impl<H: Eq + Hash + Clone> HypothesisSpace for Pmf<H> {
    type Hypothesis = H;

    fn items(&self) -> impl Iterator<Item = (&H, f64)> {
        Pmf::items(self)
    }

    fn get(&self, hypothesis: &H) -> f64 {
        Pmf::get(self, hypothesis)
    }

    fn set_mass(&mut self, hypothesis: H, mass: f64) -> Result<()> {
        Pmf::set_mass(self, hypothesis, mass)
    }

    fn normalize(&mut self) -> Result<f64> {
        Pmf::normalize(self)
    }
}

impl<'a, H: Eq + Hash + Clone> IntoIterator for &'a Pmf<H> {
    type Item = (&'a H, f64);
    type IntoIter = Items<'a, H>;

    fn into_iter(self) -> Self::IntoIter {
        self.items()
    }
}

/// Iterator over the `(hypothesis, probability)` pairs of a [`Pmf`].
#[derive(Debug, Clone)]
pub struct Items<'a, H> {
    inner: std::slice::Iter<'a, (H, f64)>,
}

impl<'a, H> Iterator for Items<'a, H> {
    type Item = (&'a H, f64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(h, p)| (h, *p))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<H> ExactSizeIterator for Items<'_, H> {}

#[cfg(test)]
#[path = "pmf_tests.rs"]
mod tests;
