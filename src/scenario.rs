//! Configurable Euro-problem scenario.
//!
//! A scenario bundles the observed spins with the hypotheses to compare and
//! evaluates every Bayes-factor pattern in one pass. Defaults reproduce the
//! classic exercise: 140 heads and 110 tails from 250 spins of a Belgian
//! one-euro coin.
//!
//! # Example
//!
//! ```
//! use evidencia::scenario::EuroScenario;
//!
//! let scenario = EuroScenario::from_json(r#"{ "heads": 140, "tails": 110 }"#)
//!     .expect("valid config");
//! let report = scenario.evaluate().expect("valid scenario");
//!
//! assert_eq!(report.point.rounded(), 6.08);
//! assert_eq!(report.triangle.rounded(), 0.84);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bayes_factor::{bayes_factor, BayesFactor, BiasedHypothesis, FAIR_BIAS};
use crate::error::{EvidenciaError, Result};
use crate::likelihood::{euro_likelihood, Observation};
use crate::prior::{triangle_prior, uniform_prior, uniform_prior_excluding};

/// Scenario configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EuroScenario {
    /// Observed heads
    pub heads: u32,
    /// Observed tails
    pub tails: u32,
    /// Bias of the fair hypothesis (0–100)
    pub fair_bias: f64,
    /// Sub-hypotheses of the unweighted mixture
    pub mixture_biases: Vec<f64>,
    /// Lowest bias in the prior domain
    pub domain_min: u32,
    /// Highest bias in the prior domain
    pub domain_max: u32,
    /// Bias given zero mass in the uniform prior
    pub excluded: Option<u32>,
    /// Peak of the triangular prior
    pub triangle_median: u32,
    /// Width of the posterior credible interval, in percent
    pub credible_percentage: f64,
}

impl Default for EuroScenario {
    fn default() -> Self {
        Self {
            heads: 140,
            tails: 110,
            fair_bias: FAIR_BIAS,
            mixture_biases: vec![40.0, 60.0],
            domain_min: 0,
            domain_max: 100,
            excluded: Some(50),
            triangle_median: 50,
            credible_percentage: 90.0,
        }
    }
}

/// Bayes factors for every hypothesis pattern plus a posterior summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvidenceReport {
    /// The data
    pub observation: Observation,
    /// Observed fraction of heads (0–100)
    pub observed_bias: f64,
    /// Point hypothesis at the observed bias
    pub point: BayesFactor,
    /// Unweighted mixture of `mixture_biases`
    pub mixture: BayesFactor,
    /// Uniform prior, optionally excluding one bias
    pub uniform: BayesFactor,
    /// Triangular prior
    pub triangle: BayesFactor,
    /// Posterior under a uniform prior over the domain
    pub posterior: PosteriorSummary,
}

/// Summary statistics of a posterior over biases.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PosteriorSummary {
    /// Most probable bias
    pub max_likelihood: u32,
    /// Posterior mean bias
    pub mean: f64,
    /// Central credible interval `(low, high)`
    pub credible_interval: (u32, u32),
}

impl EuroScenario {
    /// Parses and validates a JSON scenario; missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`EvidenciaError::Config`] for malformed JSON and
    /// [`EvidenciaError::InvalidArgument`] if validation fails.
    pub fn from_json(json: &str) -> Result<Self> {
        let scenario: Self = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// The observed spins.
    #[must_use]
    pub fn observation(&self) -> Observation {
        Observation::new(self.heads, self.tails)
    }

    /// Checks ranges and domain consistency.
    ///
    /// # Errors
    ///
    /// Returns [`EvidenciaError::InvalidArgument`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        check_bias("fair_bias", self.fair_bias)?;
        if self.mixture_biases.is_empty() {
            return Err(EvidenciaError::invalid_argument(
                "mixture_biases",
                "[]",
                "at least one bias",
            ));
        }
        for &bias in &self.mixture_biases {
            check_bias("mixture_biases", bias)?;
        }
        if self.domain_max > 100 || self.domain_min > self.domain_max {
            return Err(EvidenciaError::invalid_argument(
                "domain",
                format!("{}..={}", self.domain_min, self.domain_max),
                "domain_min <= domain_max <= 100",
            ));
        }
        if !(self.domain_min..=self.domain_max).contains(&self.triangle_median) {
            return Err(EvidenciaError::invalid_argument(
                "triangle_median",
                self.triangle_median,
                "inside the prior domain",
            ));
        }
        if u64::from(self.domain_max) > 2 * u64::from(self.triangle_median) {
            return Err(EvidenciaError::invalid_argument(
                "triangle_median",
                self.triangle_median,
                "at least domain_max / 2",
            ));
        }
        if !(self.credible_percentage > 0.0 && self.credible_percentage <= 100.0) {
            return Err(EvidenciaError::invalid_argument(
                "credible_percentage",
                self.credible_percentage,
                "in (0, 100]",
            ));
        }
        Ok(())
    }

    /// Computes every Bayes factor of the scenario.
    ///
    /// # Errors
    ///
    /// Returns [`EvidenciaError::InvalidArgument`] if the scenario is invalid
    /// and [`EvidenciaError::DegenerateDistribution`] if the data are
    /// impossible under the fair hypothesis or a prior has no mass.
    pub fn evaluate(&self) -> Result<EvidenceReport> {
        self.validate()?;
        let data = self.observation();
        let domain = self.domain_min..=self.domain_max;
        let observed_bias = data.observed_bias();

        let point = bayes_factor(data, self.fair_bias, &BiasedHypothesis::Point(observed_bias))?;
        let mixture = bayes_factor(
            data,
            self.fair_bias,
            &BiasedHypothesis::Mixture(self.mixture_biases.clone()),
        )?;
        let uniform_hypo = match self.excluded {
            Some(excluded) => uniform_prior_excluding(domain.clone(), excluded)?,
            None => uniform_prior(domain.clone())?,
        };
        let uniform = bayes_factor(data, self.fair_bias, &BiasedHypothesis::Prior(uniform_hypo))?;
        let triangle_hypo = triangle_prior(domain.clone(), self.triangle_median)?;
        let triangle = bayes_factor(data, self.fair_bias, &BiasedHypothesis::Prior(triangle_hypo))?;

        let mut suite = uniform_prior(domain)?;
        suite.update(|&bias| euro_likelihood(data, f64::from(bias)))?;
        let max_likelihood = suite
            .max_likelihood()
            .copied()
            .ok_or_else(|| EvidenciaError::degenerate(0.0))?;
        let (low, high) = suite.credible_interval(self.credible_percentage)?;
        let posterior = PosteriorSummary {
            max_likelihood,
            mean: suite.mean(),
            credible_interval: (*low, *high),
        };

        debug!(
            point = point.factor,
            mixture = mixture.factor,
            uniform = uniform.factor,
            triangle = triangle.factor,
            "evaluated euro scenario"
        );

        Ok(EvidenceReport {
            observation: data,
            observed_bias,
            point,
            mixture,
            uniform,
            triangle,
            posterior,
        })
    }
}

fn check_bias(param: &str, bias: f64) -> Result<()> {
    if (0.0..=100.0).contains(&bias) {
        Ok(())
    } else {
        Err(EvidenciaError::invalid_argument(param, bias, "in [0, 100]"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reproduces_exercise() {
        let report = EuroScenario::default().evaluate().expect("valid scenario");
        assert_eq!(report.observation, Observation::new(140, 110));
        assert!((report.observed_bias - 56.0).abs() < 1e-12);
        assert_eq!(report.point.rounded(), 6.08);
        assert_eq!(report.mixture.rounded(), 1.33);
        assert_eq!(report.uniform.rounded(), 0.47);
        assert_eq!(report.triangle.rounded(), 0.84);
    }

    #[test]
    fn test_posterior_summary() {
        let report = EuroScenario::default().evaluate().expect("valid scenario");
        assert_eq!(report.posterior.max_likelihood, 56);
        assert!((report.posterior.mean - 55.95).abs() < 0.1);
        let (low, high) = report.posterior.credible_interval;
        assert!(low < 56 && 56 < high);
        assert!((50..=53).contains(&low));
        assert!((59..=62).contains(&high));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let scenario = EuroScenario::from_json(r#"{"excluded": null}"#).expect("valid config");
        assert_eq!(scenario.heads, 140);
        assert_eq!(scenario.excluded, None);
        assert_eq!(scenario.mixture_biases, vec![40.0, 60.0]);
    }

    #[test]
    fn test_from_json_malformed() {
        let err = EuroScenario::from_json("{ heads: ").expect_err("malformed JSON");
        assert!(matches!(err, EvidenciaError::Config(_)));
    }

    #[test]
    fn test_from_json_unknown_field() {
        let err = EuroScenario::from_json(r#"{"flips": 3}"#).expect_err("unknown field");
        assert!(matches!(err, EvidenciaError::Config(_)));
    }

    #[test]
    fn test_from_json_negative_count() {
        let err = EuroScenario::from_json(r#"{"heads": -1}"#).expect_err("negative heads");
        assert!(matches!(err, EvidenciaError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_bad_bias() {
        let scenario = EuroScenario {
            fair_bias: 120.0,
            ..EuroScenario::default()
        };
        assert!(scenario.validate().expect_err("bias > 100").is_invalid_argument());
    }

    #[test]
    fn test_validate_rejects_bad_domain() {
        let scenario = EuroScenario {
            domain_min: 60,
            domain_max: 40,
            ..EuroScenario::default()
        };
        assert!(scenario.evaluate().expect_err("inverted domain").is_invalid_argument());
    }

    #[test]
    fn test_validate_rejects_median_outside_domain() {
        let scenario = EuroScenario {
            domain_min: 0,
            domain_max: 40,
            ..EuroScenario::default()
        };
        assert!(scenario.validate().expect_err("median 50").is_invalid_argument());
    }

    #[test]
    fn test_validate_rejects_off_centre_triangle_median() {
        let scenario = EuroScenario {
            triangle_median: 30,
            ..EuroScenario::default()
        };
        assert!(scenario.validate().expect_err("median 30").is_invalid_argument());
        assert!(scenario.evaluate().expect_err("median 30").is_invalid_argument());
    }

    #[test]
    fn test_narrow_domain_accepts_smaller_median() {
        let scenario = EuroScenario {
            domain_max: 60,
            triangle_median: 30,
            mixture_biases: vec![40.0, 60.0],
            ..EuroScenario::default()
        };
        let report = scenario.evaluate().expect("domain fits inside [0, 60]");
        assert!(report.triangle.factor > 0.0);
    }

    #[test]
    fn test_validate_rejects_empty_mixture() {
        let scenario = EuroScenario {
            mixture_biases: Vec::new(),
            ..EuroScenario::default()
        };
        assert!(scenario.validate().is_err());
    }

    #[test]
    fn test_including_fair_bias_raises_uniform_factor() {
        let scenario = EuroScenario {
            excluded: None,
            ..EuroScenario::default()
        };
        let report = scenario.evaluate().expect("valid scenario");
        let excluded = EuroScenario::default().evaluate().expect("valid scenario");
        assert!(report.uniform.factor > excluded.uniform.factor);
    }

    #[test]
    fn test_report_serializes() {
        let report = EuroScenario::default().evaluate().expect("valid scenario");
        let value = serde_json::to_value(&report).expect("serializable");
        assert_eq!(value["observation"]["heads"], 140);
        assert!(value["point"]["factor"].as_f64().expect("number") > 6.0);
        assert_eq!(value["posterior"]["max_likelihood"], 56);
    }
}
