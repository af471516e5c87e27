// =========================================================================
// FALSIFY-PMF / FALSIFY-BF: distribution and evidence contracts
//
// Invariants checked here:
//   - a normalized PMF sums to 1 and carries no negative mass
//   - the shipped priors are valid distributions over the bias domain
//   - the Euro likelihood is a probability
//   - data with no spins leave the odds unchanged (factor 1)
//
// References:
//   - Jeffreys (1961) "Theory of Probability"
//   - Kass & Raftery (1995) "Bayes Factors"
// =========================================================================

use crate::bayes_factor::{bayes_factor, BiasedHypothesis, FAIR_BIAS};
use crate::likelihood::{euro_likelihood, Observation};
use crate::pmf::Pmf;
use crate::prior::{triangle_prior, uniform_prior, uniform_prior_excluding, BIAS_DOMAIN};

fn min_mass(pmf: &Pmf<u32>) -> f64 {
    pmf.items().map(|(_, p)| p).fold(f64::INFINITY, f64::min)
}

/// FALSIFY-PMF-001: normalize makes the masses sum to 1
#[test]
fn falsify_pmf_001_normalize_sums_to_one() {
    let mut pmf = Pmf::from_domain_weighted(0u32..5, vec![3.0, 1.0, 4.0, 1.0, 5.0])
        .expect("one weight per value");
    let before = pmf.normalize().expect("positive total");
    let total = pmf.total();

    assert!(
        (total - 1.0).abs() < 1e-12,
        "FALSIFIED PMF-001: total={total} after normalizing from {before}"
    );
}

/// FALSIFY-PMF-002: excluding the fair bias leaves a valid distribution
#[test]
fn falsify_pmf_002_uniform_excluding_non_negative() {
    let prior = uniform_prior_excluding(BIAS_DOMAIN, 50).expect("valid prior");

    let min = min_mass(&prior);
    assert!(min >= 0.0, "FALSIFIED PMF-002: min mass={min}");
    assert!(
        (prior.total() - 1.0).abs() < 1e-12,
        "FALSIFIED PMF-002: total={}",
        prior.total()
    );
}

/// FALSIFY-PMF-003: the centred triangle prior has no negative mass
#[test]
fn falsify_pmf_003_triangle_non_negative() {
    let prior = triangle_prior(BIAS_DOMAIN, 50).expect("valid prior");

    let min = min_mass(&prior);
    assert!(min >= 0.0, "FALSIFIED PMF-003: min mass={min}");
    assert!(
        (prior.total() - 1.0).abs() < 1e-12,
        "FALSIFIED PMF-003: total={}",
        prior.total()
    );
}

/// FALSIFY-PMF-004: an off-centre triangle is refused instead of going negative
#[test]
fn falsify_pmf_004_triangle_off_centre_refused() {
    for median in [0u32, 10, 30, 49] {
        match triangle_prior(BIAS_DOMAIN, median) {
            Ok(prior) => panic!(
                "FALSIFIED PMF-004: median {median} accepted, min mass={}",
                min_mass(&prior)
            ),
            Err(err) => assert!(
                err.is_invalid_argument(),
                "FALSIFIED PMF-004: median {median} gave {err}"
            ),
        }
    }
}

/// FALSIFY-PMF-005: every uniform mass is 1/n
#[test]
fn falsify_pmf_005_uniform_masses_equal() {
    let prior = uniform_prior(BIAS_DOMAIN).expect("valid prior");
    let expected = 1.0 / 101.0;

    for (h, p) in prior.items() {
        assert!(
            (p - expected).abs() < 1e-15,
            "FALSIFIED PMF-005: mass at {h}={p}, expected {expected}"
        );
    }
}

/// FALSIFY-LK-001: the Euro likelihood lies in [0, 1]
#[test]
fn falsify_lk_001_likelihood_bounded() {
    let data = Observation::new(140, 110);
    for bias in [0.0, 1.0, 25.0, 50.0, 56.0, 99.0, 100.0] {
        let like = euro_likelihood(data, bias).expect("bias in range");
        assert!(
            (0.0..=1.0).contains(&like),
            "FALSIFIED LK-001: P(D|{bias})={like}"
        );
    }
}

/// FALSIFY-BF-001: no data means a Bayes factor of exactly 1
#[test]
fn falsify_bf_001_empty_observation_is_neutral() {
    let data = Observation::new(0, 0);
    let hypotheses = [
        BiasedHypothesis::Point(90.0),
        BiasedHypothesis::Mixture(vec![40.0, 60.0]),
        BiasedHypothesis::Prior(uniform_prior_excluding(BIAS_DOMAIN, 50).expect("valid prior")),
        BiasedHypothesis::Prior(triangle_prior(BIAS_DOMAIN, 50).expect("valid prior")),
    ];

    for hypothesis in &hypotheses {
        let bf = bayes_factor(data, FAIR_BIAS, hypothesis).expect("fair likelihood is 1");
        assert!(
            (bf.factor - 1.0).abs() < 1e-12,
            "FALSIFIED BF-001: factor={} for {hypothesis:?}",
            bf.factor
        );
    }
}

mod evidence_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    /// FALSIFY-PMF-001-prop: normalize sums to 1 for any positive weights
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_pmf_001_prop_normalize_sums_to_one(
            weights in prop::collection::vec(0.01f64..10.0, 1..20),
        ) {
            #[allow(clippy::cast_possible_truncation)]
            let n = weights.len() as u32;
            let mut pmf = Pmf::from_domain_weighted(0..n, weights).expect("one weight per value");
            pmf.normalize().expect("positive total");

            let total = pmf.total();
            prop_assert!(
                (total - 1.0).abs() < 1e-12,
                "FALSIFIED PMF-001-prop: total={}", total
            );
        }
    }

    /// FALSIFY-PMF-003-prop: triangle priors spanning [0, 2m] are non-negative
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_pmf_003_prop_triangle_non_negative(median in 1u32..=50) {
            let prior = triangle_prior(0..=2 * median, median).expect("domain ends at 2m");

            let min = min_mass(&prior);
            prop_assert!(min >= 0.0, "FALSIFIED PMF-003-prop: median={} min={}", median, min);
            prop_assert_eq!(prior.max_likelihood(), Some(&median));
        }
    }

    /// FALSIFY-LK-001-prop: likelihood in [0, 1] for any counts and bias
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_lk_001_prop_likelihood_bounded(
            heads in 0u32..300,
            tails in 0u32..300,
            bias in 0.0f64..=100.0,
        ) {
            let like = euro_likelihood(Observation::new(heads, tails), bias)
                .expect("bias in range");
            prop_assert!(
                (0.0..=1.0).contains(&like),
                "FALSIFIED LK-001-prop: P(D|{})={}", bias, like
            );
        }
    }

    /// FALSIFY-BF-001-prop: no data is neutral for any point bias
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_bf_001_prop_empty_observation_is_neutral(bias in 0.0f64..=100.0) {
            let bf = bayes_factor(Observation::default(), FAIR_BIAS, &BiasedHypothesis::Point(bias))
                .expect("fair likelihood is 1");
            prop_assert!(
                (bf.factor - 1.0).abs() < 1e-12,
                "FALSIFIED BF-001-prop: bias={} factor={}", bias, bf.factor
            );
        }
    }
}
