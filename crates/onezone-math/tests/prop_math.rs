// ─────────────────────────────────────────────────────────────────────
// Onezone Core — Property-Based Tests (proptest) for onezone-math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for onezone-math using proptest.
//!
//! Covers: series termination bounds, non-negative increments, monotonic
//! decrease in x, agreement with the untruncated totals, determinism.

use onezone_math::series::{evaluate_series, series_sum, SeriesConfig, SeriesTerm};
use proptest::prelude::*;

fn term_strategy() -> impl Strategy<Value = SeriesTerm> {
    prop_oneof![Just(SeriesTerm::PhotonNumber), Just(SeriesTerm::EnergyFlux)]
}

/// Partial sums produced by the same stopping rule, one per added term.
fn running_sums(x: f64, term: SeriesTerm, config: &SeriesConfig) -> Vec<f64> {
    let mut sums = Vec::new();
    let mut sum = 0.0_f64;
    let mut difference = f64::INFINITY;
    let mut i = 1usize;
    while (difference > config.tolerance && i < config.max_iter) || i < config.min_iter {
        let old = sum;
        sum += term.term(i, x);
        difference = sum - old;
        sums.push(sum);
        i += 1;
    }
    sums
}

#[test]
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
    // x = 0 hits the cap and logs at debug level; must not panic.
    let out = evaluate_series(0.0, SeriesTerm::PhotonNumber, &SeriesConfig::default());
    assert!(!out.converged);
}

// ── Termination ──────────────────────────────────────────────────────

proptest! {
    /// Every evaluation adds between min_iter - 1 and max_iter - 1 terms.
    #[test]
    fn terminates_within_bounds(
        x in 0.0f64..800.0,
        term in term_strategy(),
        min_iter in 1usize..10,
        extra in 1usize..600,
    ) {
        let config = SeriesConfig { tolerance: 1e-10, min_iter, max_iter: min_iter + extra };
        let out = evaluate_series(x, term, &config);
        prop_assert!(out.terms + 1 >= config.min_iter);
        prop_assert!(out.terms < config.max_iter);
        prop_assert!(out.sum.is_finite());
        prop_assert!(out.sum >= 0.0);
    }

    /// Far past exp underflow the sum is exactly zero, never NaN.
    #[test]
    fn huge_x_sums_to_zero(x in 1.0e3f64..f64::MAX, term in term_strategy()) {
        let out = evaluate_series(x, term, &SeriesConfig::default());
        prop_assert_eq!(out.sum, 0.0);
        prop_assert!(out.converged);
    }

    /// The trace of partial sums never decreases and ends at the result.
    #[test]
    fn running_sum_non_decreasing(x in 0.0f64..50.0, term in term_strategy()) {
        let config = SeriesConfig::default();
        let sums = running_sums(x, term, &config);
        for w in sums.windows(2) {
            prop_assert!(w[1] >= w[0], "sum decreased: {} -> {}", w[0], w[1]);
        }
        let out = evaluate_series(x, term, &config);
        prop_assert_eq!(sums.len(), out.terms);
        prop_assert_eq!(*sums.last().unwrap(), out.sum);
    }
}

// ── Shape of the tail integrals ──────────────────────────────────────

proptest! {
    /// One-sided integrals decrease as the lower limit rises.
    #[test]
    fn decreasing_in_x(x in 0.0f64..40.0, dx in 0.01f64..5.0, term in term_strategy()) {
        let lo = series_sum(x, term);
        let hi = series_sum(x + dx, term);
        prop_assert!(hi < lo, "{:?}: S({}) = {} not < S({}) = {}", term, x + dx, hi, x, lo);
    }

    /// Never exceeds the untruncated x = 0 total.
    #[test]
    fn bounded_by_total(x in 0.0f64..100.0, term in term_strategy()) {
        prop_assert!(series_sum(x, term) <= term.asymptotic_total());
    }

    /// Energy integral over number integral exceeds x (mean above threshold).
    #[test]
    fn energy_per_photon_exceeds_threshold(x in 0.01f64..200.0) {
        let ratio = series_sum(x, SeriesTerm::EnergyFlux) / series_sum(x, SeriesTerm::PhotonNumber);
        prop_assert!(ratio > x, "ratio {} <= x {}", ratio, x);
    }

    /// Pure function: bit-identical on repeat.
    #[test]
    fn deterministic(x in 0.0f64..100.0, term in term_strategy()) {
        let a = series_sum(x, term);
        let b = series_sum(x, term);
        prop_assert_eq!(a.to_bits(), b.to_bits());
    }
}

// ── Closed forms ─────────────────────────────────────────────────────

proptest! {
    /// For small x the photon series approaches 2ζ(3) - x²/2 + x³/6.
    #[test]
    fn photon_small_x_expansion(x in 0.02f64..0.2) {
        let expected = SeriesTerm::PhotonNumber.asymptotic_total() - x * x / 2.0 + x * x * x / 6.0;
        let got = series_sum(x, SeriesTerm::PhotonNumber);
        prop_assert!((got - expected).abs() < 1e-3, "N({}) = {}, expected ~{}", x, got, expected);
    }

    /// For large x the leading term dominates: N(x) ~ (x² + 2x + 2) e^{-x}.
    #[test]
    fn photon_large_x_leading_term(x in 20.0f64..60.0) {
        let leading = (x * x + 2.0 * x + 2.0) * (-x).exp();
        let got = series_sum(x, SeriesTerm::PhotonNumber);
        prop_assert!((got / leading - 1.0).abs() < 1e-6);
    }
}
