// ─────────────────────────────────────────────────────────────────────
// Onezone Core — Series Integrator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Truncated exponential series for one-sided Planck integrals.
//!
//! With x = E/kT the tail integrals of the Planck spectrum expand as
//!   ∫_x^∞ t²/(eᵗ-1) dt = Σ_i (x²/i + 2x/i² + 2/i³) e^{-ix}
//!   ∫_x^∞ t³/(eᵗ-1) dt = Σ_i (x³/i + 3x²/i² + 6x/i³ + 6/i⁴) e^{-ix}
//!
//! The sum is accumulated until the last increment drops to `tolerance`,
//! never before `min_iter` and never past `max_iter`:
//!   continue while (Δ > tol && i < max_iter) || i < min_iter
//! `i` is checked after it is incremented, so between `min_iter - 1` and
//! `max_iter - 1` terms are added.

use onezone_types::error::{OnezoneError, OnezoneResult};
use std::f64::consts::PI;

/// Apéry's constant ζ(3).
const ZETA_3: f64 = 1.202_056_903_159_594_2;

/// Term family of a one-sided Planck integral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesTerm {
    /// Photon number: x²/i + 2x/i² + 2/i³
    PhotonNumber,
    /// Energy flux: x³/i + 3x²/i² + 6x/i³ + 6/i⁴
    EnergyFlux,
}

impl SeriesTerm {
    pub const ALL: [SeriesTerm; 2] = [SeriesTerm::PhotonNumber, SeriesTerm::EnergyFlux];

    /// Polynomial prefactor of the i-th term (i >= 1).
    #[inline]
    pub fn coefficient(self, i: usize, x: f64) -> f64 {
        let fi = i as f64;
        match self {
            SeriesTerm::PhotonNumber => {
                x * x / fi + 2.0 * x / (fi * fi) + 2.0 / (fi * fi * fi)
            }
            SeriesTerm::EnergyFlux => {
                x * x * x / fi
                    + 3.0 * x * x / (fi * fi)
                    + 6.0 * x / (fi * fi * fi)
                    + 6.0 / (fi * fi * fi * fi)
            }
        }
    }

    /// Full i-th term including the e^{-ix} factor.
    ///
    /// Zero once e^{-ix} underflows, so an overflowing polynomial
    /// prefactor never turns into inf * 0.
    #[inline]
    pub fn term(self, i: usize, x: f64) -> f64 {
        let damping = (-(i as f64) * x).exp();
        if damping == 0.0 {
            return 0.0;
        }
        self.coefficient(i, x) * damping
    }

    /// Value of the untruncated series at x = 0: 2ζ(3) or 6ζ(4) = π⁴/15.
    pub fn asymptotic_total(self) -> f64 {
        match self {
            SeriesTerm::PhotonNumber => 2.0 * ZETA_3,
            SeriesTerm::EnergyFlux => PI.powi(4) / 15.0,
        }
    }
}

/// Stopping rule for [`evaluate_series`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesConfig {
    pub tolerance: f64,
    pub min_iter: usize,
    pub max_iter: usize,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            tolerance: 1.0e-10,
            min_iter: 4,
            max_iter: 513,
        }
    }
}

impl SeriesConfig {
    pub fn validate(&self) -> OnezoneResult<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(OnezoneError::ConfigError(format!(
                "series tolerance must be finite and >= 0, got {}",
                self.tolerance
            )));
        }
        if self.min_iter < 1 {
            return Err(OnezoneError::ConfigError(
                "series min_iter must be >= 1".to_string(),
            ));
        }
        if self.max_iter < 2 || self.max_iter < self.min_iter {
            return Err(OnezoneError::ConfigError(format!(
                "series max_iter must be >= max(2, min_iter), got max_iter={} min_iter={}",
                self.max_iter, self.min_iter
            )));
        }
        Ok(())
    }
}

/// Result of one series evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesOutcome {
    /// Truncated (or iteration-capped) sum.
    pub sum: f64,
    /// Number of terms added.
    pub terms: usize,
    /// Last increment S_new - S_old. Signed.
    pub last_difference: f64,
    /// Whether the last increment was within tolerance.
    pub converged: bool,
}

/// Evaluate the series for `term` at dimensionless energy `x >= 0`.
///
/// Hitting `max_iter` is not an error: the capped partial sum is returned
/// with `converged = false`.
pub fn evaluate_series(x: f64, term: SeriesTerm, config: &SeriesConfig) -> SeriesOutcome {
    debug_assert!(x >= 0.0 || x.is_nan(), "series requires x >= 0, got {x}");

    let mut sum = 0.0_f64;
    let mut difference = f64::INFINITY;
    let mut i = 1usize;

    while (difference > config.tolerance && i < config.max_iter) || i < config.min_iter {
        let old_sum = sum;
        sum += term.term(i, x);
        difference = sum - old_sum;
        i += 1;
    }

    let converged = difference <= config.tolerance;
    if !converged {
        log::debug!(
            "{term:?} series capped at {} terms for x={x:e} (last difference {difference:e})",
            i - 1
        );
    }

    SeriesOutcome {
        sum,
        terms: i - 1,
        last_difference: difference,
        converged,
    }
}

/// [`evaluate_series`] with the default stopping rule, returning only the sum.
pub fn series_sum(x: f64, term: SeriesTerm) -> f64 {
    evaluate_series(x, term, &SeriesConfig::default()).sum
}

/// Strict variant: rejects invalid `x` and reports non-convergence as an error.
pub fn evaluate_series_strict(
    x: f64,
    term: SeriesTerm,
    config: &SeriesConfig,
) -> OnezoneResult<SeriesOutcome> {
    config.validate()?;
    if !x.is_finite() || x < 0.0 {
        return Err(OnezoneError::Domain(format!(
            "dimensionless energy must be finite and >= 0, got {x}"
        )));
    }
    let outcome = evaluate_series(x, term, config);
    if !outcome.converged {
        return Err(OnezoneError::SeriesNotConverged {
            iterations: outcome.terms,
            difference: outcome.last_difference,
        });
    }
    Ok(outcome)
}
