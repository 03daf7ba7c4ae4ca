// ─────────────────────────────────────────────────────────────────────
// Onezone Core — Stellar Models
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Stellar helper models: Starburst99 winds, white-dwarf initial-final
//! mass relation and the SNIa delay time distribution.

use onezone_types::config::StarParameters;
use onezone_types::constants::PhysicalConstants;
use onezone_types::error::{OnezoneError, OnezoneResult};

/// Reference H0 [km/s/Mpc] for the DTD normalization window.
const HUBBLE_H0: f64 = 70.0;

/// Progenitor mass [Msun] where the Salaris et al. 2009 IFMF changes slope.
const IFMF_BREAK_MASS: f64 = 4.0;

fn positive(name: &str, v: f64) -> OnezoneResult<f64> {
    if !v.is_finite() || v <= 0.0 {
        return Err(OnezoneError::Domain(format!(
            "{name} must be finite and > 0, got {v}"
        )));
    }
    Ok(v)
}

/// Starburst99 terminal wind velocity [cm/s].
///
/// `l` [erg/s], `m` [Msun], `t` effective temperature [K], `z` metal fraction.
pub fn s99_wind_velocity(
    constants: &PhysicalConstants,
    l: f64,
    m: f64,
    t: f64,
    z: f64,
) -> OnezoneResult<f64> {
    let log_v = 1.23 - 0.30 * (positive("luminosity", l)? / constants.l_sun).log10()
        + 0.55 * positive("mass", m)?.log10()
        + 0.64 * positive("temperature", t)?.log10()
        + 0.13 * (positive("metallicity", z)? / constants.z_solar_s99).log10();
    Ok(10f64.powf(log_v) * constants.km)
}

/// Starburst99 wind mass-loss rate [Msun/s]. Arguments as in
/// [`s99_wind_velocity`].
pub fn s99_wind_mdot(
    constants: &PhysicalConstants,
    l: f64,
    m: f64,
    t: f64,
    z: f64,
) -> OnezoneResult<f64> {
    let log_mdot = -24.06 + 2.45 * (positive("luminosity", l)? / constants.l_sun).log10()
        - 1.10 * positive("mass", m)?.log10()
        + 1.31 * positive("temperature", t)?.log10()
        + 0.80 * (positive("metallicity", z)? / constants.z_solar_s99).log10();
    Ok(10f64.powf(log_mdot) / constants.yr_to_s)
}

/// White dwarf mass [Msun] from progenitor main-sequence mass [Msun].
pub fn white_dwarf_mass(m: f64) -> f64 {
    if m < IFMF_BREAK_MASS {
        0.134 * m + 0.331
    } else {
        0.047 * m + 0.679
    }
}

/// SNIa delay time distribution, dP/dt ∝ (t - t_form)^-β.
///
/// Normalized so that a candidate explodes with probability `nsnia`
/// within one Hubble time after its progenitor's lifetime. Times in s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SniaDelayTime {
    pub slope: f64,
    pub nsnia: f64,
    pub hubble_time: f64,
}

impl SniaDelayTime {
    pub fn new(constants: &PhysicalConstants, slope: f64, nsnia: f64) -> Self {
        SniaDelayTime {
            slope,
            nsnia,
            hubble_time: constants.hubble_time(HUBBLE_H0, 0.0),
        }
    }

    pub fn from_config(constants: &PhysicalConstants, stars: &StarParameters) -> Self {
        Self::new(constants, stars.dtd_slope, stars.nsnia)
    }

    /// dP/dt [1/s] at time `t` for a white dwarf whose progenitor formed at
    /// `t_form` and lived `lifetime`.
    pub fn probability_rate(&self, t: f64, t_form: f64, lifetime: f64) -> OnezoneResult<f64> {
        let lifetime = positive("lifetime", lifetime)?;
        let age = positive("time since formation", t - t_form)?;
        let beta = self.slope;

        let norm = if beta == 1.0 {
            ((self.hubble_time + lifetime) / lifetime).ln()
        } else {
            let p = 1.0 - beta;
            ((self.hubble_time + lifetime).powf(p) - lifetime.powf(p)) / p
        };

        Ok(self.nsnia / norm * age.powf(-beta))
    }
}
