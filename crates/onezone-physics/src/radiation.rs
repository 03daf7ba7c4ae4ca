// ─────────────────────────────────────────────────────────────────────
// Onezone Core — Blackbody Radiation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Photon and energy fluxes of a Planck spectrum above a threshold or
//! within a band.
//!
//! Energies are normalized to x = E / (k_B T), the one-sided integrals are
//! evaluated by [`onezone_math::series`], and the result is rescaled:
//!   photons:  A  = 2 k³T³ / (h³c²)   [photons s⁻¹ cm⁻² sr⁻¹]
//!   energy:   A' = 2 k⁴T⁴ / (h³c²)   [erg s⁻¹ cm⁻² sr⁻¹]
//!
//! All energies are erg unless the method name ends in `_ev`.

use ndarray::Array1;
use onezone_math::series::{evaluate_series, SeriesConfig, SeriesTerm};
use onezone_types::constants::PhysicalConstants;
use onezone_types::error::{OnezoneError, OnezoneResult};

/// Lower edge of the FUV band [eV].
pub const FUV_LOWER_EV: f64 = 6.0;

/// Lower edge of the Lyman-Werner band [eV].
pub const LW_LOWER_EV: f64 = 11.2;

/// A quantity that [`BlackbodyRadiation::tabulate`] can evaluate per temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RadiationQuantity {
    /// Photon number flux above a threshold [eV].
    PhotonNumberAbove { threshold_ev: f64 },
    /// Energy flux between two energies [eV].
    EnergyFluxInBand { lower_ev: f64, upper_ev: f64 },
    /// Mean photon energy above a threshold [eV]; result in eV.
    MeanPhotonEnergyAbove { threshold_ev: f64 },
    /// HI-ionizing photon flux (q0).
    HydrogenIonizing,
    /// HeI-ionizing photon flux (q1).
    HeliumIonizing,
    /// 6 eV to 13.6 eV energy flux.
    Fuv,
    /// 11.2 eV to 13.6 eV energy flux.
    LymanWerner,
}

/// Blackbody radiation calculator bound to a constants table.
#[derive(Debug, Clone)]
pub struct BlackbodyRadiation<'a> {
    constants: &'a PhysicalConstants,
    series: SeriesConfig,
}

impl<'a> BlackbodyRadiation<'a> {
    pub fn new(constants: &'a PhysicalConstants) -> Self {
        BlackbodyRadiation {
            constants,
            series: SeriesConfig::default(),
        }
    }

    /// Use a custom stopping rule. Fails if `series` does not validate.
    pub fn with_series_config(
        constants: &'a PhysicalConstants,
        series: SeriesConfig,
    ) -> OnezoneResult<Self> {
        series.validate()?;
        Ok(BlackbodyRadiation { constants, series })
    }

    pub fn constants(&self) -> &PhysicalConstants {
        self.constants
    }

    pub fn series_config(&self) -> &SeriesConfig {
        &self.series
    }

    fn check_temperature(t: f64) -> OnezoneResult<()> {
        if !t.is_finite() || t <= 0.0 {
            return Err(OnezoneError::Domain(format!(
                "temperature must be finite and > 0 K, got {t}"
            )));
        }
        Ok(())
    }

    fn check_energy(name: &str, e: f64) -> OnezoneResult<()> {
        if !e.is_finite() || e < 0.0 {
            return Err(OnezoneError::Domain(format!(
                "{name} must be finite and >= 0, got {e}"
            )));
        }
        Ok(())
    }

    /// x = E / (k_B T) for an energy in erg.
    pub fn dimensionless_energy(&self, e: f64, t: f64) -> OnezoneResult<f64> {
        Self::check_temperature(t)?;
        Self::check_energy("energy", e)?;
        let kt = self.constants.k_boltz * t;
        if kt == 0.0 {
            return Err(OnezoneError::Domain(format!(
                "temperature {t:e} K underflows k_B T to zero"
            )));
        }
        Ok(e / kt)
    }

    /// 2 (kT)³ / (h³c²)
    fn photon_normalization(&self, t: f64) -> f64 {
        let c = self.constants;
        2.0 * (c.k_boltz * t).powi(3) / (c.h.powi(3) * c.c * c.c)
    }

    /// 2 (kT)⁴ / (h³c²)
    fn energy_normalization(&self, t: f64) -> f64 {
        let c = self.constants;
        2.0 * (c.k_boltz * t).powi(4) / (c.h.powi(3) * c.c * c.c)
    }

    fn sum(&self, x: f64, term: SeriesTerm) -> f64 {
        evaluate_series(x, term, &self.series).sum
    }

    /// Photon number flux above `e_threshold` [erg] at temperature `t` [K].
    pub fn photon_number_flux_above(&self, e_threshold: f64, t: f64) -> OnezoneResult<f64> {
        let x = self.dimensionless_energy(e_threshold, t)?;
        Ok(self.photon_normalization(t) * self.sum(x, SeriesTerm::PhotonNumber))
    }

    /// One-sided energy flux above `e_threshold` [erg].
    pub fn energy_flux_above(&self, e_threshold: f64, t: f64) -> OnezoneResult<f64> {
        let x = self.dimensionless_energy(e_threshold, t)?;
        Ok(self.energy_normalization(t) * self.sum(x, SeriesTerm::EnergyFlux))
    }

    /// Energy flux between `e_lo` and `e_hi` [erg].
    ///
    /// Computed as F(x_lo) - F(x_hi). The band order is not checked:
    /// `e_lo == e_hi` gives zero and `e_lo > e_hi` gives a negative flux.
    pub fn energy_flux_in_band(&self, e_lo: f64, e_hi: f64, t: f64) -> OnezoneResult<f64> {
        let x_lo = self.dimensionless_energy(e_lo, t)?;
        let x_hi = self.dimensionless_energy(e_hi, t)?;
        let f_lo = self.sum(x_lo, SeriesTerm::EnergyFlux);
        let f_hi = self.sum(x_hi, SeriesTerm::EnergyFlux);
        Ok(self.energy_normalization(t) * (f_lo - f_hi))
    }

    /// Flux-weighted mean energy [erg] of photons above `e_threshold` [erg].
    ///
    /// When both integrals underflow (threshold far above kT) the ratio is
    /// 0/0 and NaN is returned; callers must check.
    pub fn mean_photon_energy_above(&self, e_threshold: f64, t: f64) -> OnezoneResult<f64> {
        let x = self.dimensionless_energy(e_threshold, t)?;
        let energy = self.sum(x, SeriesTerm::EnergyFlux);
        let number = self.sum(x, SeriesTerm::PhotonNumber);
        if number == 0.0 {
            log::warn!(
                "photon number integral underflowed at x={x:e} (T={t} K); mean energy undefined"
            );
        }
        Ok(self.constants.k_boltz * t * (energy / number))
    }

    pub fn photon_number_flux_above_ev(&self, e_threshold_ev: f64, t: f64) -> OnezoneResult<f64> {
        self.photon_number_flux_above(self.constants.ev_to_erg(e_threshold_ev), t)
    }

    /// Band flux for energies in eV; result in erg s⁻¹ cm⁻² sr⁻¹.
    pub fn band_flux_ev(&self, e_lo_ev: f64, e_hi_ev: f64, t: f64) -> OnezoneResult<f64> {
        let c = self.constants;
        self.energy_flux_in_band(c.ev_to_erg(e_lo_ev), c.ev_to_erg(e_hi_ev), t)
    }

    /// Mean photon energy above a threshold, both in eV.
    pub fn mean_photon_energy_above_ev(&self, e_threshold_ev: f64, t: f64) -> OnezoneResult<f64> {
        let c = self.constants;
        let mean = self.mean_photon_energy_above(c.ev_to_erg(e_threshold_ev), t)?;
        Ok(c.erg_to_ev(mean))
    }

    /// HI-ionizing photon flux q0.
    pub fn hydrogen_ionizing_flux(&self, t: f64) -> OnezoneResult<f64> {
        self.photon_number_flux_above_ev(self.constants.e_hi, t)
    }

    /// HeI-ionizing photon flux q1.
    pub fn helium_ionizing_flux(&self, t: f64) -> OnezoneResult<f64> {
        self.photon_number_flux_above_ev(self.constants.e_hei, t)
    }

    /// FUV energy flux, 6 eV up to the HI edge.
    pub fn fuv_flux(&self, t: f64) -> OnezoneResult<f64> {
        self.band_flux_ev(FUV_LOWER_EV, self.constants.e_hi, t)
    }

    /// Lyman-Werner energy flux, 11.2 eV up to the HI edge.
    pub fn lyman_werner_flux(&self, t: f64) -> OnezoneResult<f64> {
        self.band_flux_ev(LW_LOWER_EV, self.constants.e_hi, t)
    }

    /// Evaluate one quantity.
    pub fn evaluate(&self, quantity: RadiationQuantity, t: f64) -> OnezoneResult<f64> {
        match quantity {
            RadiationQuantity::PhotonNumberAbove { threshold_ev } => {
                self.photon_number_flux_above_ev(threshold_ev, t)
            }
            RadiationQuantity::EnergyFluxInBand { lower_ev, upper_ev } => {
                self.band_flux_ev(lower_ev, upper_ev, t)
            }
            RadiationQuantity::MeanPhotonEnergyAbove { threshold_ev } => {
                self.mean_photon_energy_above_ev(threshold_ev, t)
            }
            RadiationQuantity::HydrogenIonizing => self.hydrogen_ionizing_flux(t),
            RadiationQuantity::HeliumIonizing => self.helium_ionizing_flux(t),
            RadiationQuantity::Fuv => self.fuv_flux(t),
            RadiationQuantity::LymanWerner => self.lyman_werner_flux(t),
        }
    }

    /// Evaluate `quantity` at every temperature of a grid.
    ///
    /// Fails on the first temperature outside the domain.
    pub fn tabulate(
        &self,
        quantity: RadiationQuantity,
        temperatures: &Array1<f64>,
    ) -> OnezoneResult<Array1<f64>> {
        let values = temperatures
            .iter()
            .map(|&t| self.evaluate(quantity, t))
            .collect::<OnezoneResult<Vec<f64>>>()?;
        Ok(Array1::from(values))
    }
}
