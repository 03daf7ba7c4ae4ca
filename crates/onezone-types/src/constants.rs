// ─────────────────────────────────────────────────────────────────────
// Onezone Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physical constants in cgs units.
//!
//! Ionization energies are kept in eV. Everything else is cgs or a cgs
//! conversion factor. The table is a plain value: build it once with
//! [`PhysicalConstants::cgs`] and pass it by reference.

use serde::{Deserialize, Serialize};

/// Seconds per year. Note `tau_sun` uses 3.1536e7 instead.
const YR_TO_S: f64 = 3.16224e7;

/// Parsec in cm.
const PC: f64 = 3.0865677e18;

/// Immutable table of physical constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// Electron volts per erg.
    pub ev_erg: f64,
    /// Boltzmann constant [erg/K].
    pub k_boltz: f64,
    /// Speed of light [cm/s].
    pub c: f64,
    /// Planck constant [erg s].
    pub h: f64,
    /// Gravitational constant [cm³ g⁻¹ s⁻²].
    pub g: f64,
    /// Solar mass [g].
    pub m_sun: f64,
    /// Solar radius [cm].
    pub r_sun: f64,
    /// Solar luminosity [erg/s].
    pub l_sun: f64,
    /// Solar effective temperature [K].
    pub t_sun: f64,
    /// Solar main-sequence lifetime [s].
    pub tau_sun: f64,
    /// HI ionization energy [eV].
    pub e_hi: f64,
    /// HeI ionization energy [eV].
    pub e_hei: f64,
    /// Proton mass [g].
    pub m_p: f64,

    /// Solar metallicity used in OSTAR2002 (Grevesse & Sauval 1998).
    pub z_solar_ostar: f64,
    /// Solar metallicity used in PARSEC (Caffau et al. 2009/2011).
    pub z_solar_parsec: f64,
    /// Solar metallicity used in Starburst99.
    pub z_solar_s99: f64,

    /// Black-body to OSTAR correction factors for q0.
    pub black_body_q0: [f64; 2],
    /// Black-body to OSTAR correction factors for q1.
    pub black_body_q1: [f64; 2],
    /// Black-body correction factors for the FUV band.
    pub black_body_fuv: [f64; 2],
    /// Black-body correction factors for the Lyman-Werner band.
    pub black_body_lw: [f64; 2],

    /// Year [s].
    pub yr_to_s: f64,
    /// Megayear [s].
    pub myr: f64,
    /// Kilometre [cm].
    pub km: f64,
    /// Parsec [cm].
    pub pc: f64,
    /// Kiloparsec [cm].
    pub kpc: f64,
    /// Megaparsec [cm].
    pub mpc: f64,
    /// Atomic mass unit [g].
    pub amu: f64,
}

impl PhysicalConstants {
    /// The reference cgs table.
    pub fn cgs() -> Self {
        let kpc = 1.0e3 * PC;
        PhysicalConstants {
            ev_erg: 6.24150934326e11,
            k_boltz: 1.380658e-16,
            c: 2.99792458e10,
            h: 6.6260755e-27,
            g: 6.6743e-8,
            m_sun: 1.998e33,
            r_sun: 69.63e9,
            l_sun: 3.9e33,
            t_sun: 5777.0,
            tau_sun: 10.0e9 * 3.1536e7,
            e_hi: 13.6,
            e_hei: 24.587,
            m_p: 1.6726219e-24,
            z_solar_ostar: 0.017,
            z_solar_parsec: 0.01524,
            z_solar_s99: 0.02,
            black_body_q0: [0.1, 3.2],
            black_body_q1: [0.001, 4.0],
            black_body_fuv: [1.0, 1.0],
            black_body_lw: [1.0, 1.0],
            yr_to_s: YR_TO_S,
            myr: YR_TO_S * 1.0e6,
            km: 1.0e5,
            pc: PC,
            kpc,
            mpc: 1.0e3 * kpc,
            amu: 1.66054e-24,
        }
    }

    /// Convert an energy in eV to erg.
    pub fn ev_to_erg(&self, ev: f64) -> f64 {
        ev / self.ev_erg
    }

    /// Convert an energy in erg to eV.
    pub fn erg_to_ev(&self, erg: f64) -> f64 {
        erg * self.ev_erg
    }

    /// Hubble time 1/H0 in seconds for H0 in km/s/Mpc.
    ///
    /// `_z` is accepted for call-site symmetry; the redshift dependence is
    /// not modelled.
    pub fn hubble_time(&self, h0: f64, _z: f64) -> f64 {
        (1.0 / h0) * self.mpc / self.km
    }

    /// Thermal energy k_B T [erg].
    pub fn thermal_energy(&self, t: f64) -> f64 {
        self.k_boltz * t
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::cgs()
    }
}
