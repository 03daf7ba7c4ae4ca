// ─────────────────────────────────────────────────────────────────────
// Onezone Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Simulation parameter records.
//!
//! Every field has a default, so a JSON file only needs to name what it
//! overrides. Parameter descriptions live in [`crate::docs`].

use crate::constants::PhysicalConstants;
use crate::error::{OnezoneError, OnezoneResult};
use serde::{Deserialize, Serialize};

/// Top-level onezone configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OnezoneConfig {
    #[serde(default)]
    pub units: Units,
    #[serde(default)]
    pub zone: ZoneParameters,
    #[serde(default)]
    pub stars: StarParameters,
    #[serde(default)]
    pub io: IoParameters,
}

/// Conversions between code units and base units (seconds, solar masses).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Units {
    /// Code time unit in seconds (default: 1 Myr)
    #[serde(default = "default_time_unit")]
    pub time: f64,
    /// Code mass unit in solar masses (default: 1.0)
    #[serde(default = "default_one")]
    pub mass: f64,
}

fn default_time_unit() -> f64 {
    PhysicalConstants::cgs().myr
}
fn default_one() -> f64 {
    1.0
}

impl Default for Units {
    fn default() -> Self {
        Units {
            time: default_time_unit(),
            mass: default_one(),
        }
    }
}

/// Star formation scheme selector. Stored as 1, 2 or 3 in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum StarFormationMethod {
    /// Constant, uniform SFR.
    Constant,
    /// SFR computed cosmologically.
    Cosmological,
    /// SFH read from a table (`sfh_filename`).
    Tabulated,
}

impl TryFrom<u8> for StarFormationMethod {
    type Error = OnezoneError;

    fn try_from(v: u8) -> OnezoneResult<Self> {
        match v {
            1 => Ok(StarFormationMethod::Constant),
            2 => Ok(StarFormationMethod::Cosmological),
            3 => Ok(StarFormationMethod::Tabulated),
            other => Err(OnezoneError::ConfigError(format!(
                "star_formation_method must be 1, 2 or 3, got {other}"
            ))),
        }
    }
}

impl From<StarFormationMethod> for u8 {
    fn from(m: StarFormationMethod) -> u8 {
        match m {
            StarFormationMethod::Constant => 1,
            StarFormationMethod::Cosmological => 2,
            StarFormationMethod::Tabulated => 3,
        }
    }
}

/// Gas reservoir and global zone parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneParameters {
    pub initial_gas_mass: f64,
    pub initial_dark_matter_mass: f64,
    pub initial_metallicity: f64,
    /// Element symbols to track, in output order.
    pub species_to_track: Vec<String>,

    pub star_formation_method: StarFormationMethod,
    pub sfh_filename: Option<String>,
    /// Code mass / code time.
    pub constant_sfr: f64,
    pub cosmological_evolution: bool,

    pub use_sf_mass_reservoir: bool,
    pub sf_mass_reservoir_size: f64,
    pub use_stochastic_mass_sampling: bool,
    pub stochastic_sample_mass: f64,

    pub inflow_factor: f64,
    pub mass_loading_factor: f64,
    pub sfr_efficiency: f64,

    /// Myr
    pub t_o: f64,
    /// Myr
    pub t_final: f64,
    /// Myr
    pub dt: f64,
}

impl Default for ZoneParameters {
    fn default() -> Self {
        ZoneParameters {
            initial_gas_mass: 0.0,
            initial_dark_matter_mass: 0.0,
            initial_metallicity: 0.0,
            species_to_track: Vec::new(),
            star_formation_method: StarFormationMethod::Constant,
            sfh_filename: None,
            constant_sfr: 10.0,
            cosmological_evolution: false,
            use_sf_mass_reservoir: false,
            sf_mass_reservoir_size: 1000.0,
            use_stochastic_mass_sampling: true,
            stochastic_sample_mass: 250.0,
            inflow_factor: 0.05,
            mass_loading_factor: 0.1,
            sfr_efficiency: 0.01,
            t_o: 0.0,
            t_final: 1.0e4,
            dt: 1.0,
        }
    }
}

impl ZoneParameters {
    pub fn reset_to_default(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> OnezoneResult<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(OnezoneError::ConfigError(format!(
                "zone.dt must be finite and > 0, got {}",
                self.dt
            )));
        }
        if !(self.t_final > self.t_o) {
            return Err(OnezoneError::ConfigError(format!(
                "zone.t_final ({}) must exceed zone.t_o ({})",
                self.t_final, self.t_o
            )));
        }
        if self.initial_gas_mass < 0.0 || self.initial_dark_matter_mass < 0.0 {
            return Err(OnezoneError::ConfigError(
                "zone initial masses must be >= 0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.initial_metallicity) {
            return Err(OnezoneError::ConfigError(format!(
                "zone.initial_metallicity must be in [0, 1], got {}",
                self.initial_metallicity
            )));
        }
        if self.star_formation_method == StarFormationMethod::Tabulated
            && self.sfh_filename.is_none()
        {
            return Err(OnezoneError::ConfigError(
                "star_formation_method 3 requires zone.sfh_filename".to_string(),
            ));
        }
        if self.use_stochastic_mass_sampling && self.stochastic_sample_mass <= 0.0 {
            return Err(OnezoneError::ConfigError(
                "zone.stochastic_sample_mass must be > 0".to_string(),
            ));
        }
        if self.use_sf_mass_reservoir && self.sf_mass_reservoir_size <= 0.0 {
            return Err(OnezoneError::ConfigError(
                "zone.sf_mass_reservoir_size must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Stellar physics parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarParameters {
    /// Lower mass limit for Type II supernovae [Msun].
    pub snii_mass_threshold: f64,
    /// Mass range of white-dwarf progenitors that are SNIa candidates [Msun].
    pub snia_candidate_mass_bounds: [f64; 2],
    /// Delay time distribution slope beta, dP/dt ~ t^-beta.
    pub dtd_slope: f64,
    /// Fraction of SNIa candidates exploding within a Hubble time.
    pub nsnia: f64,

    pub use_agb_wind_phase: bool,
    pub agb_wind_phase_mass_threshold: f64,

    pub normalize_black_body_to_ostar: bool,
    pub black_body_correction_mass: f64,
    pub black_body_q0_factors: [f64; 2],
    pub black_body_q1_factors: [f64; 2],
    pub black_body_fuv_factors: [f64; 2],
}

impl StarParameters {
    /// Defaults, with black-body factors taken from `constants`.
    pub fn with_constants(constants: &PhysicalConstants) -> Self {
        StarParameters {
            snii_mass_threshold: 8.0,
            snia_candidate_mass_bounds: [3.0, 8.0],
            dtd_slope: 1.0,
            nsnia: 0.043,
            use_agb_wind_phase: true,
            agb_wind_phase_mass_threshold: 8.0,
            normalize_black_body_to_ostar: true,
            black_body_correction_mass: 20.0,
            black_body_q0_factors: constants.black_body_q0,
            black_body_q1_factors: constants.black_body_q1,
            black_body_fuv_factors: constants.black_body_fuv,
        }
    }

    /// Reset to defaults with the cgs black-body factors. Records built from
    /// custom constants should use [`StarParameters::reset_with_constants`].
    pub fn reset_to_default(&mut self) {
        *self = Self::default();
    }

    pub fn reset_with_constants(&mut self, constants: &PhysicalConstants) {
        *self = Self::with_constants(constants);
    }

    pub fn validate(&self) -> OnezoneResult<()> {
        let [lo, hi] = self.snia_candidate_mass_bounds;
        if !(lo > 0.0 && lo < hi) {
            return Err(OnezoneError::ConfigError(format!(
                "stars.snia_candidate_mass_bounds must satisfy 0 < lo < hi, got [{lo}, {hi}]"
            )));
        }
        if self.snii_mass_threshold <= 0.0 {
            return Err(OnezoneError::ConfigError(
                "stars.snii_mass_threshold must be > 0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.nsnia) {
            return Err(OnezoneError::ConfigError(format!(
                "stars.nsnia must be in [0, 1], got {}",
                self.nsnia
            )));
        }
        if !self.dtd_slope.is_finite() {
            return Err(OnezoneError::ConfigError(
                "stars.dtd_slope must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for StarParameters {
    fn default() -> Self {
        Self::with_constants(&PhysicalConstants::cgs())
    }
}

/// Output cadence and file names. A zero cadence disables that trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IoParameters {
    pub dump_output_basename: String,
    pub dt_dump: f64,
    pub cycle_dump: u64,

    pub summary_output_filename: String,
    pub dt_summary: f64,
    pub cycle_summary: u64,
}

impl Default for IoParameters {
    fn default() -> Self {
        IoParameters {
            dump_output_basename: "dump".to_string(),
            dt_dump: 0.0,
            cycle_dump: 0,
            summary_output_filename: "summary_output.txt".to_string(),
            dt_summary: 0.0,
            cycle_summary: 0,
        }
    }
}

impl IoParameters {
    pub fn reset_to_default(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> OnezoneResult<()> {
        if self.dt_dump < 0.0 || self.dt_summary < 0.0 {
            return Err(OnezoneError::ConfigError(
                "io output intervals must be >= 0".to_string(),
            ));
        }
        if self.dump_output_basename.is_empty() || self.summary_output_filename.is_empty() {
            return Err(OnezoneError::ConfigError(
                "io output names must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl OnezoneConfig {
    /// Load from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: &str) -> OnezoneResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        log::debug!("loaded onezone config from {path}");
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> OnezoneResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> OnezoneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reset every parameter group to its defaults.
    pub fn reset_to_default(&mut self) {
        self.units = Units::default();
        self.zone.reset_to_default();
        self.stars.reset_to_default();
        self.io.reset_to_default();
    }

    pub fn validate(&self) -> OnezoneResult<()> {
        if !(self.units.time > 0.0) || !(self.units.mass > 0.0) {
            return Err(OnezoneError::ConfigError(
                "units.time and units.mass must be > 0".to_string(),
            ));
        }
        self.zone.validate()?;
        self.stars.validate()?;
        self.io.validate()
    }
}
