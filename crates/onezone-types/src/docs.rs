// ─────────────────────────────────────────────────────────────────────
// Onezone Core — Parameter Docs
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Static parameter documentation, kept apart from the runtime records.

/// One documented parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterDoc {
    pub name: &'static str,
    pub description: &'static str,
    /// Default as it would appear in a JSON config.
    pub default: &'static str,
}

const fn doc(
    name: &'static str,
    description: &'static str,
    default: &'static str,
) -> ParameterDoc {
    ParameterDoc {
        name,
        description,
        default,
    }
}

/// A named group of parameters, e.g. `zone`.
#[derive(Debug, Clone, Copy)]
pub struct ParameterGroup {
    pub name: &'static str,
    pub summary: &'static str,
    pub parameters: &'static [ParameterDoc],
}

pub const UNITS_DOCS: &[ParameterDoc] = &[
    doc("time", "Code time unit in seconds", "3.16224e13 (1 Myr)"),
    doc("mass", "Code mass unit in solar masses", "1.0"),
];

pub const ZONE_DOCS: &[ParameterDoc] = &[
    doc("initial_gas_mass", "Initial gas mass [Msun]. Required", "0.0"),
    doc("initial_dark_matter_mass", "Dark matter halo mass [Msun]. Required", "0.0"),
    doc("initial_metallicity", "Initial gas metal fraction. Required", "0.0"),
    doc("species_to_track", "Element symbols to follow, in output order", "[]"),
    doc(
        "star_formation_method",
        "1: constant SFR, 2: cosmological SFR, 3: tabulated SFH from sfh_filename",
        "1",
    ),
    doc("sfh_filename", "SFH table (time and SFR or mass columns)", "null"),
    doc("constant_sfr", "SFR for method 1 [code mass / code time]", "10.0"),
    doc("cosmological_evolution", "Enable cosmological evolution", "false"),
    doc(
        "use_sf_mass_reservoir",
        "Accumulate dt * SFR in a reservoir and form stars once it exceeds sf_mass_reservoir_size",
        "false",
    ),
    doc("sf_mass_reservoir_size", "Reservoir threshold [Msun]", "1000.0"),
    doc(
        "use_stochastic_mass_sampling",
        "At low SFR form a stochastic_sample_mass chunk with probability dt * SFR / stochastic_sample_mass",
        "true",
    ),
    doc("stochastic_sample_mass", "Chunk mass for stochastic sampling [Msun]", "250.0"),
    doc("inflow_factor", "Inflow rate in units of the SFR", "0.05"),
    doc("mass_loading_factor", "Outflow rate in units of the SFR", "0.1"),
    doc("sfr_efficiency", "Star formation efficiency", "0.01"),
    doc("t_o", "Initial time [Myr]", "0.0"),
    doc("t_final", "End time [Myr]", "1.0e4"),
    doc("dt", "Constant timestep [Myr]. Required", "1.0"),
];

pub const STARS_DOCS: &[ParameterDoc] = &[
    doc("snii_mass_threshold", "Lower mass limit for Type II supernovae [Msun]", "8.0"),
    doc(
        "snia_candidate_mass_bounds",
        "Progenitor mass range of white dwarfs that may explode as SNIa [Msun]",
        "[3.0, 8.0]",
    ),
    doc("dtd_slope", "Delay time distribution slope beta, dP/dt ~ t^-beta", "1.0"),
    doc("nsnia", "Fraction of SNIa candidates exploding within a Hubble time", "0.043"),
    doc("use_agb_wind_phase", "Enable the AGB wind phase", "true"),
    doc("agb_wind_phase_mass_threshold", "Upper mass for the AGB wind phase [Msun]", "8.0"),
    doc("normalize_black_body_to_ostar", "Scale black-body rates to OSTAR2002", "true"),
    doc("black_body_correction_mass", "Mass below which corrections apply [Msun]", "20.0"),
    doc("black_body_q0_factors", "HI-ionizing rate correction factors", "[0.1, 3.2]"),
    doc("black_body_q1_factors", "HeI-ionizing rate correction factors", "[0.001, 4.0]"),
    doc("black_body_fuv_factors", "FUV flux correction factors", "[1.0, 1.0]"),
];

pub const IO_DOCS: &[ParameterDoc] = &[
    doc("dump_output_basename", "Basename of full dumps", "\"dump\""),
    doc("dt_dump", "Dump interval in code time, 0 disables", "0.0"),
    doc("cycle_dump", "Dump every N cycles, 0 disables", "0"),
    doc("summary_output_filename", "Summary output file", "\"summary_output.txt\""),
    doc("dt_summary", "Summary interval in code time, 0 disables", "0.0"),
    doc("cycle_summary", "Summary every N cycles, 0 disables", "0"),
];

pub const GROUPS: &[ParameterGroup] = &[
    ParameterGroup {
        name: "units",
        summary: "Conversions between code units and seconds / solar masses",
        parameters: UNITS_DOCS,
    },
    ParameterGroup {
        name: "zone",
        summary: "Gas reservoir, star formation and timestepping",
        parameters: ZONE_DOCS,
    },
    ParameterGroup {
        name: "stars",
        summary: "Stellar physics",
        parameters: STARS_DOCS,
    },
    ParameterGroup {
        name: "io",
        summary: "Output files and cadence",
        parameters: IO_DOCS,
    },
];

/// Overview of the configuration layout.
pub fn information() -> &'static str {
    "Onezone chemical enrichment model configuration.\n\
     Parameters are grouped as units, zone (gas reservoir and star formation),\n\
     stars (stellar physics) and io (output). Every parameter has a default;\n\
     those marked Required must be set for a meaningful run."
}

/// Look up a group by name.
pub fn group(name: &str) -> Option<&'static ParameterGroup> {
    GROUPS.iter().find(|g| g.name == name)
}

/// All documented parameters as `(group, doc)` pairs.
pub fn parameter_docs() -> impl Iterator<Item = (&'static str, &'static ParameterDoc)> {
    GROUPS
        .iter()
        .flat_map(|g| g.parameters.iter().map(move |p| (g.name, p)))
}

/// Render one group as plain text.
pub fn render_group(group: &ParameterGroup) -> String {
    let width = group
        .parameters
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(0);
    let mut out = format!("{}: {}\n", group.name, group.summary);
    for p in group.parameters {
        out.push_str(&format!(
            "  {:width$}  {} (default {})\n",
            p.name,
            p.description,
            p.default,
            width = width
        ));
    }
    out
}
