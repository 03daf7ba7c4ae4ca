// ─────────────────────────────────────────────────────────────────────
// Onezone Core — Property-Based Tests (proptest) for onezone-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for onezone-types using proptest.
//!
//! Covers: element lookup bijection, unknown keys, unit conversions,
//! configuration serialization roundtrip.

use onezone_types::config::{OnezoneConfig, StarFormationMethod};
use onezone_types::constants::PhysicalConstants;
use onezone_types::elements::{ElementKey, ElementTable, N_ELEMENTS};
use onezone_types::error::OnezoneError;
use proptest::prelude::*;

// ── Element Table ────────────────────────────────────────────────────

#[test]
fn lookup_bijection_over_full_table() {
    let table = ElementTable::reference().unwrap();
    for n in 1..=N_ELEMENTS as u8 {
        let symbol = table.symbol_of(n).unwrap();
        assert_eq!(table.number_of(symbol).unwrap(), n);
        assert_eq!(
            table.solar_abundance(n).unwrap(),
            table.solar_abundance(symbol).unwrap(),
            "abundance mismatch for {symbol}"
        );
        assert_eq!(
            table.molecular_weight(n).unwrap(),
            table.molecular_weight(symbol).unwrap(),
            "weight mismatch for {symbol}"
        );
    }
}

#[test]
fn molecular_weights_mostly_increase() {
    // Only a few known inversions (Ar/K, Co/Ni, Te/I) exist in the table.
    let table = ElementTable::reference().unwrap();
    let weights: Vec<f64> = table.iter().map(|e| e.molecular_weight).collect();
    let inversions = weights.windows(2).filter(|w| w[1] < w[0]).count();
    assert_eq!(inversions, 3);
}

proptest! {
    /// Any atomic number in range resolves identically through its parsed
    /// string form.
    #[test]
    fn parsed_number_matches_number(n in 1u8..=83) {
        let table = ElementTable::reference().unwrap();
        let text = n.to_string();
        prop_assert_eq!(
            table.molecular_weight(ElementKey::parse(&text)).unwrap(),
            table.molecular_weight(n).unwrap()
        );
    }

    /// Numbers outside 1..=83 are never silently mapped to a value.
    #[test]
    fn out_of_range_numbers_fail(n in 84u8..=255) {
        let table = ElementTable::reference().unwrap();
        let is_unknown = matches!(
            table.solar_abundance(n),
            Err(OnezoneError::UnknownElement(_))
        );
        prop_assert!(is_unknown);
    }

    /// Lowercase multi-letter strings are not element symbols.
    #[test]
    fn unknown_symbols_fail(s in "[a-z]{3,6}") {
        let table = ElementTable::reference().unwrap();
        prop_assert!(table.molecular_weight(s.as_str()).is_err());
    }
}

// ── Constants ────────────────────────────────────────────────────────

proptest! {
    /// eV -> erg -> eV is the identity within rounding.
    #[test]
    fn ev_erg_roundtrip(ev in 1e-3f64..1e6) {
        let c = PhysicalConstants::cgs();
        let back = c.erg_to_ev(c.ev_to_erg(ev));
        prop_assert!((back - ev).abs() <= 1e-12 * ev);
    }

    /// Hubble time scales as 1/H0.
    #[test]
    fn hubble_time_inverse_h0(h0 in 40.0f64..100.0) {
        let c = PhysicalConstants::cgs();
        let ratio = c.hubble_time(h0, 0.0) * h0 / (c.hubble_time(70.0, 0.0) * 70.0);
        prop_assert!((ratio - 1.0).abs() < 1e-12);
    }
}

// ── Configuration ────────────────────────────────────────────────────

proptest! {
    /// Serialize -> deserialize preserves every zone field.
    #[test]
    fn config_roundtrip(
        gas in 0.0f64..1e9,
        dt in 1e-3f64..100.0,
        method in 1u8..=2,
        cycle in 0u64..1000,
    ) {
        let mut cfg = OnezoneConfig::default();
        cfg.zone.initial_gas_mass = gas;
        cfg.zone.dt = dt;
        cfg.zone.star_formation_method = StarFormationMethod::try_from(method).unwrap();
        cfg.io.cycle_summary = cycle;

        let json = cfg.to_json_string().unwrap();
        let back = OnezoneConfig::from_json_str(&json).unwrap();
        prop_assert_eq!(&back, &cfg);
        prop_assert!(back.validate().is_ok());
    }

    /// Non-positive timesteps never validate.
    #[test]
    fn non_positive_dt_rejected(dt in -100.0f64..=0.0) {
        let mut cfg = OnezoneConfig::default();
        cfg.zone.dt = dt;
        prop_assert!(cfg.validate().is_err());
    }
}
