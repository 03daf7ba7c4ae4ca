// ─────────────────────────────────────────────────────────────────────
// Onezone Core — Elements
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Element reference data: solar abundances and molecular weights.
//!
//! Entries H (1) through Bi (83). Every entry is reachable both by
//! atomic number and by symbol; [`ElementTable::from_elements`] rejects
//! tables where that mapping is not one-to-one.

use crate::error::{OnezoneError, OnezoneResult};
use std::collections::HashMap;

/// Number of elements in the reference table.
pub const N_ELEMENTS: usize = 83;

const SYMBOLS: [&str; N_ELEMENTS] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi",
];

/// Solar abundances, log eps with H = 12 (Asplund et al. 2009).
/// Meteoritic values where no photospheric value exists; Tc and Pm are 0.
#[rustfmt::skip]
const SOLAR_ABUNDANCE: [f64; N_ELEMENTS] = [
    12.00, 10.93, 1.05, 1.38, 2.70, 8.43, 7.83, 8.69, 4.56, 7.93,
     6.24,  7.60, 6.45, 7.51, 5.41, 5.41, 5.50, 6.40, 5.03, 6.34,
     3.15,  4.95, 3.93, 5.64, 5.43, 7.50, 4.99, 6.22, 4.19, 4.56,
     3.04,  3.65, 2.30, 3.34, 2.54, 3.25, 2.52, 2.87, 2.21, 2.58,
     1.46,  1.88, 0.00, 1.75, 0.91, 1.57, 0.94, 1.71, 0.80, 2.04,
     1.01,  2.18, 1.55, 2.24, 1.08, 2.18, 1.10, 1.58, 0.72, 1.42,
     0.00,  0.96, 0.52, 1.07, 0.30, 1.10, 0.48, 0.92, 0.10, 0.84,
     0.10,  0.85, -0.12, 0.85, 0.26, 1.40, 1.38, 1.62, 0.92, 1.17,
     0.90,  1.75, 0.65,
];

/// Standard atomic weights [amu].
#[rustfmt::skip]
const MOLECULAR_WEIGHT: [f64; N_ELEMENTS] = [
    1.0079, 4.0026, 6.941, 9.0122, 10.811, 12.0107, 14.0067, 15.9994,
    18.9984, 20.1797, 22.9897, 24.305, 26.9815, 28.0855, 30.9738, 32.065,
    35.453, 39.948, 39.098, 40.078, 44.955912, 47.867, 50.9415, 51.9961,
    54.938045, 55.845, 58.933195, 58.6934, 63.546, 65.38, 69.723, 72.64,
    74.9216, 78.96, 79.904, 83.798, 85.4678, 87.62, 88.90585, 91.224,
    92.90638, 95.96, 97.9072, 101.07, 102.90550, 106.42, 107.8682, 112.411,
    114.818, 118.710, 121.760, 127.60, 126.90447, 131.293, 132.9054519, 137.327,
    138.90547, 140.116, 140.90765, 144.242, 145.0, 150.36, 151.964, 157.25,
    158.92535, 162.500, 164.93032, 167.259, 168.93421, 173.054, 174.9668, 178.49,
    180.94788, 183.84, 186.207, 190.23, 192.217, 195.084, 196.966569, 200.59,
    204.3833, 207.2, 208.98040,
];

/// One row of the element table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub atomic_number: u8,
    pub symbol: &'static str,
    /// log eps, H = 12.
    pub solar_abundance: f64,
    /// [amu]
    pub molecular_weight: f64,
}

/// Lookup key: atomic number or element symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKey<'a> {
    Number(u8),
    Symbol(&'a str),
}

impl<'a> ElementKey<'a> {
    /// Interpret a string key. Surrounding whitespace is ignored; decimal
    /// digits are an atomic number, anything else is a symbol.
    pub fn parse(key: &'a str) -> Self {
        let key = key.trim();
        match key.parse::<u8>() {
            Ok(n) => ElementKey::Number(n),
            Err(_) => ElementKey::Symbol(key),
        }
    }
}

impl From<u8> for ElementKey<'_> {
    fn from(n: u8) -> Self {
        ElementKey::Number(n)
    }
}

impl<'a> From<&'a str> for ElementKey<'a> {
    fn from(symbol: &'a str) -> Self {
        ElementKey::Symbol(symbol)
    }
}

impl std::fmt::Display for ElementKey<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementKey::Number(n) => write!(f, "atomic number {n}"),
            ElementKey::Symbol(s) => write!(f, "symbol '{s}'"),
        }
    }
}

/// Read-only element table keyed by atomic number and symbol.
#[derive(Debug, Clone)]
pub struct ElementTable {
    elements: Vec<Element>,
    by_symbol: HashMap<&'static str, usize>,
}

impl ElementTable {
    /// The reference table, H through Bi.
    pub fn reference() -> OnezoneResult<Self> {
        let elements = SYMBOLS
            .iter()
            .zip(SOLAR_ABUNDANCE.iter())
            .zip(MOLECULAR_WEIGHT.iter())
            .enumerate()
            .map(|(i, ((&symbol, &abundance), &weight))| Element {
                atomic_number: (i + 1) as u8,
                symbol,
                solar_abundance: abundance,
                molecular_weight: weight,
            })
            .collect();
        Self::from_elements(elements)
    }

    /// Build a table from explicit rows.
    ///
    /// Rows must be numbered 1..=n in order and symbols must be unique,
    /// non-empty, and not decimal numbers. Symbols are stored trimmed.
    pub fn from_elements(mut elements: Vec<Element>) -> OnezoneResult<Self> {
        if elements.is_empty() {
            return Err(OnezoneError::InvalidTable(
                "element table must not be empty".to_string(),
            ));
        }
        if elements.len() > u8::MAX as usize {
            return Err(OnezoneError::InvalidTable(format!(
                "element table has {} rows, at most {} supported",
                elements.len(),
                u8::MAX
            )));
        }

        let mut by_symbol = HashMap::with_capacity(elements.len());
        for (idx, el) in elements.iter_mut().enumerate() {
            let expected = idx + 1;
            if el.atomic_number as usize != expected {
                return Err(OnezoneError::InvalidTable(format!(
                    "row {idx} has atomic number {}, expected {expected}",
                    el.atomic_number
                )));
            }
            let symbol = el.symbol.trim();
            if symbol.is_empty() || symbol.parse::<u8>().is_ok() {
                return Err(OnezoneError::InvalidTable(format!(
                    "atomic number {} has invalid symbol '{}'",
                    el.atomic_number, el.symbol
                )));
            }
            el.symbol = symbol;
            if let Some(prev) = by_symbol.insert(symbol, idx) {
                return Err(OnezoneError::InvalidTable(format!(
                    "symbol '{}' used by atomic numbers {} and {}",
                    el.symbol,
                    prev + 1,
                    expected
                )));
            }
        }

        Ok(ElementTable {
            elements,
            by_symbol,
        })
    }

    fn index_of(&self, key: ElementKey<'_>) -> OnezoneResult<usize> {
        let idx = match key {
            ElementKey::Number(n) if n >= 1 && (n as usize) <= self.elements.len() => {
                Some(n as usize - 1)
            }
            ElementKey::Number(_) => None,
            ElementKey::Symbol(s) => self.by_symbol.get(s.trim()).copied(),
        };
        idx.ok_or_else(|| OnezoneError::UnknownElement(key.to_string()))
    }

    /// Full row for a key.
    pub fn element<'a>(&self, key: impl Into<ElementKey<'a>>) -> OnezoneResult<&Element> {
        let idx = self.index_of(key.into())?;
        Ok(&self.elements[idx])
    }

    /// Solar abundance (log eps) for an atomic number or symbol.
    pub fn solar_abundance<'a>(&self, key: impl Into<ElementKey<'a>>) -> OnezoneResult<f64> {
        self.element(key).map(|e| e.solar_abundance)
    }

    /// Molecular weight [amu] for an atomic number or symbol.
    pub fn molecular_weight<'a>(&self, key: impl Into<ElementKey<'a>>) -> OnezoneResult<f64> {
        self.element(key).map(|e| e.molecular_weight)
    }

    pub fn symbol_of(&self, atomic_number: u8) -> OnezoneResult<&'static str> {
        self.element(atomic_number).map(|e| e.symbol)
    }

    pub fn number_of(&self, symbol: &str) -> OnezoneResult<u8> {
        self.element(symbol).map(|e| e.atomic_number)
    }

    /// Rows in atomic-number order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
