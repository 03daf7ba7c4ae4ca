//! Numerical primitives for Onezone Core.

pub mod series;
