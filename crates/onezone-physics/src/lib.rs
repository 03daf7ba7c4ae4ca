//! Physics modules for Onezone Core.
//!
//! Blackbody radiation from stellar surfaces and the stellar helper
//! models used alongside it.

pub mod radiation;
pub mod stellar;
