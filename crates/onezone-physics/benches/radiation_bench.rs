// ─────────────────────────────────────────────────────────────────────
// Onezone Core — Radiation Benchmark
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use criterion::{criterion_group, criterion_main, Criterion};
use ndarray::Array1;
use onezone_physics::radiation::{BlackbodyRadiation, RadiationQuantity};
use onezone_types::constants::PhysicalConstants;
use std::hint::black_box;

/// Ionizing rates for a single O star.
fn bench_ionizing_rates(c: &mut Criterion) {
    let constants = PhysicalConstants::cgs();
    let bb = BlackbodyRadiation::new(&constants);
    c.bench_function("q0_q1_40kK", |b| {
        b.iter(|| {
            let q0 = bb.hydrogen_ionizing_flux(black_box(4.0e4));
            let q1 = bb.helium_ionizing_flux(black_box(4.0e4));
            black_box((q0, q1))
        })
    });
}

/// Mean photon energy: two series per call.
fn bench_mean_energy(c: &mut Criterion) {
    let constants = PhysicalConstants::cgs();
    let bb = BlackbodyRadiation::new(&constants);
    c.bench_function("mean_photon_energy_13.6eV_40kK", |b| {
        b.iter(|| bb.mean_photon_energy_above_ev(black_box(13.6), black_box(4.0e4)))
    });
}

/// FUV table over a 1000-point temperature grid, as for a stellar population.
fn bench_fuv_table(c: &mut Criterion) {
    let constants = PhysicalConstants::cgs();
    let bb = BlackbodyRadiation::new(&constants);
    let temps = Array1::linspace(3.0e3, 1.2e5, 1000);
    let mut group = c.benchmark_group("tabulate_1000");
    group.sample_size(20);
    group.bench_function("fuv", |b| {
        b.iter(|| bb.tabulate(RadiationQuantity::Fuv, black_box(&temps)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_ionizing_rates,
    bench_mean_energy,
    bench_fuv_table
);
criterion_main!(benches);
