// ─────────────────────────────────────────────────────────────────────
// SCPN Nucleus — Random Engine
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Seeding and isotropic angle draws.
//!
//! Sampling routines never own an engine; they borrow one from the caller so
//! that draw order, and therefore reproducibility, stays under caller control.

use nucleus_types::constants::RNG_STREAM_PRIME;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

/// Deterministic engine from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Non-reproducible engine seeded from OS entropy.
pub fn rng_from_entropy() -> StdRng {
    StdRng::from_entropy()
}

/// Independent engine for one concurrent stream (e.g. one event).
/// Stream 0 reproduces `create_rng(base_seed)`.
pub fn derive_event_rng(base_seed: u64, stream: u64) -> StdRng {
    StdRng::seed_from_u64(base_seed.wrapping_add(stream.wrapping_mul(RNG_STREAM_PRIME)))
}

/// Polar cosine, uniform on [-1, 1).
pub fn cos_theta<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(-1.0..1.0)
}

/// Azimuth, uniform on [0, 2π).
pub fn phi<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(0.0..2.0 * PI)
}
