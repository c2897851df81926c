// ─────────────────────────────────────────────────────────────────────
// SCPN Nucleus — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Woods-Saxon reference parameters and sampler policy constants.
//!
//! Shape parameters follow the spherical fits used for heavy-ion Glauber
//! modelling (half-density radius R and diffuseness a, both in fm).

/// Copper-63 mass number.
pub const CU_MASS_NUMBER: usize = 63;
/// Copper-63 half-density radius [fm].
pub const CU_RADIUS_FM: f64 = 4.20;
/// Copper-63 surface diffuseness [fm].
pub const CU_DIFFUSENESS_FM: f64 = 0.596;

/// Gold-197 mass number.
pub const AU_MASS_NUMBER: usize = 197;
/// Gold-197 half-density radius [fm].
pub const AU_RADIUS_FM: f64 = 6.38;
/// Gold-197 surface diffuseness [fm].
pub const AU_DIFFUSENESS_FM: f64 = 0.535;

/// Lead-208 mass number.
pub const PB_MASS_NUMBER: usize = 208;
/// Lead-208 half-density radius [fm].
pub const PB_RADIUS_FM: f64 = 6.62;
/// Lead-208 surface diffuseness [fm].
pub const PB_DIFFUSENESS_FM: f64 = 0.546;

/// Number of linear segments in the radial sampling table.
pub const TABLE_STEPS: usize = 1000;

/// Table upper edge, in diffuseness lengths beyond R.
/// At 10a the density has fallen by a factor e^-10 relative to the surface.
pub const TABLE_EXTENT_DIFFUSENESS: f64 = 10.0;

/// Probability mass left above the reported nucleus radius.
///
/// The radius bounds the impact parameter range, so it is a quantile of the
/// radial distribution rather than its true (much larger) support.
pub const RADIUS_TAIL_PROBABILITY: f64 = 1.0e-5;

/// Largest mass number accepted for a custom nucleus.
/// The heaviest known nuclei have A just under 300.
pub const MAX_MASS_NUMBER: usize = 300;

/// Diffuseness below which a custom nucleus is flagged as nearly hard-edged.
pub const MIN_RECOMMENDED_DIFFUSENESS_FM: f64 = 0.1;

/// Large odd multiplier for deriving per-event random streams.
pub const RNG_STREAM_PRIME: u64 = 0x9E37_79B9_7F4A_7C15;
