// ─────────────────────────────────────────────────────────────────────
// SCPN Nucleus — Woods-Saxon Nucleus
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Uncorrelated nucleon positions from a spherical Woods-Saxon density.
//!
//! ρ(r) ∝ 1 / (1 + exp((r − R) / a)). Radii are drawn from r²ρ(r) through a
//! piecewise-linear table built once per nucleus; directions are isotropic and
//! only the transverse (x, y) projection is kept.

use crate::nucleon::Nucleon;
use crate::piecewise::PiecewiseLinear;
use crate::random::{cos_theta, phi};
use nucleus_types::constants::{RADIUS_TAIL_PROBABILITY, TABLE_EXTENT_DIFFUSENESS, TABLE_STEPS};
use nucleus_types::species::WoodsSaxonParams;
use rand::Rng;
use rand_distr::Distribution;
use std::sync::Arc;

/// Heavy nucleus with A > 1 nucleons.
#[derive(Debug, Clone)]
pub struct WoodsSaxonNucleus {
    nucleons: Vec<Nucleon>,
    radius_fm: f64,
    diffuseness_fm: f64,
    /// Radial table, shared read-only between clones.
    sampler: Arc<PiecewiseLinear>,
    /// Truncated radius reported to impact-parameter sampling.
    max_radius_fm: f64,
}

impl WoodsSaxonNucleus {
    /// Build a nucleus with `mass_number` nucleons and shape (R, a).
    ///
    /// # Panics
    /// If `mass_number < 2` or R, a are not finite and positive.
    pub fn new(mass_number: usize, radius_fm: f64, diffuseness_fm: f64) -> Self {
        assert!(
            mass_number >= 2,
            "Woods-Saxon nucleus requires A >= 2, got {mass_number}"
        );
        assert!(
            radius_fm.is_finite() && radius_fm > 0.0,
            "Woods-Saxon R must be finite and > 0, got {radius_fm}"
        );
        assert!(
            diffuseness_fm.is_finite() && diffuseness_fm > 0.0,
            "Woods-Saxon a must be finite and > 0, got {diffuseness_fm}"
        );

        let r_max = radius_fm + TABLE_EXTENT_DIFFUSENESS * diffuseness_fm;
        let sampler = PiecewiseLinear::from_fn_unchecked(TABLE_STEPS, 0.0, r_max, |r| {
            r * r * woods_saxon_shape(r, radius_fm, diffuseness_fm)
        });
        let max_radius_fm = sampler.quantile(1.0 - RADIUS_TAIL_PROBABILITY);

        log::debug!(
            "Woods-Saxon table: A={mass_number}, R={radius_fm} fm, a={diffuseness_fm} fm, \
             {TABLE_STEPS} steps on [0, {r_max:.3}] fm, reported radius {max_radius_fm:.3} fm"
        );

        WoodsSaxonNucleus {
            nucleons: vec![Nucleon::new(); mass_number],
            radius_fm,
            diffuseness_fm,
            sampler: Arc::new(sampler),
            max_radius_fm,
        }
    }

    pub fn from_params(params: &WoodsSaxonParams) -> Self {
        Self::new(params.mass_number, params.radius_fm, params.diffuseness_fm)
    }

    /// Radius bounding all but `RADIUS_TAIL_PROBABILITY` of the radial mass.
    ///
    /// Deliberately smaller than the sampled support: the density decays
    /// exponentially and reporting the full support would make most
    /// impact parameters produce no collisions.
    pub fn radius(&self) -> f64 {
        self.max_radius_fm
    }

    /// Half-density radius R [fm].
    pub fn half_density_radius(&self) -> f64 {
        self.radius_fm
    }

    /// Surface diffuseness a [fm].
    pub fn diffuseness(&self) -> f64 {
        self.diffuseness_fm
    }

    pub fn sampler(&self) -> &PiecewiseLinear {
        &self.sampler
    }

    /// Unnormalized density ρ(r), equal to 1/2 at r = R.
    pub fn density(&self, r: f64) -> f64 {
        woods_saxon_shape(r, self.radius_fm, self.diffuseness_fm)
    }

    /// One radial distance drawn from r²ρ(r).
    pub fn sample_radius<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.sampler.sample(rng)
    }

    /// Resample every nucleon independently and shift x by `offset`.
    ///
    /// Per nucleon the engine is advanced in the order radius, cos θ, φ.
    pub fn sample_nucleons<R: Rng + ?Sized>(&mut self, rng: &mut R, offset: f64) {
        for nucleon in &mut self.nucleons {
            let r = self.sampler.sample(rng);
            let cos_t = cos_theta(rng);
            let azimuth = phi(rng);
            let r_sin_theta = r * (1.0 - cos_t * cos_t).sqrt();
            nucleon.set_position(r_sin_theta * azimuth.cos() + offset, r_sin_theta * azimuth.sin());
        }
    }

    pub fn nucleons(&self) -> &[Nucleon] {
        &self.nucleons
    }

    pub(crate) fn nucleons_mut(&mut self) -> &mut [Nucleon] {
        &mut self.nucleons
    }
}

fn woods_saxon_shape(r: f64, radius_fm: f64, diffuseness_fm: f64) -> f64 {
    1.0 / (1.0 + ((r - radius_fm) / diffuseness_fm).exp())
}
