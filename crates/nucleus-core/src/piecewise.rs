// ─────────────────────────────────────────────────────────────────────
// SCPN Nucleus — Piecewise-Linear Distribution
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Continuous distribution with a piecewise-linear density.
//!
//! Used to sample densities without an analytic inverse CDF: tabulate the
//! density on a fine grid once, then invert the (exactly integrable) linear
//! interpolant for every draw. The table is immutable after construction.

use ndarray::Array1;
use nucleus_types::error::{NucleusError, NucleusResult};
use rand::Rng;
use rand_distr::Distribution;

/// Density linear between consecutive breakpoints, zero outside.
#[derive(Debug, Clone)]
pub struct PiecewiseLinear {
    breakpoints: Vec<f64>,
    densities: Vec<f64>,
    /// Unnormalized cumulative weight at each breakpoint; first entry 0.
    cumulative: Vec<f64>,
}

impl PiecewiseLinear {
    /// Checked constructor from explicit breakpoints and densities.
    pub fn new(breakpoints: Vec<f64>, densities: Vec<f64>) -> NucleusResult<Self> {
        if breakpoints.len() < 2 {
            return Err(NucleusError::InvalidDistribution(format!(
                "piecewise-linear density requires >= 2 breakpoints, got {}",
                breakpoints.len()
            )));
        }
        if densities.len() != breakpoints.len() {
            return Err(NucleusError::InvalidDistribution(format!(
                "length mismatch: {} breakpoints, {} densities",
                breakpoints.len(),
                densities.len()
            )));
        }
        if breakpoints.iter().any(|b| !b.is_finite()) {
            return Err(NucleusError::InvalidDistribution(
                "breakpoints must be finite".to_string(),
            ));
        }
        if breakpoints.windows(2).any(|w| w[1] <= w[0]) {
            return Err(NucleusError::InvalidDistribution(
                "breakpoints must be strictly increasing".to_string(),
            ));
        }
        if densities.iter().any(|d| !d.is_finite() || *d < 0.0) {
            return Err(NucleusError::InvalidDistribution(
                "densities must be finite and >= 0".to_string(),
            ));
        }

        let dist = Self::from_parts(breakpoints, densities);
        if dist.total_weight() <= 0.0 {
            return Err(NucleusError::InvalidDistribution(
                "total weight must be > 0".to_string(),
            ));
        }
        Ok(dist)
    }

    /// Tabulate `f` at `n_steps + 1` equally spaced breakpoints on `[lo, hi]`.
    pub fn from_fn<F>(n_steps: usize, lo: f64, hi: f64, f: F) -> NucleusResult<Self>
    where
        F: Fn(f64) -> f64,
    {
        if n_steps == 0 {
            return Err(NucleusError::InvalidDistribution(
                "n_steps must be >= 1".to_string(),
            ));
        }
        let (breakpoints, densities) = tabulate(n_steps, lo, hi, f);
        Self::new(breakpoints, densities)
    }

    /// Trusted path for callers whose inputs are valid by construction.
    pub(crate) fn from_fn_unchecked<F>(n_steps: usize, lo: f64, hi: f64, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let (breakpoints, densities) = tabulate(n_steps, lo, hi, f);
        Self::from_parts(breakpoints, densities)
    }

    fn from_parts(breakpoints: Vec<f64>, densities: Vec<f64>) -> Self {
        let mut cumulative = Vec::with_capacity(breakpoints.len());
        let mut acc = 0.0;
        cumulative.push(acc);
        for k in 1..breakpoints.len() {
            // Trapezoid rule is exact for a linear segment.
            acc += 0.5 * (densities[k - 1] + densities[k]) * (breakpoints[k] - breakpoints[k - 1]);
            cumulative.push(acc);
        }
        PiecewiseLinear {
            breakpoints,
            densities,
            cumulative,
        }
    }

    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    pub fn densities(&self) -> &[f64] {
        &self.densities
    }

    pub fn min(&self) -> f64 {
        self.breakpoints[0]
    }

    pub fn max(&self) -> f64 {
        self.breakpoints[self.breakpoints.len() - 1]
    }

    /// Integral of the unnormalized density.
    pub fn total_weight(&self) -> f64 {
        self.cumulative[self.cumulative.len() - 1]
    }

    /// Normalized density at `x`.
    pub fn pdf(&self, x: f64) -> f64 {
        if x < self.min() || x > self.max() {
            return 0.0;
        }
        let k = self.segment_containing(x);
        let (x0, x1) = (self.breakpoints[k], self.breakpoints[k + 1]);
        let t = (x - x0) / (x1 - x0);
        ((1.0 - t) * self.densities[k] + t * self.densities[k + 1]) / self.total_weight()
    }

    /// Cumulative probability P(X <= x).
    pub fn cdf(&self, x: f64) -> f64 {
        if x <= self.min() {
            return 0.0;
        }
        if x >= self.max() {
            return 1.0;
        }
        let k = self.segment_containing(x);
        let x0 = self.breakpoints[k];
        let h = self.breakpoints[k + 1] - x0;
        let d0 = self.densities[k];
        let slope = (self.densities[k + 1] - d0) / h;
        let t = x - x0;
        let mass = self.cumulative[k] + d0 * t + 0.5 * slope * t * t;
        (mass / self.total_weight()).clamp(0.0, 1.0)
    }

    /// Inverse CDF. `p` is clamped to [0, 1].
    pub fn quantile(&self, p: f64) -> f64 {
        let target = p.clamp(0.0, 1.0) * self.total_weight();
        let last = self.breakpoints.len() - 2;
        // First breakpoint whose cumulative weight exceeds the target closes
        // the segment; zero-weight segments are skipped automatically.
        let k = self
            .cumulative
            .partition_point(|&c| c <= target)
            .saturating_sub(1)
            .min(last);

        let x0 = self.breakpoints[k];
        let h = self.breakpoints[k + 1] - x0;
        let d0 = self.densities[k];
        let slope = (self.densities[k + 1] - d0) / h;
        let mass = (target - self.cumulative[k]).max(0.0);

        // Solve d0·t + slope·t²/2 = mass in the cancellation-free form.
        let disc = (d0 * d0 + 2.0 * slope * mass).max(0.0);
        let denom = d0 + disc.sqrt();
        let t = if denom > 0.0 { 2.0 * mass / denom } else { 0.0 };
        x0 + t.clamp(0.0, h)
    }

    /// Index k of the segment [b_k, b_{k+1}] holding `x` (clamped).
    fn segment_containing(&self, x: f64) -> usize {
        self.breakpoints
            .partition_point(|&b| b <= x)
            .saturating_sub(1)
            .min(self.breakpoints.len() - 2)
    }
}

impl Distribution<f64> for PiecewiseLinear {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.quantile(rng.gen::<f64>())
    }
}

fn tabulate<F>(n_steps: usize, lo: f64, hi: f64, f: F) -> (Vec<f64>, Vec<f64>)
where
    F: Fn(f64) -> f64,
{
    let breakpoints = Array1::linspace(lo, hi, n_steps + 1);
    let densities = breakpoints.mapv(f);
    (breakpoints.to_vec(), densities.to_vec())
}
