//! Proton: trivial single-nucleon ensemble.

use crate::nucleon::Nucleon;

#[derive(Debug, Clone)]
pub struct Proton {
    nucleons: [Nucleon; 1],
}

impl Proton {
    pub fn new() -> Self {
        Proton {
            nucleons: [Nucleon::new()],
        }
    }

    /// Always zero: a point carries no extent for impact-parameter purposes.
    pub fn radius(&self) -> f64 {
        0.0
    }

    /// Place the nucleon at (offset, 0). Consumes no randomness.
    pub fn sample_nucleons(&mut self, offset: f64) {
        self.nucleons[0].set_position(offset, 0.0);
    }

    pub fn nucleons(&self) -> &[Nucleon] {
        &self.nucleons
    }

    pub(crate) fn nucleons_mut(&mut self) -> &mut [Nucleon] {
        &mut self.nucleons
    }
}

impl Default for Proton {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_is_zero() {
        let mut proton = Proton::new();
        assert_eq!(proton.radius(), 0.0);
        proton.sample_nucleons(3.0);
        assert_eq!(proton.radius(), 0.0);
    }

    #[test]
    fn test_places_nucleon_at_offset() {
        let mut proton = Proton::new();
        for offset in [-1.0e6, -4.5, -0.0, 0.0, 2.25, 1.0e9] {
            proton.sample_nucleons(offset);
            assert_eq!(proton.nucleons().len(), 1);
            assert_eq!(proton.nucleons()[0].position(), (offset, 0.0));
        }
    }
}
