// ─────────────────────────────────────────────────────────────────────
// SCPN Nucleus — Nucleus
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Nucleon ensembles and the species factory.
//!
//! A [`Nucleus`] owns a fixed number of nucleons and resamples their
//! transverse positions on demand. Iterating a nucleus yields its nucleons in
//! a stable order.
//!
//! ```ignore
//! let mut lead = Nucleus::create("Pb")?;
//! let b_max = lead.radius();
//! lead.sample_nucleons(&mut rng, 0.0);
//! for nucleon in &lead { /* nucleon.x(), nucleon.y() */ }
//! ```

use crate::nucleon::{Nucleon, ParticipantMut, ParticipantsMut};
use crate::proton::Proton;
use crate::woods_saxon::WoodsSaxonNucleus;
use nucleus_types::config::NucleusConfig;
use nucleus_types::error::NucleusResult;
use nucleus_types::species::Species;
use rand::Rng;

#[derive(Debug, Clone)]
pub enum Nucleus {
    Proton(Proton),
    WoodsSaxon(WoodsSaxonNucleus),
}

impl Nucleus {
    /// Build a nucleus from a standard symbol, e.g. "p" or "Pb".
    ///
    /// Fails with `NucleusError::UnknownSpecies` for tokens outside the
    /// built-in table (symbols are case-sensitive).
    pub fn create(species: &str) -> NucleusResult<Self> {
        let species: Species = species.parse()?;
        Ok(Self::from_species(species))
    }

    pub fn from_species(species: Species) -> Self {
        match species.woods_saxon_params() {
            None => Nucleus::Proton(Proton::new()),
            Some(params) => Nucleus::WoodsSaxon(WoodsSaxonNucleus::from_params(&params)),
        }
    }

    /// Built-in species or validated custom Woods-Saxon shape.
    pub fn from_config(config: &NucleusConfig) -> NucleusResult<Self> {
        config.validate()?;
        match config {
            NucleusConfig::Species(symbol) => Self::create(symbol),
            NucleusConfig::Custom(params) => {
                Ok(Nucleus::WoodsSaxon(WoodsSaxonNucleus::from_params(params)))
            }
        }
    }

    /// Maximum impact-parameter extent of the ensemble [fm].
    pub fn radius(&self) -> f64 {
        match self {
            Nucleus::Proton(p) => p.radius(),
            Nucleus::WoodsSaxon(ws) => ws.radius(),
        }
    }

    /// Overwrite every nucleon position with a fresh draw, shifting x by
    /// `offset`.
    pub fn sample_nucleons<R: Rng + ?Sized>(&mut self, rng: &mut R, offset: f64) {
        match self {
            Nucleus::Proton(p) => p.sample_nucleons(offset),
            Nucleus::WoodsSaxon(ws) => ws.sample_nucleons(rng, offset),
        }
    }

    pub fn nucleons(&self) -> &[Nucleon] {
        match self {
            Nucleus::Proton(p) => p.nucleons(),
            Nucleus::WoodsSaxon(ws) => ws.nucleons(),
        }
    }

    fn nucleons_mut(&mut self) -> &mut [Nucleon] {
        match self {
            Nucleus::Proton(p) => p.nucleons_mut(),
            Nucleus::WoodsSaxon(ws) => ws.nucleons_mut(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Nucleon> {
        self.nucleons().iter()
    }

    /// Participant marking in iteration order; positions stay read-only.
    pub fn iter_mut(&mut self) -> ParticipantsMut<'_> {
        ParticipantsMut::new(self.nucleons_mut())
    }

    /// Mass number A.
    pub fn len(&self) -> usize {
        self.nucleons().len()
    }

    /// Always false: every nucleus holds at least one nucleon.
    pub fn is_empty(&self) -> bool {
        self.nucleons().is_empty()
    }

    pub fn mass_number(&self) -> usize {
        self.len()
    }

    /// Current (x, y) of every nucleon, in iteration order.
    pub fn positions(&self) -> Vec<(f64, f64)> {
        self.iter().map(Nucleon::position).collect()
    }

    pub fn participant_count(&self) -> usize {
        self.iter().filter(|n| n.is_participant()).count()
    }
}

impl From<Proton> for Nucleus {
    fn from(proton: Proton) -> Self {
        Nucleus::Proton(proton)
    }
}

impl From<WoodsSaxonNucleus> for Nucleus {
    fn from(nucleus: WoodsSaxonNucleus) -> Self {
        Nucleus::WoodsSaxon(nucleus)
    }
}

impl<'a> IntoIterator for &'a Nucleus {
    type Item = &'a Nucleon;
    type IntoIter = std::slice::Iter<'a, Nucleon>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Nucleus {
    type Item = ParticipantMut<'a>;
    type IntoIter = ParticipantsMut<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
