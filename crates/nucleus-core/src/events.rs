// ─────────────────────────────────────────────────────────────────────
// SCPN Nucleus — Event Batches
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Batches of independent nucleon ensembles.
//!
//! Each event draws from its own engine derived from the base seed, so the
//! sequential and Rayon-parallel paths produce identical batches.

use crate::nucleus::Nucleus;
use crate::random::derive_event_rng;
use nucleus_types::config::{RunConfig, SamplerConfig};
use nucleus_types::error::NucleusResult;
use rayon::prelude::*;

/// Nucleon (x, y) positions of one event, in iteration order.
pub type EventSnapshot = Vec<(f64, f64)>;

#[derive(Debug, Clone)]
pub struct EventSampler {
    template: Nucleus,
    n_events: usize,
    base_seed: u64,
    offset_fm: f64,
}

impl EventSampler {
    /// Validate `config` and fix the base seed (drawn from entropy if unset).
    pub fn new(template: Nucleus, config: &SamplerConfig) -> NucleusResult<Self> {
        config.validate()?;
        let base_seed = config.seed.unwrap_or_else(rand::random);
        Ok(EventSampler {
            template,
            n_events: config.n_events,
            base_seed,
            offset_fm: config.offset_fm,
        })
    }

    pub fn from_run_config(config: &RunConfig) -> NucleusResult<Self> {
        config.sampler.validate()?;
        let sampler = Self::new(Nucleus::from_config(&config.nucleus)?, &config.sampler)?;
        log::info!(
            "Run '{}': A={}, radius={:.3} fm, {} events",
            config.run_name,
            sampler.template.len(),
            sampler.template.radius(),
            sampler.n_events
        );
        Ok(sampler)
    }

    /// Seed actually used; record it to reproduce an entropy-seeded run.
    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    pub fn n_events(&self) -> usize {
        self.n_events
    }

    pub fn template(&self) -> &Nucleus {
        &self.template
    }

    /// Sample a single event by index.
    pub fn sample_event(&self, nucleus: &mut Nucleus, event: usize) -> EventSnapshot {
        let mut rng = derive_event_rng(self.base_seed, event as u64);
        nucleus.sample_nucleons(&mut rng, self.offset_fm);
        nucleus.positions()
    }

    pub fn sample_sequential(&self) -> Vec<EventSnapshot> {
        log::info!(
            "Sampling {} events sequentially (seed {})",
            self.n_events,
            self.base_seed
        );
        let mut nucleus = self.template.clone();
        (0..self.n_events)
            .map(|event| self.sample_event(&mut nucleus, event))
            .collect()
    }

    /// One nucleus clone per Rayon worker; the radial table is shared.
    pub fn sample_parallel(&self) -> Vec<EventSnapshot> {
        log::info!(
            "Sampling {} events on {} threads (seed {})",
            self.n_events,
            rayon::current_num_threads(),
            self.base_seed
        );
        (0..self.n_events)
            .into_par_iter()
            .map_init(
                || self.template.clone(),
                |nucleus, event| self.sample_event(nucleus, event),
            )
            .collect()
    }
}
