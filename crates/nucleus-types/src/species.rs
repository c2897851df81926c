// ─────────────────────────────────────────────────────────────────────
// SCPN Nucleus — Species
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Built-in nuclear species, keyed by standard (case-sensitive) symbol.

use crate::constants::*;
use crate::error::NucleusError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Woods-Saxon shape of a spherical nucleus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WoodsSaxonParams {
    /// Number of nucleons A.
    pub mass_number: usize,
    /// Half-density radius R [fm].
    pub radius_fm: f64,
    /// Surface diffuseness a [fm].
    pub diffuseness_fm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    #[serde(rename = "p")]
    Proton,
    #[serde(rename = "Cu")]
    Copper,
    #[serde(rename = "Au")]
    Gold,
    #[serde(rename = "Pb")]
    Lead,
}

impl Species {
    pub const ALL: [Species; 4] = [
        Species::Proton,
        Species::Copper,
        Species::Gold,
        Species::Lead,
    ];

    /// Standard nuclear symbol, e.g. "Pb".
    pub fn symbol(self) -> &'static str {
        match self {
            Species::Proton => "p",
            Species::Copper => "Cu",
            Species::Gold => "Au",
            Species::Lead => "Pb",
        }
    }

    pub fn mass_number(self) -> usize {
        match self {
            Species::Proton => 1,
            Species::Copper => CU_MASS_NUMBER,
            Species::Gold => AU_MASS_NUMBER,
            Species::Lead => PB_MASS_NUMBER,
        }
    }

    /// Woods-Saxon shape, `None` for the proton.
    pub fn woods_saxon_params(self) -> Option<WoodsSaxonParams> {
        let (mass_number, radius_fm, diffuseness_fm) = match self {
            Species::Proton => return None,
            Species::Copper => (CU_MASS_NUMBER, CU_RADIUS_FM, CU_DIFFUSENESS_FM),
            Species::Gold => (AU_MASS_NUMBER, AU_RADIUS_FM, AU_DIFFUSENESS_FM),
            Species::Lead => (PB_MASS_NUMBER, PB_RADIUS_FM, PB_DIFFUSENESS_FM),
        };
        Some(WoodsSaxonParams {
            mass_number,
            radius_fm,
            diffuseness_fm,
        })
    }
}

impl FromStr for Species {
    type Err = NucleusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Species::ALL
            .into_iter()
            .find(|species| species.symbol() == s)
            .ok_or_else(|| NucleusError::UnknownSpecies(s.to_string()))
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
