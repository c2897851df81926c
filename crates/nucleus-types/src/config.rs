// ─────────────────────────────────────────────────────────────────────
// SCPN Nucleus — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::{MAX_MASS_NUMBER, MIN_RECOMMENDED_DIFFUSENESS_FM};
use crate::error::{NucleusError, NucleusResult};
use crate::species::{Species, WoodsSaxonParams};
use serde::{Deserialize, Serialize};

/// Top-level sampling run configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub run_name: String,
    pub nucleus: NucleusConfig,
    #[serde(default)]
    pub sampler: SamplerConfig,
}

/// Which nucleus to build: a built-in species symbol or a custom
/// spherical Woods-Saxon shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NucleusConfig {
    /// Standard symbol, e.g. "Pb". Case-sensitive.
    Species(String),
    Custom(WoodsSaxonParams),
}

/// Event loop parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Number of independent nucleon ensembles to draw (default: 1000)
    #[serde(default = "default_n_events")]
    pub n_events: usize,
    /// Base seed; `None` seeds from OS entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Horizontal shift applied to every nucleon [fm] (default: 0.0)
    #[serde(default)]
    pub offset_fm: f64,
}

fn default_n_events() -> usize {
    1000
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig {
            n_events: default_n_events(),
            seed: None,
            offset_fm: 0.0,
        }
    }
}

impl NucleusConfig {
    /// Check the configuration and resolve built-in species.
    pub fn validate(&self) -> NucleusResult<()> {
        match self {
            NucleusConfig::Species(symbol) => symbol.parse::<Species>().map(|_| ()),
            NucleusConfig::Custom(params) => validate_woods_saxon(params),
        }
    }
}

fn validate_woods_saxon(params: &WoodsSaxonParams) -> NucleusResult<()> {
    if params.mass_number < 2 {
        return Err(NucleusError::ConfigError(format!(
            "custom nucleus requires mass_number >= 2, got {}",
            params.mass_number
        )));
    }
    if params.mass_number > MAX_MASS_NUMBER {
        return Err(NucleusError::ConfigError(format!(
            "custom nucleus requires mass_number <= {MAX_MASS_NUMBER}, got {}",
            params.mass_number
        )));
    }
    if !params.radius_fm.is_finite() || params.radius_fm <= 0.0 {
        return Err(NucleusError::ConfigError(format!(
            "radius_fm must be finite and > 0, got {}",
            params.radius_fm
        )));
    }
    if !params.diffuseness_fm.is_finite() || params.diffuseness_fm <= 0.0 {
        return Err(NucleusError::ConfigError(format!(
            "diffuseness_fm must be finite and > 0, got {}",
            params.diffuseness_fm
        )));
    }
    if params.diffuseness_fm < MIN_RECOMMENDED_DIFFUSENESS_FM {
        log::warn!(
            "Woods-Saxon diffuseness {:.3} fm is below {} fm; the surface is nearly hard-edged",
            params.diffuseness_fm,
            MIN_RECOMMENDED_DIFFUSENESS_FM
        );
    }
    Ok(())
}

impl SamplerConfig {
    pub fn validate(&self) -> NucleusResult<()> {
        if self.n_events == 0 {
            return Err(NucleusError::ConfigError(
                "sampler requires n_events >= 1".to_string(),
            ));
        }
        if !self.offset_fm.is_finite() {
            return Err(NucleusError::ConfigError(format!(
                "offset_fm must be finite, got {}",
                self.offset_fm
            )));
        }
        Ok(())
    }
}

impl RunConfig {
    pub fn from_json_str(contents: &str) -> NucleusResult<Self> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate from a JSON file.
    pub fn from_file(path: &str) -> NucleusResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> NucleusResult<()> {
        self.nucleus.validate()?;
        self.sampler.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// CARGO_MANIFEST_DIR points to crates/nucleus-types/, the workspace
    /// root is two levels up.
    fn project_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
    }

    fn config_path(relative: &str) -> String {
        project_root().join(relative).to_string_lossy().to_string()
    }

    #[test]
    fn test_load_lead_config() {
        let cfg = RunConfig::from_file(&config_path("configs/lead.json")).unwrap();
        assert_eq!(cfg.run_name, "Pb-208-Reference");
        assert_eq!(cfg.nucleus, NucleusConfig::Species("Pb".to_string()));
        assert_eq!(cfg.sampler.n_events, 10_000);
        assert_eq!(cfg.sampler.seed, Some(2015));
    }

    #[test]
    fn test_load_custom_config() {
        let cfg = RunConfig::from_file(&config_path("configs/custom_xenon.json")).unwrap();
        match cfg.nucleus {
            NucleusConfig::Custom(params) => {
                assert_eq!(params.mass_number, 129);
                assert!((params.radius_fm - 5.36).abs() < 1e-12);
                assert!((params.diffuseness_fm - 0.59).abs() < 1e-12);
            }
            other => panic!("Expected custom nucleus, got {other:?}"),
        }
        assert!((cfg.sampler.offset_fm + 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_sampler_defaults_when_absent() {
        let cfg = RunConfig::from_json_str(r#"{"run_name": "d", "nucleus": {"species": "Au"}}"#)
            .unwrap();
        assert_eq!(cfg.sampler, SamplerConfig::default());
        assert_eq!(cfg.sampler.n_events, 1000);
        assert!(cfg.sampler.seed.is_none());
    }

    #[test]
    fn test_unknown_species_rejected() {
        let err = RunConfig::from_json_str(r#"{"run_name": "x", "nucleus": {"species": "Xx"}}"#)
            .unwrap_err();
        match err {
            NucleusError::UnknownSpecies(name) => assert_eq!(name, "Xx"),
            other => panic!("Unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_custom_params_rejected() {
        let bad = [
            WoodsSaxonParams {
                mass_number: 1,
                radius_fm: 5.0,
                diffuseness_fm: 0.5,
            },
            WoodsSaxonParams {
                mass_number: 40,
                radius_fm: -1.0,
                diffuseness_fm: 0.5,
            },
            WoodsSaxonParams {
                mass_number: 40,
                radius_fm: 3.5,
                diffuseness_fm: 0.0,
            },
            WoodsSaxonParams {
                mass_number: 40,
                radius_fm: f64::NAN,
                diffuseness_fm: 0.5,
            },
            WoodsSaxonParams {
                mass_number: MAX_MASS_NUMBER + 1,
                radius_fm: 7.0,
                diffuseness_fm: 0.5,
            },
            WoodsSaxonParams {
                mass_number: usize::MAX,
                radius_fm: 7.0,
                diffuseness_fm: 0.5,
            },
        ];
        for params in bad {
            let err = NucleusConfig::Custom(params)
                .validate()
                .expect_err("invalid shape must error");
            match err {
                NucleusError::ConfigError(msg) => {
                    assert!(msg.contains("must") || msg.contains("requires"))
                }
                other => panic!("Unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_huge_mass_number_rejected_from_json() {
        let json = r#"{
            "run_name": "huge",
            "nucleus": {"custom": {"mass_number": 18446744073709551615,
                                   "radius_fm": 7.0, "diffuseness_fm": 0.5}}
        }"#;
        let err = RunConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, NucleusError::ConfigError(_)));

        let heaviest = NucleusConfig::Custom(WoodsSaxonParams {
            mass_number: MAX_MASS_NUMBER,
            radius_fm: 7.0,
            diffuseness_fm: 0.5,
        });
        assert!(heaviest.validate().is_ok());
    }

    #[test]
    fn test_sampler_rejects_zero_events_and_nan_offset() {
        let zero = SamplerConfig {
            n_events: 0,
            ..SamplerConfig::default()
        };
        assert!(zero.validate().is_err());
        let nan = SamplerConfig {
            offset_fm: f64::NAN,
            ..SamplerConfig::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = RunConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, NucleusError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = RunConfig::from_file(&config_path("configs/does_not_exist.json")).unwrap_err();
        assert!(matches!(err, NucleusError::Io(_)));
    }

    #[test]
    fn test_roundtrip_serialization() {
        let cfg = RunConfig::from_file(&config_path("configs/lead.json")).unwrap();
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        let cfg2: RunConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.run_name, cfg2.run_name);
        assert_eq!(cfg.nucleus, cfg2.nucleus);
        assert_eq!(cfg.sampler, cfg2.sampler);
    }
}
