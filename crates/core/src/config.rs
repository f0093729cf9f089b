//! Pipeline configuration.
//!
//! Configuration is resolved once at startup and passed into the engine; the
//! engine itself never reads environment variables or files. All constructors
//! validate eagerly so that a bad rate or an empty organization count fails
//! before any entity is generated or mutated.

use crate::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use synthmd_types::EntityKind;

/// Default fraction of each table that receives a variation.
pub const DEFAULT_VARIATION_RATE: f64 = 0.2;

/// Qualitative noise level gating which rules are eligible.
///
/// `Low` keeps the character- and format-level perturbations (typos, postal
/// format, day/month swap); `High` additionally enables the semantic
/// rewrites (abbreviations, synonyms, translation, token reordering).
/// A pipeline without a configured tier runs the full catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseTier {
    Low,
    High,
}

impl FromStr for NoiseTier {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(NoiseTier::Low),
            "high" => Ok(NoiseTier::High),
            other => Err(EngineError::InvalidConfiguration(format!(
                "unknown noise tier '{other}' (expected 'low' or 'high')"
            ))),
        }
    }
}

/// Field-deletion pre-pass configuration: which content fields to blank out
/// per entity kind before variation, simulating missing data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrubConfig {
    pub fields: HashMap<EntityKind, Vec<String>>,
}

impl ScrubConfig {
    /// Preset deleting one secondary field per affected kind.
    pub fn low() -> Self {
        let mut fields = HashMap::new();
        fields.insert(EntityKind::Address, vec!["postalCode".to_string()]);
        fields.insert(EntityKind::Person, vec!["birthDate".to_string()]);
        fields.insert(EntityKind::HealthcarePersonnel, vec!["email".to_string()]);
        fields.insert(
            EntityKind::ContactPoint,
            vec!["availableLanguage".to_string()],
        );
        Self { fields }
    }

    /// Preset deleting the primary descriptive field of each kind.
    pub fn high() -> Self {
        let mut fields = HashMap::new();
        fields.insert(EntityKind::Address, vec!["text".to_string()]);
        fields.insert(EntityKind::Person, vec!["personName".to_string()]);
        fields.insert(
            EntityKind::HealthcareOrganization,
            vec!["healthcareOrganizationName".to_string()],
        );
        fields.insert(
            EntityKind::ServiceDepartment,
            vec!["serviceDepartmentName".to_string()],
        );
        fields.insert(EntityKind::HealthcarePersonnel, vec!["jobTitle".to_string()]);
        fields.insert(EntityKind::ContactPoint, vec!["contactType".to_string()]);
        Self { fields }
    }

    /// Fields configured for `kind`, empty when none.
    pub fn fields_for(&self, kind: EntityKind) -> &[String] {
        self.fields.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl FromStr for ScrubConfig {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(ScrubConfig::low()),
            "high" => Ok(ScrubConfig::high()),
            other => Err(EngineError::InvalidConfiguration(format!(
                "unknown scrub preset '{other}' (expected 'low' or 'high')"
            ))),
        }
    }
}

/// Dataset shape knobs for the base generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of healthcare organizations to create.
    pub organizations: usize,
    /// Inclusive range of service departments per organization.
    pub departments_per_org: (usize, usize),
    /// Inclusive range of total personnel per organization. Every department
    /// is staffed with at least two people first, so the effective minimum
    /// can be higher than the configured one.
    pub personnel_per_org: (usize, usize),
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            organizations: 50,
            departments_per_org: (5, 10),
            personnel_per_org: (15, 40),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> EngineResult<()> {
        if self.organizations == 0 {
            return Err(EngineError::InvalidConfiguration(
                "organizations must be at least 1".into(),
            ));
        }
        for (label, (min, max)) in [
            ("departments_per_org", self.departments_per_org),
            ("personnel_per_org", self.personnel_per_org),
        ] {
            if min == 0 || min > max {
                return Err(EngineError::InvalidConfiguration(format!(
                    "{label} range ({min}, {max}) must satisfy 1 <= min <= max"
                )));
            }
        }
        Ok(())
    }
}

/// Full pipeline configuration: generation shape, variation rate, noise tier
/// and optional field-deletion pre-pass, plus the master seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Master seed; the seeded generator derived from it is the sole source
    /// of nondeterminism in a run.
    pub seed: u64,
    /// Fraction of each table to duplicate, in `[0, 1]`.
    pub variation_rate: f64,
    /// Optional noise tier filter; `None` runs the full catalogs.
    pub noise: Option<NoiseTier>,
    /// Optional field-deletion pre-pass applied before variation.
    pub scrub: Option<ScrubConfig>,
    pub generator: GeneratorConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            variation_rate: DEFAULT_VARIATION_RATE,
            noise: None,
            scrub: None,
            generator: GeneratorConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Validates the configuration, failing fast before any mutation.
    pub fn validate(&self) -> EngineResult<()> {
        if !self.variation_rate.is_finite() || !(0.0..=1.0).contains(&self.variation_rate) {
            return Err(EngineError::InvalidConfiguration(format!(
                "variation_rate must be within [0, 1], got {}",
                self.variation_rate
            )));
        }
        self.generator.validate()
    }

    /// Loads and validates a configuration from a YAML file.
    pub fn from_yaml_file(path: &Path) -> EngineResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(EngineError::ConfigRead)?;
        let config: PipelineConfig =
            serde_yaml::from_str(&contents).map_err(EngineError::ConfigParse)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rate() {
        let config = PipelineConfig::default();
        assert_eq!(config.variation_rate, 0.2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rate_out_of_range_rejected() {
        for rate in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let config = PipelineConfig {
                variation_rate: rate,
                ..PipelineConfig::default()
            };
            assert!(config.validate().is_err(), "accepted rate {rate}");
        }
    }

    #[test]
    fn test_generator_ranges_validated() {
        let config = GeneratorConfig {
            departments_per_org: (6, 3),
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GeneratorConfig {
            organizations: 0,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_noise_tier_parses() {
        assert_eq!("low".parse::<NoiseTier>().unwrap(), NoiseTier::Low);
        assert_eq!("high".parse::<NoiseTier>().unwrap(), NoiseTier::High);
        assert!("medium".parse::<NoiseTier>().is_err());
        assert!(NoiseTier::Low < NoiseTier::High);
    }

    #[test]
    fn test_scrub_presets_target_content_fields() {
        let low = ScrubConfig::low();
        assert_eq!(low.fields_for(EntityKind::Address), ["postalCode"]);
        assert!(low.fields_for(EntityKind::ServiceDepartment).is_empty());

        let high = ScrubConfig::high();
        assert_eq!(
            high.fields_for(EntityKind::ServiceDepartment),
            ["serviceDepartmentName"]
        );
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = PipelineConfig {
            seed: 7,
            variation_rate: 0.5,
            noise: Some(NoiseTier::High),
            scrub: Some(ScrubConfig::low()),
            generator: GeneratorConfig {
                organizations: 3,
                ..GeneratorConfig::default()
            },
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: PipelineConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
