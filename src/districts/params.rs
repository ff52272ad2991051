//! Configuration for district table generation
//!
//! One `GeneratorConfig` describes a whole run: the tables to expand, the
//! shape of cliffside records, and how the result is written. Presets
//! reproduce the variants the map viewer has shipped with.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{ConfigError, GeneratorError, Result};
use super::ids::tiered_ids;
use super::tables;
use super::types::TierNames;

/// Shape used for every cliffside record in a table
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CliffsideShape {
    /// `{name, description}`
    #[default]
    Flat,
    /// Full district detail with notable locations
    Detailed,
}

/// What to do when the output file already exists
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum WritePolicy {
    /// Leave an existing file untouched
    #[default]
    CreateIfAbsent,
    Overwrite,
}

/// JSON text layout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Formatting {
    /// Single line, keys in generation order
    #[default]
    Compact,
    /// Indented, keys sorted at every level
    PrettySorted,
}

/// Built-in configurations
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Tiered and flat cliffside records only, never overwrites
    #[default]
    Boilerplate,
    /// Boilerplate plus ward records
    Wards,
    /// Wards, detailed cliffside records and sample tier names
    Named,
    /// Wards and detailed cliffside records written to the empty template file
    Empty,
}

/// One row of the prefix table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictPrefix {
    pub prefix: String,
    /// Number of districts, ids run `prefix1..=prefixN`
    pub count: u32,
    /// Ward key the viewer files these districts under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ward: Option<String>,
}

/// An id paired with its display name
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedDistrict {
    pub id: String,
    pub name: String,
}

impl NamedDistrict {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Configuration for one generator run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    // Output
    /// File the table is written to
    pub output_path: PathBuf,
    pub write_policy: WritePolicy,
    pub formatting: Formatting,

    // Tables
    /// Prefix table, expanded in this order
    pub district_counts: Vec<DistrictPrefix>,
    pub cliffside_districts: Vec<NamedDistrict>,
    /// Ward key for ids that match no prefix
    pub cliffside_ward: String,
    pub wards: Vec<NamedDistrict>,
    /// Per-district names, `[lower, middle, upper]`
    pub explicit_tier_names: BTreeMap<String, TierNames>,

    // Shape
    pub include_wards: bool,
    pub cliffside_shape: CliffsideShape,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("districtInfo.json"),
            write_policy: WritePolicy::CreateIfAbsent,
            formatting: Formatting::Compact,

            district_counts: tables::DISTRICT_PREFIXES
                .iter()
                .map(|&(prefix, count, ward)| DistrictPrefix {
                    prefix: prefix.to_string(),
                    count,
                    ward: Some(ward.to_string()),
                })
                .collect(),
            cliffside_districts: tables::CLIFFSIDE_DISTRICTS
                .iter()
                .map(|&(id, name)| NamedDistrict::new(id, name))
                .collect(),
            cliffside_ward: tables::CLIFFSIDE_WARD.to_string(),
            wards: tables::WARDS
                .iter()
                .map(|&(id, name)| NamedDistrict::new(id, name))
                .collect(),
            explicit_tier_names: BTreeMap::new(),

            include_wards: false,
            cliffside_shape: CliffsideShape::Flat,
        }
    }
}

impl GeneratorConfig {
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Boilerplate => Self::default(),
            Preset::Wards => Self::with_wards(),
            Preset::Named => Self::named(),
            Preset::Empty => Self::empty_template(),
        }
    }

    /// Boilerplate table plus flat ward records
    pub fn with_wards() -> Self {
        Self {
            include_wards: true,
            ..Default::default()
        }
    }

    /// Sample tier names filled in, regenerated on every run
    pub fn named() -> Self {
        Self {
            include_wards: true,
            cliffside_shape: CliffsideShape::Detailed,
            write_policy: WritePolicy::Overwrite,
            formatting: Formatting::PrettySorted,
            explicit_tier_names: tables::SAMPLE_TIER_NAMES
                .iter()
                .map(|&(id, lower, middle, upper)| {
                    (id.to_string(), TierNames::new(lower, middle, upper))
                })
                .collect(),
            ..Default::default()
        }
    }

    /// Every record empty, for authors starting from scratch
    pub fn empty_template() -> Self {
        Self {
            output_path: PathBuf::from("districtInfoEmpty.json"),
            include_wards: true,
            cliffside_shape: CliffsideShape::Detailed,
            write_policy: WritePolicy::Overwrite,
            formatting: Formatting::PrettySorted,
            ..Default::default()
        }
    }

    /// Read a configuration from a JSON file. Missing fields take their
    /// boilerplate defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| GeneratorError::io(path, e))?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Write this configuration as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = self.to_json()?;
        fs::write(path, text).map_err(|e| GeneratorError::io(path, e))
    }

    pub fn to_json(&self) -> Result<String> {
        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');
        Ok(text)
    }

    /// Every tiered id the prefix table generates, in generation order
    pub fn tiered_ids(&self) -> Vec<String> {
        self.district_counts
            .iter()
            .flat_map(|p| tiered_ids(&p.prefix, p.count))
            .collect()
    }

    /// Check the tables for inconsistencies the builder cannot resolve.
    ///
    /// Cross-table collisions (a ward id equal to a tiered id, say) pass:
    /// the later table wins when the table is built.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.district_counts.is_empty() {
            return Err(ConfigError::EmptyPrefixTable);
        }

        let mut prefixes = HashSet::new();
        for entry in &self.district_counts {
            if entry.prefix.is_empty() {
                return Err(ConfigError::EmptyPrefix);
            }
            if entry.count == 0 {
                return Err(ConfigError::ZeroCount {
                    prefix: entry.prefix.clone(),
                });
            }
            if !prefixes.insert(entry.prefix.as_str()) {
                return Err(ConfigError::DuplicatePrefix(entry.prefix.clone()));
            }
        }

        let mut tiered = HashSet::new();
        for id in self.tiered_ids() {
            if tiered.contains(&id) {
                return Err(ConfigError::DuplicateTieredId { id });
            }
            tiered.insert(id);
        }

        check_unique("cliffside", &self.cliffside_districts)?;
        if self.include_wards {
            check_unique("ward", &self.wards)?;
        }

        if let Some(id) = self.explicit_tier_names.keys().find(|id| !tiered.contains(*id)) {
            return Err(ConfigError::UnknownTieredId { id: id.clone() });
        }

        Ok(())
    }
}

fn check_unique(
    table: &'static str,
    entries: &[NamedDistrict],
) -> std::result::Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.id.as_str()) {
            return Err(ConfigError::DuplicateId {
                table,
                id: entry.id.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_presets_are_valid() {
        for preset in Preset::value_variants() {
            let config = GeneratorConfig::from_preset(*preset);
            assert_eq!(config.validate(), Ok(()), "{:?}", preset);
        }
    }

    #[test]
    fn test_default_matches_city_tables() {
        let config = GeneratorConfig::default();
        let ids = config.tiered_ids();
        assert_eq!(ids.len(), 5 + 6 + 6 + 3 + 8);
        assert_eq!(ids.first().map(String::as_str), Some("M1"));
        assert_eq!(ids.last().map(String::as_str), Some("D8"));
        assert_eq!(config.output_path, PathBuf::from("districtInfo.json"));
        assert_eq!(config.write_policy, WritePolicy::CreateIfAbsent);
        assert!(!config.include_wards);
    }

    #[test]
    fn test_empty_template_preset() {
        let config = GeneratorConfig::from_preset(Preset::Empty);
        assert_eq!(config.output_path, PathBuf::from("districtInfoEmpty.json"));
        assert_eq!(config.cliffside_shape, CliffsideShape::Detailed);
        assert_eq!(config.write_policy, WritePolicy::Overwrite);
        assert!(config.explicit_tier_names.is_empty());
    }

    #[test]
    fn test_rejects_empty_prefix_table() {
        let config = GeneratorConfig {
            district_counts: Vec::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyPrefixTable));
    }

    #[test]
    fn test_rejects_zero_count() {
        let mut config = GeneratorConfig::default();
        config.district_counts[2].count = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroCount { prefix: "T".to_string() })
        );
    }

    #[test]
    fn test_rejects_overlapping_prefixes() {
        let config = GeneratorConfig {
            district_counts: vec![
                DistrictPrefix { prefix: "A".into(), count: 11, ward: None },
                DistrictPrefix { prefix: "A1".into(), count: 1, ward: None },
            ],
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateTieredId { id: "A11".to_string() })
        );
    }

    #[test]
    fn test_rejects_duplicate_prefix_and_ids() {
        let mut config = GeneratorConfig::default();
        config.district_counts.push(DistrictPrefix {
            prefix: "M".into(),
            count: 1,
            ward: None,
        });
        assert_eq!(config.validate(), Err(ConfigError::DuplicatePrefix("M".to_string())));

        let mut config = GeneratorConfig::with_wards();
        config.wards.push(NamedDistrict::new("dura", "Dura Again"));
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateId { table: "ward", id: "dura".to_string() })
        );
    }

    #[test]
    fn test_ignores_ward_table_when_wards_are_left_out() {
        let mut config = GeneratorConfig::default();
        config.wards.push(NamedDistrict::new("dura", "Dura Again"));
        assert!(!config.include_wards);
        assert_eq!(config.validate(), Ok(()));

        config.include_wards = true;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_tier_names_outside_prefix_range() {
        let mut config = GeneratorConfig::default();
        config
            .explicit_tier_names
            .insert("N4".to_string(), TierNames::new("a", "b", "c"));
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnknownTieredId { id: "N4".to_string() })
        );
    }

    #[test]
    fn test_allows_cross_table_collision() {
        let mut config = GeneratorConfig::with_wards();
        config.wards.push(NamedDistrict::new("C1", "Central One"));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("named.json");

        let config = GeneratorConfig::named();
        config.save(&path).unwrap();
        let loaded = GeneratorConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(
            &path,
            r#"{
                "district_counts": [{"prefix": "M", "count": 1}],
                "explicit_tier_names": {"M1": ["Low", "Mid", "High"]},
                "write_policy": "overwrite",
                "formatting": "pretty_sorted"
            }"#,
        )
        .unwrap();

        let config = GeneratorConfig::load(&path).unwrap();
        assert_eq!(config.district_counts.len(), 1);
        assert_eq!(config.district_counts[0].ward, None);
        assert_eq!(config.explicit_tier_names["M1"].upper(), "High");
        assert_eq!(config.write_policy, WritePolicy::Overwrite);
        assert_eq!(config.formatting, Formatting::PrettySorted);
        assert_eq!(config.cliffside_districts.len(), 4);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = GeneratorConfig::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, GeneratorError::Io { .. }));
    }
}
