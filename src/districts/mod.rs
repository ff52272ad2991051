//! District lookup table generation
//!
//! Builds the JSON table the city map viewer reads its district text from.
//! Each district id maps to a placeholder record that authors fill in by
//! hand later.
//!
//! # Overview
//!
//! Three kinds of id share one table:
//!
//! - tiered ids (`M1`, `D8`, ...) built from a prefix and a count, each with
//!   `upper`, `middle` and `lower` tiers
//! - cliffside ids (`grayflood`, ...) with a single record
//! - ward ids (`dura`, ...) with a flat name and description
//!
//! # Usage
//!
//! ```ignore
//! use district_atlas::districts::{generate, GeneratorConfig, Preset};
//!
//! let config = GeneratorConfig::from_preset(Preset::Wards);
//! let report = generate(&config)?;
//! ```

pub mod builder;
pub mod error;
pub mod export;
pub mod ids;
pub mod lookup;
pub mod params;
pub mod tables;
pub mod types;

pub use builder::{build_table, build_table_with_stats, BuildStats};
pub use error::{ConfigError, GeneratorError, Result};
pub use export::{read_table, render, write_table, LoadedTable, WriteOutcome};
pub use ids::{DistrictKind, Tier};
pub use lookup::{pending, resolve, DistrictView, PendingEntry, TierView};
pub use params::{
    CliffsideShape, DistrictPrefix, Formatting, GeneratorConfig, NamedDistrict, Preset, WritePolicy,
};
pub use types::{
    DistrictDetail, DistrictRecord, DistrictTable, FlatRecord, NotableLocations, TierNames,
    TieredDistrict,
};

use std::path::PathBuf;

use tracing::info;

/// Result of one generator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub path: PathBuf,
    pub outcome: WriteOutcome,
    pub stats: BuildStats,
    /// Top-level keys in the table
    pub district_count: usize,
}

/// Validate the configuration, build the table and write it out.
pub fn generate(config: &GeneratorConfig) -> Result<GenerationReport> {
    config.validate()?;

    info!(
        prefixes = config.district_counts.len(),
        wards = config.include_wards,
        cliffside = ?config.cliffside_shape,
        "building district table"
    );
    let (table, stats) = build_table_with_stats(config);
    info!(
        districts = table.len(),
        tiered = stats.tiered,
        cliffside = stats.cliffside,
        wards = stats.wards,
        "district table built"
    );

    let outcome = write_table(&table, &config.output_path, config.write_policy, config.formatting)?;

    Ok(GenerationReport {
        path: config.output_path.clone(),
        outcome,
        stats,
        district_count: table.len(),
    })
}
