//! Construction of the district table from a configuration

use tracing::{debug, warn};

use super::ids::{tiered_ids, DistrictKind};
use super::params::{CliffsideShape, GeneratorConfig};
use super::types::{DistrictDetail, DistrictRecord, DistrictTable, FlatRecord, TieredDistrict};

/// Counts of records written by each pass of the builder
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildStats {
    pub tiered: usize,
    pub cliffside: usize,
    pub wards: usize,
    /// Ids assigned more than once; the later record was kept
    pub replaced: usize,
}

/// Build the full table in memory.
///
/// Tiered districts come first in prefix-table order, then cliffside
/// districts, then wards (when enabled). A later pass that reuses an id
/// replaces the earlier record.
pub fn build_table(config: &GeneratorConfig) -> DistrictTable {
    build_table_with_stats(config).0
}

pub fn build_table_with_stats(config: &GeneratorConfig) -> (DistrictTable, BuildStats) {
    let mut table = DistrictTable::new();
    let mut stats = BuildStats::default();

    // Tiered districts
    for entry in &config.district_counts {
        for id in tiered_ids(&entry.prefix, entry.count) {
            let district = match config.explicit_tier_names.get(&id) {
                Some(names) => TieredDistrict::from_names(names),
                None => TieredDistrict::boilerplate(),
            };
            let record = DistrictRecord::Tiered(district);
            assign(&mut table, &mut stats, id, record, DistrictKind::Tiered);
            stats.tiered += 1;
        }
        debug!(prefix = %entry.prefix, count = entry.count, "expanded tiered districts");
    }

    // Cliffside districts, one shape for all of them
    for district in &config.cliffside_districts {
        let record = match config.cliffside_shape {
            CliffsideShape::Flat => DistrictRecord::Flat(FlatRecord::named(&district.name)),
            CliffsideShape::Detailed => {
                DistrictRecord::Detailed(DistrictDetail::named(&district.name))
            }
        };
        assign(&mut table, &mut stats, district.id.clone(), record, DistrictKind::Cliffside);
        stats.cliffside += 1;
    }
    debug!(shape = ?config.cliffside_shape, count = stats.cliffside, "added cliffside districts");

    if config.include_wards {
        for ward in &config.wards {
            let record = DistrictRecord::Flat(FlatRecord::named(&ward.name));
            assign(&mut table, &mut stats, ward.id.clone(), record, DistrictKind::Ward);
            stats.wards += 1;
        }
        debug!(count = stats.wards, "added wards");
    }

    (table, stats)
}

fn assign(
    table: &mut DistrictTable,
    stats: &mut BuildStats,
    id: String,
    record: DistrictRecord,
    kind: DistrictKind,
) {
    let shape = record.shape();
    if let Some(previous) = table.insert(id.clone(), record) {
        warn!(
            id = %id,
            replaced = previous.shape(),
            by = shape,
            kind = kind.as_str(),
            "district id assigned twice, keeping the later record"
        );
        stats.replaced += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::districts::ids::Tier;
    use crate::districts::params::{DistrictPrefix, NamedDistrict};
    use crate::districts::types::TierNames;

    fn single_prefix(prefix: &str, count: u32) -> GeneratorConfig {
        GeneratorConfig {
            district_counts: vec![DistrictPrefix {
                prefix: prefix.to_string(),
                count,
                ward: None,
            }],
            cliffside_districts: Vec::new(),
            wards: Vec::new(),
            ..Default::default()
        }
    }

    #[test]
    fn test_prefix_range_is_exact() {
        let table = build_table(&GeneratorConfig::default());
        for entry in &GeneratorConfig::default().district_counts {
            for i in 1..=entry.count {
                assert!(table.contains(&format!("{}{}", entry.prefix, i)));
            }
            assert!(!table.contains(&format!("{}{}", entry.prefix, entry.count + 1)));
            assert!(!table.contains(&format!("{}0", entry.prefix)));
        }
    }

    #[test]
    fn test_keys_are_union_of_tables() {
        let config = GeneratorConfig::with_wards();
        let (table, stats) = build_table_with_stats(&config);

        assert_eq!(stats.tiered, 28);
        assert_eq!(stats.cliffside, 4);
        assert_eq!(stats.wards, 6);
        assert_eq!(stats.replaced, 0);
        assert_eq!(table.len(), 28 + 4 + 6);

        let ids: Vec<&str> = table.ids().collect();
        assert_eq!(ids[0], "M1");
        assert_eq!(ids[28], "grayflood");
        assert_eq!(ids[32], "cliffside");
    }

    #[test]
    fn test_wards_left_out_by_default() {
        let table = build_table(&GeneratorConfig::default());
        assert_eq!(table.len(), 32);
        assert!(!table.contains("dura"));
    }

    #[test]
    fn test_tiered_records_default_to_boilerplate() {
        let table = build_table(&GeneratorConfig::default());
        for (id, record) in table.iter().take(28) {
            let district = record.as_tiered().unwrap_or_else(|| panic!("{} not tiered", id));
            for tier in Tier::all() {
                assert_eq!(district.tier(*tier), &DistrictDetail::boilerplate());
            }
        }
    }

    #[test]
    fn test_explicit_names_land_in_matching_tier() {
        let mut config = single_prefix("D", 2);
        config
            .explicit_tier_names
            .insert("D1".to_string(), TierNames::new("Malleon's Gate", "Oldkeep", "Highhold"));

        let table = build_table(&config);
        let d1 = table.get("D1").and_then(DistrictRecord::as_tiered).unwrap();
        assert_eq!(d1.lower.name, "Malleon's Gate");
        assert_eq!(d1.middle.name, "Oldkeep");
        assert_eq!(d1.upper.name, "Highhold");
        assert_eq!(d1.upper.description, "");

        let d2 = table.get("D2").and_then(DistrictRecord::as_tiered).unwrap();
        assert!(Tier::all().iter().all(|t| d2.tier(*t).name.is_empty()));
    }

    #[test]
    fn test_editing_one_tier_leaves_others_alone() {
        let mut table = build_table(&single_prefix("M", 2));
        if let Some(DistrictRecord::Tiered(district)) = table.get_mut("M1") {
            district.upper.notable_locations.name.push("Ivy Towers".to_string());
            district.upper.notable_locations.description.push("Halls of learning".to_string());
        }

        let m1 = table.get("M1").and_then(DistrictRecord::as_tiered).unwrap();
        assert_eq!(m1.upper.notable_locations.name.len(), 1);
        assert!(m1.middle.notable_locations.is_empty());
        assert!(m1.lower.notable_locations.is_empty());

        let m2 = table.get("M2").and_then(DistrictRecord::as_tiered).unwrap();
        assert!(m2.upper.notable_locations.is_empty());
    }

    #[test]
    fn test_cliffside_shape_is_uniform() {
        let mut config = GeneratorConfig::default();
        config.cliffside_shape = CliffsideShape::Detailed;
        let table = build_table(&config);
        for district in &config.cliffside_districts {
            match table.get(&district.id) {
                Some(DistrictRecord::Detailed(detail)) => assert_eq!(detail.name, district.name),
                other => panic!("{} has {:?}", district.id, other),
            }
        }

        config.cliffside_shape = CliffsideShape::Flat;
        let table = build_table(&config);
        assert_eq!(
            table.get("sharnsWelcome"),
            Some(&DistrictRecord::Flat(FlatRecord::named("Sharn's Welcome")))
        );
    }

    #[test]
    fn test_ward_wins_collision() {
        let mut config = single_prefix("C", 2);
        config.cliffside_districts = vec![NamedDistrict::new("C2", "Cliff Two")];
        config.wards = vec![
            NamedDistrict::new("C1", "Central Ward"),
            NamedDistrict::new("C2", "Second Ward"),
        ];
        config.include_wards = true;

        let (table, stats) = build_table_with_stats(&config);
        assert_eq!(stats.replaced, 3);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("C1"), Some(&DistrictRecord::Flat(FlatRecord::named("Central Ward"))));
        assert_eq!(table.get("C2"), Some(&DistrictRecord::Flat(FlatRecord::named("Second Ward"))));
        assert_eq!(table.ids().collect::<Vec<_>>(), vec!["C1", "C2"]);
    }
}
