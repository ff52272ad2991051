//! Reading districts back out of a generated table
//!
//! Mirrors how the map viewer presents a selected district: the id is filed
//! under a ward by its prefix (anything matching no prefix is cliffside),
//! tiered districts show three tiers and everything else shows one.

use std::fmt;

use super::error::{GeneratorError, Result};
use super::export::LoadedTable;
use super::ids::{DistrictKind, Tier};
use super::params::GeneratorConfig;
use super::types::DistrictRecord;

/// One displayed tier (or the single section of an untiered district)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierView {
    /// `None` for untiered districts
    pub tier: Option<Tier>,
    pub name: String,
    pub description: String,
    /// (location name, location description)
    pub notable_locations: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictView {
    pub id: String,
    pub kind: DistrictKind,
    pub ward_key: Option<String>,
    pub ward_name: Option<String>,
    pub ward_description: Option<String>,
    pub tiers: Vec<TierView>,
}

/// Classify an id and find the ward it is filed under.
///
/// Checked in the reverse of build order so that the table that wrote an id
/// last also classifies it: emitted ward ids first, then listed cliffside
/// ids, then the first prefix the id starts with. Anything left is cliffside.
pub fn classify<'a>(config: &'a GeneratorConfig, id: &str) -> (DistrictKind, Option<&'a str>) {
    if config.include_wards {
        if let Some(ward) = config.wards.iter().find(|w| w.id == id) {
            return (DistrictKind::Ward, Some(ward.id.as_str()));
        }
    }
    let cliffside = (DistrictKind::Cliffside, Some(config.cliffside_ward.as_str()));
    if config.cliffside_districts.iter().any(|d| d.id == id) {
        return cliffside;
    }
    let prefix = config
        .district_counts
        .iter()
        .find(|p| id.starts_with(p.prefix.as_str()));
    match prefix {
        Some(entry) => (DistrictKind::Tiered, entry.ward.as_deref()),
        None => cliffside,
    }
}

/// Resolve a district id into what the viewer would display
pub fn resolve(table: &LoadedTable, config: &GeneratorConfig, id: &str) -> Result<DistrictView> {
    let record = table
        .get(id)
        .ok_or_else(|| GeneratorError::UnknownDistrict(id.to_string()))?;
    let (kind, ward_key) = classify(config, id);

    let tiers = match (kind, record) {
        (DistrictKind::Tiered, DistrictRecord::Tiered(district)) => Tier::all()
            .iter()
            .map(|&tier| {
                let detail = district.tier(tier);
                TierView {
                    tier: Some(tier),
                    name: detail.name.clone(),
                    description: detail.description.clone(),
                    notable_locations: owned_pairs(detail.notable_locations.pairs()),
                }
            })
            .collect(),
        (DistrictKind::Tiered, _) => {
            return Err(GeneratorError::UnexpectedShape {
                id: id.to_string(),
                expected: "tiered",
            })
        }
        (_, DistrictRecord::Tiered(_)) => {
            return Err(GeneratorError::UnexpectedShape {
                id: id.to_string(),
                expected: "untiered",
            })
        }
        (_, DistrictRecord::Detailed(detail)) => vec![TierView {
            tier: None,
            name: detail.name.clone(),
            description: detail.description.clone(),
            notable_locations: owned_pairs(detail.notable_locations.pairs()),
        }],
        (_, DistrictRecord::Flat(flat)) => vec![TierView {
            tier: None,
            name: flat.name.clone(),
            description: flat.description.clone(),
            notable_locations: Vec::new(),
        }],
    };

    let ward_text = ward_key
        .and_then(|key| table.get(key))
        .and_then(DistrictRecord::untiered_text);

    Ok(DistrictView {
        id: id.to_string(),
        kind,
        ward_key: ward_key.map(str::to_string),
        ward_name: ward_text.map(|(name, _)| name.to_string()),
        ward_description: ward_text.map(|(_, desc)| desc.to_string()),
        tiers,
    })
}

fn owned_pairs(pairs: Vec<(&str, &str)>) -> Vec<(String, String)> {
    pairs
        .into_iter()
        .map(|(name, desc)| (name.to_string(), desc.to_string()))
        .collect()
}

impl fmt::Display for DistrictView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ward = self
            .ward_name
            .as_deref()
            .or(self.ward_key.as_deref())
            .unwrap_or("(no ward)");
        writeln!(f, "{} [{}] in {}", self.id, self.kind.as_str(), ward)?;
        if let Some(desc) = self.ward_description.as_deref().filter(|d| !d.is_empty()) {
            writeln!(f, "  {}", desc)?;
        }

        for view in &self.tiers {
            match view.tier {
                Some(tier) => writeln!(f, "  {}: {}", tier.label(), view.name)?,
                None => writeln!(f, "  {}", view.name)?,
            }
            if !view.description.is_empty() {
                writeln!(f, "    {}", view.description)?;
            }
            for (name, desc) in &view.notable_locations {
                writeln!(f, "    - {}: {}", name, desc)?;
            }
        }
        Ok(())
    }
}

/// A record (or tier) whose text has not been written yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEntry {
    pub id: String,
    pub tier: Option<Tier>,
    pub missing_name: bool,
    pub missing_description: bool,
}

impl fmt::Display for PendingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tier {
            Some(tier) => write!(f, "{}.{}", self.id, tier)?,
            None => write!(f, "{}", self.id)?,
        }
        let missing: Vec<&str> = [
            (self.missing_name, "name"),
            (self.missing_description, "description"),
        ]
        .iter()
        .filter(|(missing, _)| *missing)
        .map(|(_, field)| *field)
        .collect();
        write!(f, ": missing {}", missing.join(", "))
    }
}

/// Every id and tier still lacking a name or description, sorted by id
/// then tier.
pub fn pending(table: &LoadedTable) -> Vec<PendingEntry> {
    let mut entries = Vec::new();
    let mut check = |id: &str, tier: Option<Tier>, name: &str, description: &str| {
        if name.is_empty() || description.is_empty() {
            entries.push(PendingEntry {
                id: id.to_string(),
                tier,
                missing_name: name.is_empty(),
                missing_description: description.is_empty(),
            });
        }
    };

    for (id, record) in table {
        match record {
            DistrictRecord::Tiered(district) => {
                for &tier in Tier::all() {
                    let detail = district.tier(tier);
                    check(id, Some(tier), &detail.name, &detail.description);
                }
            }
            DistrictRecord::Detailed(detail) => check(id, None, &detail.name, &detail.description),
            DistrictRecord::Flat(flat) => check(id, None, &flat.name, &flat.description),
        }
    }
    entries
}
