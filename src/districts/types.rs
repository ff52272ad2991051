//! Record types for the district lookup table
//!
//! Every record is a plain value: a tiered district owns three independent
//! `DistrictDetail`s, and the boilerplate detail is built fresh wherever it
//! is needed, so editing one tier never shows up in another.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};

use super::ids::Tier;

/// Parallel lists of notable location names and descriptions
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotableLocations {
    pub name: Vec<String>,
    pub description: Vec<String>,
}

impl NotableLocations {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    /// Pair names with descriptions by index. A name without a matching
    /// description pairs with an empty string.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.name
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let desc = self.description.get(i).map(String::as_str).unwrap_or("");
                (name.as_str(), desc)
            })
            .collect()
    }
}

/// Name, description and notable locations of one district (or one tier of one)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictDetail {
    pub name: String,
    pub description: String,
    pub notable_locations: NotableLocations,
}

impl DistrictDetail {
    /// Empty placeholder awaiting hand-written content
    pub fn boilerplate() -> Self {
        Self::default()
    }

    /// Placeholder with only the name filled in
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::boilerplate()
        }
    }
}

/// Explicit names for the three tiers of one district, stored as
/// `[lower, middle, upper]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierNames(pub String, pub String, pub String);

impl TierNames {
    pub fn new(
        lower: impl Into<String>,
        middle: impl Into<String>,
        upper: impl Into<String>,
    ) -> Self {
        TierNames(lower.into(), middle.into(), upper.into())
    }

    pub fn lower(&self) -> &str {
        &self.0
    }

    pub fn middle(&self) -> &str {
        &self.1
    }

    pub fn upper(&self) -> &str {
        &self.2
    }

    pub fn for_tier(&self, tier: Tier) -> &str {
        match tier {
            Tier::Upper => self.upper(),
            Tier::Middle => self.middle(),
            Tier::Lower => self.lower(),
        }
    }
}

/// District split into upper, middle and lower tiers
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieredDistrict {
    pub upper: DistrictDetail,
    pub middle: DistrictDetail,
    pub lower: DistrictDetail,
}

impl TieredDistrict {
    /// All three tiers as separate empty placeholders
    pub fn boilerplate() -> Self {
        Self {
            upper: DistrictDetail::boilerplate(),
            middle: DistrictDetail::boilerplate(),
            lower: DistrictDetail::boilerplate(),
        }
    }

    pub fn from_names(names: &TierNames) -> Self {
        Self {
            upper: DistrictDetail::named(names.upper()),
            middle: DistrictDetail::named(names.middle()),
            lower: DistrictDetail::named(names.lower()),
        }
    }

    pub fn tier(&self, tier: Tier) -> &DistrictDetail {
        match tier {
            Tier::Upper => &self.upper,
            Tier::Middle => &self.middle,
            Tier::Lower => &self.lower,
        }
    }

    pub fn tier_mut(&mut self, tier: Tier) -> &mut DistrictDetail {
        match tier {
            Tier::Upper => &mut self.upper,
            Tier::Middle => &mut self.middle,
            Tier::Lower => &mut self.lower,
        }
    }
}

/// Name and description only (wards, and cliffside districts in the flat shape)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRecord {
    pub name: String,
    pub description: String,
}

impl FlatRecord {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }
}

/// Any value stored under a district id.
///
/// Untagged: decoding tries the tiered shape first, then the detailed one,
/// then the flat one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DistrictRecord {
    Tiered(TieredDistrict),
    Detailed(DistrictDetail),
    Flat(FlatRecord),
}

impl DistrictRecord {
    pub fn shape(&self) -> &'static str {
        match self {
            DistrictRecord::Tiered(_) => "tiered",
            DistrictRecord::Detailed(_) => "detailed",
            DistrictRecord::Flat(_) => "flat",
        }
    }

    pub fn as_tiered(&self) -> Option<&TieredDistrict> {
        match self {
            DistrictRecord::Tiered(t) => Some(t),
            _ => None,
        }
    }

    /// Name and description of an untiered record
    pub fn untiered_text(&self) -> Option<(&str, &str)> {
        match self {
            DistrictRecord::Tiered(_) => None,
            DistrictRecord::Detailed(d) => Some((&d.name, &d.description)),
            DistrictRecord::Flat(f) => Some((&f.name, &f.description)),
        }
    }
}

/// Root table keyed by district id, kept in insertion order.
///
/// Re-inserting an existing id replaces its record but keeps its original
/// position, so the last assignment wins without reordering the output.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DistrictTable {
    entries: Vec<(String, DistrictRecord)>,
    index: HashMap<String, usize>,
}

impl DistrictTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. Returns the replaced record, if any.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        record: DistrictRecord,
    ) -> Option<DistrictRecord> {
        let id = id.into();
        match self.index.get(&id) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, record)),
            None => {
                self.index.insert(id.clone(), self.entries.len());
                self.entries.push((id, record));
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&DistrictRecord> {
        self.index.get(id).map(|&pos| &self.entries[pos].1)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut DistrictRecord> {
        match self.index.get(id) {
            Some(&pos) => Some(&mut self.entries[pos].1),
            None => None,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DistrictRecord)> {
        self.entries.iter().map(|(id, record)| (id.as_str(), record))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// Borrowed view with keys in sorted order
    pub fn sorted(&self) -> BTreeMap<&str, &DistrictRecord> {
        self.iter().collect()
    }

    pub fn into_map(self) -> BTreeMap<String, DistrictRecord> {
        self.entries.into_iter().collect()
    }
}

impl Serialize for DistrictTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, record) in &self.entries {
            map.serialize_entry(id, record)?;
        }
        map.end()
    }
}
