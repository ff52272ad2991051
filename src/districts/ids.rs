//! District identifiers and tiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vertical stratum of a tiered district
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Upper,
    Middle,
    Lower,
}

impl Tier {
    /// Tiers in the order they appear in a tiered record
    pub fn all() -> &'static [Tier] {
        &[Tier::Upper, Tier::Middle, Tier::Lower]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Upper => "upper",
            Tier::Middle => "middle",
            Tier::Lower => "lower",
        }
    }

    /// Label used when printing a district view
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Upper => "Upper",
            Tier::Middle => "Middle",
            Tier::Lower => "Lower",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which part of the table an identifier belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DistrictKind {
    /// Generated from a prefix and a 1-based index, has upper/middle/lower tiers
    Tiered,
    /// Named district on the cliffs, no tiers
    Cliffside,
    /// Administrative grouping of districts
    Ward,
}

impl DistrictKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistrictKind::Tiered => "tiered",
            DistrictKind::Cliffside => "cliffside",
            DistrictKind::Ward => "ward",
        }
    }
}

/// Form a tiered id: prefix followed by the decimal index, no padding.
pub fn tiered_id(prefix: &str, index: u32) -> String {
    format!("{}{}", prefix, index)
}

/// All tiered ids for a prefix, `prefix1..=prefixN`.
pub fn tiered_ids(prefix: &str, count: u32) -> impl Iterator<Item = String> + '_ {
    (1..=count).map(move |i| tiered_id(prefix, i))
}
