//! Built-in tables describing the city map
//!
//! These are only read through `GeneratorConfig` presets; the builder takes
//! whatever tables the configuration carries.

/// (prefix, district count, ward key the prefix belongs to)
pub const DISTRICT_PREFIXES: &[(&str, u32, &str)] = &[
    ("M", 5, "menthis"),
    ("C", 6, "central"),
    ("T", 6, "tavicks"),
    ("N", 3, "northedge"),
    ("D", 8, "dura"),
];

/// Ward key for districts that do not belong to a prefix
pub const CLIFFSIDE_WARD: &str = "cliffside";

pub const CLIFFSIDE_DISTRICTS: &[(&str, &str)] = &[
    ("grayflood", "Grayflood"),
    ("sharnsWelcome", "Sharn's Welcome"),
    ("mudCaves", "Mud Caves"),
    ("shipsTowers", "Ship's Towers"),
];

pub const WARDS: &[(&str, &str)] = &[
    ("cliffside", "Cliffside"),
    ("tavicks", "Tavick's Landing"),
    ("menthis", "Menthis Plateau"),
    ("central", "Central Plateau"),
    ("dura", "Dura"),
    ("northedge", "Northedge"),
];

/// Sample explicit tier names: (id, lower, middle, upper)
pub const SAMPLE_TIER_NAMES: &[(&str, &str, &str, &str)] = &[
    ("M1", "Tumbledown", "Smoky Towers", "Platinum Heights"),
    ("M2", "Gate of Gold", "Warden Towers", "Ivy Towers"),
    ("D1", "Malleon's Gate", "Oldkeep", "Highhold"),
    ("D2", "Precarious", "Hareth's Folly", "Daggerwatch"),
    ("D3", "Rattleboy", "Broken Arch", "Hope's Peak"),
];
