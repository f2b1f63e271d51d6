//! Built-in Hungarian modifier terms.
//!
//! All terms are stored already normalized (NFC, lowercase, single-spaced).

/// Capital-region locations. The first entry is the primary location.
pub const CAPITAL_REGION_LOCATIONS: &[&str] = &[
    "budapest",
    "budapesten",
    "pest megye",
    "budapest környékén",
    "buda",
    "pest",
    "agglomeráció",
];

/// Major regional cities.
pub const REGIONAL_LOCATIONS: &[&str] = &[
    "debrecen",
    "szeged",
    "miskolc",
    "pécs",
    "győr",
    "nyíregyháza",
    "kecskemét",
    "székesfehérvár",
];

/// Country-wide location phrasing.
pub const NATIONAL_LOCATIONS: &[&str] = &[
    "magyarország",
    "országos",
    "országosan",
    "országszerte",
    "online",
];

/// Purchase-intent modifiers, combined with a keyword in both orders.
pub const INTENT_MODIFIERS: &[&str] = &[
    "ár",
    "árak",
    "árajánlat",
    "olcsó",
    "akció",
    "rendelés",
    "szolgáltatás",
    "cég",
    "közelben",
];

/// Quality modifiers, only ever placed before a keyword.
pub const QUALITY_MODIFIERS: &[&str] = &[
    "legjobb",
    "megbízható",
    "profi",
    "minőségi",
    "tapasztalt",
    "gyors",
];

/// Call-to-action modifiers. Carried by the catalog but not combined into
/// long-tail candidates.
pub const ACTION_MODIFIERS: &[&str] = &[
    "kérjen árajánlatot",
    "hívjon most",
    "foglaljon időpontot",
    "rendelje meg",
    "vásároljon",
];
