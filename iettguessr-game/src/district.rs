use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::geo::haversine_km;

/// Which bank of the Bosphorus a district sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    European,
    Asian,
}

impl Side {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::European => "european",
            Self::Asian => "asian",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "european" => Ok(Self::European),
            "asian" => Ok(Self::Asian),
            _ => Err(()),
        }
    }
}

/// One Istanbul administrative district: the guess target and the anchor
/// for distance scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct District {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub side: Side,
}

// Canonical reference list. The same list must back the UI's guess choices;
// a name absent from it scores as zero distance (see `distance_km`).
#[rustfmt::skip]
const ISTANBUL: &[(&str, &str, f64, f64, Side)] = &[
    ("adalar",        "Adalar",        40.8761, 29.0911, Side::Asian),
    ("arnavutkoy",    "Arnavutköy",    41.1853, 28.7391, Side::European),
    ("atasehir",      "Ataşehir",      40.9833, 29.1167, Side::Asian),
    ("avcilar",       "Avcılar",       40.9797, 28.7214, Side::European),
    ("bagcilar",      "Bağcılar",      41.0386, 28.8572, Side::European),
    ("bahcelievler",  "Bahçelievler",  41.0019, 28.8614, Side::European),
    ("bakirkoy",      "Bakırköy",      40.9800, 28.8772, Side::European),
    ("basaksehir",    "Başakşehir",    41.0942, 28.8019, Side::European),
    ("bayrampasa",    "Bayrampaşa",    41.0464, 28.9044, Side::European),
    ("besiktas",      "Beşiktaş",      41.0428, 29.0056, Side::European),
    ("beykoz",        "Beykoz",        41.1322, 29.0969, Side::Asian),
    ("beylikduzu",    "Beylikdüzü",    41.0028, 28.6406, Side::European),
    ("beyoglu",       "Beyoğlu",       41.0370, 28.9769, Side::European),
    ("buyukcekmece",  "Büyükçekmece",  41.0214, 28.5858, Side::European),
    ("catalca",       "Çatalca",       41.1436, 28.4606, Side::European),
    ("cekmekoy",      "Çekmeköy",      41.0333, 29.1833, Side::Asian),
    ("esenler",       "Esenler",       41.0428, 28.8756, Side::European),
    ("esenyurt",      "Esenyurt",      41.0333, 28.6833, Side::European),
    ("eyupsultan",    "Eyüpsultan",    41.0533, 28.9336, Side::European),
    ("fatih",         "Fatih",         41.0186, 28.9497, Side::European),
    ("gaziosmanpasa", "Gaziosmanpaşa", 41.0633, 28.9119, Side::European),
    ("gungoren",      "Güngören",      41.0194, 28.8756, Side::European),
    ("kadikoy",       "Kadıköy",       40.9928, 29.0261, Side::Asian),
    ("kagithane",     "Kağıthane",     41.0794, 28.9722, Side::European),
    ("kartal",        "Kartal",        40.8878, 29.1856, Side::Asian),
    ("kucukcekmece",  "Küçükçekmece",  41.0000, 28.7833, Side::European),
    ("maltepe",       "Maltepe",       40.9333, 29.1333, Side::Asian),
    ("pendik",        "Pendik",        40.8781, 29.2536, Side::Asian),
    ("sancaktepe",    "Sancaktepe",    41.0028, 29.2306, Side::Asian),
    ("sariyer",       "Sarıyer",       41.1667, 29.0500, Side::European),
    ("silivri",       "Silivri",       41.0739, 28.2464, Side::European),
    ("sultanbeyli",   "Sultanbeyli",   40.9597, 29.2653, Side::Asian),
    ("sultangazi",    "Sultangazi",    41.1069, 28.8672, Side::European),
    ("sile",          "Şile",          41.1750, 29.6125, Side::Asian),
    ("sisli",         "Şişli",         41.0600, 28.9872, Side::European),
    ("tuzla",         "Tuzla",         40.8167, 29.3000, Side::Asian),
    ("umraniye",      "Ümraniye",      41.0167, 29.1167, Side::Asian),
    ("uskudar",       "Üsküdar",       41.0231, 29.0153, Side::Asian),
    ("zeytinburnu",   "Zeytinburnu",   40.9936, 28.9053, Side::European),
];

/// Immutable reference table of districts.
///
/// Built once and injected into the components that need it, so tests can
/// substitute a smaller table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DistrictTable(Vec<District>);

impl DistrictTable {
    /// The canonical Istanbul table.
    #[must_use]
    pub fn istanbul() -> Self {
        Self::from_districts(
            ISTANBUL
                .iter()
                .map(|&(id, name, lat, lng, side)| District {
                    id: id.to_string(),
                    name: name.to_string(),
                    lat,
                    lng,
                    side,
                })
                .collect(),
        )
    }

    #[must_use]
    pub const fn from_districts(districts: Vec<District>) -> Self {
        Self(districts)
    }

    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&District> {
        self.0.iter().find(|d| d.id == id)
    }

    /// Exact, case-sensitive name lookup. The table's literal spellings
    /// (including Turkish characters) are the contract with the UI.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&District> {
        self.0.iter().find(|d| d.name == name)
    }

    /// Distance between two districts in whole kilometres, looked up by
    /// name and rounded to the nearest integer.
    ///
    /// A name missing from the table yields 0 rather than an error. That
    /// masks collaborator mismatches, but guesses are constrained to this
    /// same table at the boundary, so a miss cannot happen in normal play.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn distance_km(&self, a: &str, b: &str) -> u32 {
        let (Some(a), Some(b)) = (self.by_name(a), self.by_name(b)) else {
            return 0;
        };
        haversine_km(a.lat, a.lng, b.lat, b.lng).round() as u32
    }

    pub fn iter(&self) -> std::slice::Iter<'_, District> {
        self.0.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a DistrictTable {
    type Item = &'a District;
    type IntoIter = std::slice::Iter<'a, District>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
