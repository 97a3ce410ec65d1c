use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The transit modes a commuter reports yearly ride counts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Metro,
    Metrobus,
    Marmaray,
    Vapur,
    Otobus,
}

impl Mode {
    pub const ALL: [Self; 5] = [
        Self::Metro,
        Self::Metrobus,
        Self::Marmaray,
        Self::Vapur,
        Self::Otobus,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metro => "metro",
            Self::Metrobus => "metrobus",
            Self::Marmaray => "marmaray",
            Self::Vapur => "vapur",
            Self::Otobus => "otobus",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metro" => Ok(Self::Metro),
            "metrobus" => Ok(Self::Metrobus),
            "marmaray" => Ok(Self::Marmaray),
            "vapur" => Ok(Self::Vapur),
            "otobus" => Ok(Self::Otobus),
            _ => Err(()),
        }
    }
}

/// Yearly ride counts per mode. Missing or malformed fields normalize to 0
/// on deserialization instead of being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RideCounts {
    #[serde(default)]
    pub metro: u32,
    #[serde(default)]
    pub metrobus: u32,
    #[serde(default)]
    pub marmaray: u32,
    #[serde(default)]
    pub vapur: u32,
    #[serde(default)]
    pub otobus: u32,
}

impl RideCounts {
    #[must_use]
    pub const fn get(self, mode: Mode) -> u32 {
        match mode {
            Mode::Metro => self.metro,
            Mode::Metrobus => self.metrobus,
            Mode::Marmaray => self.marmaray,
            Mode::Vapur => self.vapur,
            Mode::Otobus => self.otobus,
        }
    }

    #[must_use]
    pub const fn values(self) -> [u32; 5] {
        [
            self.metro,
            self.metrobus,
            self.marmaray,
            self.vapur,
            self.otobus,
        ]
    }

    #[must_use]
    pub const fn total(self) -> u32 {
        self.metro + self.metrobus + self.marmaray + self.vapur + self.otobus
    }
}

/// One submitted (or seeded) commuter: the claimed home district plus ride
/// counts. Immutable once created; the serde shape is the external store's
/// document contract (`createdAt` stays store-side).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitProfile {
    pub id: String,
    pub district: String,
    #[serde(flatten)]
    pub counts: RideCounts,
}

/// A submission before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub district: String,
    #[serde(flatten)]
    pub counts: RideCounts,
}

impl ProfileDraft {
    #[must_use]
    pub fn with_id(self, id: String) -> TransitProfile {
        TransitProfile {
            id,
            district: self.district,
            counts: self.counts,
        }
    }
}

/// What the UI is allowed to see of the active profile: ride counts always,
/// the claimed district only once the round has resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileCard {
    pub district: Option<String>,
    pub counts: RideCounts,
}

impl ProfileCard {
    #[must_use]
    pub fn hidden(profile: &TransitProfile) -> Self {
        Self {
            district: None,
            counts: profile.counts,
        }
    }

    #[must_use]
    pub fn revealed(profile: &TransitProfile) -> Self {
        Self {
            district: Some(profile.district.clone()),
            counts: profile.counts,
        }
    }
}
