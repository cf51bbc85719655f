//! Enumeration types for the user pool
//!
//! This module contains the enumerated profile attributes: gender, the fixed
//! shopping persona tags, and the device platforms each profile carries
//! identifiers for.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender recorded on a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    /// Serialized as `"M"`
    #[serde(rename = "M")]
    Male,
    /// Serialized as `"F"`
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// Single-letter code used in the persisted file
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "m" | "male" => Ok(Gender::Male),
            "f" | "female" => Ok(Gender::Female),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

/// Shopping persona tags from the retail demo workshop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    /// Clothing and home goods shopper
    ApparelHousewares,
    /// Shoes and outdoor gear shopper
    FootwearOutdoors,
    /// Gadgets and cosmetics shopper
    ElectronicsBeauty,
    /// Jewelry and accessories shopper
    JewelryAccessories,
}

impl Persona {
    /// Every persona tag, in declaration order
    pub const ALL: [Persona; 4] = [
        Persona::ApparelHousewares,
        Persona::FootwearOutdoors,
        Persona::ElectronicsBeauty,
        Persona::JewelryAccessories,
    ];

    /// Tag as written in the persisted file
    pub fn tag(&self) -> &'static str {
        match self {
            Persona::ApparelHousewares => "apparel_housewares",
            Persona::FootwearOutdoors => "footwear_outdoors",
            Persona::ElectronicsBeauty => "electronics_beauty",
            Persona::JewelryAccessories => "jewelry_accessories",
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Persona {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Persona::ALL
            .iter()
            .copied()
            .find(|persona| persona.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown persona: {}", s))
    }
}

/// Device platforms a profile carries identifiers for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Apple mobile devices
    Ios,
    /// Android mobile devices
    Android,
    /// Desktop or mobile browsers
    Web,
}

impl Platform {
    /// Every platform key present on a profile
    pub const ALL: [Platform; 3] = [Platform::Ios, Platform::Android, Platform::Web];

    /// Key used for this platform in the persisted `platforms` object
    pub fn key(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Web => "web",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            "web" | "browser" => Ok(Platform::Web),
            _ => Err(format!("Unknown platform: {}", s)),
        }
    }
}
