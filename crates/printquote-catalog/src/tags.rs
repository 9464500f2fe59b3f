//! Closed tag enumerations used as catalog keys.
//!
//! Every catalog lookup is keyed by one of these enums rather than by a free
//! string, so a misspelled name is rejected when it is parsed instead of
//! falling through to a missing-entry branch later on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseTagError;

/// Which family of tag a [`ParseTagError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// A [`Material`].
    Material,
    /// A [`Color`].
    Color,
    /// A [`Quality`].
    Quality,
    /// A [`Purpose`].
    Purpose,
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TagKind::Material => "material",
            TagKind::Color => "color",
            TagKind::Quality => "quality",
            TagKind::Purpose => "purpose",
        })
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace(|c: char| c == '-' || c == ' ', "_")
}

/// Printable filament material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    /// Polylactic acid.
    Pla,
    /// Glycol-modified PET.
    Petg,
    /// Acrylonitrile butadiene styrene.
    Abs,
    /// Flexible thermoplastic polyurethane.
    Tpu,
    /// Polyamide.
    Nylon,
}

impl Material {
    /// All materials, in catalog order.
    pub const ALL: [Material; 5] = [
        Material::Pla,
        Material::Petg,
        Material::Abs,
        Material::Tpu,
        Material::Nylon,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Material::Pla => "pla",
            Material::Petg => "petg",
            Material::Abs => "abs",
            Material::Tpu => "tpu",
            Material::Nylon => "nylon",
        }
    }
}

impl FromStr for Material {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "pla" => Ok(Material::Pla),
            "petg" | "pet_g" => Ok(Material::Petg),
            "abs" => Ok(Material::Abs),
            "tpu" => Ok(Material::Tpu),
            "nylon" | "pa" | "pa12" => Ok(Material::Nylon),
            _ => Err(ParseTagError {
                kind: TagKind::Material,
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Filament color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Undyed base filament.
    Natural,
    /// Black.
    Black,
    /// White.
    White,
    /// Grey.
    Grey,
    /// Red.
    Red,
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Clear / translucent.
    Transparent,
    /// Silk gold.
    Gold,
    /// Silk silver.
    Silver,
}

impl Color {
    /// All colors, in catalog order.
    pub const ALL: [Color; 11] = [
        Color::Natural,
        Color::Black,
        Color::White,
        Color::Grey,
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Transparent,
        Color::Gold,
        Color::Silver,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Color::Natural => "natural",
            Color::Black => "black",
            Color::White => "white",
            Color::Grey => "grey",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Transparent => "transparent",
            Color::Gold => "gold",
            Color::Silver => "silver",
        }
    }
}

impl FromStr for Color {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "natural" | "raw" => Ok(Color::Natural),
            "black" => Ok(Color::Black),
            "white" => Ok(Color::White),
            "grey" | "gray" => Ok(Color::Grey),
            "red" => Ok(Color::Red),
            "blue" => Ok(Color::Blue),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            "transparent" | "clear" => Ok(Color::Transparent),
            "gold" | "silk_gold" => Ok(Color::Gold),
            "silver" | "silk_silver" => Ok(Color::Silver),
            _ => Err(ParseTagError {
                kind: TagKind::Color,
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Print quality tier, ordered from coarsest to finest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    /// Thick layers, fastest.
    Draft,
    /// Everyday quality.
    Standard,
    /// Fine layers.
    High,
    /// Finest layers, slowest.
    Ultra,
}

impl Quality {
    /// All tiers from draft to ultra.
    pub const ALL: [Quality; 4] = [
        Quality::Draft,
        Quality::Standard,
        Quality::High,
        Quality::Ultra,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Quality::Draft => "draft",
            Quality::Standard => "standard",
            Quality::High => "high",
            Quality::Ultra => "ultra",
        }
    }
}

impl FromStr for Quality {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "draft" | "low" => Ok(Quality::Draft),
            "standard" | "normal" | "medium" => Ok(Quality::Standard),
            "high" => Ok(Quality::High),
            "ultra" | "ultra_high" => Ok(Quality::Ultra),
            _ => Err(ParseTagError {
                kind: TagKind::Quality,
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the printed part will be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    /// Fit and form checks.
    Prototype,
    /// Load-bearing or end-use parts.
    Functional,
    /// Display pieces where surface finish matters.
    Aesthetic,
}

impl Purpose {
    /// All purposes.
    pub const ALL: [Purpose; 3] = [Purpose::Prototype, Purpose::Functional, Purpose::Aesthetic];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Purpose::Prototype => "prototype",
            Purpose::Functional => "functional",
            Purpose::Aesthetic => "aesthetic",
        }
    }
}

impl FromStr for Purpose {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "prototype" | "prototyping" => Ok(Purpose::Prototype),
            "functional" => Ok(Purpose::Functional),
            "aesthetic" | "decorative" => Ok(Purpose::Aesthetic),
            _ => Err(ParseTagError {
                kind: TagKind::Purpose,
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
