//! Material and color definitions.

use serde::{Deserialize, Serialize};

use crate::tags::{Color, Material};

/// Physical and pricing data for one (material, color) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialColorEntry {
    /// Color this entry describes.
    pub color: Color,
    /// Density (g/cm³).
    pub density: f64,
    /// Price multiplier relative to the undyed filament (>= 1.0).
    pub price_multiplier: f64,
}

impl MaterialColorEntry {
    /// Create a color entry.
    pub fn new(color: Color, density: f64, price_multiplier: f64) -> Self {
        Self {
            color,
            density,
            price_multiplier,
        }
    }
}

/// A material with its base cost and the colors it is stocked in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Material this spec describes.
    pub material: Material,
    /// Base filament cost per gram (currency units).
    pub cost_per_gram: f64,
    /// Stocked colors.
    pub colors: Vec<MaterialColorEntry>,
}

impl MaterialSpec {
    /// Look up a stocked color.
    pub fn color(&self, color: Color) -> Option<&MaterialColorEntry> {
        self.colors.iter().find(|entry| entry.color == color)
    }

    /// The undyed entry, if this material is stocked in natural.
    pub fn natural(&self) -> Option<&MaterialColorEntry> {
        self.color(Color::Natural)
    }

    /// PLA.
    pub fn pla() -> Self {
        Self {
            material: Material::Pla,
            cost_per_gram: 0.025,
            colors: vec![
                MaterialColorEntry::new(Color::Natural, 1.24, 1.0),
                MaterialColorEntry::new(Color::Black, 1.24, 1.05),
                MaterialColorEntry::new(Color::White, 1.25, 1.05),
                MaterialColorEntry::new(Color::Grey, 1.24, 1.05),
                MaterialColorEntry::new(Color::Red, 1.24, 1.1),
                MaterialColorEntry::new(Color::Blue, 1.24, 1.1),
                MaterialColorEntry::new(Color::Green, 1.24, 1.1),
                MaterialColorEntry::new(Color::Yellow, 1.24, 1.1),
                MaterialColorEntry::new(Color::Gold, 1.26, 1.3),
                MaterialColorEntry::new(Color::Silver, 1.26, 1.3),
            ],
        }
    }

    /// PETG.
    pub fn petg() -> Self {
        Self {
            material: Material::Petg,
            cost_per_gram: 0.03,
            colors: vec![
                MaterialColorEntry::new(Color::Natural, 1.27, 1.0),
                MaterialColorEntry::new(Color::Black, 1.27, 1.05),
                MaterialColorEntry::new(Color::White, 1.28, 1.05),
                MaterialColorEntry::new(Color::Blue, 1.27, 1.1),
                MaterialColorEntry::new(Color::Transparent, 1.27, 1.15),
            ],
        }
    }

    /// ABS.
    pub fn abs() -> Self {
        Self {
            material: Material::Abs,
            cost_per_gram: 0.028,
            colors: vec![
                MaterialColorEntry::new(Color::Natural, 1.04, 1.0),
                MaterialColorEntry::new(Color::Black, 1.04, 1.05),
                MaterialColorEntry::new(Color::White, 1.05, 1.05),
                MaterialColorEntry::new(Color::Grey, 1.04, 1.05),
                MaterialColorEntry::new(Color::Red, 1.04, 1.1),
            ],
        }
    }

    /// TPU (flexible).
    pub fn tpu() -> Self {
        Self {
            material: Material::Tpu,
            cost_per_gram: 0.06,
            colors: vec![
                MaterialColorEntry::new(Color::Natural, 1.21, 1.0),
                MaterialColorEntry::new(Color::Black, 1.21, 1.05),
                MaterialColorEntry::new(Color::Transparent, 1.21, 1.1),
            ],
        }
    }

    /// Nylon.
    pub fn nylon() -> Self {
        Self {
            material: Material::Nylon,
            cost_per_gram: 0.08,
            colors: vec![
                MaterialColorEntry::new(Color::Natural, 1.14, 1.0),
                MaterialColorEntry::new(Color::Black, 1.15, 1.1),
            ],
        }
    }

    /// Every built-in material.
    pub fn all_builtin() -> Vec<Self> {
        vec![
            Self::pla(),
            Self::petg(),
            Self::abs(),
            Self::tpu(),
            Self::nylon(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_materials() {
        for spec in MaterialSpec::all_builtin() {
            assert!(spec.cost_per_gram > 0.0);
            assert!(!spec.colors.is_empty());
            let natural = spec.natural().map_or(1.0, |n| n.price_multiplier);
            for entry in &spec.colors {
                assert!(entry.density > 0.0);
                assert!(entry.price_multiplier >= 1.0);
                assert!(entry.price_multiplier >= natural);
            }
        }
    }

    #[test]
    fn test_pla_black() {
        let pla = MaterialSpec::pla();
        let black = pla.color(Color::Black).unwrap();
        assert_eq!(black.density, 1.24);
        assert_eq!(black.price_multiplier, 1.05);
        assert!(pla.color(Color::Transparent).is_none());
    }
}
