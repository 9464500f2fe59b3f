//! Quality tiers and purpose multipliers.

use serde::{Deserialize, Serialize};

use crate::tags::{Purpose, Quality};

/// Speed, labor and pricing data for one quality tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityPreset {
    /// Tier this preset describes.
    pub quality: Quality,
    /// Deposition rate (cm³/h). Finer tiers print slower.
    pub print_speed_cm3_per_hour: f64,
    /// Price multiplier applied to the summed line items (>= 1.0).
    pub quality_multiplier: f64,
    /// Operator labor rate (currency per minute of print time).
    pub labor_rate_per_minute: f64,
}

impl QualityPreset {
    /// Built-in preset for a tier.
    pub fn builtin(quality: Quality) -> Self {
        let (speed, multiplier, labor) = match quality {
            Quality::Draft => (15.0, 1.0, 0.05),
            Quality::Standard => (10.0, 1.1, 0.06),
            Quality::High => (6.0, 1.25, 0.08),
            Quality::Ultra => (3.5, 1.5, 0.1),
        };
        Self {
            quality,
            print_speed_cm3_per_hour: speed,
            quality_multiplier: multiplier,
            labor_rate_per_minute: labor,
        }
    }

    /// Every built-in tier, draft first.
    pub fn all_builtin() -> Vec<Self> {
        Quality::ALL.into_iter().map(Self::builtin).collect()
    }
}

/// Price multiplier for one purpose tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurposeMultiplier {
    /// Purpose this multiplier applies to.
    pub purpose: Purpose,
    /// Multiplier (>= 1.0).
    pub multiplier: f64,
}

impl PurposeMultiplier {
    /// Built-in multiplier for a purpose.
    pub fn builtin(purpose: Purpose) -> Self {
        let multiplier = match purpose {
            Purpose::Prototype => 1.0,
            Purpose::Functional => 1.15,
            Purpose::Aesthetic => 1.25,
        };
        Self {
            purpose,
            multiplier,
        }
    }

    /// Every built-in purpose.
    pub fn all_builtin() -> Vec<Self> {
        Purpose::ALL.into_iter().map(Self::builtin).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_quality_strictly_ordered() {
        let presets = QualityPreset::all_builtin();
        assert_eq!(presets.len(), 4);
        for pair in presets.windows(2) {
            assert!(pair[0].quality < pair[1].quality);
            assert!(pair[0].print_speed_cm3_per_hour > pair[1].print_speed_cm3_per_hour);
            assert!(pair[0].quality_multiplier < pair[1].quality_multiplier);
        }
        assert_eq!(presets[0].print_speed_cm3_per_hour, 15.0);
    }

    #[test]
    fn test_builtin_purposes() {
        for p in PurposeMultiplier::all_builtin() {
            assert!(p.multiplier >= 1.0);
        }
        assert_eq!(PurposeMultiplier::builtin(Purpose::Prototype).multiplier, 1.0);
    }
}
