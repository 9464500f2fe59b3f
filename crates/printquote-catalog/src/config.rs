//! Versioned pricing configuration.
//!
//! A [`PricingConfig`] is the single source of every pricing constant: the
//! shop policy, the material, quality and purpose catalogs, and the printer
//! profiles. It is read once at startup (usually from TOML) and validated
//! before any quote is produced from it.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CatalogError, Result};
use crate::material::MaterialSpec;
use crate::policy::PricingPolicy;
use crate::printer::PrinterCostProfile;
use crate::quality::{PurposeMultiplier, QualityPreset};

/// Config format version this build reads and writes.
pub const CONFIG_VERSION: u32 = 1;

/// Complete pricing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Format version.
    pub version: u32,
    /// Shop-wide policy.
    pub policy: PricingPolicy,
    /// Material catalog.
    pub materials: Vec<MaterialSpec>,
    /// Quality tiers.
    pub qualities: Vec<QualityPreset>,
    /// Purpose multipliers.
    pub purposes: Vec<PurposeMultiplier>,
    /// Printer profiles. At most one may be marked default.
    pub printers: Vec<PrinterCostProfile>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PricingConfig {
    /// The built-in reference catalog.
    pub fn builtin() -> Self {
        Self {
            version: CONFIG_VERSION,
            policy: PricingPolicy::default(),
            materials: MaterialSpec::all_builtin(),
            qualities: QualityPreset::all_builtin(),
            purposes: PurposeMultiplier::all_builtin(),
            printers: PrinterCostProfile::all_profiles(),
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: PricingConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        info!(
            path = %path.display(),
            materials = config.materials.len(),
            printers = config.printers.len(),
            "Loaded pricing config"
        );
        Ok(config)
    }

    /// Write as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every catalog invariant.
    pub fn validate(&self) -> Result<()> {
        if self.version != CONFIG_VERSION {
            return Err(CatalogError::UnsupportedVersion {
                found: self.version,
                expected: CONFIG_VERSION,
            });
        }
        self.validate_policy()?;
        self.validate_materials()?;
        self.validate_qualities()?;
        self.validate_purposes()?;
        self.validate_printers()?;
        debug!(version = self.version, "Pricing config validated");
        Ok(())
    }

    fn validate_policy(&self) -> Result<()> {
        let p = &self.policy;
        non_negative("policy.service_fee", p.service_fee)?;
        non_negative("policy.markup_percent", p.markup_percent)?;
        non_negative("policy.min_price", p.min_price)?;
        non_negative("policy.setup_minutes", p.setup_minutes)?;
        positive("policy.energy_price_per_kwh", p.energy_price_per_kwh)?;
        positive("policy.min_print_time_hours", p.min_print_time_hours)?;
        if !(p.vat_rate.is_finite() && (0.0..1.0).contains(&p.vat_rate)) {
            return Err(invalid(format!(
                "policy.vat_rate must be in [0, 1), got {}",
                p.vat_rate
            )));
        }
        Ok(())
    }

    fn validate_materials(&self) -> Result<()> {
        if self.materials.is_empty() {
            return Err(invalid("at least one material is required".into()));
        }
        let mut seen = HashSet::new();
        for spec in &self.materials {
            let m = spec.material;
            if !seen.insert(m) {
                return Err(invalid(format!("material {m} is listed twice")));
            }
            positive(&format!("{m}.cost_per_gram"), spec.cost_per_gram)?;
            if spec.colors.is_empty() {
                return Err(invalid(format!("material {m} has no colors")));
            }
            let mut colors = HashSet::new();
            for entry in &spec.colors {
                let c = entry.color;
                if !colors.insert(c) {
                    return Err(invalid(format!("color {c} is listed twice for {m}")));
                }
                positive(&format!("{m}/{c}.density"), entry.density)?;
                if !(entry.price_multiplier.is_finite() && entry.price_multiplier >= 1.0) {
                    return Err(invalid(format!(
                        "{m}/{c}.price_multiplier must be >= 1.0, got {}",
                        entry.price_multiplier
                    )));
                }
            }
            if let Some(natural) = spec.natural() {
                if let Some(entry) = spec
                    .colors
                    .iter()
                    .find(|e| e.price_multiplier < natural.price_multiplier)
                {
                    return Err(invalid(format!(
                        "{m}/{} is priced below natural {m}",
                        entry.color
                    )));
                }
            }
        }
        Ok(())
    }

    fn validate_qualities(&self) -> Result<()> {
        if self.qualities.is_empty() {
            return Err(invalid("at least one quality tier is required".into()));
        }
        let mut presets: Vec<&QualityPreset> = self.qualities.iter().collect();
        presets.sort_by_key(|p| p.quality);
        for preset in &presets {
            let q = preset.quality;
            positive(&format!("{q}.print_speed_cm3_per_hour"), preset.print_speed_cm3_per_hour)?;
            non_negative(&format!("{q}.labor_rate_per_minute"), preset.labor_rate_per_minute)?;
            if !(preset.quality_multiplier.is_finite() && preset.quality_multiplier >= 1.0) {
                return Err(invalid(format!(
                    "{q}.quality_multiplier must be >= 1.0, got {}",
                    preset.quality_multiplier
                )));
            }
        }
        for pair in presets.windows(2) {
            let (coarse, fine) = (pair[0], pair[1]);
            if coarse.quality == fine.quality {
                return Err(invalid(format!("quality {} is listed twice", fine.quality)));
            }
            if fine.print_speed_cm3_per_hour >= coarse.print_speed_cm3_per_hour {
                return Err(invalid(format!(
                    "{} must print slower than {}",
                    fine.quality, coarse.quality
                )));
            }
            if fine.quality_multiplier <= coarse.quality_multiplier {
                return Err(invalid(format!(
                    "{} must carry a higher multiplier than {}",
                    fine.quality, coarse.quality
                )));
            }
        }
        Ok(())
    }

    fn validate_purposes(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for p in &self.purposes {
            if !seen.insert(p.purpose) {
                return Err(invalid(format!("purpose {} is listed twice", p.purpose)));
            }
            if !(p.multiplier.is_finite() && p.multiplier >= 1.0) {
                return Err(invalid(format!(
                    "{}.multiplier must be >= 1.0, got {}",
                    p.purpose, p.multiplier
                )));
            }
        }
        Ok(())
    }

    fn validate_printers(&self) -> Result<()> {
        if self.printers.is_empty() {
            return Err(invalid("at least one printer is required".into()));
        }
        let mut names = HashSet::new();
        for printer in &self.printers {
            let name = &printer.name;
            // Lookup ignores case, so names must differ beyond case.
            if !names.insert(name.to_ascii_lowercase()) {
                return Err(invalid(format!("printer {name:?} is listed twice")));
            }
            positive(&format!("{name}.power_watts"), printer.power_watts)?;
            positive(&format!("{name}.acquisition_cost"), printer.acquisition_cost)?;
            positive(&format!("{name}.lifespan_hours"), printer.lifespan_hours)?;
            let m = printer.maintenance_rate_fraction;
            if !(m.is_finite() && (0.0..=1.0).contains(&m)) {
                return Err(invalid(format!(
                    "{name}.maintenance_rate_fraction must be in [0, 1], got {m}"
                )));
            }
        }
        if self.printers.iter().filter(|p| p.default).count() > 1 {
            return Err(invalid("more than one printer is marked default".into()));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> CatalogError {
    CatalogError::Invalid(msg)
}

fn positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{field} must be positive, got {value}")))
    }
}

fn non_negative(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{field} must be non-negative, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::DEFAULT_MIN_PRINT_TIME_HOURS;
    use crate::tags::{Color, Material, Quality};

    const MINIMAL: &str = r#"
version = 1

[policy]
service_fee = 1.5
markup_percent = 10.0
min_price = 3.0
vat_rate = 0.19
energy_price_per_kwh = 0.3

[[materials]]
material = "pla"
cost_per_gram = 0.02

[[materials.colors]]
color = "natural"
density = 1.24
price_multiplier = 1.0

[[materials.colors]]
color = "black"
density = 1.24
price_multiplier = 1.05

[[qualities]]
quality = "draft"
print_speed_cm3_per_hour = 15.0
quality_multiplier = 1.0
labor_rate_per_minute = 0.05

[[qualities]]
quality = "high"
print_speed_cm3_per_hour = 6.0
quality_multiplier = 1.2
labor_rate_per_minute = 0.07

[[purposes]]
purpose = "prototype"
multiplier = 1.0

[[printers]]
name = "Shop printer"
power_watts = 150.0
acquisition_cost = 800.0
lifespan_hours = 6000.0
maintenance_rate_fraction = 0.1
"#;

    #[test]
    fn test_builtin_is_valid() {
        PricingConfig::builtin().validate().unwrap();
    }

    #[test]
    fn test_parse_minimal() {
        let config = PricingConfig::from_toml_str(MINIMAL).unwrap();
        assert_eq!(config.version, 1);
        assert_eq!(config.policy.setup_minutes, 0.0);
        assert_eq!(config.policy.min_print_time_hours, DEFAULT_MIN_PRINT_TIME_HOURS);
        assert_eq!(config.materials[0].material, Material::Pla);
        assert_eq!(config.materials[0].colors[1].color, Color::Black);
        assert_eq!(config.qualities[1].quality, Quality::High);
        assert!(!config.printers[0].default);
    }

    #[test]
    fn test_shipped_config_matches_builtin() {
        let shipped = include_str!("../../../config/pricing.toml");
        let config = PricingConfig::from_toml_str(shipped).unwrap();
        assert_eq!(config, PricingConfig::builtin());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PricingConfig::builtin();
        let text = config.to_toml_string().unwrap();
        let parsed = PricingConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_unsupported_version() {
        let text = MINIMAL.replace("version = 1", "version = 7");
        let err = PricingConfig::from_toml_str(&text).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UnsupportedVersion { found: 7, expected: 1 }
        ));
    }

    #[test]
    fn test_unknown_material_in_file() {
        let text = MINIMAL.replace("material = \"pla\"", "material = \"titanium\"");
        assert!(matches!(
            PricingConfig::from_toml_str(&text),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_bad_vat() {
        let mut config = PricingConfig::builtin();
        config.policy.vat_rate = 1.0;
        assert!(config.validate().is_err());
        config.policy.vat_rate = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_cheap_color() {
        let mut config = PricingConfig::builtin();
        config.materials[0].colors[1].price_multiplier = 0.9;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_unordered_quality() {
        let mut config = PricingConfig::builtin();
        // ultra faster than high
        config.qualities[3].print_speed_cm3_per_hour = 7.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ultra must print slower than high"));

        let mut config = PricingConfig::builtin();
        config.qualities[1].quality_multiplier = 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_duplicates() {
        let mut config = PricingConfig::builtin();
        config.materials.push(MaterialSpec::pla());
        assert!(config.validate().is_err());

        let mut config = PricingConfig::builtin();
        config.printers.push(PrinterCostProfile::prusa_mk4());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_printer_names_differing_by_case() {
        let mut config = PricingConfig::builtin();
        let mut twin = PrinterCostProfile::prusa_mk4();
        twin.name = "PRUSA mk4".into();
        twin.default = false;
        config.printers.push(twin);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("listed twice"));
    }

    #[test]
    fn test_rejects_two_defaults() {
        let mut config = PricingConfig::builtin();
        config.printers[1].default = true;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("more than one printer"));
    }

    #[test]
    fn test_rejects_empty_colors() {
        let mut config = PricingConfig::builtin();
        config.materials[2].colors.clear();
        assert!(config.validate().is_err());
    }
}
