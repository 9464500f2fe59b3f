//! Indexed, read-only catalog snapshot built from a validated config.

use std::collections::BTreeMap;

use crate::config::PricingConfig;
use crate::error::Result;
use crate::material::MaterialSpec;
use crate::policy::PricingPolicy;
use crate::printer::PrinterCostProfile;
use crate::quality::{PurposeMultiplier, QualityPreset};
use crate::tags::{Material, Purpose, Quality};

/// Lookup tables keyed by the tag enums.
///
/// Built once from a [`PricingConfig`] and never mutated. Share it behind an
/// `Arc` and replace the whole value to reload.
#[derive(Debug, Clone)]
pub struct Catalogs {
    version: u32,
    policy: PricingPolicy,
    materials: BTreeMap<Material, MaterialSpec>,
    qualities: BTreeMap<Quality, QualityPreset>,
    purposes: BTreeMap<Purpose, PurposeMultiplier>,
    printers: Vec<PrinterCostProfile>,
    default_printer: usize,
}

impl Catalogs {
    /// Validate `config` and index it.
    pub fn new(config: PricingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::index(config))
    }

    /// Catalogs for [`PricingConfig::builtin`].
    pub fn builtin() -> Self {
        // Built-in tables always satisfy validate().
        Self::index(PricingConfig::builtin())
    }

    fn index(config: PricingConfig) -> Self {
        let default_printer = config
            .printers
            .iter()
            .position(|p| p.default)
            .unwrap_or(0);
        Self {
            version: config.version,
            policy: config.policy,
            materials: config
                .materials
                .into_iter()
                .map(|spec| (spec.material, spec))
                .collect(),
            qualities: config
                .qualities
                .into_iter()
                .map(|preset| (preset.quality, preset))
                .collect(),
            purposes: config
                .purposes
                .into_iter()
                .map(|p| (p.purpose, p))
                .collect(),
            printers: config.printers,
            default_printer,
        }
    }

    /// Config version these catalogs were built from.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Shop policy.
    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Look up a material.
    pub fn material(&self, material: Material) -> Option<&MaterialSpec> {
        self.materials.get(&material)
    }

    /// Look up a quality tier.
    pub fn quality(&self, quality: Quality) -> Option<&QualityPreset> {
        self.qualities.get(&quality)
    }

    /// Look up a purpose multiplier.
    pub fn purpose(&self, purpose: Purpose) -> Option<&PurposeMultiplier> {
        self.purposes.get(&purpose)
    }

    /// Look up a printer by name (case-insensitive), or the default printer.
    pub fn printer(&self, name: Option<&str>) -> Option<&PrinterCostProfile> {
        match name {
            Some(name) => self
                .printers
                .iter()
                .find(|p| p.name.eq_ignore_ascii_case(name.trim())),
            None => self.printers.get(self.default_printer),
        }
    }

    /// The printer used when a request names none.
    pub fn default_printer(&self) -> &PrinterCostProfile {
        &self.printers[self.default_printer]
    }

    /// Materials in tag order.
    pub fn materials(&self) -> impl Iterator<Item = &MaterialSpec> {
        self.materials.values()
    }

    /// Quality tiers from coarsest to finest.
    pub fn qualities(&self) -> impl Iterator<Item = &QualityPreset> {
        self.qualities.values()
    }

    /// Purpose multipliers.
    pub fn purposes(&self) -> impl Iterator<Item = &PurposeMultiplier> {
        self.purposes.values()
    }

    /// Printers in config order.
    pub fn printers(&self) -> &[PrinterCostProfile] {
        &self.printers
    }

    /// Rebuild the config these catalogs were indexed from.
    pub fn to_config(&self) -> PricingConfig {
        PricingConfig {
            version: self.version,
            policy: self.policy.clone(),
            materials: self.materials.values().cloned().collect(),
            qualities: self.qualities.values().cloned().collect(),
            purposes: self.purposes.values().cloned().collect(),
            printers: self.printers.clone(),
        }
    }
}

impl Default for Catalogs {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<PricingConfig> for Catalogs {
    type Error = crate::error::CatalogError;

    fn try_from(config: PricingConfig) -> Result<Self> {
        Self::new(config)
    }
}
