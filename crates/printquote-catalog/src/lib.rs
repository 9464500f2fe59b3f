#![warn(missing_docs)]

//! Pricing catalogs for the printquote engine.
//!
//! This crate holds everything the pricing engine looks up but never
//! computes: materials and their colors, quality tiers, purpose multipliers,
//! printer cost profiles and the shop-wide pricing policy, all gathered into
//! one versioned [`PricingConfig`].
//!
//! # Example
//!
//! ```ignore
//! use printquote_catalog::{Catalogs, PricingConfig};
//!
//! let config = PricingConfig::load("pricing.toml")?;
//! let catalogs = Catalogs::new(config)?;
//! println!("Default printer: {}", catalogs.default_printer().name);
//! ```

pub mod catalogs;
pub mod config;
pub mod error;
pub mod material;
pub mod policy;
pub mod printer;
pub mod quality;
pub mod tags;

pub use catalogs::Catalogs;
pub use config::{PricingConfig, CONFIG_VERSION};
pub use error::{CatalogError, ParseTagError, Result};
pub use material::{MaterialColorEntry, MaterialSpec};
pub use policy::{PricingPolicy, DEFAULT_MIN_PRINT_TIME_HOURS};
pub use printer::PrinterCostProfile;
pub use quality::{PurposeMultiplier, QualityPreset};
pub use tags::{Color, Material, Purpose, Quality, TagKind};
