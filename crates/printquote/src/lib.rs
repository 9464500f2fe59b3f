#![warn(missing_docs)]

//! Cost estimation and pricing for 3D-printed parts.
//!
//! Turns a model's base volume and a set of print settings into a material
//! weight, a print duration and an itemized price. The pipeline has three
//! stages:
//!
//! 1. [`physical`]: infill-inflated volume, weight and print time
//! 2. [`cost`]: five cost line items and the internal cost
//! 3. [`price`]: VAT, markup, quantity, delivery and the minimum price
//!
//! Everything is a pure function of the request and an immutable
//! [`Catalogs`] snapshot, so identical inputs always give bit-identical
//! quotes.
//!
//! # Example
//!
//! ```ignore
//! use printquote::{PricingEngine, QuoteRequest};
//! use printquote::catalog::{Color, Material, Purpose, Quality};
//!
//! let engine = PricingEngine::builtin();
//! let request = QuoteRequest::new(
//!     Material::Pla, Color::Black, Quality::Draft, Purpose::Prototype, 10.0, 10.0,
//! );
//! let quote = engine.estimate(&request)?;
//! println!("Total: {:.2}", quote.total_price);
//! ```

pub mod cost;
pub mod engine;
pub mod error;
pub mod physical;
pub mod price;
pub mod quote;
pub mod recalc;
pub mod request;

pub use printquote_catalog as catalog;
pub use printquote_catalog::{Catalogs, PricingConfig};

pub use cost::{compose_costs, CostBreakdown};
pub use engine::PricingEngine;
pub use error::{QuoteError, Result};
pub use physical::{estimate_physical, PhysicalEstimate};
pub use price::{finalize_price, round_money, PriceBreakdown};
pub use quote::{estimate, QuoteResult};
pub use recalc::{OrderSnapshot, Verification};
pub use request::{QuoteRequest, QuoteSettings, RawQuoteRequest};
