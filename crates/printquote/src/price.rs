//! Customer-facing price.

use serde::{Deserialize, Serialize};

use printquote_catalog::PricingPolicy;

use crate::error::{QuoteError, Result};

/// VAT, markup, quantity and delivery applied to an internal cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// VAT on one unit's internal cost.
    pub vat: f64,
    /// Internal cost plus VAT, one unit, before markup.
    pub price_without_delivery: f64,
    /// One unit after markup.
    pub unit_price: f64,
    /// Order total, never below the policy minimum.
    pub total_price: f64,
    /// The minimum price raised the total.
    pub min_price_applied: bool,
}

/// Round a currency amount to cents.
///
/// Only applied when a quote leaves the engine; composition runs at full
/// precision.
pub fn round_money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Turn one unit's internal cost into the order total.
///
/// The minimum price floors the final total, not each unit.
pub fn finalize_price(
    c_internal: f64,
    quantity: u32,
    delivery_fee: f64,
    policy: &PricingPolicy,
) -> Result<PriceBreakdown> {
    if quantity < 1 {
        return Err(QuoteError::invalid("quantity", quantity, "must be at least 1"));
    }

    let vat = c_internal * policy.vat_rate;
    let price_without_delivery = c_internal + vat;
    let unit_price = price_without_delivery * policy.markup_factor();
    let order_price = unit_price * f64::from(quantity) + delivery_fee;
    let min_price_applied = order_price < policy.min_price;

    Ok(PriceBreakdown {
        vat,
        price_without_delivery,
        unit_price,
        total_price: order_price.max(policy.min_price),
        min_price_applied,
    })
}
