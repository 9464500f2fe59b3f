//! The full estimate pipeline and its result.

use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

use printquote_catalog::Catalogs;

use crate::cost::{compose_costs, CostBreakdown};
use crate::error::{QuoteError, Result};
use crate::physical::{estimate_physical, PhysicalEstimate};
use crate::price::{finalize_price, round_money, PriceBreakdown};
use crate::request::QuoteRequest;

fn cents<S: Serializer>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_money(*value))
}

/// Everything a quote produces.
///
/// Fields hold full precision; equality is exact. Serialization rounds every
/// amount, weight and duration to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    /// Infill-inflated volume of one part (cm³).
    #[serde(serialize_with = "cents")]
    pub effective_volume_cm3: f64,
    /// Filament mass of one part (g).
    #[serde(serialize_with = "cents")]
    pub material_weight_grams: f64,
    /// Print duration of one part (h).
    #[serde(serialize_with = "cents")]
    pub print_time_hours: f64,
    /// Filament cost.
    #[serde(rename = "Cmaterial", serialize_with = "cents")]
    pub c_material: f64,
    /// Electricity cost.
    #[serde(rename = "Cenergy", serialize_with = "cents")]
    pub c_energy: f64,
    /// Labor cost.
    #[serde(rename = "Clabor", serialize_with = "cents")]
    pub c_labor: f64,
    /// Printer depreciation.
    #[serde(rename = "Cdepreciation", serialize_with = "cents")]
    pub c_depreciation: f64,
    /// Printer maintenance.
    #[serde(rename = "Cmaintenance", serialize_with = "cents")]
    pub c_maintenance: f64,
    /// Internal cost of one unit, before VAT.
    #[serde(rename = "Cinternal", serialize_with = "cents")]
    pub c_internal: f64,
    /// VAT on one unit.
    #[serde(serialize_with = "cents")]
    pub vat: f64,
    /// One unit with VAT, before markup.
    #[serde(serialize_with = "cents")]
    pub price_without_delivery: f64,
    /// One unit after markup.
    #[serde(serialize_with = "cents")]
    pub unit_price: f64,
    /// Order total.
    #[serde(serialize_with = "cents")]
    pub total_price: f64,
    /// The minimum price raised the total.
    pub min_price_applied: bool,
}

impl QuoteResult {
    fn assemble(physical: PhysicalEstimate, costs: CostBreakdown, price: PriceBreakdown) -> Self {
        Self {
            effective_volume_cm3: physical.effective_volume_cm3,
            material_weight_grams: physical.material_weight_grams,
            print_time_hours: physical.print_time_hours,
            c_material: costs.c_material,
            c_energy: costs.c_energy,
            c_labor: costs.c_labor,
            c_depreciation: costs.c_depreciation,
            c_maintenance: costs.c_maintenance,
            c_internal: costs.c_internal,
            vat: price.vat,
            price_without_delivery: price.price_without_delivery,
            unit_price: price.unit_price,
            total_price: price.total_price,
            min_price_applied: price.min_price_applied,
        }
    }

    /// Copy with every value rounded to two decimals, for display or storage.
    pub fn rounded(&self) -> Self {
        Self {
            effective_volume_cm3: round_money(self.effective_volume_cm3),
            material_weight_grams: round_money(self.material_weight_grams),
            print_time_hours: round_money(self.print_time_hours),
            c_material: round_money(self.c_material),
            c_energy: round_money(self.c_energy),
            c_labor: round_money(self.c_labor),
            c_depreciation: round_money(self.c_depreciation),
            c_maintenance: round_money(self.c_maintenance),
            c_internal: round_money(self.c_internal),
            vat: round_money(self.vat),
            price_without_delivery: round_money(self.price_without_delivery),
            unit_price: round_money(self.unit_price),
            total_price: round_money(self.total_price),
            min_price_applied: self.min_price_applied,
        }
    }
}

/// Price a request against a catalog snapshot.
///
/// Pure: the same request and catalogs always give a bit-identical result.
pub fn estimate(request: &QuoteRequest, catalogs: &Catalogs) -> Result<QuoteResult> {
    let physical = estimate_physical(request, catalogs)?;
    let costs = compose_costs(request, &physical, catalogs)?;
    let price = finalize_price(
        costs.c_internal,
        request.settings.quantity,
        request.settings.delivery_fee,
        catalogs.policy(),
    )?;

    // Finite inputs can still overflow on the way through the multipliers.
    let overflowed = [
        physical.effective_volume_cm3,
        costs.c_internal,
        price.total_price,
    ]
    .iter()
    .any(|v| !v.is_finite());
    if overflowed {
        return Err(QuoteError::invalid(
            "base_volume_cm3",
            request.base_volume_cm3,
            "too large to price",
        ));
    }

    debug!(
        material = %request.settings.material,
        color = %request.settings.color,
        quality = %request.settings.quality,
        base_volume_cm3 = request.base_volume_cm3,
        weight_g = physical.material_weight_grams,
        hours = physical.print_time_hours,
        total = price.total_price,
        "Quote computed"
    );

    Ok(QuoteResult::assemble(physical, costs, price))
}
