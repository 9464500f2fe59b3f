//! Internal cost composition.
//!
//! Five additive line items, scaled by the quality and purpose multipliers,
//! plus the flat service fee. Machine depreciation and maintenance are
//! amortized per print hour over the printer's rated lifespan.

use serde::{Deserialize, Serialize};

use printquote_catalog::{Catalogs, PrinterCostProfile, PurposeMultiplier};

use crate::error::{QuoteError, Result};
use crate::physical::{lookup_material, lookup_quality, PhysicalEstimate};
use crate::request::QuoteRequest;

/// Itemized internal cost of one part, before VAT and markup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Filament.
    pub c_material: f64,
    /// Electricity.
    pub c_energy: f64,
    /// Operator time, including fixed setup minutes.
    pub c_labor: f64,
    /// Printer wear, amortized per print hour.
    pub c_depreciation: f64,
    /// Printer upkeep, amortized per print hour.
    pub c_maintenance: f64,
    /// Multiplied sum plus service fee.
    pub c_internal: f64,
}

impl CostBreakdown {
    /// Sum of the five line items before multipliers and fees.
    pub fn line_item_total(&self) -> f64 {
        self.c_material + self.c_energy + self.c_labor + self.c_depreciation + self.c_maintenance
    }
}

fn lookup_printer<'a>(request: &QuoteRequest, catalogs: &'a Catalogs) -> Result<&'a PrinterCostProfile> {
    let name = request.settings.printer.as_deref();
    catalogs
        .printer(name)
        .ok_or_else(|| QuoteError::UnknownPrinter(name.unwrap_or("<default>").to_string()))
}

fn lookup_purpose<'a>(request: &QuoteRequest, catalogs: &'a Catalogs) -> Result<&'a PurposeMultiplier> {
    let purpose = request.settings.purpose;
    catalogs
        .purpose(purpose)
        .ok_or_else(|| QuoteError::UnknownPurpose(purpose.to_string()))
}

/// Compose the internal cost of one part from its physical estimate.
pub fn compose_costs(
    request: &QuoteRequest,
    physical: &PhysicalEstimate,
    catalogs: &Catalogs,
) -> Result<CostBreakdown> {
    let (material, color) = lookup_material(request, catalogs)?;
    let quality = lookup_quality(request, catalogs)?;
    let purpose = lookup_purpose(request, catalogs)?;
    let printer = lookup_printer(request, catalogs)?;
    let policy = catalogs.policy();

    let hours = physical.print_time_hours;
    let c_material = physical.material_weight_grams * material.cost_per_gram * color.price_multiplier;
    let c_energy = hours * (printer.power_watts / 1000.0) * policy.energy_price_per_kwh;
    let c_labor = (hours * 60.0 + policy.setup_minutes) * quality.labor_rate_per_minute;
    let c_depreciation = hours * printer.depreciation_per_hour();
    let c_maintenance = hours * printer.maintenance_per_hour();

    let mut costs = CostBreakdown {
        c_material,
        c_energy,
        c_labor,
        c_depreciation,
        c_maintenance,
        c_internal: 0.0,
    };
    costs.c_internal = costs.line_item_total() * quality.quality_multiplier * purpose.multiplier
        + policy.service_fee;
    Ok(costs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physical::estimate_physical;
    use approx::assert_relative_eq;
    use printquote_catalog::{Color, Material, PricingConfig, Purpose, Quality};

    fn request() -> QuoteRequest {
        QuoteRequest::new(
            Material::Pla,
            Color::Black,
            Quality::Draft,
            Purpose::Prototype,
            10.0,
            10.0,
        )
    }

    fn compose(request: &QuoteRequest, catalogs: &Catalogs) -> CostBreakdown {
        let physical = estimate_physical(request, catalogs).unwrap();
        compose_costs(request, &physical, catalogs).unwrap()
    }

    #[test]
    fn test_reference_line_items() {
        let costs = compose(&request(), &Catalogs::builtin());
        let hours = 11.0 / 15.0;
        assert_relative_eq!(costs.c_material, 13.64 * 0.025 * 1.05, epsilon = 1e-12);
        assert_relative_eq!(costs.c_energy, hours * 0.12 * 0.25, epsilon = 1e-12);
        assert_relative_eq!(costs.c_labor, hours * 60.0 * 0.05, epsilon = 1e-12);
        assert_relative_eq!(costs.c_depreciation, hours * 1100.0 / 10000.0, epsilon = 1e-12);
        assert_relative_eq!(costs.c_maintenance, hours * 110.0 / 10000.0, epsilon = 1e-12);
        assert_relative_eq!(costs.c_internal, costs.line_item_total() + 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_multipliers_scale_line_items_not_fee() {
        let catalogs = Catalogs::builtin();
        let mut r = request();
        r.settings.purpose = Purpose::Aesthetic;
        let costs = compose(&r, &catalogs);
        assert_relative_eq!(
            costs.c_internal,
            costs.line_item_total() * 1.25 + 2.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_setup_minutes_billed_at_tier_rate() {
        let mut config = PricingConfig::builtin();
        config.policy.setup_minutes = 10.0;
        let catalogs = Catalogs::new(config).unwrap();
        let with_setup = compose(&request(), &catalogs);
        let without = compose(&request(), &Catalogs::builtin());
        assert_relative_eq!(with_setup.c_labor - without.c_labor, 10.0 * 0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_named_printer() {
        let catalogs = Catalogs::builtin();
        let r = request().with_printer("Bambu Lab X1 Carbon");
        let costs = compose(&r, &catalogs);
        let hours = 11.0 / 15.0;
        assert_relative_eq!(costs.c_energy, hours * 0.35 * 0.25, epsilon = 1e-12);
        assert_relative_eq!(costs.c_depreciation, hours * 1450.0 / 8000.0, epsilon = 1e-12);

        let r = request().with_printer("Makerbot Replicator");
        let physical = estimate_physical(&r, &catalogs).unwrap();
        assert_eq!(
            compose_costs(&r, &physical, &catalogs).unwrap_err(),
            QuoteError::UnknownPrinter("Makerbot Replicator".into())
        );
    }

    #[test]
    fn test_line_items_non_negative() {
        let catalogs = Catalogs::builtin();
        for quality in Quality::ALL {
            let mut r = request();
            r.settings.quality = quality;
            r.settings.infill_percent = 0.0;
            let c = compose(&r, &catalogs);
            for item in [
                c.c_material,
                c.c_energy,
                c.c_labor,
                c.c_depreciation,
                c.c_maintenance,
                c.c_internal,
            ] {
                assert!(item >= 0.0);
            }
        }
    }

    #[test]
    fn test_missing_purpose() {
        let mut config = PricingConfig::builtin();
        config.purposes.retain(|p| p.purpose == Purpose::Prototype);
        let catalogs = Catalogs::new(config).unwrap();
        let mut r = request();
        r.settings.purpose = Purpose::Functional;
        let physical = estimate_physical(&r, &catalogs).unwrap();
        assert_eq!(
            compose_costs(&r, &physical, &catalogs).unwrap_err(),
            QuoteError::UnknownPurpose("functional".into())
        );
    }
}
