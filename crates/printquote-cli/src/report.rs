//! Plain-text rendering of quotes and catalogs.

use std::fmt;

use printquote::{QuoteRequest, QuoteResult};
use printquote_catalog::Catalogs;

/// A quote rendered as an aligned breakdown.
pub struct QuoteReport<'a> {
    /// The priced request.
    pub request: &'a QuoteRequest,
    /// Its result.
    pub quote: &'a QuoteResult,
}

impl fmt::Display for QuoteReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let q = self.quote.rounded();
        let s = &self.request.settings;

        writeln!(
            f,
            "{} {} / {} / {} / {}% infill / x{}",
            s.material, s.color, s.quality, s.purpose, s.infill_percent, s.quantity
        )?;
        writeln!(f, "  Base volume:      {:>10.2} cm3", self.request.base_volume_cm3)?;
        writeln!(f, "  Effective volume: {:>10.2} cm3", q.effective_volume_cm3)?;
        writeln!(f, "  Weight:           {:>10.2} g", q.material_weight_grams)?;
        writeln!(f, "  Print time:       {:>10.2} h", q.print_time_hours)?;
        writeln!(f, "\nCost per unit:")?;
        writeln!(f, "  Material:         {:>10.2}", q.c_material)?;
        writeln!(f, "  Energy:           {:>10.2}", q.c_energy)?;
        writeln!(f, "  Labor:            {:>10.2}", q.c_labor)?;
        writeln!(f, "  Depreciation:     {:>10.2}", q.c_depreciation)?;
        writeln!(f, "  Maintenance:      {:>10.2}", q.c_maintenance)?;
        writeln!(f, "  Internal:         {:>10.2}", q.c_internal)?;
        writeln!(f, "  VAT:              {:>10.2}", q.vat)?;
        writeln!(f, "  With VAT:         {:>10.2}", q.price_without_delivery)?;
        writeln!(f, "  Unit price:       {:>10.2}", q.unit_price)?;
        if s.delivery_fee > 0.0 {
            writeln!(f, "  Delivery:         {:>10.2}", s.delivery_fee)?;
        }
        write!(f, "\nTotal:              {:>10.2}", q.total_price)?;
        if q.min_price_applied {
            f.write_str(" (minimum price)")?;
        }
        writeln!(f)
    }
}

/// The catalogs rendered as a listing.
pub struct CatalogReport<'a>(pub &'a Catalogs);

impl fmt::Display for CatalogReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let catalogs = self.0;
        let policy = catalogs.policy();

        writeln!(f, "Pricing config v{}", catalogs.version())?;
        writeln!(
            f,
            "  service fee {:.2}, markup {}%, VAT {}%, min price {:.2}, energy {:.3}/kWh",
            policy.service_fee,
            policy.markup_percent,
            policy.vat_rate * 100.0,
            policy.min_price,
            policy.energy_price_per_kwh
        )?;

        writeln!(f, "\nMaterials:")?;
        for spec in catalogs.materials() {
            writeln!(f, "  {} ({:.3}/g)", spec.material, spec.cost_per_gram)?;
            for entry in &spec.colors {
                writeln!(
                    f,
                    "    {:<12} {:.2} g/cm3  x{:.2}",
                    entry.color.name(),
                    entry.density,
                    entry.price_multiplier
                )?;
            }
        }

        writeln!(f, "\nQualities:")?;
        for preset in catalogs.qualities() {
            writeln!(
                f,
                "  {:<10} {:>5.1} cm3/h  x{:.2}  labor {:.3}/min",
                preset.quality.name(),
                preset.print_speed_cm3_per_hour,
                preset.quality_multiplier,
                preset.labor_rate_per_minute
            )?;
        }

        writeln!(f, "\nPurposes:")?;
        for p in catalogs.purposes() {
            writeln!(f, "  {:<10} x{:.2}", p.purpose.name(), p.multiplier)?;
        }

        writeln!(f, "\nPrinters:")?;
        let default = catalogs.default_printer();
        for printer in catalogs.printers() {
            let marker = if std::ptr::eq(printer, default) {
                " (default)"
            } else {
                ""
            };
            writeln!(
                f,
                "  {}{}: {} W, {:.0} over {} h, maintenance {}%",
                printer.name,
                marker,
                printer.power_watts,
                printer.acquisition_cost,
                printer.lifespan_hours,
                printer.maintenance_rate_fraction * 100.0
            )?;
        }
        Ok(())
    }
}
