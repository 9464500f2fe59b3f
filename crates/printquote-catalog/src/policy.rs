//! Shop-wide pricing policy.

use serde::{Deserialize, Serialize};

/// Shortest print time ever quoted (hours).
pub const DEFAULT_MIN_PRINT_TIME_HOURS: f64 = 0.25;

/// Process-wide pricing knobs. Loaded once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Flat fee added to every internal cost (currency units).
    pub service_fee: f64,
    /// Markup applied after VAT (percent).
    pub markup_percent: f64,
    /// Floor for the final order total (currency units).
    pub min_price: f64,
    /// VAT rate as a fraction (0.2 = 20%).
    pub vat_rate: f64,
    /// Electricity price (currency per kWh).
    pub energy_price_per_kwh: f64,
    /// Fixed setup minutes billed at the tier's labor rate on every print.
    #[serde(default)]
    pub setup_minutes: f64,
    /// Floor for the estimated print duration (hours).
    #[serde(default = "default_min_print_time_hours")]
    pub min_print_time_hours: f64,
}

fn default_min_print_time_hours() -> f64 {
    DEFAULT_MIN_PRINT_TIME_HOURS
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            service_fee: 2.0,
            markup_percent: 20.0,
            min_price: 5.0,
            vat_rate: 0.2,
            energy_price_per_kwh: 0.25,
            setup_minutes: 0.0,
            min_print_time_hours: DEFAULT_MIN_PRINT_TIME_HOURS,
        }
    }
}

impl PricingPolicy {
    /// Markup as a multiplication factor.
    pub fn markup_factor(&self) -> f64 {
        1.0 + self.markup_percent / 100.0
    }
}
