//! Printer cost profiles.

use serde::{Deserialize, Serialize};

/// Machine cost parameters used to amortize a printer over its lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrinterCostProfile {
    /// Profile name.
    pub name: String,
    /// Rated power draw while printing (W).
    pub power_watts: f64,
    /// Purchase price (currency units).
    pub acquisition_cost: f64,
    /// Expected service life (print hours).
    pub lifespan_hours: f64,
    /// Fraction of the purchase price spent on maintenance over the lifespan.
    pub maintenance_rate_fraction: f64,
    /// Use this printer when a request does not name one.
    #[serde(default)]
    pub default: bool,
}

impl Default for PrinterCostProfile {
    fn default() -> Self {
        Self::prusa_mk4()
    }
}

impl PrinterCostProfile {
    /// Prusa MK4. Default shop printer.
    pub fn prusa_mk4() -> Self {
        Self {
            name: "Prusa MK4".into(),
            power_watts: 120.0,
            acquisition_cost: 1100.0,
            lifespan_hours: 10000.0,
            maintenance_rate_fraction: 0.1,
            default: true,
        }
    }

    /// Bambu Lab X1 Carbon.
    pub fn bambu_x1c() -> Self {
        Self {
            name: "Bambu Lab X1 Carbon".into(),
            power_watts: 350.0,
            acquisition_cost: 1450.0,
            lifespan_hours: 8000.0,
            maintenance_rate_fraction: 0.12,
            default: false,
        }
    }

    /// Creality Ender 3.
    pub fn ender3() -> Self {
        Self {
            name: "Creality Ender 3".into(),
            power_watts: 270.0,
            acquisition_cost: 250.0,
            lifespan_hours: 5000.0,
            maintenance_rate_fraction: 0.2,
            default: false,
        }
    }

    /// Get all built-in profiles.
    pub fn all_profiles() -> Vec<Self> {
        vec![Self::prusa_mk4(), Self::bambu_x1c(), Self::ender3()]
    }

    /// Depreciation per print hour.
    pub fn depreciation_per_hour(&self) -> f64 {
        self.acquisition_cost / self.lifespan_hours
    }

    /// Maintenance cost per print hour.
    pub fn maintenance_per_hour(&self) -> f64 {
        self.acquisition_cost * self.maintenance_rate_fraction / self.lifespan_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_profiles() {
        let profiles = PrinterCostProfile::all_profiles();
        assert_eq!(profiles.iter().filter(|p| p.default).count(), 1);
        for profile in profiles {
            assert!(profile.power_watts > 0.0);
            assert!(profile.acquisition_cost > 0.0);
            assert!(profile.lifespan_hours > 0.0);
            assert!((0.0..=1.0).contains(&profile.maintenance_rate_fraction));
        }
    }

    #[test]
    fn test_hourly_rates() {
        let mk4 = PrinterCostProfile::prusa_mk4();
        assert_relative_eq!(mk4.depreciation_per_hour(), 0.11);
        assert_relative_eq!(mk4.maintenance_per_hour(), 0.011);
    }
}
