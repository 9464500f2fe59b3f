//! Re-pricing stored orders.
//!
//! An order stores its base volume, its settings and the total it was sold
//! at. The base volume is what makes exact re-pricing possible: weight and
//! time depend on the settings, the base volume does not.

use serde::{Deserialize, Serialize};

use crate::price::round_money;
use crate::quote::QuoteResult;
use crate::request::{QuoteRequest, QuoteSettings};

/// What an order record keeps so its price can be recomputed later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    /// Solid volume of the uploaded model (cm³).
    pub base_volume_cm3: f64,
    /// Settings the order was priced with.
    pub settings: QuoteSettings,
    /// Stored order total, rounded to cents.
    pub total_price: f64,
}

impl OrderSnapshot {
    /// Snapshot of a freshly priced request.
    pub fn new(request: &QuoteRequest, quote: &QuoteResult) -> Self {
        Self {
            base_volume_cm3: request.base_volume_cm3,
            settings: request.settings.clone(),
            total_price: round_money(quote.total_price),
        }
    }

    /// The request this order was priced from.
    pub fn request(&self) -> QuoteRequest {
        self.settings.clone().with_volume(self.base_volume_cm3)
    }

    /// The same order with different settings.
    pub fn with_settings(&self, settings: QuoteSettings) -> QuoteRequest {
        settings.with_volume(self.base_volume_cm3)
    }
}

/// Outcome of re-pricing a stored order with its own settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verification {
    /// The stored total was reproduced exactly.
    Reproduced,
    /// Recomputing gave a different total (catalog changed since sale).
    Drifted {
        /// Stored total.
        stored: f64,
        /// Total under the current catalogs.
        recomputed: f64,
    },
}

impl Verification {
    /// Compare a stored total with a fresh quote.
    pub fn compare(stored: f64, quote: &QuoteResult) -> Self {
        let recomputed = round_money(quote.total_price);
        if recomputed == stored {
            Verification::Reproduced
        } else {
            Verification::Drifted { stored, recomputed }
        }
    }

    /// Whether the stored total still holds.
    pub fn is_reproduced(&self) -> bool {
        matches!(self, Verification::Reproduced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::estimate;
    use printquote_catalog::{Catalogs, Color, Material, Purpose, Quality};

    #[test]
    fn test_snapshot_restores_request() {
        let catalogs = Catalogs::builtin();
        let request = QuoteRequest::new(
            Material::Petg,
            Color::Blue,
            Quality::Standard,
            Purpose::Functional,
            23.4,
            30.0,
        )
        .with_quantity(2)
        .with_delivery_fee(4.9);
        let quote = estimate(&request, &catalogs).unwrap();
        let snapshot = OrderSnapshot::new(&request, &quote);
        assert_eq!(snapshot.request(), request);
        assert!(Verification::compare(snapshot.total_price, &quote).is_reproduced());
    }

    #[test]
    fn test_drift_reported() {
        let catalogs = Catalogs::builtin();
        let request = QuoteRequest::new(
            Material::Pla,
            Color::Red,
            Quality::High,
            Purpose::Aesthetic,
            80.0,
            20.0,
        );
        let quote = estimate(&request, &catalogs).unwrap();
        let verdict = Verification::compare(quote.total_price.round() + 1.0, &quote);
        assert!(matches!(verdict, Verification::Drifted { .. }));
    }
}
