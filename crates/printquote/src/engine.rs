//! Shared pricing engine handle.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::{info, warn};

use printquote_catalog::{CatalogError, Catalogs, PricingConfig};

use crate::error::Result;
use crate::quote::{estimate, QuoteResult};
use crate::recalc::{OrderSnapshot, Verification};
use crate::request::{QuoteRequest, QuoteSettings};

/// A cheap-to-clone handle over one immutable catalog snapshot.
///
/// Clones share the same catalogs. Estimates take `&self` and hold no locks,
/// so one engine can serve any number of threads. Reloading builds a new
/// engine; handles to the old snapshot keep pricing with it until dropped.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    catalogs: Arc<Catalogs>,
}

impl PricingEngine {
    /// Engine over already-indexed catalogs.
    pub fn new(catalogs: Catalogs) -> Self {
        Self {
            catalogs: Arc::new(catalogs),
        }
    }

    /// Validate a config and build an engine over it.
    pub fn from_config(config: PricingConfig) -> std::result::Result<Self, CatalogError> {
        Ok(Self::new(Catalogs::new(config)?))
    }

    /// Engine over the built-in catalog.
    pub fn builtin() -> Self {
        Self::new(Catalogs::builtin())
    }

    /// The catalog snapshot this engine prices with.
    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    /// Build a replacement engine from a new config.
    ///
    /// `self` is left untouched, so in-flight quotes never see a half-applied
    /// reload.
    pub fn reload(&self, config: PricingConfig) -> std::result::Result<Self, CatalogError> {
        let next = Self::from_config(config)?;
        info!(
            from_version = self.catalogs.version(),
            to_version = next.catalogs.version(),
            "Pricing catalogs reloaded"
        );
        Ok(next)
    }

    /// Price one request.
    pub fn estimate(&self, request: &QuoteRequest) -> Result<QuoteResult> {
        estimate(request, &self.catalogs)
    }

    /// Price many requests in parallel. Results keep the input order.
    pub fn estimate_batch(&self, requests: &[QuoteRequest]) -> Vec<Result<QuoteResult>> {
        requests
            .par_iter()
            .map(|request| estimate(request, &self.catalogs))
            .collect()
    }

    /// Re-price a stored order with edited settings.
    ///
    /// Returns the snapshot to store in place of the old one, and the quote.
    pub fn requote(
        &self,
        order: &OrderSnapshot,
        settings: QuoteSettings,
    ) -> Result<(OrderSnapshot, QuoteResult)> {
        let request = order.with_settings(settings);
        let quote = self.estimate(&request)?;
        Ok((OrderSnapshot::new(&request, &quote), quote))
    }

    /// Re-price a stored order with its own settings and compare totals.
    pub fn verify(&self, order: &OrderSnapshot) -> Result<Verification> {
        let quote = self.estimate(&order.request())?;
        let verdict = Verification::compare(order.total_price, &quote);
        if let Verification::Drifted { stored, recomputed } = verdict {
            warn!(stored, recomputed, "Stored order total no longer reproduces");
        }
        Ok(verdict)
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::builtin()
    }
}
