//! Volume-to-physical estimation.
//!
//! Infill is modeled as a linear inflation of the model's solid volume, not
//! as a lattice: `effective = base * (1 + infill / 100)`. Weight and print
//! time both derive from the effective volume.

use serde::{Deserialize, Serialize};

use printquote_catalog::{Catalogs, MaterialColorEntry, MaterialSpec, QualityPreset};

use crate::error::{QuoteError, Result};
use crate::request::QuoteRequest;

/// Material and time needed for one part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalEstimate {
    /// Base volume inflated by infill (cm³).
    pub effective_volume_cm3: f64,
    /// Filament mass (g).
    pub material_weight_grams: f64,
    /// Print duration (h), never below the policy floor.
    pub print_time_hours: f64,
}

/// Infill-inflated volume.
pub fn effective_volume(base_volume_cm3: f64, infill_percent: f64) -> f64 {
    base_volume_cm3 * (1.0 + infill_percent / 100.0)
}

/// Print duration for `volume_cm3` at `speed_cm3_per_hour`, floored.
pub fn print_time_hours(volume_cm3: f64, speed_cm3_per_hour: f64, min_hours: f64) -> f64 {
    (volume_cm3 / speed_cm3_per_hour).max(min_hours)
}

/// Resolve the material and color entries a request refers to.
pub fn lookup_material<'a>(
    request: &QuoteRequest,
    catalogs: &'a Catalogs,
) -> Result<(&'a MaterialSpec, &'a MaterialColorEntry)> {
    let s = &request.settings;
    let spec = catalogs
        .material(s.material)
        .ok_or_else(|| QuoteError::UnknownMaterial {
            material: s.material.to_string(),
        })?;
    let entry = spec.color(s.color).ok_or_else(|| QuoteError::UnknownColor {
        material: s.material.to_string(),
        color: s.color.to_string(),
    })?;
    Ok((spec, entry))
}

/// Resolve the quality preset a request refers to.
pub fn lookup_quality<'a>(request: &QuoteRequest, catalogs: &'a Catalogs) -> Result<&'a QualityPreset> {
    let quality = request.settings.quality;
    catalogs
        .quality(quality)
        .ok_or_else(|| QuoteError::UnknownQuality(quality.to_string()))
}

/// Estimate effective volume, weight and print time for one part.
pub fn estimate_physical(request: &QuoteRequest, catalogs: &Catalogs) -> Result<PhysicalEstimate> {
    request.validate()?;
    let (_, color) = lookup_material(request, catalogs)?;
    let preset = lookup_quality(request, catalogs)?;

    let effective_volume_cm3 =
        effective_volume(request.base_volume_cm3, request.settings.infill_percent);
    Ok(PhysicalEstimate {
        effective_volume_cm3,
        material_weight_grams: effective_volume_cm3 * color.density,
        print_time_hours: print_time_hours(
            effective_volume_cm3,
            preset.print_speed_cm3_per_hour,
            catalogs.policy().min_print_time_hours,
        ),
    })
}
