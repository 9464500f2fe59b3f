//! Quote requests.

use serde::{Deserialize, Serialize};

use printquote_catalog::{Color, Material, Purpose, Quality};

use crate::error::{QuoteError, Result};

/// Print settings a customer can change on an order.
///
/// Everything a quote depends on except the model's base volume, which is a
/// property of the uploaded geometry and never changes on edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSettings {
    /// Filament material.
    pub material: Material,
    /// Filament color.
    pub color: Color,
    /// Quality tier.
    pub quality: Quality,
    /// Intended use.
    pub purpose: Purpose,
    /// Infill density (percent, 0 to 100).
    pub infill_percent: f64,
    /// Number of identical parts.
    pub quantity: u32,
    /// Flat delivery fee added to the order total.
    #[serde(default)]
    pub delivery_fee: f64,
    /// Printer to quote on; the catalog default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub printer: Option<String>,
}

impl QuoteSettings {
    /// Settings for a single part with no delivery fee.
    pub fn new(
        material: Material,
        color: Color,
        quality: Quality,
        purpose: Purpose,
        infill_percent: f64,
    ) -> Self {
        Self {
            material,
            color,
            quality,
            purpose,
            infill_percent,
            quantity: 1,
            delivery_fee: 0.0,
            printer: None,
        }
    }

    /// Combine with a base volume into a full request.
    pub fn with_volume(self, base_volume_cm3: f64) -> QuoteRequest {
        QuoteRequest {
            base_volume_cm3,
            settings: self,
        }
    }
}

/// One pricing request. Built fresh for every estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Solid volume of the model (cm³).
    pub base_volume_cm3: f64,
    /// Print settings.
    #[serde(flatten)]
    pub settings: QuoteSettings,
}

impl QuoteRequest {
    /// Request for a single part with no delivery fee.
    pub fn new(
        material: Material,
        color: Color,
        quality: Quality,
        purpose: Purpose,
        base_volume_cm3: f64,
        infill_percent: f64,
    ) -> Self {
        QuoteSettings::new(material, color, quality, purpose, infill_percent)
            .with_volume(base_volume_cm3)
    }

    /// Set the quantity.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.settings.quantity = quantity;
        self
    }

    /// Set the delivery fee.
    pub fn with_delivery_fee(mut self, fee: f64) -> Self {
        self.settings.delivery_fee = fee;
        self
    }

    /// Quote on a named printer.
    pub fn with_printer(mut self, name: impl Into<String>) -> Self {
        self.settings.printer = Some(name.into());
        self
    }

    /// Check every numeric field.
    pub fn validate(&self) -> Result<()> {
        let s = &self.settings;
        if !(self.base_volume_cm3.is_finite() && self.base_volume_cm3 > 0.0) {
            return Err(QuoteError::invalid(
                "base_volume_cm3",
                self.base_volume_cm3,
                "must be a positive number",
            ));
        }
        if !(s.infill_percent.is_finite() && (0.0..=100.0).contains(&s.infill_percent)) {
            return Err(QuoteError::invalid(
                "infill_percent",
                s.infill_percent,
                "must be between 0 and 100",
            ));
        }
        if s.quantity < 1 {
            return Err(QuoteError::invalid("quantity", s.quantity, "must be at least 1"));
        }
        if !(s.delivery_fee.is_finite() && s.delivery_fee >= 0.0) {
            return Err(QuoteError::invalid(
                "delivery_fee",
                s.delivery_fee,
                "must be a non-negative number",
            ));
        }
        Ok(())
    }
}

/// A request as it arrives from outside: tags as free strings.
///
/// Converting into a [`QuoteRequest`] is where unknown names are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuoteRequest {
    /// Material name.
    pub material: String,
    /// Color name.
    pub color: String,
    /// Quality tier name.
    pub quality: String,
    /// Purpose name.
    pub purpose: String,
    /// Solid volume of the model (cm³).
    pub base_volume_cm3: f64,
    /// Infill density (percent).
    pub infill_percent: f64,
    /// Number of parts.
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    /// Delivery fee.
    #[serde(default)]
    pub delivery_fee: f64,
    /// Printer name.
    #[serde(default)]
    pub printer: Option<String>,
}

fn default_quantity() -> i64 {
    1
}

impl TryFrom<RawQuoteRequest> for QuoteRequest {
    type Error = QuoteError;

    fn try_from(raw: RawQuoteRequest) -> Result<Self> {
        let material: Material = raw.material.parse().map_err(|_| QuoteError::UnknownMaterial {
            material: raw.material.clone(),
        })?;
        let color: Color = raw.color.parse().map_err(|_| QuoteError::UnknownColor {
            material: material.to_string(),
            color: raw.color.clone(),
        })?;
        let quality: Quality = raw
            .quality
            .parse()
            .map_err(|_| QuoteError::UnknownQuality(raw.quality.clone()))?;
        let purpose: Purpose = raw
            .purpose
            .parse()
            .map_err(|_| QuoteError::UnknownPurpose(raw.purpose.clone()))?;
        let quantity = u32::try_from(raw.quantity)
            .ok()
            .filter(|&q| q >= 1)
            .ok_or_else(|| QuoteError::invalid("quantity", raw.quantity, "must be at least 1"))?;

        let request = QuoteRequest {
            base_volume_cm3: raw.base_volume_cm3,
            settings: QuoteSettings {
                material,
                color,
                quality,
                purpose,
                infill_percent: raw.infill_percent,
                quantity,
                delivery_fee: raw.delivery_fee,
                printer: raw.printer,
            },
        };
        request.validate()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawQuoteRequest {
        RawQuoteRequest {
            material: "PLA".into(),
            color: "Black".into(),
            quality: "draft".into(),
            purpose: "prototype".into(),
            base_volume_cm3: 10.0,
            infill_percent: 10.0,
            quantity: 1,
            delivery_fee: 0.0,
            printer: None,
        }
    }

    #[test]
    fn test_raw_conversion() {
        let request = QuoteRequest::try_from(raw()).unwrap();
        assert_eq!(
            request,
            QuoteRequest::new(
                Material::Pla,
                Color::Black,
                Quality::Draft,
                Purpose::Prototype,
                10.0,
                10.0
            )
        );
    }

    #[test]
    fn test_raw_unknown_material() {
        let mut r = raw();
        r.material = "Titanium".into();
        assert_eq!(
            QuoteRequest::try_from(r).unwrap_err(),
            QuoteError::UnknownMaterial {
                material: "Titanium".into()
            }
        );
    }

    #[test]
    fn test_raw_unknown_color() {
        let mut r = raw();
        r.color = "Chartreuse".into();
        let err = QuoteRequest::try_from(r).unwrap_err();
        assert!(matches!(err, QuoteError::UnknownColor { ref color, .. } if color == "Chartreuse"));
    }

    #[test]
    fn test_raw_negative_quantity() {
        let mut r = raw();
        r.quantity = -3;
        let err = QuoteRequest::try_from(r).unwrap_err();
        assert_eq!(err.field(), "quantity");
    }

    #[test]
    fn test_raw_from_json_defaults() {
        let json = r#"{
            "material": "petg",
            "color": "clear",
            "quality": "high",
            "purpose": "functional",
            "baseVolumeCm3": 42.5,
            "infillPercent": 25
        }"#;
        let raw: RawQuoteRequest = serde_json::from_str(json).unwrap();
        let request = QuoteRequest::try_from(raw).unwrap();
        assert_eq!(request.settings.material, Material::Petg);
        assert_eq!(request.settings.color, Color::Transparent);
        assert_eq!(request.settings.quantity, 1);
        assert_eq!(request.settings.delivery_fee, 0.0);
        assert!(request.settings.printer.is_none());
    }

    #[test]
    fn test_validate_ranges() {
        let base = QuoteRequest::new(
            Material::Pla,
            Color::Black,
            Quality::Draft,
            Purpose::Prototype,
            10.0,
            10.0,
        );
        assert!(base.validate().is_ok());

        let mut r = base.clone();
        r.base_volume_cm3 = 0.0;
        assert_eq!(r.validate().unwrap_err().field(), "base_volume_cm3");

        let mut r = base.clone();
        r.base_volume_cm3 = f64::INFINITY;
        assert!(r.validate().is_err());

        let mut r = base.clone();
        r.settings.infill_percent = 100.5;
        assert_eq!(r.validate().unwrap_err().field(), "infill_percent");

        let mut r = base.clone();
        r.settings.infill_percent = -1.0;
        assert!(r.validate().is_err());

        assert_eq!(
            base.clone().with_quantity(0).validate().unwrap_err().field(),
            "quantity"
        );
        assert_eq!(
            base.with_delivery_fee(-2.0).validate().unwrap_err().field(),
            "delivery_fee"
        );
    }
}
