//! Detector configuration records and the LEGEND metadata JSON layer.
//!
//! In Rust the fields are plain (`radius`, `depth`, `angle`). On the JSON side
//! they carry the metadata unit suffixes (`radius_in_mm`, `angle_in_deg`), and
//! the groove radii are nested as `groove.radius_in_mm.{inner,outer}`.
//!
//! Builders never validate. [`DetectorConfig::validate`] is the loading
//! layer's check and runs from [`DetectorMetadata::from_json_str`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::profile::Family;

/// Point-contact (p+) electrode at the bottom face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PpContact {
    #[serde(rename = "radius_in_mm")]
    pub radius: f64,
    #[serde(rename = "depth_in_mm", default)]
    pub depth: f64,
}

/// Annular groove around the point contact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "GrooveJson", into = "GrooveJson")]
pub struct Groove {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub depth: f64,
}

#[derive(Clone, Copy, Serialize, Deserialize)]
struct GrooveRadii {
    inner: f64,
    outer: f64,
}

#[derive(Clone, Copy, Serialize, Deserialize)]
struct GrooveJson {
    depth_in_mm: f64,
    radius_in_mm: GrooveRadii,
}

impl From<GrooveJson> for Groove {
    fn from(g: GrooveJson) -> Self {
        Self {
            inner_radius: g.radius_in_mm.inner,
            outer_radius: g.radius_in_mm.outer,
            depth: g.depth_in_mm,
        }
    }
}

impl From<Groove> for GrooveJson {
    fn from(g: Groove) -> Self {
        Self {
            depth_in_mm: g.depth,
            radius_in_mm: GrooveRadii {
                inner: g.inner_radius,
                outer: g.outer_radius,
            },
        }
    }
}

/// Beveled corner; `height == 0` means no taper.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Taper {
    #[serde(rename = "height_in_mm", default)]
    pub height: f64,
    #[serde(rename = "angle_in_deg", default)]
    pub angle: f64,
}

impl Taper {
    /// Radial inset of the taper: `height · tan(angle)`, angle in degrees.
    #[inline]
    pub fn inset(&self) -> f64 {
        self.height * (std::f64::consts::PI * self.angle / 180.0).tan()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tapers {
    #[serde(default)]
    pub bottom: Taper,
    #[serde(default)]
    pub top: Taper,
    #[serde(default)]
    pub borehole: Taper,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Borehole {
    #[serde(rename = "radius_in_mm", default)]
    pub radius: f64,
    #[serde(rename = "depth_in_mm", default)]
    pub depth: f64,
}

/// Crystal geometry in millimeters and degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    #[serde(rename = "radius_in_mm")]
    pub radius: f64,
    #[serde(rename = "height_in_mm")]
    pub height: f64,
    pub pp_contact: PpContact,
    pub groove: Groove,
    #[serde(default)]
    pub taper: Tapers,
    #[serde(default)]
    pub borehole: Borehole,
}

impl DetectorConfig {
    /// Reject non-finite or negative lengths before they reach a builder.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("radius_in_mm", self.radius),
            ("height_in_mm", self.height),
            ("pp_contact.radius_in_mm", self.pp_contact.radius),
            ("pp_contact.depth_in_mm", self.pp_contact.depth),
            ("groove.radius_in_mm.inner", self.groove.inner_radius),
            ("groove.radius_in_mm.outer", self.groove.outer_radius),
            ("groove.depth_in_mm", self.groove.depth),
            ("taper.bottom.height_in_mm", self.taper.bottom.height),
            ("taper.top.height_in_mm", self.taper.top.height),
            ("taper.borehole.height_in_mm", self.taper.borehole.height),
            ("borehole.radius_in_mm", self.borehole.radius),
            ("borehole.depth_in_mm", self.borehole.depth),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be a finite non-negative length, got {value}"
                )));
            }
        }
        for (name, taper) in [
            ("bottom", self.taper.bottom),
            ("top", self.taper.top),
            ("borehole", self.taper.borehole),
        ] {
            if !taper.angle.is_finite() {
                return Err(Error::InvalidConfig(format!(
                    "taper.{name}.angle_in_deg must be finite"
                )));
            }
        }
        Ok(())
    }
}

/// Enrichment as found in production metadata: either a bare number or `{"val": ...}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Enrichment {
    Value(f64),
    Measured { val: f64 },
}

impl Enrichment {
    #[inline]
    pub fn fraction(&self) -> f64 {
        match *self {
            Enrichment::Value(v) | Enrichment::Measured { val: v } => v,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Production {
    #[serde(default)]
    pub enrichment: Option<Enrichment>,
}

/// One detector entry of the metadata database.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectorMetadata {
    pub name: String,
    #[serde(rename = "type")]
    pub family: Family,
    #[serde(default)]
    pub production: Production,
    pub geometry: DetectorConfig,
}

impl DetectorMetadata {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let meta: DetectorMetadata =
            serde_json::from_str(s).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        meta.geometry.validate()?;
        tracing::debug!(name = %meta.name, family = ?meta.family, "loaded detector metadata");
        Ok(meta)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Ge-76 fraction, if the production record has one.
    #[inline]
    pub fn enrichment(&self) -> Option<f64> {
        self.production.enrichment.map(|e| e.fraction())
    }
}
