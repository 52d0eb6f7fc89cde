use crate::entities::{PrintFormat, StandardFormat};
use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Immutable snapshot of everything that drives one layout computation.
/// Changing a setting means building a new snapshot and re-running the
/// layout; the engine never observes live state.
#[derive(Clone, Debug, PartialEq, Copy, Serialize, Deserialize)]
pub struct PrintSettings {
    pub format: PrintFormat,
    #[serde(default)]
    pub orientation: OrientationPolicy,
    /// Border kept clear on all four sides of the sheet, cm
    pub margin: f32,
    /// Gap between adjacent slots, cm
    pub spacing: f32,
    #[serde(default)]
    pub border: BorderStyle,
    #[serde(default)]
    pub fit: FitMode,
}

/// How each placed copy's slot is oriented relative to the format's natural
/// size.
#[derive(Clone, Debug, PartialEq, Eq, Copy, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrientationPolicy {
    /// Match the slot to the photo: landscape photos get landscape slots,
    /// portrait photos portrait slots. Square photos and photos with
    /// unknown dimensions keep the natural slot.
    #[default]
    Auto,
    /// Force slot height >= slot width
    Portrait,
    /// Force slot width >= slot height
    Landscape,
}

/// Decorative frame drawn inside each slot.
#[derive(Clone, Debug, PartialEq, Eq, Copy, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    /// Photo covers the entire slot
    #[default]
    None,
    /// Even white frame, 4% of the slot width on every side
    Plain,
    /// [`Plain`](Self::Plain) plus a caption strip of 12% of the slot
    /// height at the bottom, after instant film
    Polaroid,
}

/// How a photo's pixels are mapped into the usable area of its slot.
#[derive(Clone, Debug, PartialEq, Eq, Copy, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitMode {
    /// Crop-to-fill: the usable area is covered completely, excess source
    /// is cropped away
    #[default]
    Cover,
    /// Scale-to-fit: the full source stays visible, letterboxed on the
    /// slack axis
    Contain,
}

impl PrintSettings {
    pub fn validate(&self) -> Result<()> {
        self.format.validate()?;
        ensure!(
            self.margin.is_finite() && self.margin >= 0.0,
            "margin must be non-negative, got {}",
            self.margin
        );
        ensure!(
            self.spacing.is_finite() && self.spacing >= 0.0,
            "spacing must be non-negative, got {}",
            self.spacing
        );
        Ok(())
    }
}

impl Default for PrintSettings {
    fn default() -> Self {
        PrintSettings {
            format: PrintFormat::Standard(StandardFormat::P10x15),
            orientation: OrientationPolicy::Auto,
            margin: 0.3,
            spacing: 0.2,
            border: BorderStyle::None,
            fit: FitMode::Cover,
        }
    }
}
