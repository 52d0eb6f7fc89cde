use crate::geometry::Size;
use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Centimeters per inch.
pub const CM_PER_INCH: f32 = 2.54;

/// Resolution at which the pixel length unit is defined, dots per inch.
pub const PX_UNIT_DPI: f32 = 300.0;

/// Physical size of a single print.
#[derive(Clone, Debug, PartialEq, Copy, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum PrintFormat {
    /// A size from the standard print catalog
    Standard(StandardFormat),
    /// A user-defined size, expressed in `unit`
    Custom { width: f32, height: f32, unit: LengthUnit },
}

/// The standard catalog of photo print sizes, portrait by convention.
#[derive(Clone, Debug, PartialEq, Eq, Copy, Serialize, Deserialize)]
pub enum StandardFormat {
    #[serde(rename = "9x13")]
    P9x13,
    #[serde(rename = "10x15")]
    P10x15,
    #[serde(rename = "13x18")]
    P13x18,
    #[serde(rename = "15x21")]
    P15x21,
    #[serde(rename = "20x30")]
    P20x30,
}

/// Unit in which a custom print size is expressed.
#[derive(Clone, Debug, PartialEq, Eq, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    Cm,
    Inch,
    /// Pixels at [`PX_UNIT_DPI`]
    Px,
}

impl LengthUnit {
    /// Converts a length in this unit to centimeters.
    pub fn to_cm(self, v: f32) -> f32 {
        match self {
            LengthUnit::Cm => v,
            LengthUnit::Inch => v * CM_PER_INCH,
            LengthUnit::Px => v * CM_PER_INCH / PX_UNIT_DPI,
        }
    }
}

impl StandardFormat {
    pub const fn dims_cm(self) -> Size {
        match self {
            StandardFormat::P9x13 => Size::new(9.0, 13.0),
            StandardFormat::P10x15 => Size::new(10.0, 15.0),
            StandardFormat::P13x18 => Size::new(13.0, 18.0),
            StandardFormat::P15x21 => Size::new(15.0, 21.0),
            StandardFormat::P20x30 => Size::new(20.0, 30.0),
        }
    }
}

impl PrintFormat {
    /// Natural slot size in centimeters, before any per-copy orientation
    /// adjustment.
    pub fn dims_cm(&self) -> Size {
        match *self {
            PrintFormat::Standard(sf) => sf.dims_cm(),
            PrintFormat::Custom { width, height, unit } => {
                Size::new(unit.to_cm(width), unit.to_cm(height))
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let dims = self.dims_cm();
        ensure!(
            dims.w.is_finite() && dims.h.is_finite() && dims.w > 0.0 && dims.h > 0.0,
            "print format resolves to invalid dimensions: {:.3} x {:.3} cm",
            dims.w,
            dims.h
        );
        Ok(())
    }
}
