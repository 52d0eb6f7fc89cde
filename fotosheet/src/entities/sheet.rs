use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// The paper photos are laid out on, in centimeters.
#[derive(Clone, Debug, PartialEq, Copy, Serialize, Deserialize)]
pub struct Sheet {
    pub width: f32,
    pub height: f32,
}

impl Sheet {
    /// ISO 216 A4, the default paper size.
    pub const A4: Sheet = Sheet {
        width: 21.0,
        height: 29.7,
    };

    pub fn try_new(width: f32, height: f32) -> Result<Self> {
        ensure!(
            width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0,
            "invalid sheet dimensions: {width} x {height} cm"
        );
        Ok(Sheet { width, height })
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}
