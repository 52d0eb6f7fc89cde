use crate::geometry::{PxRect, Rect};
use serde::{Deserialize, Serialize};

use crate::entities::{PrintSettings, Sheet};

/// External representation of a print job: one batch of photos together
/// with the settings to lay them out under.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPrintJob {
    /// Name of the job, used for output file stems
    pub name: String,
    /// The photos to place, in print order
    pub photos: Vec<ExtPhoto>,
    pub settings: PrintSettings,
    /// Sheet dimensions in cm, ISO A4 when absent
    #[serde(default)]
    pub sheet: Option<Sheet>,
}

/// External representation of a [`Photo`](crate::entities::Photo).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPhoto {
    /// Reference an acquisition collaborator can decode pixels from.
    /// Opaque to the core library.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub path: Option<String>,
    /// Natural pixel dimensions `(width, height)`, absent or `(0, 0)` while not yet known
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pixel_dims: Option<(u32, u32)>,
    /// Number of copies to place
    #[serde(default = "one_copy")]
    pub copies: usize,
}

fn one_copy() -> usize {
    1
}

/// External representation of a computed layout.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    pub pages: Vec<ExtPage>,
    /// Total slot area over total sheet area, across all pages
    pub density: f32,
    /// Total number of placed copies
    pub total_copies: usize,
}

/// External representation of one laid-out [`Page`](crate::entities::Page).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPage {
    pub placed: Vec<ExtPlacedPhoto>,
    /// Slot area over sheet area for this page
    pub density: f32,
}

/// One placed copy: where its slot sits on the page and how a renderer
/// should fill it.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacedPhoto {
    /// Index of the photo in the job's photo list
    pub photo_id: usize,
    /// The slot, in page-space cm
    pub slot: ExtRect,
    /// True if the slot was swapped relative to the format's natural orientation
    pub rotated: bool,
    /// Crop/fit geometry for the renderer
    pub raster: ExtSlotGeometry,
}

/// Draw instructions in slot-local coordinates: `dest` in cm relative to the
/// slot's top-left corner, `crop` in natural source pixels.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSlotGeometry {
    /// The source must be drawn rotated 90 degrees
    pub rotate: bool,
    pub dest: ExtRect,
    /// Absent when the full source is drawn
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub crop: Option<ExtRect>,
}

/// External representation of an axis-aligned rectangle.
#[derive(Serialize, Deserialize, Clone, Debug, Copy)]
pub struct ExtRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl From<Rect> for ExtRect {
    fn from(r: Rect) -> Self {
        ExtRect {
            x: r.x,
            y: r.y,
            width: r.w,
            height: r.h,
        }
    }
}

impl From<PxRect> for ExtRect {
    fn from(r: PxRect) -> Self {
        ExtRect {
            x: r.x,
            y: r.y,
            width: r.w,
            height: r.h,
        }
    }
}
