//! The slot rasterizer: pure crop/fit geometry mapping a photo's pixels into
//! its slot.
//!
//! No pixels move here. Given source dimensions and a slot, this module
//! answers the three questions a renderer has: should the source be rotated
//! a quarter turn to match the slot, which region of the source is sampled
//! (cover mode crops, contain mode never does), and which rectangle of the
//! slot the samples land in.

use crate::entities::{BorderStyle, FitMode};
use crate::geometry::{PxRect, Rect, Size};

/// Fraction of the slot width kept clear on each side by
/// [`BorderStyle::Plain`] and [`BorderStyle::Polaroid`].
pub const BORDER_FRAC: f32 = 0.04;

/// Extra fraction of the slot height kept clear at the bottom of a
/// [`BorderStyle::Polaroid`] slot: the caption strip.
pub const CAPTION_FRAC: f32 = 0.12;

/// Fraction of the vertical crop slack kept above the retained region in
/// cover mode. Biased above center because subjects tend to sit in the
/// upper half of a frame.
pub const TOP_CROP_BIAS: f32 = 0.35;

/// Draw instructions for one slot, produced by [`slot_geometry`].
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct SlotGeometry {
    /// The source must be drawn rotated 90 degrees
    pub rotate: bool,
    /// Where the pixels land, in slot-local cm (origin at the slot's
    /// top-left corner)
    pub dest: Rect,
    /// Region of the source to sample, in natural (un-rotated) source
    /// pixels. `None` means the full source
    pub crop: Option<PxRect>,
}

/// Computes the draw geometry for a photo of `px_w x px_h` pixels filling a
/// `slot`. Pure: equal inputs give identical outputs, nothing is cached.
///
/// Rotation-to-fit is decided here, independently of the layout engine's
/// orientation pass: when the slot leans one way and the source leans the
/// other, the source is drawn rotated and the usable area's axes swap for
/// the rest of the computation. Square sources and slots never rotate, and
/// unknown (`0 x 0`) dimensions yield placeholder geometry covering the
/// whole usable area.
pub fn slot_geometry(
    px_w: u32,
    px_h: u32,
    slot: Size,
    border: BorderStyle,
    fit: FitMode,
) -> SlotGeometry {
    let usable = usable_rect(slot, border);

    if px_w == 0 || px_h == 0 {
        return SlotGeometry {
            rotate: false,
            dest: usable,
            crop: None,
        };
    }

    let src_aspect = px_w as f32 / px_h as f32;
    let rotate = rotate_to_fit(slot.aspect(), src_aspect);

    // The usable area as the source will see it: axes swapped if the source
    // is drawn rotated.
    let (dw, dh) = match rotate {
        true => (usable.h, usable.w),
        false => (usable.w, usable.h),
    };
    let dest_aspect = if dh <= 0.0 { 1.0 } else { dw / dh };

    match fit {
        FitMode::Cover => {
            let crop = if src_aspect > dest_aspect {
                // Source relatively wider: full height, sides trimmed evenly.
                let crop_w = px_h as f32 * dest_aspect;
                PxRect::new((px_w as f32 - crop_w) / 2.0, 0.0, crop_w, px_h as f32)
            } else {
                // Source relatively taller: full width, top and bottom
                // trimmed with the top-weighted bias.
                let crop_h = px_w as f32 / dest_aspect;
                let crop_y = (px_h as f32 - crop_h) * TOP_CROP_BIAS;
                PxRect::new(0.0, crop_y, px_w as f32, crop_h)
            };
            SlotGeometry {
                rotate,
                dest: usable,
                crop: Some(crop),
            }
        }
        FitMode::Contain => {
            let (sw, sh) = if src_aspect > dest_aspect {
                (dw, dw / src_aspect)
            } else {
                (dh * src_aspect, dh)
            };
            // Back into slot axes; centering is unaffected by the swap.
            let (w, h) = match rotate {
                true => (sh, sw),
                false => (sw, sh),
            };
            let dest = Rect::new(
                usable.x + (usable.w - w) / 2.0,
                usable.y + (usable.h - h) / 2.0,
                w,
                h,
            );
            SlotGeometry {
                rotate,
                dest,
                crop: None,
            }
        }
    }
}

/// The part of the slot pixels may land in, in slot-local cm: the whole slot
/// for [`BorderStyle::None`], inset by [`BORDER_FRAC`] of the slot width on
/// all four sides otherwise, with the polaroid caption strip taken off the
/// bottom on top of that.
pub fn usable_rect(slot: Size, border: BorderStyle) -> Rect {
    let inset = match border {
        BorderStyle::None => 0.0,
        BorderStyle::Plain | BorderStyle::Polaroid => BORDER_FRAC * slot.w,
    };
    let caption = match border {
        BorderStyle::Polaroid => CAPTION_FRAC * slot.h,
        _ => 0.0,
    };
    Rect::new(
        inset,
        inset,
        f32::max(slot.w - 2.0 * inset, 0.0),
        f32::max(slot.h - 2.0 * inset - caption, 0.0),
    )
}

/// True if the two aspect ratios lean opposite ways (one wider than tall,
/// the other taller than wide). Taking the reciprocal of both arguments
/// leaves the answer unchanged, so the decision is stable under relabeling
/// of the axes.
pub fn rotate_to_fit(slot_aspect: f32, src_aspect: f32) -> bool {
    (slot_aspect > 1.0 && src_aspect < 1.0) || (slot_aspect < 1.0 && src_aspect > 1.0)
}
