use crate::util::CM_TOL;

/// Geometric primitive representing an axis-aligned rectangle in page space.
/// Origin at the top-left corner of the page, y-axis growing downwards, all
/// values in centimeters.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn area(&self) -> f32 {
        self.w * self.h
    }

    /// True if the interiors of `self` and `other` overlap by more than
    /// [`CM_TOL`] on both axes. Rectangles that merely share an edge do not
    /// overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        f32::min(self.right(), other.right()) - f32::max(self.x, other.x) > CM_TOL
            && f32::min(self.bottom(), other.bottom()) - f32::max(self.y, other.y) > CM_TOL
    }

    /// True if `self` lies entirely inside `outer`, allowing [`CM_TOL`] of
    /// slack on every edge.
    pub fn within(&self, outer: &Rect) -> bool {
        self.x >= outer.x - CM_TOL
            && self.y >= outer.y - CM_TOL
            && self.right() <= outer.right() + CM_TOL
            && self.bottom() <= outer.bottom() + CM_TOL
    }
}

/// Axis-aligned rectangle in source-image pixel space. Origin at the
/// top-left pixel of the (un-rotated) source. Values stay fractional;
/// renderers round when they sample.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct PxRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl PxRect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        PxRect { x, y, w, h }
    }

    /// Width over height. Degenerate rects read as square.
    pub fn aspect(&self) -> f32 {
        if self.h <= 0.0 { 1.0 } else { self.w / self.h }
    }
}
