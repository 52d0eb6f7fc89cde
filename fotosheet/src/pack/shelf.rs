use crate::entities::Sheet;
use crate::util::FCM;

/// Placement cursor of the shelf heuristic: fills a row left to right, wraps
/// to a fresh row below it when the width runs out and reports when the
/// sheet itself runs out of height.
///
/// All boundary checks go through [`FCM`], so a slot that misses a boundary
/// by less than half a rendered pixel still fits.
pub struct ShelfCursor {
    x: f32,
    y: f32,
    row_h: f32,
    margin: f32,
    spacing: f32,
    sheet: Sheet,
    /// True while the current row holds no slot yet
    row_empty: bool,
}

impl ShelfCursor {
    pub fn new(sheet: Sheet, margin: f32, spacing: f32) -> Self {
        ShelfCursor {
            x: margin,
            y: margin,
            row_h: 0.0,
            margin,
            spacing,
            sheet,
            row_empty: true,
        }
    }

    /// True if a slot of width `w` no longer fits on the current row.
    /// A fresh row never wraps: an oversized slot is placed at the left
    /// edge and overflows instead.
    pub fn needs_row_wrap(&self, w: f32) -> bool {
        !self.row_empty && FCM(self.x + w) > FCM(self.sheet.width - self.margin)
    }

    pub fn wrap_row(&mut self) {
        self.x = self.margin;
        self.y += self.row_h + self.spacing;
        self.row_h = 0.0;
        self.row_empty = true;
    }

    /// True if a slot of height `h` no longer fits below the current row
    /// start. Checked after any row wrap.
    pub fn needs_page_break(&self, h: f32) -> bool {
        FCM(self.y + h) > FCM(self.sheet.height - self.margin)
    }

    /// Restarts at the top-left corner of a fresh sheet.
    pub fn reset(&mut self) {
        self.x = self.margin;
        self.y = self.margin;
        self.row_h = 0.0;
        self.row_empty = true;
    }

    /// Top-left corner the next slot will be placed at.
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Registers a slot of `w x h` placed at the cursor and moves past it.
    pub fn advance(&mut self, w: f32, h: f32) {
        self.x += w + self.spacing;
        self.row_h = f32::max(self.row_h, h);
        self.row_empty = false;
    }
}
