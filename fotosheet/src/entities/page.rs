use crate::entities::{PlacedPhoto, Sheet};
use ordered_float::OrderedFloat;

/// One filled sheet of the layout: the placed copies in packing order.
#[derive(Clone, Debug, Default)]
pub struct Page {
    pub placed: Vec<PlacedPhoto>,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Horizontal extent `(min_x, max_x)` over all slots, `None` for an
    /// empty page.
    pub fn x_extent(&self) -> Option<(f32, f32)> {
        let min_x = self.placed.iter().map(|pp| OrderedFloat(pp.rect.x)).min()?;
        let max_x = self
            .placed
            .iter()
            .map(|pp| OrderedFloat(pp.rect.right()))
            .max()?;
        Some((min_x.into_inner(), max_x.into_inner()))
    }

    /// Ratio of total slot area to sheet area.
    pub fn density(&self, sheet: Sheet) -> f32 {
        let slot_area: f32 = self.placed.iter().map(|pp| pp.rect.area()).sum();
        slot_area / sheet.area()
    }
}
