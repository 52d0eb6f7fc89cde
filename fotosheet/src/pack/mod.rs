//! The layout engine: turns a [`PrintJob`] into a sequence of [`Page`]s by
//! single-pass shelf packing.
//!
//! Shelf packing is a deliberate tradeoff. Slots are placed strictly in
//! input order, left to right and then top to bottom, with no sorting, no
//! backtracking and no search for a denser arrangement. This keeps the
//! engine O(n) in the number of copies and keeps the output order equal to
//! the input order: a reshuffled print stack would cost the user more than
//! a slightly emptier sheet.

mod orient;
mod shelf;

#[doc(inline)]
pub use orient::oriented_slot;
#[doc(inline)]
pub use shelf::ShelfCursor;

use crate::entities::{Page, PlacedPhoto, PrintJob};
use crate::geometry::Rect;
use crate::util::assertions;
use log::debug;

/// Lays out every copy of every photo in `job` onto as many pages as needed.
///
/// Pure and deterministic: the result is a function of the job alone and is
/// rebuilt from scratch on every call. A slot larger than the printable
/// area is placed at the cursor and overflows the sheet; nothing is ever
/// dropped or rescaled to force a fit.
pub fn pack(job: &PrintJob) -> Vec<Page> {
    let natural = job.settings.format.dims_cm();
    let mut pages = Vec::new();
    let mut page = Page::default();
    let mut cursor = ShelfCursor::new(job.sheet, job.settings.margin, job.settings.spacing);

    for (key, photo) in &job.photos {
        let (slot, rotated) = oriented_slot(natural, photo, job.settings.orientation);
        debug!(
            "photo {}: {} copies in {:.1}x{:.1}cm slots{}",
            photo.id,
            photo.copies,
            slot.w,
            slot.h,
            if rotated { " (rotated)" } else { "" }
        );
        for _ in 0..photo.copies {
            if cursor.needs_row_wrap(slot.w) {
                cursor.wrap_row();
            }
            if cursor.needs_page_break(slot.h) && !page.is_empty() {
                pages.push(std::mem::take(&mut page));
                cursor.reset();
            }
            let (x, y) = cursor.position();
            page.placed.push(PlacedPhoto {
                key,
                rect: Rect::new(x, y, slot.w, slot.h),
                rotated,
            });
            cursor.advance(slot.w, slot.h);
        }
    }
    if !page.is_empty() {
        pages.push(page);
    }

    for page in &mut pages {
        center_content(page, job.sheet.width);
    }

    debug_assert!(assertions::pages_conserve_copies(job, &pages));
    debug_assert!(pages.iter().all(assertions::no_slot_overlap));

    pages
}

/// Shifts all slots of a page by one common horizontal offset so the content
/// block sits symmetrically about the sheet's vertical center line.
/// Vertical positions stay put.
fn center_content(page: &mut Page, sheet_width: f32) {
    let Some((min_x, max_x)) = page.x_extent() else {
        return;
    };
    let dx = (sheet_width - (max_x - min_x)) / 2.0 - min_x;
    for pp in &mut page.placed {
        pp.rect.x += dx;
    }
}
