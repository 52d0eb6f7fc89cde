use crate::entities::{Page, PrintJob, Sheet};
use crate::geometry::Rect;
use itertools::Itertools;

/// Checks that every copy of every photo in `job` appears exactly once
/// across `pages`.
pub fn pages_conserve_copies(job: &PrintJob, pages: &[Page]) -> bool {
    let demanded: usize = job.photos.values().map(|p| p.copies).sum();
    let placed: usize = pages.iter().map(|p| p.placed.len()).sum();
    if demanded != placed {
        return false;
    }
    job.photos.iter().all(|(key, photo)| {
        pages
            .iter()
            .flat_map(|page| &page.placed)
            .filter(|pp| pp.key == key)
            .count()
            == photo.copies
    })
}

/// Checks that no two slots on `page` overlap. Slots sharing an edge are fine.
pub fn no_slot_overlap(page: &Page) -> bool {
    page.placed
        .iter()
        .tuple_combinations()
        .all(|(a, b)| !a.rect.overlaps(&b.rect))
}

/// Checks that every slot on `page` lies within the printable area of
/// `sheet`. Does not hold for slots larger than the printable area itself:
/// those are placed overflowing rather than dropped.
pub fn slots_within_printable(page: &Page, sheet: Sheet, margin: f32) -> bool {
    let printable = Rect::new(
        margin,
        margin,
        sheet.width - 2.0 * margin,
        sheet.height - 2.0 * margin,
    );
    page.placed.iter().all(|pp| pp.rect.within(&printable))
}
