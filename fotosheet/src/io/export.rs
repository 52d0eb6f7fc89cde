use crate::entities::{Page, PrintJob};
use crate::geometry::Size;
use crate::io::ext_repr::{ExtPage, ExtPlacedPhoto, ExtSlotGeometry, ExtSolution};
use crate::raster;

/// Exports a computed layout out of the library.
///
/// Every placed copy carries its full draw geometry, so a renderer can work
/// from the JSON alone: the slot in page-space cm, the destination in
/// slot-local cm and the crop region in source pixels.
pub fn export(job: &PrintJob, pages: &[Page]) -> ExtSolution {
    ExtSolution {
        pages: pages.iter().map(|page| export_page(job, page)).collect(),
        density: mean_density(job, pages),
        total_copies: pages.iter().map(|p| p.placed.len()).sum(),
    }
}

fn export_page(job: &PrintJob, page: &Page) -> ExtPage {
    let placed = page
        .placed
        .iter()
        .map(|pp| {
            let photo = job.photo(pp.key);
            let geo = raster::slot_geometry(
                photo.px_w,
                photo.px_h,
                Size::new(pp.rect.w, pp.rect.h),
                job.settings.border,
                job.settings.fit,
            );
            ExtPlacedPhoto {
                photo_id: photo.id,
                slot: pp.rect.into(),
                rotated: pp.rotated,
                raster: ExtSlotGeometry {
                    rotate: geo.rotate,
                    dest: geo.dest.into(),
                    crop: geo.crop.map(Into::into),
                },
            }
        })
        .collect();

    ExtPage {
        placed,
        density: page.density(job.sheet),
    }
}

fn mean_density(job: &PrintJob, pages: &[Page]) -> f32 {
    if pages.is_empty() {
        return 0.0;
    }
    let slot_area: f32 = pages
        .iter()
        .flat_map(|p| &p.placed)
        .map(|pp| pp.rect.area())
        .sum();
    slot_area / (job.sheet.area() * pages.len() as f32)
}
