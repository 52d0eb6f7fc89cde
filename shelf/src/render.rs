use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fotosheet::entities::{CM_PER_INCH, Page, PhotoKey, PrintJob};
use fotosheet::geometry::{PxRect, Size};
use fotosheet::io::ext_repr::ExtPrintJob;
use fotosheet::raster::{self, SlotGeometry};
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use log::{info, warn};
use slotmap::SecondaryMap;
use thousands::Separable;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Decoded sources of a job's photos, keyed like the job itself.
/// Photos that could not be decoded are absent; their slots render blank.
pub struct PhotoSources {
    images: SecondaryMap<PhotoKey, RgbaImage>,
}

impl PhotoSources {
    /// Decodes every photo with a path, resolved relative to `base_dir`.
    /// Decode failures are logged and skipped.
    pub fn load(job: &PrintJob, ext_job: &ExtPrintJob, base_dir: &Path) -> Self {
        let mut images = SecondaryMap::new();
        for (key, photo) in &job.photos {
            let Some(Some(path)) = ext_job.photos.get(photo.id).map(|p| p.path.as_ref()) else {
                continue;
            };
            let resolved = base_dir.join(path);
            match image::open(&resolved) {
                Ok(img) => {
                    images.insert(key, img.to_rgba8());
                }
                Err(err) => {
                    warn!(
                        "photo {}: could not decode {}: {err}",
                        photo.id,
                        resolved.display()
                    );
                }
            }
        }
        PhotoSources { images }
    }

    pub fn get(&self, key: PhotoKey) -> Option<&RgbaImage> {
        self.images.get(key)
    }
}

fn px_per_cm(dpi: f32) -> f32 {
    dpi / CM_PER_INCH
}

/// Composites every page to `<stem>_page_<n>.png` at `dpi`. Each slot is
/// filled white before its photo is drawn, so border and caption insets show
/// up as paper.
pub fn render_pages(
    job: &PrintJob,
    pages: &[Page],
    sources: &PhotoSources,
    dpi: f32,
    out_dir: &Path,
    stem: &str,
) -> Result<Vec<PathBuf>> {
    let scale = px_per_cm(dpi);
    let page_w = (job.sheet.width * scale).round() as u32;
    let page_h = (job.sheet.height * scale).round() as u32;

    let mut written = Vec::with_capacity(pages.len());
    for (n, page) in pages.iter().enumerate() {
        let mut canvas = RgbaImage::from_pixel(page_w, page_h, WHITE);
        for pp in &page.placed {
            let photo = job.photo(pp.key);
            let geo = raster::slot_geometry(
                photo.px_w,
                photo.px_h,
                Size::new(pp.rect.w, pp.rect.h),
                job.settings.border,
                job.settings.fit,
            );
            match sources.get(pp.key) {
                Some(src) => draw_slot(
                    &mut canvas,
                    src,
                    &geo,
                    (pp.rect.x + geo.dest.x) * scale,
                    (pp.rect.y + geo.dest.y) * scale,
                    geo.dest.w * scale,
                    geo.dest.h * scale,
                ),
                None => warn!("photo {}: no pixels available, slot left blank", photo.id),
            }
        }
        let path = out_dir.join(format!("{stem}_page_{n}.png"));
        canvas
            .save(&path)
            .with_context(|| format!("could not write png to: {}", path.display()))?;
        info!(
            "page {n} rendered to {} ({} px)",
            path.display(),
            (page_w as u64 * page_h as u64).separate_with_commas()
        );
        written.push(path);
    }
    Ok(written)
}

/// Renders every placed copy to its own `<stem>_photo<id>_copy<m>.png`,
/// sized to its slot at `dpi`. For handing individual prints to a lab
/// instead of printing whole sheets.
pub fn render_singles(
    job: &PrintJob,
    pages: &[Page],
    sources: &PhotoSources,
    dpi: f32,
    out_dir: &Path,
    stem: &str,
) -> Result<Vec<PathBuf>> {
    let scale = px_per_cm(dpi);
    let mut copy_counters: SecondaryMap<PhotoKey, usize> = SecondaryMap::new();

    let mut written = Vec::new();
    for page in pages {
        for pp in &page.placed {
            let photo = job.photo(pp.key);
            let m = copy_counters.get(pp.key).copied().unwrap_or(0);
            copy_counters.insert(pp.key, m + 1);

            let slot_w = (pp.rect.w * scale).round().max(1.0) as u32;
            let slot_h = (pp.rect.h * scale).round().max(1.0) as u32;
            let mut canvas = RgbaImage::from_pixel(slot_w, slot_h, WHITE);

            let geo = raster::slot_geometry(
                photo.px_w,
                photo.px_h,
                Size::new(pp.rect.w, pp.rect.h),
                job.settings.border,
                job.settings.fit,
            );
            match sources.get(pp.key) {
                Some(src) => draw_slot(
                    &mut canvas,
                    src,
                    &geo,
                    geo.dest.x * scale,
                    geo.dest.y * scale,
                    geo.dest.w * scale,
                    geo.dest.h * scale,
                ),
                None => warn!("photo {}: no pixels available, copy left blank", photo.id),
            }

            let path = out_dir.join(format!("{stem}_photo{}_copy{m}.png", photo.id));
            canvas
                .save(&path)
                .with_context(|| format!("could not write png to: {}", path.display()))?;
            written.push(path);
        }
    }
    info!("{} single prints rendered to {}", written.len(), out_dir.display());
    Ok(written)
}

/// Samples `src` according to `geo` and pastes the result onto `canvas` with
/// its top-left corner at `(dx, dy)`, all in canvas pixels.
fn draw_slot(
    canvas: &mut RgbaImage,
    src: &RgbaImage,
    geo: &SlotGeometry,
    dx: f32,
    dy: f32,
    dw: f32,
    dh: f32,
) {
    let dw = dw.round().max(1.0) as u32;
    let dh = dh.round().max(1.0) as u32;

    let cropped = match geo.crop {
        Some(region) => crop_source(src, region),
        None => src.clone(),
    };
    let upright = match geo.rotate {
        true => imageops::rotate90(&cropped),
        false => cropped,
    };
    let resized = imageops::resize(&upright, dw, dh, FilterType::Triangle);
    imageops::overlay(canvas, &resized, dx.round() as i64, dy.round() as i64);
}

/// Rounds a fractional crop region to whole pixels, clamped to the source
/// bounds.
fn crop_source(src: &RgbaImage, region: PxRect) -> RgbaImage {
    let x = (region.x.round().max(0.0) as u32).min(src.width().saturating_sub(1));
    let y = (region.y.round().max(0.0) as u32).min(src.height().saturating_sub(1));
    let w = (region.w.round() as u32).clamp(1, src.width() - x);
    let h = (region.h.round() as u32).clamp(1, src.height() - y);
    imageops::crop_imm(src, x, y, w, h).to_image()
}
