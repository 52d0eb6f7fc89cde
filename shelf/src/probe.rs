use std::path::Path;

use fotosheet::io::ext_repr::ExtPrintJob;
use log::{debug, warn};
use rayon::prelude::*;

/// Fills in the pixel dimensions of every photo that has a path but no
/// usable dimensions yet, by decoding image headers in parallel. A zero
/// width or height counts as unknown, same as absent dimensions. Paths are
/// resolved relative to `base_dir`.
///
/// A photo that cannot be probed keeps unknown dimensions: the layout engine
/// treats it as square and the renderer leaves its slot blank. A broken file
/// never aborts the batch.
pub fn probe_dimensions(ext_job: &mut ExtPrintJob, base_dir: &Path) {
    ext_job
        .photos
        .par_iter_mut()
        .enumerate()
        .for_each(|(id, photo)| {
            if photo.pixel_dims.is_some_and(|(w, h)| w > 0 && h > 0) {
                return;
            }
            let Some(path) = &photo.path else {
                debug!("photo {id}: no path and no dimensions provided");
                return;
            };
            let resolved = base_dir.join(path);
            match image::image_dimensions(&resolved) {
                Ok((w, h)) => {
                    debug!("photo {id}: probed {w}x{h}px from {}", resolved.display());
                    photo.pixel_dims = Some((w, h));
                }
                Err(err) => {
                    warn!(
                        "photo {id}: could not probe {}: {err}",
                        resolved.display()
                    );
                }
            }
        });
}
