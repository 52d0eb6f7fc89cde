use crate::entities::{Photo, PrintJob, Sheet};
use crate::io::ext_repr::ExtPrintJob;
use anyhow::{Context, Result};
use log::debug;

/// Imports an [`ExtPrintJob`] into the library.
///
/// Photos get consecutive ids matching their index in the external list.
/// Dimensions the acquisition side has not reported yet come in as `0 x 0`
/// and are treated as unknown throughout.
pub fn import(ext_job: &ExtPrintJob) -> Result<PrintJob> {
    let sheet = match ext_job.sheet {
        Some(s) => Sheet::try_new(s.width, s.height)
            .with_context(|| format!("invalid sheet in job '{}'", ext_job.name))?,
        None => Sheet::A4,
    };

    let mut job = PrintJob::new(ext_job.settings, sheet)
        .with_context(|| format!("invalid settings in job '{}'", ext_job.name))?;

    for (id, ext_photo) in ext_job.photos.iter().enumerate() {
        let (px_w, px_h) = ext_photo.pixel_dims.unwrap_or((0, 0));
        let photo = Photo::new(id, px_w, px_h, ext_photo.copies)
            .with_context(|| format!("invalid photo {id} in job '{}'", ext_job.name))?;
        if !photo.dims_known() {
            debug!("photo {id}: dimensions unknown, treating as square");
        }
        job.add_photo(photo);
    }

    Ok(job)
}
