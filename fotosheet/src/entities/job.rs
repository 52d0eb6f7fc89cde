use crate::entities::{Photo, PrintSettings, Sheet};
use anyhow::Result;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Unique key for each [`Photo`] in a [`PrintJob`]
    pub struct PhotoKey;
}

/// Everything one layout computation consumes: the photos with their copy
/// demands, a settings snapshot and the sheet to fill.
#[derive(Clone, Debug)]
pub struct PrintJob {
    /// All photos in the job. Insert-only, so iteration order is insertion
    /// order, which is the order copies are packed in.
    pub photos: SlotMap<PhotoKey, Photo>,
    pub settings: PrintSettings,
    pub sheet: Sheet,
}

impl PrintJob {
    pub fn new(settings: PrintSettings, sheet: Sheet) -> Result<Self> {
        settings.validate()?;
        Ok(PrintJob {
            photos: SlotMap::with_key(),
            settings,
            sheet,
        })
    }

    pub fn add_photo(&mut self, photo: Photo) -> PhotoKey {
        self.photos.insert(photo)
    }

    pub fn photo(&self, key: PhotoKey) -> &Photo {
        &self.photos[key]
    }

    /// Records the pixel dimensions of a photo once its image has been
    /// decoded. The caller is expected to re-run
    /// [`pack`](crate::pack::pack) afterwards.
    pub fn set_photo_dims(&mut self, key: PhotoKey, px_w: u32, px_h: u32) {
        let photo = &mut self.photos[key];
        photo.px_w = px_w;
        photo.px_h = px_h;
    }

    /// Total number of copies the job demands.
    pub fn total_copies(&self) -> usize {
        self.photos.values().map(|p| p.copies).sum()
    }
}
