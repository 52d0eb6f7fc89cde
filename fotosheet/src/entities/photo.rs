use anyhow::{Result, ensure};

/// A source photograph in a [`PrintJob`](crate::entities::PrintJob): its
/// natural pixel dimensions and how many copies the job demands.
///
/// Pixel dimensions start out unknown (`0 x 0`) until the underlying image
/// has been decoded. Unknown dimensions are treated as square everywhere;
/// the caller re-runs the layout once they resolve.
#[derive(Clone, Debug)]
pub struct Photo {
    /// Unique identifier, matching the photo's index in the job it was imported from
    pub id: usize,
    /// Natural pixel width, 0 while not yet known
    pub px_w: u32,
    /// Natural pixel height, 0 while not yet known
    pub px_h: u32,
    /// Number of copies to place, at least 1
    pub copies: usize,
}

impl Photo {
    pub fn new(id: usize, px_w: u32, px_h: u32, copies: usize) -> Result<Photo> {
        ensure!(
            copies >= 1,
            "photo {id} demands {copies} copies, at least 1 required"
        );
        Ok(Photo {
            id,
            px_w,
            px_h,
            copies,
        })
    }

    /// False until the decode of the underlying image has reported back.
    pub fn dims_known(&self) -> bool {
        self.px_w > 0 && self.px_h > 0
    }
}
