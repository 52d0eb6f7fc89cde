use crate::entities::PhotoKey;
use crate::geometry::Rect;

/// One copy of a [`Photo`](crate::entities::Photo) placed on a
/// [`Page`](crate::entities::Page). Pure output record: rebuilt from scratch
/// on every layout run, never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct PlacedPhoto {
    /// Key of the photo in the job this copy was packed from
    pub key: PhotoKey,
    /// The slot this copy occupies, in page-space cm, orientation already applied
    pub rect: Rect,
    /// True if the slot's axes were swapped relative to the format's natural size
    pub rotated: bool,
}
