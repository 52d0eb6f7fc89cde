use crate::entities::{OrientationPolicy, Photo};
use crate::geometry::Size;
use std::cmp::Ordering;

/// Resolves the slot a copy of `photo` will occupy, starting from the
/// format's `natural` size.
///
/// Returns the effective slot size and whether its axes were swapped.
/// Under [`OrientationPolicy::Auto`] the swap happens when the photo's
/// landscape-ness disagrees with the slot's; square photos and photos whose
/// dimensions are not yet known have no landscape-ness to disagree with and
/// keep the natural slot.
pub fn oriented_slot(natural: Size, photo: &Photo, policy: OrientationPolicy) -> (Size, bool) {
    let swap = match policy {
        OrientationPolicy::Auto => match photo.px_w.cmp(&photo.px_h) {
            Ordering::Greater => !natural.is_landscape(),
            Ordering::Less => natural.is_landscape(),
            Ordering::Equal => false,
        },
        OrientationPolicy::Landscape => natural.h > natural.w,
        OrientationPolicy::Portrait => natural.w > natural.h,
    };
    match swap {
        true => (natural.swapped(), true),
        false => (natural, false),
    }
}
