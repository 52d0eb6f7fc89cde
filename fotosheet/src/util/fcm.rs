use std::cmp::Ordering;
use std::fmt::Display;

/// Tolerance for boundary comparisons in page space, in centimeters.
/// Half the pixel pitch at the 300 DPI render target: two positions closer
/// than this land on the same pixel of a rendered page, so treating them as
/// equal can never produce a visible difference.
pub const CM_TOL: f32 = 2.54 / 300.0 / 2.0;

/// Wrapper around the [`float_cmp::approx_eq!()`] macro for easy comparison
/// of page-space centimeter values with [`CM_TOL`] tolerance.
/// Two FCMs are considered equal if they are within the tolerance of each other.
#[derive(Debug, Clone, Copy)]
pub struct FCM(pub f32);

impl<T> From<T> for FCM
where
    T: Into<f32>,
{
    fn from(n: T) -> Self {
        FCM(n.into())
    }
}

impl PartialEq<Self> for FCM {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f32, self.0, other.0, epsilon = CM_TOL)
    }
}

impl PartialOrd<Self> for FCM {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.eq(other) {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}

impl Display for FCM {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
