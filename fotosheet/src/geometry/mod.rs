mod rect;
mod size;

#[doc(inline)]
pub use rect::PxRect;
#[doc(inline)]
pub use rect::Rect;
#[doc(inline)]
pub use size::Size;
