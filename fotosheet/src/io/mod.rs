/// External (serializable) representations of jobs and solutions
pub mod ext_repr;

mod export;
mod import;

#[doc(inline)]
pub use export::export;
#[doc(inline)]
pub use import::import;

/// Rendering [`Page`](crate::entities::Page)s to SVG documents
#[cfg(feature = "svg-export")]
pub mod svg;
