mod job;
mod page;
mod photo;
mod placed_photo;
mod print_format;
mod settings;
mod sheet;

#[doc(inline)]
pub use job::PhotoKey;
#[doc(inline)]
pub use job::PrintJob;
#[doc(inline)]
pub use page::Page;
#[doc(inline)]
pub use photo::Photo;
#[doc(inline)]
pub use placed_photo::PlacedPhoto;
#[doc(inline)]
pub use print_format::CM_PER_INCH;
#[doc(inline)]
pub use print_format::LengthUnit;
#[doc(inline)]
pub use print_format::PX_UNIT_DPI;
#[doc(inline)]
pub use print_format::PrintFormat;
#[doc(inline)]
pub use print_format::StandardFormat;
#[doc(inline)]
pub use settings::BorderStyle;
#[doc(inline)]
pub use settings::FitMode;
#[doc(inline)]
pub use settings::OrientationPolicy;
#[doc(inline)]
pub use settings::PrintSettings;
#[doc(inline)]
pub use sheet::Sheet;
