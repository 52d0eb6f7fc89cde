#![doc = document_features::document_features!()]
//! Core library for laying photo prints out on fixed-size sheets: a shelf
//! packing layout engine, paired with a slot rasterizer computing the
//! crop/fit geometry of every placed copy.
//!
//! This library owns no pixels. It computes where slots sit on pages and
//! which region of each source image lands where inside its slot; decoding
//! and compositing are left to the caller.

/// Entities to model print jobs: photos, formats, settings, sheets and pages
pub mod entities;

/// Geometric primitives
pub mod geometry;

/// Importing print jobs into and exporting solutions out of this library
pub mod io;

/// The shelf packing layout engine
pub mod pack;

/// The slot rasterizer: crop, fit and rotation geometry per placed copy
pub mod raster;

/// Helper functions which do not belong to any specific module
pub mod util;
