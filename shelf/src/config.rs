use serde::{Deserialize, Serialize};

use fotosheet::io::svg::SvgDrawOptions;

/// Configuration for the shelf pipeline
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct ShelfConfig {
    /// Resolution of rendered PNG output, dots per inch. 300 matches the
    /// resolution the pixel length unit of custom print formats is defined at
    pub render_dpi: f32,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            render_dpi: 300.0,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
