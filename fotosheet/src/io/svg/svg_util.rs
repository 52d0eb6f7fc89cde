use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use svg::node::element::Rectangle;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgPageTheme,
    ///Draw a dashed guide at the margin boundary
    #[serde(default)]
    pub margin_guide: bool,
    ///Draw the usable area of each slot (visualizes border and caption insets)
    #[serde(default)]
    pub usable_area: bool,
    ///Print a line of page statistics above the sheet
    #[serde(default)]
    pub label: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgPageTheme::default(),
            margin_guide: true,
            usable_area: true,
            label: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgPageTheme {
    pub stroke_width_multiplier: f32,
    pub sheet_fill: Color,
    pub slot_fill: Color,
    /// Fill for slots whose axes were swapped by the orientation policy
    pub rotated_slot_fill: Color,
}

impl Default for SvgPageTheme {
    fn default() -> Self {
        SvgPageTheme::PROOF
    }
}

impl SvgPageTheme {
    pub const PROOF: SvgPageTheme = SvgPageTheme {
        stroke_width_multiplier: 2.0,
        sheet_fill: Color(0xFF, 0xFF, 0xFF),
        slot_fill: Color(0xBF, 0xD7, 0xEA),
        rotated_slot_fill: Color(0xFF, 0xC8, 0x79),
    };

    pub const GRAY: SvgPageTheme = SvgPageTheme {
        stroke_width_multiplier: 2.5,
        sheet_fill: Color(0xD3, 0xD3, 0xD3),
        slot_fill: Color(0x7A, 0x7A, 0x7A),
        rotated_slot_fill: Color(0x63, 0x63, 0x63),
    };
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(u8, u8, u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl From<String> for Color {
    fn from(mut s: String) -> Self {
        if s.starts_with('#') {
            s.remove(0);
        }
        let r = u8::from_str_radix(&s[0..2], 16).unwrap();
        let g = u8::from_str_radix(&s[2..4], 16).unwrap();
        let b = u8::from_str_radix(&s[4..6], 16).unwrap();
        Color(r, g, b)
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Color::from(s.to_owned())
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&*format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Color::from(s))
    }
}

pub fn rect(x: f32, y: f32, w: f32, h: f32, params: &[(&str, &str)]) -> Rectangle {
    let mut rect = Rectangle::new()
        .set("x", x)
        .set("y", y)
        .set("width", w)
        .set("height", h);
    for param in params {
        rect = rect.set(param.0, param.1)
    }
    rect
}
