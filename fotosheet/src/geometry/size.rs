/// Width and height pair in centimeters.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

impl Size {
    pub const fn new(w: f32, h: f32) -> Self {
        Size { w, h }
    }

    /// Width over height. Degenerate sizes (zero or negative height) read as square.
    pub fn aspect(&self) -> f32 {
        if self.h <= 0.0 { 1.0 } else { self.w / self.h }
    }

    /// Same size with the axes exchanged.
    pub const fn swapped(self) -> Self {
        Size { w: self.h, h: self.w }
    }

    /// Strictly wider than tall. Squares are not landscape.
    pub fn is_landscape(&self) -> bool {
        self.w > self.h
    }
}
