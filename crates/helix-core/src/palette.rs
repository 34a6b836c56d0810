//! Fixed palette and color types used by the draw-command model.

/// Opaque color as stored in the palette tables.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Compose with an alpha to produce a drawable color.
    pub const fn with_alpha(self, alpha: f32) -> Color {
        Color { rgb: self, alpha }
    }
}

/// Color plus alpha, as carried by draw commands.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Color {
    /// CSS `rgba(...)` form, as Canvas 2D fill/stroke styles expect.
    pub fn to_css(self) -> String {
        let a = self.alpha.clamp(0.0, 1.0);
        format!("rgba({},{},{},{})", self.rgb.r, self.rgb.g, self.rgb.b, a)
    }
}

/// Deep, rich base-pair palette; rung color is `(rung + color_shift) % len`.
pub const PALETTE: [Rgb; 8] = [
    Rgb::new(0x0B, 0x3D, 0x2E), // deep forest green
    Rgb::new(0x0F, 0x6B, 0x5B), // deep teal
    Rgb::new(0x0B, 0x3C, 0x8A), // deep blue
    Rgb::new(0x3B, 0x1D, 0x6B), // deep purple
    Rgb::new(0x7A, 0x1E, 0x2C), // deep red
    Rgb::new(0x8A, 0x5A, 0x00), // deep amber
    Rgb::new(0x2F, 0x6F, 0x3E), // rich green
    Rgb::new(0x12, 0x45, 0x59), // deep slate-teal
];

/// Page background, also the trail wash color.
pub const BACKGROUND: Rgb = Rgb::new(0xD9, 0xD9, 0xD9);

/// Backbone stroke between consecutive strand points.
pub const BACKBONE: Rgb = Rgb::new(0x1F, 0x2A, 0x26);

/// Dark nodes at the strand points.
pub const NODE: Rgb = Rgb::new(0x23, 0x30, 0x2C);

/// Capsule connector between the two strands of a rung.
pub const PAIR: Rgb = Rgb::new(0x2A, 0x2A, 0x2A);

/// Bead highlight dot.
pub const HIGHLIGHT: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
