//! Core types shared by the page surface and the renderers

/// An sRGB colour with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if !digits.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            6 => Some(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let expand = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
                Some(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => None,
        }
    }

    /// Blend towards `other`; `t = 0` keeps this colour, `t = 1` gives `other`
    pub fn mix(self, other: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color::rgb(lerp(self.r, other.r), lerp(self.g, other.g), lerp(self.b, other.b))
    }

    /// Channels scaled to the 0..=1 range PDF operators expect
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

/// A rectangle in page millimetres, origin top-left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Shrink by `pad` on every side
    pub fn inset(&self, pad: f64) -> BoundingBox {
        BoundingBox::new(
            self.x + pad,
            self.y + pad,
            (self.width - 2.0 * pad).max(0.0),
            (self.height - 2.0 * pad).max(0.0),
        )
    }

    /// Fit a `w`×`h` box inside this one, preserving aspect ratio, centered
    pub fn fit(&self, w: f64, h: f64) -> BoundingBox {
        if w <= 0.0 || h <= 0.0 {
            return BoundingBox::new(self.center_x(), self.y, 0.0, 0.0);
        }
        let scale = (self.width / w).min(self.height / h);
        let (fw, fh) = (w * scale, h * scale);
        BoundingBox::new(
            self.x + (self.width - fw) / 2.0,
            self.y + (self.height - fh) / 2.0,
            fw,
            fh,
        )
    }
}

/// Horizontal anchoring of a text run relative to its x coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// The four standard Helvetica faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFace {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl FontFace {
    pub const ALL: [FontFace; 4] = [
        FontFace::Regular,
        FontFace::Bold,
        FontFace::Italic,
        FontFace::BoldItalic,
    ];

    /// PostScript name of the base-14 font
    pub fn base_font(self) -> &'static str {
        match self {
            Self::Regular => "Helvetica",
            Self::Bold => "Helvetica-Bold",
            Self::Italic => "Helvetica-Oblique",
            Self::BoldItalic => "Helvetica-BoldOblique",
        }
    }

    pub fn is_bold(self) -> bool {
        matches!(self, Self::Bold | Self::BoldItalic)
    }
}

/// Font, size and colour for a text run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub face: FontFace,
    /// Size in points
    pub size: f64,
    pub color: Color,
}

impl TextStyle {
    pub fn new(face: FontFace, size: f64, color: Color) -> Self {
        Self { face, size, color }
    }

    pub fn regular(size: f64, color: Color) -> Self {
        Self::new(FontFace::Regular, size, color)
    }

    pub fn bold(size: f64, color: Color) -> Self {
        Self::new(FontFace::Bold, size, color)
    }

    pub fn italic(size: f64, color: Color) -> Self {
        Self::new(FontFace::Italic, size, color)
    }

    /// Distance between consecutive baselines, in millimetres
    pub fn line_height(&self) -> f64 {
        self.size * super::metrics::PT_TO_MM * 1.35
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#2563eb"), Some(Color::rgb(0x25, 0x63, 0xeb)));
        assert_eq!(Color::from_hex("#fff"), Some(Color::WHITE));
        assert_eq!(Color::from_hex("2563eb"), None);
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#zzzzzz"), None);
    }

    #[test]
    fn test_mix() {
        let c = Color::BLACK.mix(Color::WHITE, 0.5);
        assert_eq!(c, Color::rgb(128, 128, 128));
        assert_eq!(Color::BLACK.mix(Color::WHITE, 2.0), Color::WHITE);
    }

    #[test]
    fn test_bounding_box_edges() {
        let bbox = BoundingBox::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(bbox.right(), 110.0);
        assert_eq!(bbox.bottom(), 70.0);
        assert_eq!(bbox.center_x(), 60.0);
    }

    #[test]
    fn test_inset() {
        let bbox = BoundingBox::new(0.0, 0.0, 20.0, 10.0).inset(2.0);
        assert_eq!(bbox, BoundingBox::new(2.0, 2.0, 16.0, 6.0));
    }

    #[test]
    fn test_fit_preserves_aspect_ratio() {
        let slot = BoundingBox::new(0.0, 0.0, 40.0, 40.0);
        let wide = slot.fit(200.0, 100.0);
        assert_eq!(wide.width, 40.0);
        assert_eq!(wide.height, 20.0);
        assert_eq!(wide.y, 10.0);

        let tall = slot.fit(50.0, 100.0);
        assert_eq!(tall.width, 20.0);
        assert_eq!(tall.height, 40.0);
        assert_eq!(tall.x, 10.0);
    }
}
