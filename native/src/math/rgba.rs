use super::hex::{format_hex, format_hexa};

/// Canonical RGBA color. Channels are stored in unit scale (0.0-1.0) and only
/// converted to 0-255 when serialized or fed into the luminance formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Rgba {
    /// Neutral gray `rgba(128, 128, 128, 1)`, the default mean for reversion.
    pub const MEAN: Rgba = Rgba {
        r: 128.0 / 255.0,
        g: 128.0 / 255.0,
        b: 128.0 / 255.0,
        a: 1.0,
    };

    pub const BLACK: Rgba = Rgba { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Rgba = Rgba { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    /// Build from unit-scale channels, clamping each into range.
    /// NaN channels collapse to 0.
    pub fn from_unit(r: f64, g: f64, b: f64, a: f64) -> Self {
        Rgba {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
            a: clamp_unit(a),
        }
    }

    /// Build from 0-255 channels (fractional values allowed) and a unit alpha.
    pub fn from_rgb8(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::from_unit(r / 255.0, g / 255.0, b / 255.0, a)
    }

    pub fn red(&self) -> f64 {
        self.r
    }

    pub fn green(&self) -> f64 {
        self.g
    }

    pub fn blue(&self) -> f64 {
        self.b
    }

    pub fn alpha(&self) -> f64 {
        self.a
    }

    /// Unit channels in `[r, g, b, a]` order.
    pub fn unit_array(&self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Unrounded channels on the 0-255 scale.
    pub fn scaled(&self) -> [f64; 3] {
        [self.r * 255.0, self.g * 255.0, self.b * 255.0]
    }

    /// Channels rounded to bytes, as they would be rendered.
    pub fn to_rgb8(&self) -> [u8; 3] {
        [to_byte(self.r), to_byte(self.g), to_byte(self.b)]
    }

    /// Single-channel gray projection (0.3 R + 0.59 G + 0.11 B), unit scale.
    pub fn grayscale(&self) -> f64 {
        self.r * 0.3 + self.g * 0.59 + self.b * 0.11
    }

    pub fn with_alpha(&self, alpha: f64) -> Self {
        Rgba {
            a: clamp_unit(alpha),
            ..*self
        }
    }

    pub fn is_opaque(&self) -> bool {
        to_byte(self.a) == 255
    }

    /// `#rrggbb`, alpha ignored.
    pub fn hex(&self) -> String {
        format_hex(self.to_rgb8())
    }

    /// `#rrggbbaa` when translucent, `#rrggbb` otherwise.
    pub fn hexa(&self) -> String {
        if self.is_opaque() {
            self.hex()
        } else {
            format_hexa(self.to_rgb8(), to_byte(self.a))
        }
    }

    /// CSS functional notation: `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    pub fn rgb_string(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        if self.is_opaque() {
            format!("rgb({}, {}, {})", r, g, b)
        } else {
            let alpha = (self.a * 100.0).round() / 100.0;
            format!("rgba({}, {}, {}, {})", r, g, b, alpha)
        }
    }
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

fn to_byte(unit: f64) -> u8 {
    (unit * 255.0).round() as u8
}
