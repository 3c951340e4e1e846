/// Straight-alpha RGBA8 (r,g,b not yet multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color with alpha scaled by `opacity` in [0,1].
    pub fn with_opacity(self, opacity: f64) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        Self {
            a: (f64::from(self.a) * opacity).round() as u8,
            ..self
        }
    }

    /// Premultiplied bytes in pixmap order.
    pub fn to_premul_bytes(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }
}

/// The fixed metric palette. One named entry per dashboard row so draw-time
/// lookups are enumerated, not string-keyed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PaletteColor {
    Pink,
    Purple,
    Blue,
    Yellow,
    Green,
    Red,
}

impl PaletteColor {
    pub fn rgba(self) -> Rgba8 {
        match self {
            PaletteColor::Pink => Rgba8::opaque(0xFF, 0x2D, 0x55),
            PaletteColor::Purple => Rgba8::opaque(0xBF, 0x5A, 0xF2),
            PaletteColor::Blue => Rgba8::opaque(0x0A, 0x84, 0xFF),
            PaletteColor::Yellow => Rgba8::opaque(0xFF, 0xD6, 0x0A),
            PaletteColor::Green => Rgba8::opaque(0x32, 0xD7, 0x4B),
            PaletteColor::Red => Rgba8::opaque(0xFF, 0x45, 0x3A),
        }
    }

    /// Battery classification: green above 50%, yellow down to 20%, red below.
    pub fn for_battery(level: f64) -> Self {
        if level < 0.2 {
            PaletteColor::Red
        } else if level < 0.5 {
            PaletteColor::Yellow
        } else {
            PaletteColor::Green
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premul_is_zero_at_zero_alpha() {
        let c = Rgba8::opaque(200, 100, 50).with_opacity(0.0);
        assert_eq!(c.to_premul_bytes(), [0, 0, 0, 0]);
    }

    #[test]
    fn premul_is_identity_at_full_alpha() {
        let c = Rgba8::opaque(200, 100, 50);
        assert_eq!(c.to_premul_bytes(), [200, 100, 50, 255]);
    }

    #[test]
    fn with_opacity_clamps() {
        assert_eq!(Rgba8::opaque(1, 2, 3).with_opacity(7.0).a, 255);
        assert_eq!(Rgba8::opaque(1, 2, 3).with_opacity(-1.0).a, 0);
    }

    #[test]
    fn battery_thresholds() {
        assert_eq!(PaletteColor::for_battery(0.05), PaletteColor::Red);
        assert_eq!(PaletteColor::for_battery(0.19), PaletteColor::Red);
        assert_eq!(PaletteColor::for_battery(0.2), PaletteColor::Yellow);
        assert_eq!(PaletteColor::for_battery(0.49), PaletteColor::Yellow);
        assert_eq!(PaletteColor::for_battery(0.5), PaletteColor::Green);
        assert_eq!(PaletteColor::for_battery(1.0), PaletteColor::Green);
    }
}
