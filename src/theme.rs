use crate::color::Rgba8;

/// Palette and opacity configuration for one render pass. Resolved once from
/// the dark/light flag and immutable for the pass's duration.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Theme {
    pub background_top: Rgba8,
    pub background_bottom: Rgba8,
    /// Alpha applied to a ring's track (full background circle), 0..1.
    pub track_opacity: f64,
    pub text_primary: Rgba8,
    pub text_secondary: Rgba8,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background_top: Rgba8::opaque(0x1C, 0x1C, 0x1E),
            background_bottom: Rgba8::opaque(0x00, 0x00, 0x00),
            track_opacity: 0.15,
            text_primary: Rgba8::opaque(0xFF, 0xFF, 0xFF),
            text_secondary: Rgba8::opaque(0x8E, 0x8E, 0x93),
        }
    }

    pub fn light() -> Self {
        Self {
            background_top: Rgba8::opaque(0xFF, 0xFF, 0xFF),
            background_bottom: Rgba8::opaque(0xF2, 0xF2, 0xF7),
            track_opacity: 0.08,
            text_primary: Rgba8::opaque(0x1C, 0x1C, 0x1E),
            text_secondary: Rgba8::opaque(0x6C, 0x6C, 0x70),
        }
    }

    pub fn for_appearance(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }
}
