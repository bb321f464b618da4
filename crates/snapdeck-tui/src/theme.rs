use ratatui::style::Color;

/// Runtime palette for the deck view.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub bg: Color,
    pub panel: Color,

    // Foregrounds
    pub fg: Color,
    pub dim: Color,

    // Accents
    pub accent: Color,
    pub heading: Color,
    pub dot: Color,
    pub glow: Color,
    pub card: Color,
    pub card_highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Midnight palette
        Self {
            bg: Color::Rgb(0x10, 0x12, 0x1a),
            panel: Color::Rgb(0x1a, 0x1d, 0x29),
            fg: Color::Rgb(0xd6, 0xd9, 0xe0),
            dim: Color::Rgb(0x6c, 0x72, 0x86),
            accent: Color::Rgb(0x7f, 0xb4, 0xff),
            heading: Color::Rgb(0xe8, 0xea, 0xf2),
            dot: Color::Rgb(0x2a, 0x2f, 0x40),
            glow: Color::Rgb(0x3d, 0x5a, 0xa0),
            card: Color::Rgb(0x20, 0x24, 0x33),
            card_highlight: Color::Rgb(0x32, 0x3a, 0x52),
        }
    }
}

/// Blend two RGB colors; `t = 0` gives `a`, `t = 1` gives `b`.
/// Non-RGB colors pass through unchanged.
pub fn blend(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (a, b) {
        (Color::Rgb(ar, ag, ab), Color::Rgb(br, bg, bb)) => Color::Rgb(
            mix(ar, br, t),
            mix(ag, bg, t),
            mix(ab, bb, t),
        ),
        _ => {
            if t < 0.5 {
                a
            } else {
                b
            }
        }
    }
}

fn mix(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}
