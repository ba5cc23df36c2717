//! Mapping from simulation space (meters) to screen space (pixels).
//!
//! The physics never sees any of this; the viewer owns the scale.

use anyhow::{bail, Context, Result};
use bevy::color::palettes::css;
use bevy::color::{Color, Srgba};
use bevy::math::Vec2;

use crate::simulation::states::NVec2;

/// Gap between a body's circle and its label [px]
pub const LABEL_MARGIN: f64 = 5.0;

/// Window clear color
pub const BACKGROUND: Color = Color::WHITE;

/// Drawn for bodies whose color string does not parse; must contrast with
/// [`BACKGROUND`] or the trace disappears
pub const FALLBACK_COLOR: Color = Color::BLACK;

/// Pixels per meter so that `extent` meters reach the nearest window edge
/// from the center.
pub fn display_scale(width: f64, height: f64, extent: f64) -> f64 {
    width.min(height) / 2.0 / extent
}

pub fn to_screen(position: NVec2, scale: f64) -> Vec2 {
    Vec2::new((position.x * scale) as f32, (position.y * scale) as f32)
}

/// Offset of a label from the body center: the point on the circle at 45
/// degrees, pushed out by [`LABEL_MARGIN`] on both axes.
pub fn label_offset(radius: f64) -> f64 {
    std::f64::consts::FRAC_1_SQRT_2 * radius + LABEL_MARGIN
}

/// Parse `#rrggbb` / `#rgb` or one of the common CSS color names.
pub fn parse_color(text: &str) -> Result<Color> {
    let text = text.trim();
    if text.starts_with('#') {
        let srgba = Srgba::hex(text).with_context(|| format!("bad hex color `{text}`"))?;
        return Ok(Color::Srgba(srgba));
    }

    let named = match text.to_ascii_lowercase().as_str() {
        "black" => css::BLACK,
        "white" => css::WHITE,
        "gray" | "grey" => css::GRAY,
        "silver" => css::SILVER,
        "red" => css::RED,
        "orange" => css::ORANGE,
        "yellow" => css::YELLOW,
        "gold" => css::GOLD,
        "green" => css::GREEN,
        "lime" => css::LIME,
        "blue" => css::BLUE,
        "dodgerblue" => css::DODGER_BLUE,
        "skyblue" => css::SKY_BLUE,
        "navy" => css::NAVY,
        "purple" => css::PURPLE,
        "brown" => css::BROWN,
        "tan" => css::TAN,
        "orangered" => css::ORANGE_RED,
        _ => bail!("unknown color `{text}`"),
    };
    Ok(Color::Srgba(named))
}
