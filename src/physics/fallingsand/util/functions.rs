use bevy::render::color::Color;

/// Build a color from hue (degrees), saturation and value
/// bevy only speaks hsl, so convert first
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Color {
    let lightness = value * (1.0 - saturation / 2.0);
    let hsl_saturation = if lightness <= 0.0 || lightness >= 1.0 {
        0.0
    } else {
        (value - lightness) / lightness.min(1.0 - lightness)
    };
    Color::hsl(hue.rem_euclid(360.0), hsl_saturation, lightness)
}
