//! Layout helpers

use egui::Vec2;

/// Keypad image width as a share of the screen width
pub const POSITION_WIDTH: f32 = 0.4;
/// Technique picture width as a share of the screen width
pub const PICTURE_WIDTH: f32 = 0.5;
/// Hourglass width as a share of the screen width
pub const HOURGLASS_WIDTH: f32 = 0.1;
/// Medal width on the summary screen
pub const MEDAL_WIDTH: f32 = 0.3;

/// Scale an image to a share of the surface width, keeping its aspect ratio
pub fn scale_to_width(image_size: Vec2, fraction: f32, surface_width: f32) -> Vec2 {
    debug_assert!((0.0..=1.0).contains(&fraction));
    if image_size.x <= 0.0 {
        return Vec2::ZERO;
    }
    let width = (surface_width * fraction).floor();
    let height = (image_size.y * (width / image_size.x)).floor();
    Vec2::new(width, height)
}
