use glam::Vec2;

/// Position on the drawing surface.
///
/// Coordinates are Cartesian with the origin at the bottom-center of the
/// surface and y increasing upward. The host applies whatever transform is
/// needed to get there; the core never sees raw screen coordinates.
pub type Point = Vec2;

/// Plain sRGB color.
///
/// The core stays independent of any GUI color type; hosts convert to
/// whatever their surface wants (e.g. `egui::Color32`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
