use crate::types::{Color, Point};

/// Parameters describing one tree.
///
/// This is read-only input to the generator; the host form that produces it
/// is responsible for any range checking. Out-of-range ratios are accepted
/// and simply yield degenerate geometry, absorbed by the termination tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeConfig {
    /// Where the trunk starts, in surface coordinates.
    pub root_position: Point,
    /// Height of the trunk. Also fixes the absolute cut-off below which a
    /// branch stops growing (`main_branch_height / 8`).
    pub main_branch_height: f32,
    /// Stroke width of the trunk.
    pub main_branch_thickness: f32,
    /// Angle between a branch and each of its children, in radians.
    pub angle_delta: f32,
    /// Fraction of length lost from parent to child, in `[0, 1]`.
    pub branch_length_decrease_ratio: f32,
    /// Fraction of thickness lost from parent to child, in `[0, 1]`.
    pub branch_thickness_decrease_ratio: f32,
    /// Draw flowers at branch tips.
    pub has_flower: bool,
    pub flower_color: Color,
    pub branch_color: Color,
    /// Apply Gaussian jitter to branch angles and flower sizes.
    pub random: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            root_position: Point::new(0.0, 30.0),
            main_branch_height: 300.0,
            main_branch_thickness: 100.0,
            angle_delta: std::f32::consts::FRAC_PI_4,
            branch_length_decrease_ratio: 0.1,
            branch_thickness_decrease_ratio: 0.3,
            has_flower: true,
            flower_color: Color::rgb(0x27, 0xb0, 0x27),
            branch_color: Color::rgb(0x1e, 0x22, 0x02),
            random: true,
        }
    }
}
