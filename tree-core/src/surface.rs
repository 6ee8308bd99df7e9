use crate::types::{Color, Point};

/// Visible extent of the drawing surface, in the same coordinate space the
/// generator works in (origin bottom-center, y up).
///
/// Only the out-of-bounds termination test reads this: a branch whose start
/// point satisfies `|x| > half_width` or `|y| > height` stops growing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasBounds {
    pub half_width: f32,
    pub height: f32,
}

impl CanvasBounds {
    pub fn new(half_width: f32, height: f32) -> Self {
        Self { half_width, height }
    }

    /// True if `p` has left the visible area.
    pub fn is_beyond(&self, p: Point) -> bool {
        p.x.abs() > self.half_width || p.y.abs() > self.height
    }
}

/// The two capabilities the generator needs from a host surface.
///
/// The host owns everything else: origin placement, y-axis flip,
/// device-pixel scaling, clearing and resizing. Implementations must accept
/// arbitrary (including degenerate) coordinates without failing.
pub trait DrawSurface {
    /// Renders a straight line with round end caps and returns `to`, so
    /// growth steps can chain off the segment's endpoint.
    fn draw_segment(&mut self, from: Point, to: Point, width: f32, color: Color) -> Point;

    fn draw_filled_circle(&mut self, center: Point, radius: f32, color: Color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_beyond_checks_both_axes() {
        let bounds = CanvasBounds::new(100.0, 200.0);

        assert!(!bounds.is_beyond(Point::new(0.0, 0.0)));
        assert!(!bounds.is_beyond(Point::new(100.0, 200.0)));
        assert!(!bounds.is_beyond(Point::new(-100.0, 150.0)));

        assert!(bounds.is_beyond(Point::new(100.1, 0.0)));
        assert!(bounds.is_beyond(Point::new(-100.1, 0.0)));
        assert!(bounds.is_beyond(Point::new(0.0, 200.1)));
        assert!(bounds.is_beyond(Point::new(0.0, -200.1)));
    }
}
