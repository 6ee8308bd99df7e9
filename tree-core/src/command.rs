use crate::surface::DrawSurface;
use crate::types::{Color, Point};

/// One recorded draw call.
///
/// A generated tree is nothing more than an ordered list of these; no tree
/// structure is retained. Hosts may replay the list immediately, batched, or
/// paced over time, as long as the order is preserved (later draws may
/// visually overlap earlier ones).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Segment {
        from: Point,
        to: Point,
        width: f32,
        color: Color,
    },
    FilledCircle {
        center: Point,
        radius: f32,
        color: Color,
    },
}

/// A [`DrawSurface`] that records commands instead of rendering them.
#[derive(Debug, Default)]
pub struct CommandRecorder {
    pub commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl DrawSurface for CommandRecorder {
    fn draw_segment(&mut self, from: Point, to: Point, width: f32, color: Color) -> Point {
        self.commands.push(DrawCommand::Segment {
            from,
            to,
            width,
            color,
        });
        to
    }

    fn draw_filled_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FilledCircle {
            center,
            radius,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_keeps_call_order_and_returns_endpoint() {
        let mut rec = CommandRecorder::new();
        let color = Color::rgb(1, 2, 3);

        let end = rec.draw_segment(Point::new(0.0, 0.0), Point::new(0.0, 10.0), 2.0, color);
        assert_eq!(end, Point::new(0.0, 10.0));

        rec.draw_filled_circle(end, 5.0, color);

        let commands = rec.into_commands();
        assert_eq!(commands.len(), 2);
        assert!(matches!(commands[0], DrawCommand::Segment { .. }));
        assert!(matches!(commands[1], DrawCommand::FilledCircle { .. }));
    }
}
