//! A render surface that records commands for later playback.

use super::{Rect, RenderSurface, Rgb};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { color: Rgb },
    FillRect { rect: Rect, color: Rgb },
    StrokeRect { rect: Rect, color: Rgb },
    FillEllipse { cx: f64, cy: f64, rx: f64, ry: f64, color: Rgb },
    StrokeEllipse { cx: f64, cy: f64, rx: f64, ry: f64, color: Rgb },
    Line { from: (f64, f64), to: (f64, f64), color: Rgb },
}

/// Commands of one frame, in paint order.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop every recorded command.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Filled rectangles painted in `color`.
    pub fn filled_rects(&self, color: Rgb) -> impl Iterator<Item = &Rect> {
        self.commands.iter().filter_map(move |cmd| match cmd {
            DrawCommand::FillRect { rect, color: c } if *c == color => Some(rect),
            _ => None,
        })
    }
}

impl RenderSurface for DisplayList {
    fn clear(&mut self, color: Rgb) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { color });
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgb) {
        self.commands.push(DrawCommand::StrokeRect { rect, color });
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Rgb) {
        self.fill_ellipse(cx, cy, radius, radius, color);
    }

    fn stroke_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Rgb) {
        self.stroke_ellipse(cx, cy, radius, radius, color);
    }

    fn fill_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, color: Rgb) {
        self.commands.push(DrawCommand::FillEllipse {
            cx,
            cy,
            rx,
            ry,
            color,
        });
    }

    fn stroke_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, color: Rgb) {
        self.commands.push(DrawCommand::StrokeEllipse {
            cx,
            cy,
            rx,
            ry,
            color,
        });
    }

    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgb) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }
}
