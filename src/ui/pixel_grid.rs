//! Half-block rasterizer for playfield draw commands.
//!
//! Each terminal cell holds two vertically stacked pixels rendered as `▀`
//! with the upper pixel as foreground and the lower as background, which
//! keeps pixels roughly square.

use crate::render::{DrawCommand, Rect, Rgb};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

pub struct PixelGrid {
    cols: usize,
    /// Pixel rows (terminal rows × 2).
    rows: usize,
    px: Vec<Rgb>,
    /// Playfield units → pixels.
    scale_x: f64,
    scale_y: f64,
}

impl PixelGrid {
    /// Grid covering `cols × term_rows` cells for a playfield of the given size.
    pub fn new(cols: u16, term_rows: u16, field_width: f64, field_height: f64) -> Self {
        let cols = cols as usize;
        let rows = term_rows as usize * 2;
        Self {
            cols,
            rows,
            px: vec![Rgb(0, 0, 0); cols * rows],
            scale_x: if field_width > 0.0 { cols as f64 / field_width } else { 1.0 },
            scale_y: if field_height > 0.0 { rows as f64 / field_height } else { 1.0 },
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.px[y * self.cols + x]
    }

    fn set(&mut self, x: i64, y: i64, color: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.cols && (y as usize) < self.rows {
            self.px[y as usize * self.cols + x as usize] = color;
        }
    }

    fn to_px(&self, x: f64, y: f64) -> (i64, i64) {
        (
            (x * self.scale_x).floor() as i64,
            (y * self.scale_y).floor() as i64,
        )
    }

    /// Pixel span `[start, end)` covered by `[from, to)` in playfield units.
    /// Never empty for a non-empty input range.
    fn span(from: f64, to: f64, scale: f64) -> (i64, i64) {
        let start = (from * scale).round() as i64;
        let end = (to * scale).round() as i64;
        if end <= start && to > from {
            (start, start + 1)
        } else {
            (start, end)
        }
    }

    pub fn paint(&mut self, commands: &[DrawCommand]) {
        for command in commands {
            match *command {
                DrawCommand::Clear { color } => self.px.fill(color),
                DrawCommand::FillRect { rect, color } => self.fill_rect(rect, color),
                DrawCommand::StrokeRect { rect, color } => self.stroke_rect(rect, color),
                DrawCommand::FillEllipse {
                    cx,
                    cy,
                    rx,
                    ry,
                    color,
                } => self.fill_ellipse(cx, cy, rx, ry, color),
                DrawCommand::StrokeEllipse {
                    cx,
                    cy,
                    rx,
                    ry,
                    color,
                } => self.stroke_ellipse(cx, cy, rx, ry, color),
                DrawCommand::Line { from, to, color } => self.line(from, to, color),
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let (x0, x1) = Self::span(rect.x, rect.right(), self.scale_x);
        let (y0, y1) = Self::span(rect.y, rect.bottom(), self.scale_y);
        for y in y0..y1 {
            for x in x0..x1 {
                self.set(x, y, color);
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgb) {
        let (x0, x1) = Self::span(rect.x, rect.right(), self.scale_x);
        let (y0, y1) = Self::span(rect.y, rect.bottom(), self.scale_y);
        if x1 <= x0 || y1 <= y0 {
            return;
        }
        for x in x0..x1 {
            self.set(x, y0, color);
            self.set(x, y1 - 1, color);
        }
        for y in y0..y1 {
            self.set(x0, y, color);
            self.set(x1 - 1, y, color);
        }
    }

    fn fill_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, color: Rgb) {
        let mut painted = false;
        if rx > 0.0 && ry > 0.0 {
            let (_, y0) = self.to_px(0.0, cy - ry);
            let (_, y1) = self.to_px(0.0, cy + ry);
            for py in y0..=y1 {
                // Sample at the pixel row's center
                let fy = (py as f64 + 0.5) / self.scale_y;
                let t = (fy - cy) / ry;
                if t.abs() > 1.0 {
                    continue;
                }
                let half = rx * (1.0 - t * t).sqrt();
                let (x0, x1) = Self::span(cx - half, cx + half, self.scale_x);
                for px in x0..x1 {
                    self.set(px, py, color);
                }
                painted = true;
            }
        }
        if !painted {
            // Smaller than a pixel: mark the pixel under the center
            let (px, py) = self.to_px(cx, cy);
            self.set(px, py, color);
        }
    }

    fn stroke_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, color: Rgb) {
        let circumference_px = std::f64::consts::TAU
            * (rx * self.scale_x).max(ry * self.scale_y).max(1.0);
        let steps = (circumference_px.ceil() as usize * 2).max(16);
        for i in 0..steps {
            let angle = std::f64::consts::TAU * i as f64 / steps as f64;
            let (px, py) = self.to_px(cx + rx * angle.cos(), cy + ry * angle.sin());
            self.set(px, py, color);
        }
    }

    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgb) {
        let (x0, y0) = (from.0 * self.scale_x, from.1 * self.scale_y);
        let (x1, y1) = (to.0 * self.scale_x, to.1 * self.scale_y);
        let steps = (x1 - x0).abs().max((y1 - y0).abs()).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let x = (x0 + (x1 - x0) * t).floor() as i64;
            let y = (y0 + (y1 - y0) * t).floor() as i64;
            // Endpoints on the far edge belong to the last pixel
            self.set(
                x.min(self.cols as i64 - 1),
                y.min(self.rows as i64 - 1),
                color,
            );
        }
    }

    /// One `Line` per terminal row.
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        (0..self.rows / 2)
            .map(|row| {
                let spans: Vec<Span<'static>> = (0..self.cols)
                    .map(|col| {
                        let upper = self.get(col, row * 2);
                        let lower = self.get(col, row * 2 + 1);
                        Span::styled(
                            "▀",
                            Style::default().fg(to_color(upper)).bg(to_color(lower)),
                        )
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}
