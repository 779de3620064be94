//! Paints a frame of the game onto a [`RenderSurface`].

use super::{Rect, RenderSurface, Rgb};
use crate::core::config::GameConfig;
use crate::game::{Bird, Ground, Pipe};

pub const SKY: Rgb = Rgb(112, 197, 206);
pub const PIPE_FILL: Rgb = Rgb(115, 191, 46);
pub const PIPE_EDGE: Rgb = Rgb(85, 140, 34);
pub const GROUND_FILL: Rgb = Rgb(222, 216, 149);
pub const GROUND_STRIPE: Rgb = Rgb(203, 185, 104);
pub const GROUND_EDGE: Rgb = Rgb(115, 76, 30);
pub const BIRD_BODY: Rgb = Rgb(255, 235, 59);
pub const OUTLINE: Rgb = Rgb(0, 0, 0);
pub const WHITE: Rgb = Rgb(255, 255, 255);

/// Paint order: sky, pipes, ground, bird.
pub fn draw_scene<S: RenderSurface + ?Sized>(
    surface: &mut S,
    config: &GameConfig,
    bird: &Bird,
    pipes: &[Pipe],
    ground: &Ground,
) {
    let width = config.playfield.width as f64;
    let height = config.playfield.height as f64;

    surface.clear(SKY);
    for pipe in pipes {
        draw_pipe(surface, pipe, height, config.pipes.cap_height);
    }
    draw_ground(surface, ground, config.playfield.ground_height as f64, width, height);
    draw_bird(surface, bird);
}

fn draw_pipe<S: RenderSurface + ?Sized>(surface: &mut S, pipe: &Pipe, height: f64, cap: f64) {
    let top = Rect::new(pipe.x, 0.0, pipe.width, pipe.top);
    let bottom = Rect::new(pipe.x, height - pipe.bottom, pipe.width, pipe.bottom);
    for rect in [top, bottom] {
        surface.fill_rect(rect, PIPE_FILL);
        surface.stroke_rect(rect, PIPE_EDGE);
    }

    // Caps overhang the pipe body by 2 units on each side
    let top_cap = Rect::new(pipe.x - 2.0, pipe.top - cap, pipe.width + 4.0, cap);
    let bottom_cap = Rect::new(pipe.x - 2.0, height - pipe.bottom, pipe.width + 4.0, cap);
    for rect in [top_cap, bottom_cap] {
        surface.fill_rect(rect, PIPE_FILL);
        surface.stroke_rect(rect, PIPE_EDGE);
    }
}

fn draw_ground<S: RenderSurface + ?Sized>(
    surface: &mut S,
    ground: &Ground,
    ground_height: f64,
    width: f64,
    height: f64,
) {
    let top = height - ground_height;
    surface.fill_rect(Rect::new(0.0, top, width, ground_height), GROUND_FILL);

    let half = ground.stripe_spacing / 2.0;
    let mut x = ground.offset;
    while x < width {
        surface.line((x, top), (x + half, height), GROUND_STRIPE);
        surface.line((x, top), (x - half, height), GROUND_STRIPE);
        x += ground.stripe_spacing;
    }

    surface.line((0.0, top), (width, top), GROUND_EDGE);
}

fn draw_bird<S: RenderSurface + ?Sized>(surface: &mut S, bird: &Bird) {
    let (cx, cy) = bird.center();
    surface.fill_circle(cx, cy, bird.radius, BIRD_BODY);
    surface.stroke_circle(cx, cy, bird.radius, OUTLINE);

    // Eye
    surface.fill_circle(cx + 6.0, cy - 6.0, 4.0, WHITE);
    surface.fill_circle(cx + 8.0, cy - 6.0, 1.0, OUTLINE);

    // Wing
    surface.fill_ellipse(cx - 5.0, cy + 2.0, 8.0, 5.0, WHITE);
    surface.stroke_ellipse(cx - 5.0, cy + 2.0, 8.0, 5.0, OUTLINE);
}
