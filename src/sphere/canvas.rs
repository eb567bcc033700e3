//! Canvas Drawing
//!
//! Paints projected sprites onto a 2D canvas.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::camera::Camera;
use super::scene::{SphereScene, Sprite};

/// World-space diameter of a point
const POINT_SIZE: f64 = 0.1;

const POINT_OPACITY: f64 = 0.8;

/// CSS color for an RGB triple with channels in `0.0..=1.0`
pub fn css_color(color: [f64; 3]) -> String {
    let [r, g, b] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    format!("rgb({}, {}, {})", r, g, b)
}

/// Clear the canvas and draw one frame of `scene`
pub fn draw(ctx: &CanvasRenderingContext2d, scene: &SphereScene, camera: &Camera, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_global_alpha(POINT_OPACITY);
    for sprite in scene.sprites(camera, width, height) {
        draw_sprite(ctx, &sprite);
    }
    ctx.set_global_alpha(1.0);
}

fn draw_sprite(ctx: &CanvasRenderingContext2d, sprite: &Sprite) {
    let radius = (POINT_SIZE * sprite.at.scale / 2.0).max(0.5);
    ctx.set_fill_style_str(&css_color(sprite.color));
    ctx.begin_path();
    if ctx.arc(sprite.at.x, sprite.at.y, radius, 0.0, TAU).is_ok() {
        ctx.fill();
    }
}
