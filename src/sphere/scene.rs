//! Sphere Scene
//!
//! Point cloud plus its rotation state. Advanced once per animation frame.

use super::camera::{rotate, Camera, Projected};
use super::geometry::{fibonacci_sphere, Point};

/// Constant spin per frame, radians
pub const AUTO_ROTATE_STEP: f64 = 0.001;

/// Fraction of the drag velocity lost per frame
pub const DAMPING_FACTOR: f64 = 0.05;

/// Radians per dragged pixel
const DRAG_SENSITIVITY: f64 = 0.005;

/// Pitch limit so the cloud never flips over
const MAX_PITCH: f64 = std::f64::consts::FRAC_PI_2;

/// A projected point ready to draw
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub at: Projected,
    pub color: [f64; 3],
}

#[derive(Clone, Debug, Default)]
pub struct SphereScene {
    radius: f64,
    points: Vec<Point>,
    yaw: f64,
    pitch: f64,
    velocity: (f64, f64),
}

impl SphereScene {
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            ..Default::default()
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    /// Throw the old geometry away and place `count` fresh points
    pub fn rebuild(&mut self, count: usize, channel: impl FnMut() -> f64) {
        self.points = fibonacci_sphere(count, self.radius, channel);
    }

    /// Advance one frame: constant spin plus damped drag velocity
    pub fn tick(&mut self) {
        self.yaw += AUTO_ROTATE_STEP + self.velocity.0;
        self.pitch = (self.pitch + self.velocity.1).clamp(-MAX_PITCH, MAX_PITCH);
        self.velocity.0 *= 1.0 - DAMPING_FACTOR;
        self.velocity.1 *= 1.0 - DAMPING_FACTOR;
    }

    /// Feed a pointer drag of `dx`, `dy` pixels
    pub fn drag(&mut self, dx: f64, dy: f64) {
        self.velocity.0 += dx * DRAG_SENSITIVITY * DAMPING_FACTOR;
        self.velocity.1 += dy * DRAG_SENSITIVITY * DAMPING_FACTOR;
    }

    /// Project every visible point, farthest first
    pub fn sprites(&self, camera: &Camera, width: f64, height: f64) -> Vec<Sprite> {
        let mut sprites: Vec<Sprite> = self
            .points
            .iter()
            .filter_map(|p| {
                let at = camera.project(rotate(p.position(), self.yaw, self.pitch), width, height)?;
                Some(Sprite { at, color: p.color })
            })
            .collect();
        sprites.sort_by(|a, b| b.at.depth.total_cmp(&a.at.depth));
        sprites
    }
}
