//! Perspective Camera
//!
//! Fixed camera on the +z axis looking at the origin.

/// Screen-space projection of a point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    /// Distance in front of the camera, larger is farther
    pub depth: f64,
    /// Pixels per world unit at this depth
    pub scale: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Vertical field of view in degrees
    pub fov: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    /// Camera position on the z axis
    pub distance: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov: 75.0,
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
            distance: 5.0,
        }
    }
}

impl Camera {
    /// Recompute the aspect ratio for a new viewport; zero-height viewports are ignored
    pub fn resize(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Project a world-space point onto a `width` x `height` viewport.
    /// Points outside the near/far range are culled.
    pub fn project(&self, p: [f64; 3], width: f64, height: f64) -> Option<Projected> {
        let depth = self.distance - p[2];
        if depth < self.near || depth > self.far {
            return None;
        }
        let focal = 1.0 / (self.fov.to_radians() / 2.0).tan();
        let ndc_x = focal / self.aspect * p[0] / depth;
        let ndc_y = focal * p[1] / depth;
        Some(Projected {
            x: (ndc_x + 1.0) / 2.0 * width,
            y: (1.0 - ndc_y) / 2.0 * height,
            depth,
            scale: focal / depth * height / 2.0,
        })
    }
}

/// Rotate about the y axis, then the x axis
pub fn rotate(p: [f64; 3], yaw: f64, pitch: f64) -> [f64; 3] {
    let (sy, cy) = yaw.sin_cos();
    let x = p[0] * cy + p[2] * sy;
    let z = -p[0] * sy + p[2] * cy;

    let (sx, cx) = pitch.sin_cos();
    let y = p[1] * cx - z * sx;
    let z = p[1] * sx + z * cx;
    [x, y, z]
}
