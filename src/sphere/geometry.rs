//! Point Cloud Geometry
//!
//! Golden-spiral (Fibonacci sphere) placement of points on a sphere surface.

use std::f64::consts::PI;

/// A point on the sphere with its RGB color (channels in `0.0..=1.0`)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub color: [f64; 3],
}

impl Point {
    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// Place `count` points on a sphere of `radius`.
///
/// Point `i` gets polar angle `acos(-1 + 2i/n)` and azimuth `polar * sqrt(n * PI)`.
/// `channel` is called three times per point for its color.
pub fn fibonacci_sphere(count: usize, radius: f64, mut channel: impl FnMut() -> f64) -> Vec<Point> {
    let n = count as f64;
    (0..count)
        .map(|i| {
            let phi = (-1.0 + (2.0 * i as f64) / n).acos();
            let theta = (n * PI).sqrt() * phi;
            Point {
                x: radius * phi.sin() * theta.cos(),
                y: radius * phi.sin() * theta.sin(),
                z: radius * phi.cos(),
                color: [channel(), channel(), channel()],
            }
        })
        .collect()
}

/// Random channel in the upper half of the range, unseeded
pub fn random_channel() -> f64 {
    js_sys::Math::random() * 0.5 + 0.5
}
