//! Tech Sphere
//!
//! Decorative rotating point cloud, one point per technology.

mod camera;
mod canvas;
mod geometry;
mod render_loop;
mod scene;

pub use camera::Camera;
pub use canvas::draw;
pub use geometry::random_channel;
pub use render_loop::RenderLoop;
pub use scene::SphereScene;
