mod components;
mod orbit;

pub use components::OrbitCamera;
pub use orbit::orbit_camera_system;
