pub mod camera;
pub mod cli;
pub mod controller;
pub mod core;
pub mod math;
pub mod scene;
pub mod terrain;

pub use camera::{Camera, PerspectiveCamera};
pub use controller::{ControllerConfig, ControllerError, FirstPersonController};
pub use terrain::{generate, Terrain, TerrainError};
