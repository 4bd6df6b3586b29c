//! Static scene description shared by the demos: floor, sky, fog, light and
//! the initial camera. Geometry upload and drawing belong to the renderer.

mod floor;
mod settings;

pub use floor::{default_floor, floor_tiles, FloorTile, DARK_TILE, LIGHT_TILE};
pub use settings::{
    reference_triangle, CameraSetup, DirectionalLight, Fog, ReferenceTriangle, SceneSettings,
    SkyDome,
};
