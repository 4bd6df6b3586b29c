use glam::Vec3;

use crate::camera::{Camera, PerspectiveCamera};
use crate::math::hex_to_rgb;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: u32,
    pub intensity: f32,
    pub position: Vec3,
}

/// Textured sphere surrounding the scene, seen from the inside
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyDome {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    pub color: u32,
    pub inside_facing: bool,
}

/// Exponential squared fog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fog {
    pub color: u32,
    pub density: f32,
}

impl Fog {
    /// Fraction of the original color left at `distance`
    pub fn visibility(&self, distance: f32) -> f32 {
        let d = self.density * distance;
        (-(d * d)).exp()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSetup {
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub up: Vec3,
    pub look_at: Vec3,
}

/// Everything the demo scenes configure besides geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneSettings {
    pub clear_color: u32,
    pub light: DirectionalLight,
    pub sky: SkyDome,
    pub fog: Fog,
    pub camera: CameraSetup,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            clear_color: 0xFFFFFF,
            light: DirectionalLight {
                color: 0xFFFFFF,
                intensity: 1.0,
                position: Vec3::new(0.0, 1000.0, 0.0),
            },
            sky: SkyDome {
                radius: 4000.0,
                width_segments: 20,
                height_segments: 20,
                color: 0xFFFFFF,
                inside_facing: true,
            },
            fog: Fog {
                color: 0xFFFFFF,
                density: 0.0002,
            },
            camera: CameraSetup {
                fov_y: 50.0,
                near: 1.0,
                far: 10_000.0,
                position: Vec3::new(-1000.0, 100.0, 0.0),
                up: Vec3::Y,
                look_at: Vec3::new(0.0, 100.0, 0.0),
            },
        }
    }
}

impl SceneSettings {
    pub fn clear_rgb(&self) -> [f32; 3] {
        hex_to_rgb(self.clear_color)
    }

    /// Camera placed and aimed as the scene describes
    pub fn camera(&self, aspect: f32) -> PerspectiveCamera {
        let setup = self.camera;
        let mut camera = PerspectiveCamera::new(setup.fov_y, aspect, setup.near, setup.far)
            .with_position(setup.position);
        camera.up = setup.up;
        camera.look_at(setup.look_at);
        camera
    }
}

/// Single white triangle with an explicit normal, placed at the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceTriangle {
    pub vertices: [Vec3; 3],
    pub normal: Vec3,
    pub color: u32,
}

pub fn reference_triangle() -> ReferenceTriangle {
    ReferenceTriangle {
        vertices: [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 100.0),
            Vec3::new(0.0, 100.0, 0.0),
        ],
        normal: Vec3::Z,
        color: 0xFFFFFF,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fog_visibility() {
        let fog = SceneSettings::default().fog;
        assert_eq!(fog.visibility(0.0), 1.0);
        // At the sky radius most of the color survives
        let at_sky = fog.visibility(4000.0);
        assert!(at_sky > 0.5 && at_sky < 0.6, "visibility {at_sky}");
    }

    #[test]
    fn test_camera_faces_look_at() {
        let settings = SceneSettings::default();
        let camera = settings.camera(4.0 / 3.0);
        assert_eq!(camera.position, Vec3::new(-1000.0, 100.0, 0.0));
        assert!((camera.forward() - Vec3::X).length() < 1e-5);
        assert_eq!(camera.fov_y, 50.0);
    }

    #[test]
    fn test_clear_color_white() {
        assert_eq!(SceneSettings::default().clear_rgb(), [1.0, 1.0, 1.0]);
    }
}
