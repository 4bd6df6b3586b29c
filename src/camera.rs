use glam::{Mat3, Mat4, Quat, Vec3};

/// Camera contract the first-person controller drives.
///
/// Local axes follow the usual right-handed convention: the camera looks
/// down its local -Z axis, +X points right and +Y up.
pub trait Camera {
    /// Position in world space
    fn position(&self) -> Vec3;

    /// Move along the local X axis (positive = right)
    fn translate_x(&mut self, distance: f32);

    /// Move along the local Z axis (positive = backward)
    fn translate_z(&mut self, distance: f32);

    /// Rotate so the local -Z axis points at `target`
    fn look_at(&mut self, target: Vec3);
}

/// Perspective camera with a position and a rotation
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub orientation: Quat,
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl PerspectiveCamera {
    pub fn new(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            up: Vec3::Y,
            fov_y,
            aspect,
            near,
            far,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    pub fn local_up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Translate along a unit axis expressed in camera space
    pub fn translate_on_axis(&mut self, axis: Vec3, distance: f32) {
        self.position += self.orientation * axis * distance;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position).inverse()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(50.0, 4.0 / 3.0, 1.0, 10_000.0)
    }
}

impl Camera for PerspectiveCamera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn translate_x(&mut self, distance: f32) {
        self.translate_on_axis(Vec3::X, distance);
    }

    fn translate_z(&mut self, distance: f32) {
        self.translate_on_axis(Vec3::Z, distance);
    }

    fn look_at(&mut self, target: Vec3) {
        self.orientation = look_rotation(self.position, target, self.up);
    }
}

/// Rotation whose -Z axis points from `eye` to `target` while keeping `up`
/// as close to local +Y as possible
pub fn look_rotation(eye: Vec3, target: Vec3, up: Vec3) -> Quat {
    let mut z = eye - target;
    if z.length_squared() == 0.0 {
        z.z = 1.0;
    }
    z = z.normalize();

    let mut x = up.cross(z);
    if x.length_squared() == 0.0 {
        // up and view direction are parallel, nudge the view direction
        if up.z.abs() == 1.0 {
            z.x += 0.0001;
        } else {
            z.z += 0.0001;
        }
        z = z.normalize();
        x = up.cross(z);
    }
    x = x.normalize();
    let y = z.cross(x);

    Quat::from_mat3(&Mat3::from_cols(x, y, z))
}
