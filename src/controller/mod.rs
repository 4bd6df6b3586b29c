//! First-person camera controller.
//!
//! Input events flow through an [`InputDispatcher`] into a shared
//! [`InputState`]; once per frame [`FirstPersonController::update`] turns the
//! held intents and pointer offset into camera motion.
//!
//! ```rust,ignore
//! let dispatcher = InputDispatcher::new();
//! let camera = PerspectiveCamera::default();
//! let mut controller = FirstPersonController::new(camera, ControllerConfig::default(), &dispatcher)?;
//!
//! dispatcher.dispatch(&InputEvent::KeyDown(ArrowKey::Up));
//! controller.update(clock.delta());
//! ```

pub mod config;
pub mod input;

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;
use log::{debug, warn};
use thiserror::Error;

use crate::camera::Camera;
use crate::core::{InputDispatcher, Subscription};

pub use config::{ConfigError, ControllerConfig, Viewport};
pub use input::{InputState, MovementState};

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("invalid controller configuration")]
    Config(#[from] ConfigError),
    #[error("camera position must be finite, got {0}")]
    InvalidCamera(Vec3),
}

/// Point on the sphere of radius `distance` around `origin`, angles in degrees
pub fn look_target_from(origin: Vec3, distance: f32, yaw: f32, pitch: f32) -> Vec3 {
    let yaw = yaw.to_radians();
    let pitch = pitch.to_radians();
    origin
        + Vec3::new(
            distance * pitch.cos() * yaw.cos(),
            distance * pitch.sin(),
            distance * pitch.cos() * yaw.sin(),
        )
}

/// Drives a [`Camera`] from pointer and arrow-key input.
///
/// Creating the controller attaches a listener to the dispatcher; the
/// listener is detached by [`dispose`](Self::dispose) or when the controller
/// is dropped.
pub struct FirstPersonController<C: Camera> {
    camera: C,
    config: ControllerConfig,
    input: Rc<RefCell<InputState>>,
    subscription: Subscription,
    yaw: f32,
    pitch: f32,
    look_target: Vec3,
}

impl<C: Camera> FirstPersonController<C> {
    pub fn new(
        camera: C,
        config: ControllerConfig,
        dispatcher: &InputDispatcher,
    ) -> Result<Self, ControllerError> {
        config.validate()?;
        let position = camera.position();
        if !position.is_finite() {
            return Err(ControllerError::InvalidCamera(position));
        }

        let input = Rc::new(RefCell::new(InputState::new(
            config.viewport,
            config.enable_vertical,
        )));
        let subscription = dispatcher.subscribe(input.clone());
        debug!(
            "first-person controller attached as {:?} (move_speed={}, distance={}, vertical={})",
            subscription.id(),
            config.move_speed,
            config.distance,
            config.enable_vertical
        );

        Ok(Self {
            camera,
            config,
            input,
            subscription,
            yaw: 0.0,
            pitch: 0.0,
            look_target: look_target_from(position, config.distance, 0.0, 0.0),
        })
    }

    /// Advance by `delta_time` seconds: move, turn, then face the look target
    pub fn update(&mut self, delta_time: f32) {
        let delta = if delta_time.is_finite() && delta_time >= 0.0 {
            delta_time
        } else {
            warn!("ignoring invalid frame delta {delta_time}");
            0.0
        };
        let input = *self.input.borrow();

        let move_delta = self.config.move_speed * delta;
        let movement = input.movement;
        if movement.forward {
            self.camera.translate_z(-move_delta);
        }
        if movement.backward {
            self.camera.translate_z(move_delta);
        }
        if movement.left {
            self.camera.translate_x(-move_delta);
        }
        if movement.right {
            self.camera.translate_x(move_delta);
        }

        let look_delta = self.config.look_speed * delta;
        let yaw = (self.yaw + input.pointer_delta.x * look_delta).rem_euclid(360.0);
        // rem_euclid rounds tiny negative values up to exactly 360
        self.yaw = if yaw >= 360.0 { 0.0 } else { yaw };
        if self.config.enable_vertical {
            self.pitch -= input.pointer_delta.y * look_delta;
        }
        self.pitch = self
            .pitch
            .clamp(-self.config.pitch_limit, self.config.pitch_limit);

        self.look_target = look_target_from(
            self.camera.position(),
            self.config.distance,
            self.yaw,
            self.pitch,
        );
        self.camera.look_at(self.look_target);
    }

    /// Detach from the dispatcher and hand the camera back
    pub fn dispose(self) -> C {
        let Self {
            camera,
            subscription,
            ..
        } = self;
        debug!("first-person controller {:?} disposed", subscription.id());
        subscription.cancel();
        camera
    }

    /// Yaw in degrees, wrapped to `[0, 360)`
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Accumulated pitch in degrees, always within the configured limit
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn look_target(&self) -> Vec3 {
        self.look_target
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Snapshot of the input state the next update will read
    pub fn input(&self) -> InputState {
        *self.input.borrow()
    }
}
