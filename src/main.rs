use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use first_person::cli::{Cli, Command, ExportFormat, TerrainArgs, WalkArgs};
use first_person::controller::{ControllerConfig, FirstPersonController, Viewport};
use first_person::core::{input_adapter, Clock, FrameStats, InputDispatcher};
use first_person::scene::{default_floor, reference_triangle, SceneSettings};
use first_person::{Camera, PerspectiveCamera};

// === Constants ===

const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;

// === Walk demo ===

struct App {
    window: Option<Arc<Window>>,
    dispatcher: InputDispatcher,
    controller: FirstPersonController<PerspectiveCamera>,
    clock: Clock,
    stats: FrameStats,
}

impl App {
    fn new(config: ControllerConfig) -> Result<Self> {
        let settings = SceneSettings::default();
        let viewport = config.viewport;
        let camera = settings.camera(viewport.width as f32 / viewport.height as f32);

        let floor = default_floor();
        let triangle = reference_triangle();
        debug!(
            "scene: {} floor tiles, sky radius {}, reference triangle normal {}",
            floor.len(),
            settings.sky.radius,
            triangle.normal
        );
        debug!(
            "clear color {:?}, fog visibility at sky radius {:.3}",
            settings.clear_rgb(),
            settings.fog.visibility(settings.sky.radius)
        );

        let dispatcher = InputDispatcher::new();
        let controller = FirstPersonController::new(camera, config, &dispatcher)
            .context("failed to create first-person controller")?;

        Ok(Self {
            window: None,
            dispatcher,
            controller,
            clock: Clock::new(),
            stats: FrameStats::new(),
        })
    }

    fn redraw(&mut self) {
        let delta = self.clock.delta();
        if let Some(sample) = self.stats.tick(delta) {
            info!(
                "fps: {}  sec: {}  frame: {}",
                sample.fps, sample.seconds, sample.frames
            );
        }

        self.controller.update(delta);

        if let Some(window) = &self.window {
            let position = self.controller.camera().position();
            window.set_title(&format!(
                "first-person  pos ({:.0}, {:.0}, {:.0})  yaw {:.1}  pitch {:.1}",
                position.x,
                position.y,
                position.z,
                self.controller.yaw(),
                self.controller.pitch()
            ));
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("first-person")
                    .with_inner_size(winit::dpi::PhysicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let size = window.inner_size();
            self.controller
                .camera_mut()
                .set_aspect(size.width, size.height);
            self.dispatcher
                .dispatch(&first_person::core::InputEvent::Resize {
                    width: size.width,
                    height: size.height,
                });
            self.window = Some(window);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::RedrawRequested => self.redraw(),
            other => {
                if let WindowEvent::Resized(size) = &other {
                    self.controller
                        .camera_mut()
                        .set_aspect(size.width, size.height);
                }
                for input in input_adapter::translate(&other) {
                    self.dispatcher.dispatch(&input);
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn walk(args: &WalkArgs) -> Result<()> {
    let config = args
        .controller_config()
        .context("invalid controller configuration")?
        .with_viewport(Viewport::new(INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT));

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config)?;

    info!("first-person - mouse steers, left/right click or arrows move, Escape quits");
    event_loop.run_app(&mut app)?;

    let camera = app.controller.dispose();
    info!("final camera position {}", camera.position());
    Ok(())
}

// === Terrain export ===

fn export_terrain(args: &TerrainArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let terrain = first_person::generate(args.size, &mut rng)?;
    let (low, high) = terrain.heightmap.min_max();
    info!(
        "generated {}x{} terrain, heights {:.2}..{:.2}",
        args.size, args.size, low, high
    );

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    match args.format {
        ExportFormat::Obj => terrain.mesh.write_obj(&mut out)?,
        ExportFormat::Json => serde_json::to_writer(&mut out, &terrain)?,
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Terrain(args)) => export_terrain(&args),
        Some(Command::Walk(args)) => walk(&args),
        None => walk(&WalkArgs::default()),
    }
}
