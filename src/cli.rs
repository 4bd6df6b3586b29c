// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::controller::{ConfigError, ControllerConfig};

#[derive(Parser, Debug, Clone)]
#[command(name = "first-person")]
#[command(about = "First-person camera walk and diamond-square terrain", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Open a window and walk around with the first-person controller
    Walk(WalkArgs),
    /// Generate a terrain and export it
    Terrain(TerrainArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct WalkArgs {
    /// JSON controller config; missing fields use defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Let vertical pointer offset change the pitch
    #[arg(long)]
    pub vertical: bool,

    /// Override the movement speed (units per second)
    #[arg(long)]
    pub move_speed: Option<f32>,
}

impl WalkArgs {
    /// Config file (or defaults) with command-line overrides applied
    pub fn controller_config(&self) -> Result<ControllerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ControllerConfig::from_path(path)?,
            None => ControllerConfig::default(),
        };
        if self.vertical {
            config.enable_vertical = true;
        }
        if let Some(move_speed) = self.move_speed {
            config.move_speed = move_speed;
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Wavefront OBJ mesh
    Obj,
    /// Heightmap and mesh as JSON
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct TerrainArgs {
    /// Cells per side; must be a power of two
    #[arg(long, default_value_t = 64)]
    pub size: usize,

    /// Seed for reproducible output; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = ExportFormat::Obj)]
    pub format: ExportFormat,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
