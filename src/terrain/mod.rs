//! Diamond-square terrain generation.
//!
//! Randomness is injected so callers decide between reproducible output
//! (a seeded `StdRng`) and fresh terrain every run.

mod heightmap;
mod mesh;

use log::debug;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

pub use heightmap::{diamond_square, seed_corners, Heightmap};
pub use mesh::{Face, TerrainMesh};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TerrainError {
    #[error("terrain size must be a power of two, got {0}")]
    SizeNotPowerOfTwo(usize),
    #[error("terrain size {0} exceeds the maximum of 32768")]
    SizeTooLarge(usize),
}

/// Largest accepted size; `(size + 1)^2` vertex indices must fit in a `u32`
pub const MAX_SIZE: usize = 1 << 15;

/// Generated heightmap and the mesh built from it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Terrain {
    pub heightmap: Heightmap,
    pub mesh: TerrainMesh,
}

/// Generate a `(size + 1) x (size + 1)` terrain
pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Terrain, TerrainError> {
    if !size.is_power_of_two() {
        return Err(TerrainError::SizeNotPowerOfTwo(size));
    }
    if size > MAX_SIZE {
        return Err(TerrainError::SizeTooLarge(size));
    }

    let mut heightmap = Heightmap::new(size);
    seed_corners(&mut heightmap, rng);
    diamond_square(&mut heightmap, rng);
    let mesh = TerrainMesh::from_heightmap(&heightmap);

    let (low, high) = heightmap.min_max();
    debug!(
        "terrain {size}x{size}: {} vertices, {} faces, heights {low:.2}..{high:.2}",
        mesh.vertices.len(),
        mesh.triangle_count()
    );

    Ok(Terrain { heightmap, mesh })
}
