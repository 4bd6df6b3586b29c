use glam::Vec3;
use log::debug;

pub const DARK_TILE: u32 = 0x666666;
pub const LIGHT_TILE: u32 = 0xDDDDDD;
pub const DEFAULT_SIDE_TILES: i32 = 10;
pub const DEFAULT_TILE_SIZE: f32 = 100.0;

/// Square floor tile lying in the XZ plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorTile {
    /// Tile centre
    pub position: Vec3,
    pub size: f32,
    /// `0xRRGGBB`
    pub color: u32,
}

/// Checkerboard of `2 * side_tiles` tiles per side, centred on the origin.
///
/// Tiles are emitted with `x` outermost and `z` innermost.
pub fn floor_tiles(side_tiles: i32, tile_size: f32) -> Vec<FloorTile> {
    let tiles: Vec<FloorTile> = (-side_tiles..side_tiles)
        .flat_map(|x| (-side_tiles..side_tiles).map(move |z| (x, z)))
        .map(|(x, z)| FloorTile {
            position: Vec3::new(x as f32 * tile_size, 0.0, z as f32 * tile_size),
            size: tile_size,
            // Remainder truncates toward zero, so odd negative sums give -1
            color: if (x + z) % 2 == 0 { DARK_TILE } else { LIGHT_TILE },
        })
        .collect();

    debug!("floor created: {} tiles of size {}", tiles.len(), tile_size);
    tiles
}

/// The 20x20 floor of 100-unit tiles the demos use
pub fn default_floor() -> Vec<FloorTile> {
    floor_tiles(DEFAULT_SIDE_TILES, DEFAULT_TILE_SIZE)
}
