use std::io::{self, Write};

use glam::Vec3;
use serde::Serialize;

use super::heightmap::Heightmap;

/// Triangle referencing three mesh vertices
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Face {
    pub indices: [u32; 3],
    pub normal: Vec3,
}

impl Face {
    /// Build a face whose normal follows the counter-clockwise winding
    pub fn from_winding(indices: [u32; 3], vertices: &[Vec3]) -> Self {
        let [a, b, c] = indices.map(|i| vertices[i as usize]);
        let normal = (b - a).cross(c - a).normalize_or_zero();
        Self { indices, normal }
    }
}

/// Regular triangulated grid built from a heightmap
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TerrainMesh {
    pub vertices: Vec<Vec3>,
    pub faces: Vec<Face>,
}

impl TerrainMesh {
    /// One vertex per sample at `(row, height, col)`, two faces per cell.
    ///
    /// Faces wind so their normals point towards +Y on flat ground.
    pub fn from_heightmap(map: &Heightmap) -> Self {
        let resolution = map.resolution();

        let vertices: Vec<Vec3> = (0..resolution)
            .flat_map(|row| (0..resolution).map(move |col| (row, col)))
            .map(|(row, col)| Vec3::new(row as f32, map.get(row, col), col as f32))
            .collect();

        let cells = map.size();
        let mut faces = Vec::with_capacity(cells * cells * 2);
        let stride = resolution as u32;
        for row in 0..cells as u32 {
            for col in 0..cells as u32 {
                let a = row * stride + col;
                let b = a + 1;
                let c = a + stride;
                let d = c + 1;
                faces.push(Face::from_winding([a, b, c], &vertices));
                faces.push(Face::from_winding([b, d, c], &vertices));
            }
        }

        Self { vertices, faces }
    }

    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    /// Write the mesh as Wavefront OBJ with per-face normals
    pub fn write_obj<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "# terrain: {} vertices, {} faces", self.vertices.len(), self.faces.len())?;
        for v in &self.vertices {
            writeln!(out, "v {} {} {}", v.x, v.y, v.z)?;
        }
        for face in &self.faces {
            let n = face.normal;
            writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
        }
        // OBJ indices are 1-based; face k uses normal k
        for (k, face) in self.faces.iter().enumerate() {
            let [a, b, c] = face.indices.map(|i| i + 1);
            let n = k + 1;
            writeln!(out, "f {a}//{n} {b}//{n} {c}//{n}")?;
        }
        Ok(())
    }
}
