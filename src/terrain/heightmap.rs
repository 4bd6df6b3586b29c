use rand::Rng;
use serde::Serialize;

/// Square grid of heights with `size + 1` samples per side
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heightmap {
    size: usize,
    values: Vec<f32>,
}

impl Heightmap {
    /// Flat heightmap covering `size` cells per side
    pub fn new(size: usize) -> Self {
        let resolution = size + 1;
        Self {
            size,
            values: vec![0.0; resolution * resolution],
        }
    }

    /// Number of cells per side
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of samples per side
    pub fn resolution(&self) -> usize {
        self.size + 1
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row <= self.size && col <= self.size);
        row * self.resolution() + col
    }

    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.values[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, height: f32) {
        let index = self.index(row, col);
        self.values[index] = height;
    }

    /// Samples in row-major order
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Lowest and highest sample
    pub fn min_max(&self) -> (f32, f32) {
        self.values
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &h| {
                (lo.min(h), hi.max(h))
            })
    }

    /// The four corner samples: top-left, top-right, bottom-left, bottom-right
    pub fn corners(&self) -> [f32; 4] {
        let n = self.size;
        [self.get(0, 0), self.get(0, n), self.get(n, 0), self.get(n, n)]
    }
}

/// Uniform noise in `[-amplitude, amplitude)`
fn jitter<R: Rng + ?Sized>(rng: &mut R, amplitude: f32) -> f32 {
    rng.gen_range(-amplitude..amplitude)
}

/// Seed the four corners with noise in `[-size/2, size/2)`.
///
/// The two corners of the last row are raised by an extra `size`, which tilts
/// the whole terrain along the row axis.
pub fn seed_corners<R: Rng + ?Sized>(map: &mut Heightmap, rng: &mut R) {
    let n = map.size();
    let amplitude = n as f32 / 2.0;
    let bias = n as f32;

    map.set(0, 0, jitter(rng, amplitude));
    map.set(0, n, jitter(rng, amplitude));
    map.set(n, 0, jitter(rng, amplitude) + bias);
    map.set(n, n, jitter(rng, amplitude) + bias);
}

/// Fill every non-corner sample by midpoint displacement.
///
/// Each pass first sets the centre of every square of side `2 * step` to the
/// mean of its corners (diamond step), then every edge midpoint to the mean of
/// its in-grid orthogonal neighbours (square step). Both add noise in
/// `[-step/2, step/2)`. Corners are only read, never written.
pub fn diamond_square<R: Rng + ?Sized>(map: &mut Heightmap, rng: &mut R) {
    let n = map.size();
    let mut step = n / 2;

    while step >= 1 {
        let amplitude = step as f32 / 2.0;

        for row in (step..n).step_by(2 * step) {
            for col in (step..n).step_by(2 * step) {
                let mean = (map.get(row - step, col - step)
                    + map.get(row - step, col + step)
                    + map.get(row + step, col - step)
                    + map.get(row + step, col + step))
                    / 4.0;
                map.set(row, col, mean + jitter(rng, amplitude));
            }
        }

        for row in (0..=n).step_by(step) {
            // Edge midpoints sit where exactly one coordinate is an odd multiple of step
            let first_col = if (row / step) % 2 == 0 { step } else { 0 };
            for col in (first_col..=n).step_by(2 * step) {
                let mut sum = 0.0;
                let mut count = 0;
                if row >= step {
                    sum += map.get(row - step, col);
                    count += 1;
                }
                if row + step <= n {
                    sum += map.get(row + step, col);
                    count += 1;
                }
                if col >= step {
                    sum += map.get(row, col - step);
                    count += 1;
                }
                if col + step <= n {
                    sum += map.get(row, col + step);
                    count += 1;
                }
                map.set(row, col, sum / count as f32 + jitter(rng, amplitude));
            }
        }

        step /= 2;
    }
}
