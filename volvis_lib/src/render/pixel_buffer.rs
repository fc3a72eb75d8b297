use nalgebra::Vector3;

/// Value of pixels no ray has written to, transparent black
pub const CLEARED: u32 = 0;

/// Square image of packed ARGB pixels.
///
/// Row major, pixel `(x, y)` is at index `x + side * y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    side: usize,
    data: Vec<u32>,
}

impl PixelBuffer {
    pub fn new(side: usize) -> PixelBuffer {
        PixelBuffer {
            side,
            data: vec![CLEARED; side * side],
        }
    }

    /// Buffer large enough for any view of a field with `dims` voxels
    pub fn for_dims(dims: Vector3<usize>) -> PixelBuffer {
        PixelBuffer::new(side_for_dims(dims))
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn clear(&mut self) {
        self.data.fill(CLEARED);
    }

    /// Change size, content is cleared
    pub fn resize(&mut self, side: usize) {
        self.side = side;
        self.data.clear();
        self.data.resize(side * side, CLEARED);
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.side || y >= self.side {
            return None;
        }
        Some(self.data[x + self.side * y])
    }

    pub fn data(&self) -> &[u32] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    pub fn into_inner(self) -> Vec<u32> {
        self.data
    }
}

/// Side of the image for a field: its diagonal rounded up to an even number of pixels
pub fn side_for_dims(dims: Vector3<usize>) -> usize {
    let diagonal = dims.map(|v| v as f32).norm();
    let side = diagonal.ceil() as usize;
    side + side % 2
}
