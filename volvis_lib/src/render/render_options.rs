/// Sample step and pixel increment used by [`RenderOptionsBuilder::interactive`]
pub const INTERACTIVE_STEP: usize = 3;

/// Smallest sample step accepted, rays never take shorter steps
pub const MIN_SAMPLE_STEP: f32 = 1e-3;

/// Quality and threading of rendering.
///
/// Construct with [`RenderOptions::builder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Distance between samples along a ray, in voxels
    pub sample_step: f32,
    /// Only every n-th pixel gets a ray, the n*n block is filled with its color
    pub pixel_increment: usize,
    pub multi_thread: bool,
    /// Number of render threads, `0` means one per available core
    pub threads: usize,
}

impl RenderOptions {
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::new()
    }

    /// Threads to render with, at least 1
    pub fn thread_count(&self) -> usize {
        if !self.multi_thread {
            return 1;
        }
        match self.threads {
            0 => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            n => n,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions::builder().build_unchecked()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptionsBuilder {
    sample_step: f32,
    pixel_increment: usize,
    multi_thread: bool,
    threads: usize,
}

impl RenderOptionsBuilder {
    /// Full quality, multi threaded
    pub fn new() -> Self {
        RenderOptionsBuilder {
            sample_step: 1.0,
            pixel_increment: 1,
            multi_thread: true,
            threads: 0,
        }
    }

    pub fn sample_step(mut self, step: f32) -> Self {
        self.sample_step = step;
        self
    }

    pub fn pixel_increment(mut self, increment: usize) -> Self {
        self.pixel_increment = increment;
        self
    }

    pub fn multi_thread(mut self, multi_thread: bool) -> Self {
        self.multi_thread = multi_thread;
        self
    }

    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Lower quality for moving the camera around.
    /// Coarser sampling, one ray per 3x3 pixels.
    pub fn interactive(mut self, interactive: bool) -> Self {
        let step = if interactive { INTERACTIVE_STEP } else { 1 };
        self.sample_step = step as f32;
        self.pixel_increment = step;
        self
    }

    pub fn build(self) -> Result<RenderOptions, &'static str> {
        if !(self.sample_step >= MIN_SAMPLE_STEP && self.sample_step.is_finite()) {
            return Err("Sample step must be finite and at least 0.001");
        }
        if self.pixel_increment == 0 {
            return Err("Pixel increment must be at least 1");
        }
        Ok(self.build_unchecked())
    }

    /// Build without validation
    pub fn build_unchecked(self) -> RenderOptions {
        RenderOptions {
            sample_step: self.sample_step,
            pixel_increment: self.pixel_increment,
            multi_thread: self.multi_thread,
            threads: self.threads,
        }
    }
}

impl Default for RenderOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
