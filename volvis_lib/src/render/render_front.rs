use std::{sync::Arc, thread::JoinHandle};

use crossbeam::channel::{Receiver, Sender, TryRecvError};
use log::{info, trace, warn};
use parking_lot::Mutex;

use super::{FrameStats, PixelBuffer, RenderRequest, Renderer};

/// Messages to the render thread
///
/// Messages queue up, after a frame is done the whole queue is read
/// and only the newest request gets rendered.
#[derive(Debug)]
pub enum RendererMessage {
    /// Render a frame, tagged with its generation
    Render(u64, Box<RenderRequest>),
    /// Shut down, thread will get ready to be joined
    ShutDown,
}

/// Sent by the render thread once a frame is in the shared buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInfo {
    /// Generation of the request the frame was rendered from
    pub generation: u64,
    pub stats: FrameStats,
}

/// Communicating with a renderer running in its own thread
///
/// Can be active or inactive.
pub struct RendererFront {
    handle: Option<JoinHandle<()>>,
    buffer: Option<Arc<Mutex<PixelBuffer>>>,
    generation: u64,
    requests: Sender<RendererMessage>,
    frames: Receiver<FrameInfo>,
}

impl RendererFront {
    /// Create inactive front
    pub fn new() -> Self {
        // Dummy channels
        // Replaced once started
        let (requests, _) = crossbeam::channel::unbounded();
        let frames = crossbeam::channel::never();
        Self {
            handle: None,
            buffer: None,
            generation: 0,
            requests,
            frames,
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Start rendering thread with `renderer`
    ///
    /// Front goes into active state.
    /// If front was already active, previous renderer gets shut down first.
    /// The thread waits for requests, it does _not_ start rendering.
    pub fn start_rendering(&mut self, renderer: Renderer) {
        if self.is_active() {
            info!("Shutting down current renderer");
            self.finish();
        }

        let (request_sender, request_receiver) = crossbeam::channel::unbounded(); // main -> renderer
        let (frame_sender, frame_receiver) = crossbeam::channel::unbounded(); // renderer -> main

        let buffer = Arc::new(Mutex::new(renderer.new_buffer()));
        let thread = RenderThread {
            renderer,
            buffer: buffer.clone(),
            requests: request_receiver,
            frames: frame_sender,
        };

        self.handle = Some(std::thread::spawn(move || thread.run()));
        self.buffer = Some(buffer);
        self.requests = request_sender;
        self.frames = frame_receiver;
    }

    /// Queue `request` for rendering
    ///
    /// Returns generation assigned to the request, `None` if front is inactive.
    pub fn send_request(&mut self, request: RenderRequest) -> Option<u64> {
        if !self.is_active() {
            return None;
        }
        self.generation += 1;
        let msg = RendererMessage::Render(self.generation, Box::new(request));
        match self.requests.send(msg) {
            Ok(()) => Some(self.generation),
            Err(_) => {
                warn!("Render thread is gone");
                None
            }
        }
    }

    /// Generation of the newest request sent
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Wait for the next finished frame
    ///
    /// Blocking call, `None` if front is inactive or the render thread is gone.
    pub fn receive_frame(&self) -> Option<FrameInfo> {
        if !self.is_active() {
            return None;
        }
        self.frames.recv().ok()
    }

    /// Wait until the frame of the newest request is in the buffer
    ///
    /// Frames of older requests are skipped.
    pub fn wait_for_latest(&self) -> Option<FrameInfo> {
        loop {
            let info = self.receive_frame()?;
            if info.generation >= self.generation {
                return Some(info);
            }
        }
    }

    /// Getter for shared framebuffer
    /// If front is inactive, return `None`
    pub fn get_buffer_handle(&self) -> Option<Arc<Mutex<PixelBuffer>>> {
        self.buffer.as_ref().cloned()
    }

    /// Shut down the thread and wait for it
    ///
    /// Front goes into inactive state.
    pub fn finish(&mut self) {
        if let Some(handle) = self.handle.take() {
            // a closed channel also stops the thread
            let _ = self.requests.send(RendererMessage::ShutDown);
            if let Err(panic) = handle.join() {
                std::panic::resume_unwind(panic);
            }
            self.buffer = None;
        }
    }
}

impl Default for RendererFront {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RendererFront {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = self.requests.send(RendererMessage::ShutDown);
            let _ = handle.join();
        }
    }
}

/// State owned by the render thread
struct RenderThread {
    renderer: Renderer,
    buffer: Arc<Mutex<PixelBuffer>>,
    requests: Receiver<RendererMessage>,
    frames: Sender<FrameInfo>,
}

impl RenderThread {
    fn run(self) {
        // rendered off the lock, swapped in when done
        let mut back_buffer = self.renderer.new_buffer();

        // Master loop
        while let Some((generation, request)) = self.next_request() {
            let stats = self.renderer.render(&request, &mut back_buffer);

            {
                let mut shared = self.buffer.lock();
                std::mem::swap(&mut *shared, &mut back_buffer);
            }

            if self.frames.send(FrameInfo { generation, stats }).is_err() {
                break;
            }
        }
        trace!("Render thread finished");
    }

    /// Block until a request arrives, then take the newest one queued.
    /// `None` means shut down.
    fn next_request(&self) -> Option<(u64, Box<RenderRequest>)> {
        let mut newest = match self.requests.recv() {
            Ok(RendererMessage::Render(generation, request)) => (generation, request),
            Ok(RendererMessage::ShutDown) | Err(_) => return None,
        };

        loop {
            match self.requests.try_recv() {
                Ok(RendererMessage::Render(generation, request)) => {
                    trace!("Skipping stale request {}", newest.0);
                    newest = (generation, request);
                }
                Ok(RendererMessage::ShutDown) | Err(TryRecvError::Disconnected) => return None,
                Err(TryRecvError::Empty) => return Some(newest),
            }
        }
    }
}
