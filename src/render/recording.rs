use crate::config::Background;
use crate::foundation::core::{Affine, Viewport};
use crate::foundation::error::SparkResult;
use crate::render::surface::{DrawOp, PaintSurface};

/// Surface that records every frame's commands instead of rasterizing them.
///
/// Used by tests and by hosts that replay commands onto their own canvas.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    viewport: Option<Viewport>,
    background: Background,
    configure_calls: usize,
    current: Option<Vec<DrawOp>>,
    frames: Vec<Vec<DrawOp>>,
}

impl RecordingSurface {
    /// Create an unconfigured recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Viewport from the latest `configure` call.
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Backing-store size in device pixels, once configured.
    pub fn backing_size(&self) -> Option<(u32, u32)> {
        self.viewport.map(Viewport::backing_size)
    }

    /// Drawing transform applied to CSS-pixel commands.
    pub fn transform(&self) -> Affine {
        self.viewport
            .map(Viewport::device_transform)
            .unwrap_or(Affine::IDENTITY)
    }

    /// Number of `configure` calls (initial sizing plus resizes).
    pub fn configure_calls(&self) -> usize {
        self.configure_calls
    }

    /// Background set by the manager.
    pub fn background(&self) -> &Background {
        &self.background
    }

    /// Completed frames, oldest first.
    pub fn frames(&self) -> &[Vec<DrawOp>] {
        &self.frames
    }

    /// Most recently completed frame.
    pub fn last_frame(&self) -> Option<&[DrawOp]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl PaintSurface for RecordingSurface {
    fn configure(&mut self, viewport: Viewport) -> SparkResult<()> {
        self.viewport = Some(viewport);
        self.configure_calls += 1;
        Ok(())
    }

    fn set_background(&mut self, background: &Background) {
        self.background = background.clone();
    }

    fn begin_frame(&mut self) {
        self.current = Some(Vec::new());
    }

    fn draw(&mut self, op: DrawOp) {
        self.current.get_or_insert_with(Vec::new).push(op);
    }

    fn end_frame(&mut self) -> SparkResult<()> {
        if let Some(ops) = self.current.take() {
            self.frames.push(ops);
        }
        Ok(())
    }
}
