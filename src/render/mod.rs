//! Drawing: the paint-surface abstraction, its backends and the per-frame passes.

mod cpu;
mod pass;
mod recording;
mod surface;
mod trails;

pub use cpu::{CpuSurface, FrameRGBA};
pub use pass::{
    CONNECTION_DISTANCE, CONNECTION_MAX_ALPHA, CONNECTION_PROBABILITY, CONNECTION_STRIDE,
    CONNECTION_WIDTH, Connection, MAX_PARTNERS, SparklesStyle, connection_alpha, draw_sparkles,
    sample_connections,
};
pub use recording::RecordingSurface;
pub use surface::{DrawOp, PaintSurface};
pub use trails::{TRAIL_LINK_DISTANCE, draw_trails, trail_wash};
