use crate::config::Background;
use crate::foundation::color::Rgba;
use crate::foundation::core::{Point, Rect, Viewport};
use crate::foundation::error::SparkResult;

/// One drawing command, in CSS-pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Erase the whole surface to transparent.
    Clear,
    /// Fill an axis-aligned rectangle.
    FillRect {
        /// Rectangle to fill.
        rect: Rect,
        /// Fill color.
        color: Rgba,
    },
    /// Fill a circle.
    FillCircle {
        /// Circle center.
        center: Point,
        /// Circle radius.
        radius: f64,
        /// Fill color.
        color: Rgba,
    },
    /// Stroke a straight segment.
    StrokeLine {
        /// Segment start.
        from: Point,
        /// Segment end.
        to: Point,
        /// Stroke width.
        width: f64,
        /// Stroke color.
        color: Rgba,
    },
    /// Radial falloff from `inner` at `inner_radius` to `outer` at `outer_radius`.
    RadialGlow {
        /// Gradient center.
        center: Point,
        /// Radius where the falloff starts.
        inner_radius: f64,
        /// Radius where the falloff ends.
        outer_radius: f64,
        /// Color at and inside `inner_radius`.
        inner: Rgba,
        /// Color at `outer_radius`.
        outer: Rgba,
    },
}

/// A 2D drawing context owned by exactly one surface manager.
///
/// Draw calls use CSS pixels; implementations map them onto the backing store with the
/// viewport's pixel-ratio scale. A frame is bracketed by [`PaintSurface::begin_frame`] and
/// [`PaintSurface::end_frame`]; frames that do not start with [`DrawOp::Clear`] paint over
/// the previous frame.
pub trait PaintSurface {
    /// Size the backing store to `css * pixel_ratio`, the displayed size to `css`, and set
    /// the drawing transform to a uniform `pixel_ratio` scale.
    fn configure(&mut self, viewport: Viewport) -> SparkResult<()>;

    /// Background shown beneath everything drawn.
    fn set_background(&mut self, background: &Background);

    /// Start collecting a frame.
    fn begin_frame(&mut self);

    /// Append one command to the current frame.
    fn draw(&mut self, op: DrawOp);

    /// Finish the frame and make it visible.
    fn end_frame(&mut self) -> SparkResult<()>;
}

impl<S: PaintSurface + ?Sized> PaintSurface for Box<S> {
    fn configure(&mut self, viewport: Viewport) -> SparkResult<()> {
        (**self).configure(viewport)
    }

    fn set_background(&mut self, background: &Background) {
        (**self).set_background(background);
    }

    fn begin_frame(&mut self) {
        (**self).begin_frame();
    }

    fn draw(&mut self, op: DrawOp) {
        (**self).draw(op);
    }

    fn end_frame(&mut self) -> SparkResult<()> {
        (**self).end_frame()
    }
}
