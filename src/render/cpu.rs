use crate::config::Background;
use crate::foundation::color::Rgba;
use crate::foundation::core::{Affine, Point, Viewport};
use crate::foundation::error::{SparkError, SparkResult};
use crate::foundation::math::{mul_div255_u8, unit_to_u8};
use crate::render::surface::{DrawOp, PaintSurface};
use kurbo::Shape;
use std::sync::Arc;

const GLOW_STEPS: usize = 16;

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Premultiplied RGBA8 at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

struct Target {
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
    width: u16,
    height: u16,
}

/// CPU surface powered by `vello_cpu`.
///
/// Commands are buffered between `begin_frame` and `end_frame`, then rasterized in one
/// pass. A frame without [`DrawOp::Clear`] starts from the previous frame's pixels.
/// Presenting fails with [`SparkError::Render`] before `configure`, or when a command carries
/// non-finite geometry; the previous frame stays visible.
pub struct CpuSurface {
    viewport: Viewport,
    background: Background,
    target: Option<Target>,
    ops: Vec<DrawOp>,
    configured: bool,
    frames_presented: u64,
}

impl Default for CpuSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuSurface {
    /// An unconfigured surface; nothing is allocated until `configure`.
    pub fn new() -> Self {
        Self {
            viewport: Viewport::css(0.0, 0.0),
            background: Background::Transparent,
            target: None,
            ops: Vec::new(),
            configured: false,
            frames_presented: 0,
        }
    }

    /// Viewport from the latest `configure` call.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Number of frames rasterized so far.
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Read back the last presented frame, composited over a solid background if one is set.
    ///
    /// Zero-area surfaces produce an empty frame.
    pub fn snapshot(&self) -> FrameRGBA {
        let Some(t) = &self.target else {
            return FrameRGBA {
                width: 0,
                height: 0,
                data: Vec::new(),
                premultiplied: true,
            };
        };
        let mut data = t.pixmap.data_as_u8_slice().to_vec();
        if let Some(bg) = self.background.solid() {
            composite_under(&mut data, bg.to_rgba8_premul());
        }
        FrameRGBA {
            width: u32::from(t.width),
            height: u32::from(t.height),
            data,
            premultiplied: true,
        }
    }

    fn rasterize(&mut self) -> SparkResult<()> {
        if !self.configured {
            return Err(SparkError::render("frame presented before configure"));
        }
        if let Some(op) = self.ops.iter().find(|op| !op_is_finite(op)) {
            return Err(SparkError::render(format!("non-finite geometry in {op:?}")));
        }
        let Some(t) = self.target.as_mut() else {
            return Ok(());
        };
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, DrawOp::Clear))
            .map(|i| i + 1);

        t.ctx.reset();
        t.ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
        t.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        match start {
            Some(_) => clear_pixmap_to_transparent(&mut t.pixmap),
            None => {
                // Carry the previous frame forward as the base layer.
                let prev = std::mem::replace(
                    &mut t.pixmap,
                    vello_cpu::Pixmap::new(t.width, t.height),
                );
                t.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                t.ctx.set_paint(vello_cpu::Image {
                    image: vello_cpu::ImageSource::Pixmap(Arc::new(prev)),
                    sampler: vello_cpu::peniko::ImageSampler::default(),
                });
                t.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    0.0,
                    0.0,
                    f64::from(t.width),
                    f64::from(t.height),
                ));
            }
        }

        t.ctx
            .set_transform(affine_to_cpu(self.viewport.device_transform()));
        for op in &self.ops[start.unwrap_or(0)..] {
            paint_op(&mut t.ctx, op);
        }
        t.ctx.flush();
        t.ctx.render_to_pixmap(&mut t.pixmap);
        Ok(())
    }
}

impl PaintSurface for CpuSurface {
    fn configure(&mut self, viewport: Viewport) -> SparkResult<()> {
        let (w, h) = viewport.backing_size();
        let width: u16 = w.try_into().map_err(|_| {
            SparkError::surface(format!("backing width {w} exceeds {}", u16::MAX))
        })?;
        let height: u16 = h.try_into().map_err(|_| {
            SparkError::surface(format!("backing height {h} exceeds {}", u16::MAX))
        })?;
        self.viewport = viewport;
        self.ops.clear();
        self.configured = true;
        self.target = if width == 0 || height == 0 {
            None
        } else {
            Some(Target {
                ctx: vello_cpu::RenderContext::new(width, height),
                pixmap: vello_cpu::Pixmap::new(width, height),
                width,
                height,
            })
        };
        Ok(())
    }

    fn set_background(&mut self, background: &Background) {
        self.background = background.clone();
    }

    fn begin_frame(&mut self) {
        self.ops.clear();
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    fn end_frame(&mut self) -> SparkResult<()> {
        let res = self.rasterize();
        self.ops.clear();
        res?;
        self.frames_presented += 1;
        Ok(())
    }
}

fn paint_op(ctx: &mut vello_cpu::RenderContext, op: &DrawOp) {
    match *op {
        DrawOp::Clear => {}
        DrawOp::FillRect { rect, color } => {
            ctx.set_paint(color_to_cpu(color));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(rect.x0, rect.y0, rect.x1, rect.y1));
        }
        DrawOp::FillCircle {
            center,
            radius,
            color,
        } => {
            if radius <= 0.0 || color.a <= 0.0 {
                return;
            }
            ctx.set_paint(color_to_cpu(color));
            ctx.fill_path(&circle_path(center, radius));
        }
        DrawOp::StrokeLine {
            from,
            to,
            width,
            color,
        } => {
            if color.a <= 0.0 {
                return;
            }
            let mut p = vello_cpu::kurbo::BezPath::new();
            p.move_to(point_to_cpu(from));
            p.line_to(point_to_cpu(to));
            ctx.set_paint(color_to_cpu(color));
            ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
            ctx.stroke_path(&p);
        }
        DrawOp::RadialGlow {
            center,
            inner_radius,
            outer_radius,
            inner,
            outer,
        } => paint_glow(ctx, center, inner_radius, outer_radius, inner, outer),
    }
}

/// Radial falloff as concentric discs, outermost first, the last one at `inner_radius`.
///
/// Disc `k` gets the alpha that brings the source-over stack inside its radius up to the
/// linear target at that radius. `remaining` is the transmittance actually painted, after
/// 8-bit quantization.
fn paint_glow(
    ctx: &mut vello_cpu::RenderContext,
    center: Point,
    inner_radius: f64,
    outer_radius: f64,
    inner: Rgba,
    outer: Rgba,
) {
    let span = (outer_radius - inner_radius).max(0.0);
    let mut remaining = 1.0;
    for k in 0..=GLOW_STEPS {
        let t = k as f64 / GLOW_STEPS as f64;
        let radius = outer_radius - span * t;
        let target = lerp_premul(outer, inner, t);
        if radius <= 0.0 || remaining <= 0.0 {
            break;
        }
        let alpha = (1.0 - (1.0 - target.a) / remaining).clamp(0.0, 1.0);
        let byte = unit_to_u8(alpha);
        if byte == 0 {
            continue;
        }
        remaining *= 1.0 - f64::from(byte) / 255.0;
        ctx.set_paint(color_to_cpu(target.rgb().with_alpha(f64::from(byte) / 255.0)));
        ctx.fill_path(&circle_path(center, radius));
    }
}

fn op_is_finite(op: &DrawOp) -> bool {
    let pt = |p: Point| p.x.is_finite() && p.y.is_finite();
    match *op {
        DrawOp::Clear => true,
        DrawOp::FillRect { rect, color } => {
            [rect.x0, rect.y0, rect.x1, rect.y1].iter().all(|v| v.is_finite())
                && color.a.is_finite()
        }
        DrawOp::FillCircle {
            center,
            radius,
            color,
        } => pt(center) && radius.is_finite() && color.a.is_finite(),
        DrawOp::StrokeLine {
            from,
            to,
            width,
            color,
        } => pt(from) && pt(to) && width.is_finite() && color.a.is_finite(),
        DrawOp::RadialGlow {
            center,
            inner_radius,
            outer_radius,
            inner,
            outer,
        } => {
            pt(center)
                && inner_radius.is_finite()
                && outer_radius.is_finite()
                && inner.a.is_finite()
                && outer.a.is_finite()
        }
    }
}

/// Interpolation in premultiplied space, so a transparent stop fades alpha without
/// tinting toward its color channels.
fn lerp_premul(a: Rgba, b: Rgba, t: f64) -> Rgba {
    let alpha = a.a + (b.a - a.a) * t;
    if alpha <= 0.0 {
        return Rgba::transparent();
    }
    let l = |x: u8, y: u8| -> u8 {
        let v = f64::from(x) * a.a + (f64::from(y) * b.a - f64::from(x) * a.a) * t;
        (v / alpha).round().clamp(0.0, 255.0) as u8
    };
    Rgba::new(l(a.r, b.r), l(a.g, b.g), l(a.b, b.b), alpha)
}

fn circle_path(center: Point, radius: f64) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in kurbo::Circle::new(center, radius).path_elements(0.1) {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3))
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn color_to_cpu(c: Rgba) -> vello_cpu::peniko::Color {
    let [r, g, b, a] = c.to_rgba8();
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn clear_pixmap_to_transparent(pixmap: &mut vello_cpu::Pixmap) {
    pixmap.data_as_u8_slice_mut().fill(0);
}

/// Source-over of premultiplied `data` onto a premultiplied background color.
fn composite_under(data: &mut [u8], bg: [u8; 4]) {
    for px in data.chunks_exact_mut(4) {
        let inv = 255 - u16::from(px[3]);
        for (c, b) in px.iter_mut().zip(bg) {
            *c = c.saturating_add(mul_div255_u8(u16::from(b), inv));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
