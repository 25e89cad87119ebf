use crate::config::{Background, SparklesConfig, TrailsConfig};
use crate::field::{InteractiveField, ParticleField, SeedParams};
use crate::foundation::core::{Point, Viewport};
use crate::render::{PaintSurface, SparklesStyle, draw_sparkles, draw_trails};
use crate::surface::pacing::SPARKLES_FRAME_INTERVAL_MS;
use rand::RngCore;

/// The visual program a [`super::SurfaceManager`] runs on its surface.
///
/// Methods receive the manager's random source so one seed reproduces a whole run.
pub trait Effect {
    /// Background of the surface element.
    fn background(&self) -> &Background;

    /// Minimum spacing of executed frames; `0` runs on every frame callback.
    fn frame_interval_ms(&self) -> f64;

    /// Whether the backing store is scaled by the device pixel ratio.
    fn honors_pixel_ratio(&self) -> bool {
        true
    }

    /// Build state for a freshly mounted surface.
    fn reset(&mut self, viewport: Viewport, rng: &mut dyn RngCore);

    /// A debounced resize was applied. Regenerates everything by default.
    fn resized(&mut self, viewport: Viewport, rng: &mut dyn RngCore) {
        self.reset(viewport, rng);
    }

    /// Advance one executed frame.
    fn step(&mut self, viewport: Viewport, rng: &mut dyn RngCore);

    /// Emit the current frame's draw commands.
    fn draw(&self, surface: &mut dyn PaintSurface, viewport: Viewport, rng: &mut dyn RngCore);

    /// Pointer moved over the surface.
    fn pointer_moved(&mut self, _at: Point, _rng: &mut dyn RngCore) {}

    /// Pointer clicked on the surface.
    fn clicked(&mut self, _at: Point, _rng: &mut dyn RngCore) {}

    /// Pointer left the surface.
    fn pointer_left(&mut self) {}

    /// Number of live particles.
    fn population(&self) -> usize;
}

/// Sparse drifting sparkles with occasional faint connections.
#[derive(Debug, Clone)]
pub struct SparklesEffect {
    config: SparklesConfig,
    style: SparklesStyle,
    field: ParticleField,
}

impl SparklesEffect {
    /// Effect for an already validated configuration.
    pub fn new(config: SparklesConfig) -> Self {
        Self {
            style: SparklesStyle::from(&config),
            config,
            field: ParticleField::empty(),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &SparklesConfig {
        &self.config
    }

    /// Current population.
    pub fn field(&self) -> &ParticleField {
        &self.field
    }
}

impl Effect for SparklesEffect {
    fn background(&self) -> &Background {
        &self.config.background
    }

    fn frame_interval_ms(&self) -> f64 {
        SPARKLES_FRAME_INTERVAL_MS
    }

    fn reset(&mut self, viewport: Viewport, rng: &mut dyn RngCore) {
        self.field = ParticleField::seed(
            viewport.clamped_width(),
            viewport.clamped_height(),
            SeedParams::from(&self.config),
            rng,
        );
    }

    fn step(&mut self, viewport: Viewport, _rng: &mut dyn RngCore) {
        self.field
            .advance(viewport.clamped_width(), viewport.clamped_height());
    }

    fn draw(&self, surface: &mut dyn PaintSurface, _viewport: Viewport, rng: &mut dyn RngCore) {
        draw_sparkles(surface, self.field.particles(), &self.style, rng);
    }

    fn population(&self) -> usize {
        self.field.len()
    }
}

/// Pointer-reactive particles painted over a fading wash.
#[derive(Debug, Clone)]
pub struct TrailsEffect {
    config: TrailsConfig,
    field: InteractiveField,
}

impl TrailsEffect {
    /// Effect for an already validated configuration.
    pub fn new(config: TrailsConfig) -> Self {
        Self {
            field: InteractiveField::new(config.max_particles),
            config,
        }
    }

    /// Current population.
    pub fn field(&self) -> &InteractiveField {
        &self.field
    }
}

impl Effect for TrailsEffect {
    fn background(&self) -> &Background {
        &self.config.background
    }

    fn frame_interval_ms(&self) -> f64 {
        0.0
    }

    fn honors_pixel_ratio(&self) -> bool {
        false
    }

    fn reset(&mut self, viewport: Viewport, rng: &mut dyn RngCore) {
        self.field
            .seed(viewport.clamped_width(), viewport.clamped_height(), rng);
    }

    // Particles survive a resize and wrap into the new bounds on the next step.
    fn resized(&mut self, _viewport: Viewport, _rng: &mut dyn RngCore) {}

    fn step(&mut self, viewport: Viewport, rng: &mut dyn RngCore) {
        self.field
            .advance(viewport.clamped_width(), viewport.clamped_height(), rng);
    }

    fn draw(&self, surface: &mut dyn PaintSurface, viewport: Viewport, _rng: &mut dyn RngCore) {
        draw_trails(
            surface,
            viewport.css_rect(),
            self.field.particles(),
            self.field.pointer(),
            self.config.particle_color,
        );
    }

    fn pointer_moved(&mut self, at: Point, rng: &mut dyn RngCore) {
        self.field.pointer_moved(at, rng);
    }

    fn clicked(&mut self, at: Point, rng: &mut dyn RngCore) {
        self.field.clicked(at, rng);
    }

    fn pointer_left(&mut self) {
        self.field.pointer_left();
    }

    fn population(&self) -> usize {
        self.field.particles().len()
    }
}
