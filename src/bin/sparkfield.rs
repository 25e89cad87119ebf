use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use sparkfield::{
    CpuSurface, Effect, FrameRGBA, HeadlessDriver, MountOutcome, SparklesConfig, SparklesEffect,
    SurfaceManager, TrailsConfig, TrailsEffect, Viewport, particle_count,
};

#[derive(Parser, Debug)]
#[command(name = "sparkfield", version)]
struct Cli {
    /// Log debug events to stderr.
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the effect for a while and write the last presented frame as a PNG.
    Frame(FrameArgs),
    /// Write the first executed frames as numbered PNGs.
    Frames(FramesArgs),
    /// Print the resolved configuration and seeded population as JSON.
    Inspect(InspectArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum EffectKind {
    Sparkles,
    Trails,
}

#[derive(Parser, Debug)]
struct SurfaceArgs {
    /// Effect configuration JSON. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Which effect to run.
    #[arg(long, value_enum, default_value_t = EffectKind::Sparkles)]
    effect: EffectKind,

    /// Viewport width in CSS pixels.
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Viewport height in CSS pixels.
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Device pixel ratio.
    #[arg(long, default_value_t = 1.0)]
    ratio: f64,

    /// Seed for reproducible output. OS-seeded when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    surface: SurfaceArgs,

    /// Virtual time to run before capturing, in milliseconds.
    #[arg(long, default_value_t = 1000.0)]
    time_ms: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    surface: SurfaceArgs,

    /// Number of executed frames to write.
    #[arg(long, default_value_t = 10)]
    count: u32,

    /// Output directory for `frame_NNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    #[command(flatten)]
    surface: SurfaceArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let out = args.out.clone();
    let time_ms = args.time_ms;
    with_driver(&args.surface, |driver| {
        driver.run_for(time_ms);
        let frame = driver.snapshot().context("surface was not mounted")?;
        write_png(&out, &frame)?;
        eprintln!("wrote {}", out.display());
        Ok(())
    })
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    let out_dir = args.out_dir.clone();
    let count = args.count;
    with_driver(&args.surface, |driver| {
        for i in 0..count {
            // Sparkles execute roughly every fourth 60 Hz tick.
            if driver.run_until_drawn(1, 64) == 0 {
                anyhow::bail!("effect stopped after {i} frames");
            }
            let frame = driver.snapshot().context("surface was not mounted")?;
            write_png(&out_dir.join(format!("frame_{i:04}.png")), &frame)?;
        }
        eprintln!("wrote {count} frames to {}", out_dir.display());
        Ok(())
    })
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let s = &args.surface;
    let viewport = Viewport::new(s.width, s.height, s.ratio);
    let report = match s.effect {
        EffectKind::Sparkles => {
            let cfg = load_sparkles(s.config.as_deref())?;
            serde_json::json!({
                "effect": "sparkles",
                "viewport": viewport,
                "backingSize": viewport.backing_size(),
                "population": particle_count(
                    viewport.clamped_width(),
                    viewport.clamped_height(),
                    cfg.particle_density,
                ),
                "drawsConnections": cfg.draws_connections(),
                "config": cfg,
            })
        }
        EffectKind::Trails => {
            let cfg = load_trails(s.config.as_deref())?;
            let mut driver = HeadlessDriver::new(
                manager(TrailsEffect::new(cfg.clone()), s.seed),
                viewport,
            );
            driver.mount(Some(CpuSurface::new()));
            serde_json::json!({
                "effect": "trails",
                "viewport": viewport.without_pixel_ratio(),
                "backingSize": viewport.without_pixel_ratio().backing_size(),
                "population": driver.manager().effect().population(),
                "config": cfg,
            })
        }
    };
    let text = serde_json::to_string_pretty(&report).context("serialize report")?;
    println!("{text}");
    Ok(())
}

fn with_driver<F>(args: &SurfaceArgs, run: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut dyn FrameSource) -> anyhow::Result<()>,
{
    let viewport = Viewport::new(args.width, args.height, args.ratio);
    match args.effect {
        EffectKind::Sparkles => {
            let cfg = load_sparkles(args.config.as_deref())?;
            let mut driver =
                HeadlessDriver::new(manager(SparklesEffect::new(cfg), args.seed), viewport);
            mount(&mut driver)?;
            run(&mut driver)
        }
        EffectKind::Trails => {
            let cfg = load_trails(args.config.as_deref())?;
            let mut driver =
                HeadlessDriver::new(manager(TrailsEffect::new(cfg), args.seed), viewport);
            mount(&mut driver)?;
            run(&mut driver)
        }
    }
}

/// Object-safe view of a headless driver over a CPU surface, whatever the effect.
trait FrameSource {
    fn run_for(&mut self, ms: f64);
    fn run_until_drawn(&mut self, frames: u64, max_ticks: usize) -> u64;
    fn snapshot(&self) -> Option<FrameRGBA>;
}

impl<E: Effect> FrameSource for HeadlessDriver<CpuSurface, E> {
    fn run_for(&mut self, ms: f64) {
        HeadlessDriver::run_for(self, ms);
    }

    fn run_until_drawn(&mut self, frames: u64, max_ticks: usize) -> u64 {
        HeadlessDriver::run_until_drawn(self, frames, max_ticks)
    }

    fn snapshot(&self) -> Option<FrameRGBA> {
        self.manager().surface().map(CpuSurface::snapshot)
    }
}

fn manager<E: Effect>(effect: E, seed: Option<u64>) -> SurfaceManager<CpuSurface, E> {
    match seed {
        Some(seed) => SurfaceManager::with_seed(effect, seed),
        None => SurfaceManager::new(effect),
    }
}

fn mount<E: Effect>(driver: &mut HeadlessDriver<CpuSurface, E>) -> anyhow::Result<()> {
    match driver.mount(Some(CpuSurface::new())) {
        MountOutcome::Running => Ok(()),
        MountOutcome::Inert => anyhow::bail!(
            "surface could not be created for viewport {:?}",
            driver.viewport()
        ),
    }
}

fn load_sparkles(path: Option<&Path>) -> anyhow::Result<SparklesConfig> {
    let cfg = match path {
        Some(p) => SparklesConfig::from_path(p)?,
        None => SparklesConfig::default(),
    };
    cfg.validate()?;
    Ok(cfg)
}

fn load_trails(path: Option<&Path>) -> anyhow::Result<TrailsConfig> {
    let cfg = match path {
        Some(p) => TrailsConfig::from_path(p)?,
        None => TrailsConfig::default(),
    };
    cfg.validate()?;
    Ok(cfg)
}

fn write_png(path: &Path, frame: &FrameRGBA) -> anyhow::Result<()> {
    if frame.width == 0 || frame.height == 0 {
        anyhow::bail!("nothing to write: the viewport has zero area");
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let data = unpremultiply(&frame.data);
    image::save_buffer_with_format(
        path,
        &data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

fn unpremultiply(data: &[u8]) -> Vec<u8> {
    let mut out = data.to_vec();
    for px in out.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
    out
}
