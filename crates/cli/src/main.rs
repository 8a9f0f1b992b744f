use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use inscribed::api::{
    analyze, sample_preset, Analysis, BlobCfg, CurvePoint, PairSample, PipelineCfg, Preset,
    Rectangle, ReplayToken, SurfaceGrid, Tolerance,
};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod provenance;

use provenance::{write_sidecar, Payload, Provenance};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Find inscribed rectangles on closed planar curves")]
struct Cmd {
    /// Optional free-form label; propagated to provenance and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Run the pipeline on a point file and write the result JSON
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Pipeline settings (JSON, missing fields take defaults)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Absolute detector tolerance; overrides the config
        #[arg(long)]
        tolerance: Option<f64>,
        /// Use the input points as the curve, without resampling or smoothing
        #[arg(long)]
        raw: bool,
        /// Include every lifted pair sample in the output (n² entries)
        #[arg(long)]
        with_samples: bool,
    },
    /// Write a preset curve as a point file
    Preset {
        #[arg(long, value_enum)]
        shape: Shape,
        #[arg(long, default_value_t = 120)]
        points: usize,
        #[arg(long)]
        out: PathBuf,
        /// Seed for random shapes
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Shape {
    Circle,
    Ellipse,
    Superellipse,
    Blob,
}

impl Shape {
    fn preset(self, seed: u64) -> Preset {
        match self {
            Shape::Circle => Preset::Circle,
            Shape::Ellipse => Preset::Ellipse { rx: 2.0, ry: 1.0 },
            Shape::Superellipse => Preset::Superellipse { exponent: 4.0 },
            Shape::Blob => Preset::Blob {
                cfg: BlobCfg::default(),
                token: ReplayToken { seed, index: 0 },
            },
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            input,
            out,
            config,
            tolerance,
            raw,
            with_samples,
        } => {
            let mut cfg = load_cfg(config.as_deref())?;
            if let Some(t) = tolerance {
                cfg.tolerance = Tolerance::Absolute(t);
            }
            cfg.skip_conditioning |= raw;
            run(&input, &out, cfg, with_samples, cmd.tag)
        }
        Action::Preset {
            shape,
            points,
            out,
            seed,
        } => preset(shape, points, seed, &out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn load_cfg(path: Option<&Path>) -> Result<PipelineCfg> {
    let Some(path) = path else {
        return Ok(PipelineCfg::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

#[derive(Serialize)]
struct RunOutput<'a> {
    tolerance: f64,
    curve: &'a [CurvePoint],
    grid: &'a SurfaceGrid,
    rectangles: &'a [Rectangle],
    #[serde(skip_serializing_if = "Option::is_none")]
    samples: Option<&'a [PairSample]>,
}

impl<'a> RunOutput<'a> {
    fn new(analysis: &'a Analysis, with_samples: bool) -> Self {
        Self {
            tolerance: analysis.tolerance,
            curve: &analysis.curve,
            grid: &analysis.grid,
            rectangles: &analysis.rectangles,
            samples: with_samples.then_some(analysis.samples.as_slice()),
        }
    }
}

fn run(
    input: &Path,
    out: &Path,
    cfg: PipelineCfg,
    with_samples: bool,
    tag: Option<String>,
) -> Result<()> {
    cfg.validate()?;
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "run");
    let raw = points::read_points(input)?;
    cfg.check_input(&raw)
        .with_context(|| format!("input {}", input.display()))?;
    let analysis = analyze(&raw, &cfg);
    tracing::info!(
        points = analysis.curve.len(),
        samples = analysis.samples.len(),
        rectangles = analysis.rectangles.len(),
        tolerance = analysis.tolerance,
        "analysis"
    );
    write_json(out, &RunOutput::new(&analysis, with_samples))?;

    let payload = Payload::new(serde_json::to_value(cfg)?)
        .with_tag(tag)
        .with_summary(serde_json::json!({
            "input": input.to_string_lossy(),
            "input_points": raw.len(),
            "curve_points": analysis.curve.len(),
            "samples": analysis.samples.len(),
            "rectangles": analysis.rectangles.len(),
            "tolerance": analysis.tolerance,
        }));
    write_sidecar(out, payload)?;
    Ok(())
}

fn preset(shape: Shape, count: usize, seed: u64, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(?shape, count, seed, out = %out.display(), "preset");
    let pts = sample_preset(shape.preset(seed), count);
    write_json(out, &pts)?;
    let payload = Payload::new(serde_json::json!({
        "shape": format!("{shape:?}").to_lowercase(),
        "points": count,
        "seed": seed,
    }))
    .with_tag(tag);
    write_sidecar(out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&Provenance::bare(tag))?
    );
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(out: &Path, value: &T) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))
}
