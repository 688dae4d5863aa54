//! shape-gen - procedural circle and ring meshes
//!
//! Generates a disk, arc, ring, spiral or tube and writes it as a Wavefront
//! OBJ file.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nether_shapes::{ArcGeometry, ArcShape, Config, RingParams, ShapeMesh, config, write_obj};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "shape-gen")]
#[command(about = "Procedural circle and ring mesh generator")]
#[command(version)]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output OBJ file
    #[arg(short, long, global = true, default_value = "shape.obj")]
    output: PathBuf,

    /// Sides per unit of scaled radius (overrides config)
    #[arg(short, long, global = true)]
    density: Option<f32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filled circle or pie slice, optionally extruded into a cylinder
    Disk {
        /// Circle radius
        #[arg(short, long)]
        radius: f32,

        /// Fraction of a full turn (0-1)
        #[arg(short, long, default_value_t = 1.0)]
        percent: f32,

        /// Extrusion height (0 for a flat two-sided shape)
        #[arg(long, default_value_t = 0.0)]
        height: f32,

        /// Start rotation in turns
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        offset: f32,
    },

    /// Ring, arc band or spiral ramp, optionally extruded into a tube
    Ring {
        /// Outer radius
        #[arg(long)]
        outer: f32,

        /// Inner radius
        #[arg(long)]
        inner: f32,

        /// Fraction of a full turn (sign is ignored)
        #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
        percent: f32,

        /// Extrusion height (0 for a flat two-sided shape)
        #[arg(long, default_value_t = 0.0)]
        height: f32,

        /// Total drop along the extrusion axis across the sweep
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        spiral: f32,

        /// Taper the outer edge into the inner edge along the sweep
        #[arg(long)]
        diminish_tail: bool,
    },
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(config::load()),
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let mut shape = ArcShape::from_config(&config.generator);
    if let Some(density) = cli.density {
        shape.side_per_unit = density;
    }

    let mut mesh = ShapeMesh::new();
    let (name, geometry): (&str, ArcGeometry) = match cli.command {
        Commands::Disk {
            radius,
            percent,
            height,
            offset,
        } => (
            "disk",
            shape.draw_circle(radius, percent, height, offset, &mut mesh),
        ),

        Commands::Ring {
            outer,
            inner,
            percent,
            height,
            spiral,
            diminish_tail,
        } => {
            let params = RingParams::new(outer, inner)
                .percent(percent)
                .height(height)
                .spiral(spiral)
                .diminish_tail(diminish_tail);
            ("ring", shape.draw_ring(params, &mut mesh))
        }
    };

    if geometry.is_empty() {
        tracing::warn!(
            "radius {} at {} produced no geometry, writing an empty object",
            geometry.radius,
            geometry.percent
        );
    }

    write_obj(&mesh, &cli.output, name)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    tracing::info!(
        "Wrote {} ({} vertices, {} triangles)",
        cli.output.display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    Ok(())
}
