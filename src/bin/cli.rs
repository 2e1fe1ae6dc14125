// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Brickwrap Contributors

//! Brickwrap CLI

use anyhow::{Context, Result};
use brickwrap::{io, BoxUnfoldProjector, ExteriorFilter};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "brickwrap")]
#[command(about = "Box-unfold UV layouts and printable texture templates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input STL file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Template PNG output path
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Rasterization scale in pixels per model unit
    #[arg(short, long, default_value = "50")]
    scale: f32,

    /// Exclude triangles not visible from outside the hull
    #[arg(short, long)]
    exterior: bool,

    /// Also write the mesh with UVs as OBJ
    #[arg(long, value_name = "FILE")]
    obj: Option<PathBuf>,

    /// Also write the atlas layout as JSON
    #[arg(long, value_name = "FILE")]
    layout: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Unfold a mesh and write the template image
    Unfold {
        /// Input STL file
        input: PathBuf,

        /// Template PNG output path
        #[arg(short, long)]
        output: PathBuf,

        /// Rasterization scale in pixels per model unit
        #[arg(short, long, default_value = "50")]
        scale: f32,

        /// Exclude triangles not visible from outside the hull
        #[arg(short, long)]
        exterior: bool,

        /// Also write the mesh with UVs as OBJ
        #[arg(long)]
        obj: Option<PathBuf>,

        /// Also write the atlas layout as JSON
        #[arg(long)]
        layout: Option<PathBuf>,
    },

    /// Print mesh and layout statistics without writing anything
    Info {
        /// Input STL file
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Unfold {
            input,
            output,
            scale,
            exterior,
            obj,
            layout,
        }) => {
            unfold_command(
                input,
                output,
                *scale,
                *exterior,
                obj.as_deref(),
                layout.as_deref(),
                cli.verbose,
            )?;
        }
        Some(Commands::Info { input }) => {
            info_command(input)?;
        }
        Some(Commands::Version) => {
            println!("brickwrap v{}", env!("CARGO_PKG_VERSION"));
        }
        None => {
            // Default behavior: unfold input to output
            if let (Some(input), Some(output)) = (&cli.input, &cli.output) {
                unfold_command(
                    input,
                    output,
                    cli.scale,
                    cli.exterior,
                    cli.obj.as_deref(),
                    cli.layout.as_deref(),
                    cli.verbose,
                )?;
            } else {
                eprintln!("Error: Input and output files required");
                eprintln!("Usage: brickwrap <INPUT> --output <OUTPUT>");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn unfold_command(
    input: &Path,
    output: &Path,
    scale: f32,
    exterior: bool,
    obj: Option<&Path>,
    layout_out: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let mesh = io::import_stl(input)?;
    if verbose {
        println!(
            "{} {} ({} triangles)",
            "Loaded".green().bold(),
            input.display(),
            mesh.triangle_count()
        );
    }

    let filter = if exterior {
        ExteriorFilter::Raycast
    } else {
        ExteriorFilter::Off
    };
    let projection = BoxUnfoldProjector::new()
        .with_scale(scale)
        .with_exterior_filter(filter)
        .project(&mesh)
        .context("Projection failed")?;

    std::fs::write(output, &projection.template_png)
        .with_context(|| format!("Failed to write template: {}", output.display()))?;
    println!(
        "{} template {} ({}x{} atlas units)",
        "Wrote".green().bold(),
        output.display(),
        projection.layout.tex_w,
        projection.layout.tex_h
    );

    if exterior {
        let excluded = (0..projection.triangle_count())
            .filter(|&i| projection.is_excluded(i))
            .count();
        if verbose || excluded > 0 {
            println!(
                "  {} of {} triangles excluded as interior",
                excluded,
                projection.triangle_count()
            );
        }
    }

    if let Some(obj_path) = obj {
        io::export_obj(&mesh, &projection.uvs, obj_path)?;
        println!("{} {}", "Wrote".green().bold(), obj_path.display());
    }

    if let Some(layout_path) = layout_out {
        io::write_layout_json(&projection.layout, layout_path)?;
        println!("{} {}", "Wrote".green().bold(), layout_path.display());
    }

    Ok(())
}

fn info_command(input: &Path) -> Result<()> {
    use brickwrap::AtlasLayout;

    let mesh = io::import_stl(input)?;
    let bbox = mesh.bounding_box();
    let size = bbox.size();

    println!("{}", input.display().to_string().bold());
    println!("  Triangles: {}", mesh.triangle_count());
    println!(
        "  Bounds: [{:.3}, {:.3}, {:.3}] to [{:.3}, {:.3}, {:.3}]",
        bbox.min.x, bbox.min.y, bbox.min.z, bbox.max.x, bbox.max.y, bbox.max.z
    );
    println!(
        "  Extents: L={:.3} H={:.3} W={:.3}",
        size.x, size.y, size.z
    );

    match AtlasLayout::new(&bbox) {
        Ok(layout) => {
            println!("  Atlas: {:.3} x {:.3}", layout.tex_w, layout.tex_h);
        }
        Err(err) => {
            println!("  Atlas: {} {}", "unavailable:".red(), err);
        }
    }

    Ok(())
}
