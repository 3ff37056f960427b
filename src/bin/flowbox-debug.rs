use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use flowbox::Scene;

#[derive(Parser)]
#[command(name = "flowbox-debug")]
#[command(about = "Lays out a JSON scene with the flow layout and prints the result")]
struct Args {
    /// Path to the scene .json file
    scene_file: String,

    /// Output format (tree, json)
    #[arg(long, default_value = "tree")]
    format: String,

    /// Save output to file instead of stdout
    #[arg(long)]
    output: Option<String>,

    /// Display density. Overrides the value in the scene file.
    #[arg(long)]
    density: Option<f32>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so piped output stays clean
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    if !Path::new(&args.scene_file).exists() {
        anyhow::bail!("Scene file not found: {}", args.scene_file);
    }

    info!("Loading scene file: {}", args.scene_file);
    let mut scene = Scene::load(&args.scene_file)?;
    if let Some(density) = args.density {
        scene.density = density;
    }

    let report = scene.run(args.debug)?;

    let output_text = match args.format.as_str() {
        "tree" => report.render_tree(),
        "json" => report.to_json()?,
        _ => anyhow::bail!("Unknown format: {}. Use 'tree' or 'json'", args.format),
    };

    if let Some(output_file) = args.output {
        fs::write(&output_file, output_text)
            .with_context(|| format!("Failed to write to file: {}", output_file))?;
        info!("Output written to: {}", output_file);
    } else {
        print!("{}", output_text);
    }

    Ok(())
}
