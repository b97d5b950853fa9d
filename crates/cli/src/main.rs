#![deny(unsafe_code)]
//! CLI binary for the lumina generative artwork.
//!
//! Subcommands:
//! - `render [preset]` — run a preset N frames, write PNG
//! - `list` — print available presets

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use lumina_core::SketchError;
use lumina_sketch::{Recipe, Scene, SketchConfig};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "lumina", about = "Generative life artwork CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a preset for N frames and write a PNG snapshot.
    Render {
        /// Preset name (memoir, ember, stillness, violet).
        #[arg(default_value = "memoir")]
        preset: String,

        /// Canvas width in pixels (0 keeps the preset's width).
        #[arg(short = 'W', long, default_value_t = 0)]
        width: usize,

        /// Canvas height in pixels (0 keeps the preset's height).
        #[arg(short = 'H', long, default_value_t = 0)]
        height: usize,

        /// Number of frames to render.
        #[arg(short, long, default_value_t = 300)]
        frames: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,

        /// Configuration overrides as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Resize the canvas mid-run, as WIDTHxHEIGHT@FRAME
        /// (e.g. "1800x900@100").
        #[arg(long)]
        resize: Option<String>,
    },
    /// List available presets.
    List,
}

/// A mid-run canvas resize request.
#[derive(Debug)]
struct ResizeAt {
    width: usize,
    height: usize,
    frame: usize,
}

/// Parses a "WIDTHxHEIGHT@FRAME" resize spec.
fn parse_resize(spec: &str) -> Result<ResizeAt, CliError> {
    let err = || CliError::Resize(spec.to_string());
    let (dims, frame) = spec.split_once('@').ok_or_else(err)?;
    let (w, h) = dims.split_once('x').ok_or_else(err)?;
    Ok(ResizeAt {
        width: w.parse().map_err(|_| err())?,
        height: h.parse().map_err(|_| err())?,
        frame: frame.parse().map_err(|_| err())?,
    })
}

/// Resolves CLI arguments into a reproducible [`Recipe`]: preset defaults,
/// then JSON overrides, then explicit width/height flags.
fn assemble_recipe(
    preset: String,
    width: usize,
    height: usize,
    frames: usize,
    seed: u64,
    params: serde_json::Value,
) -> Result<Recipe, CliError> {
    let mut config = SketchConfig::from_name(&preset)?;
    config.apply_params(&params);
    Ok(Recipe {
        preset,
        width: if width > 0 { width } else { config.width },
        height: if height > 0 { height } else { config.height },
        params,
        seed,
        frames,
    })
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let presets = SketchConfig::list_names();
            if cli.json {
                let info = serde_json::json!({ "presets": presets });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Presets:");
                for name in presets {
                    println!("  {name}");
                }
            }
        }
        Command::Render {
            preset,
            width,
            height,
            frames,
            seed,
            output,
            params,
            resize,
        } => {
            let params: serde_json::Value =
                serde_json::from_str(&params).map_err(CliError::Params)?;
            let resize = resize.as_deref().map(parse_resize).transpose()?;

            let recipe = assemble_recipe(preset, width, height, frames, seed, params)?;
            let mut scene = Scene::from_recipe(&recipe)?;
            for frame in 0..recipe.frames {
                if let Some(r) = &resize {
                    if r.frame == frame {
                        scene.resize(r.width, r.height)?;
                    }
                }
                scene.step()?;
            }

            lumina_sketch::snapshot::write_png(scene.surface(), &output).map_err(|e| match e {
                SketchError::Io(message) => CliError::Snapshot {
                    path: output.clone(),
                    message,
                },
                other => CliError::Sketch(other),
            })?;

            if cli.json {
                // The recipe plus the output path is everything needed to
                // reproduce this render.
                let mut info = serde_json::to_value(&recipe)?;
                info["output"] = serde_json::Value::String(output.display().to_string());
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} ({}x{}, {} frames, seed {}) -> {}",
                    recipe.preset,
                    scene.width(),
                    scene.height(),
                    recipe.frames,
                    recipe.seed,
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
