// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! scadgen CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scadgen::cli::Reporter;
use scadgen::{import_scene_file, io, Object, Renderer, RendererConfig, ScadError};
use std::path::Path;

#[derive(Parser)]
#[command(name = "scadgen")]
#[command(about = "scadgen - turn JSON scene descriptions into OpenSCAD and render them", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Renderer configuration file (defaults to ./scadgen.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print or write the OpenSCAD source of a scene
    Emit {
        /// Input JSON scene
        input: String,

        /// Output .scad file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Render a scene through OpenSCAD
    Render {
        /// Input JSON scene
        input: String,

        /// Output file; OpenSCAD picks the format from its extension
        #[arg(short, long)]
        output: String,
    },

    /// Check that the renderer can be launched
    Check,

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match &cli.command {
        Commands::Emit { input, output } => {
            emit_command(input, output.as_deref(), cli.verbose)?;
        }
        Commands::Render { input, output } => {
            let config = load_config(cli.config.as_deref())?;
            render_command(input, output, &config, cli.verbose)?;
        }
        Commands::Check => {
            let config = load_config(cli.config.as_deref())?;
            let renderer = Renderer::with_config(&config);
            let available = renderer.is_available();
            Reporter::report_renderer(renderer.program(), available);
            if !available {
                std::process::exit(1);
            }
        }
        Commands::Version => {
            println!("scadgen v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn load_config(path: Option<&str>) -> Result<RendererConfig> {
    match path {
        Some(path) => {
            let mut config = RendererConfig::from_file(path)?;
            config.apply_env();
            Ok(config)
        }
        None => RendererConfig::load(),
    }
}

fn emit_command(input: &str, output: Option<&str>, verbose: bool) -> Result<()> {
    if !Path::new(input).exists() {
        Reporter::report_error(&format!("Input file not found: {}", input));
        std::process::exit(1);
    }

    let scene = import_scene_file(input)?;

    match output {
        Some(output) => {
            io::write_scad(&scene, output)
                .with_context(|| format!("Failed to write {}", output))?;
            if verbose {
                Reporter::report_info(&format!("{} nodes", scene.count()));
            }
            Reporter::success(&format!("Wrote {} -> {}", input, output));
        }
        None => println!("{}", scene.scad_with_transforms()),
    }

    Ok(())
}

fn render_command(input: &str, output: &str, config: &RendererConfig, verbose: bool) -> Result<()> {
    if !Path::new(input).exists() {
        Reporter::report_error(&format!("Input file not found: {}", input));
        std::process::exit(1);
    }

    let scene = import_scene_file(input)?;
    let renderer = Renderer::with_config(config);

    if verbose {
        Reporter::progress(&format!("Rendering {} with {}", input, renderer.program()));
    }

    match io::save_with(&renderer, &scene, output) {
        Ok(outcome) => {
            if verbose {
                Reporter::report_render(input, scene.count(), &outcome);
            } else {
                println!("Successfully rendered {} -> {}", input, output);
            }
            Ok(())
        }
        Err(ScadError::RenderFailure { status, stderr }) => {
            Reporter::report_error(&format!("OpenSCAD exited with {}", status));
            if !stderr.is_empty() {
                eprintln!("{}", stderr);
            }
            std::process::exit(1);
        }
        Err(err @ ScadError::RendererUnavailable { .. }) => {
            Reporter::report_error(&err.to_string());
            Reporter::report_warning("Install OpenSCAD or set OPENSCAD_PATH");
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}
