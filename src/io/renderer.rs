// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Subprocess runner for the OpenSCAD renderer

use crate::config::RendererConfig;
use crate::error::{Result, ScadError};
use log::{debug, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, Instant};

pub const DEFAULT_PROGRAM: &str = "openscad";

/// Result of a successful render
#[derive(Debug, Clone)]
pub struct RenderOutcome {
    pub output: PathBuf,
    pub duration: Duration,
    pub stdout: String,
    pub stderr: String,
}

/// Invokes the renderer on OpenSCAD source.
///
/// The source is written to a scratch `.scad` file that is removed once the
/// renderer exits, whatever the outcome.
#[derive(Debug, Clone)]
pub struct Renderer {
    program: String,
    extra_args: Vec<String>,
    quiet: bool,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            extra_args: Vec::new(),
            quiet: true,
        }
    }

    /// Default renderer, honoring `OPENSCAD_PATH` and `SCADGEN_QUIET`
    pub fn from_env() -> Self {
        let mut config = RendererConfig::default();
        config.apply_env();
        Self::with_config(&config)
    }

    pub fn with_config(config: &RendererConfig) -> Self {
        Self {
            program: config.program().to_string(),
            extra_args: config.extra_args.clone(),
            quiet: config.quiet,
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Arguments placed before `-o`, e.g. `--export-format binstl`
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Check that the renderer can be launched
    pub fn is_available(&self) -> bool {
        Command::new(&self.program).arg("--version").output().is_ok()
    }

    /// Render OpenSCAD `source` into `output`
    pub fn render_source(&self, source: &str, output: &Path) -> Result<RenderOutcome> {
        let mut scratch = tempfile::Builder::new()
            .prefix("scadgen-")
            .suffix(".scad")
            .tempfile()
            .map_err(|e| ScadError::io(std::env::temp_dir(), e))?;

        writeln!(scratch, "{}", source)
            .and_then(|_| scratch.flush())
            .map_err(|e| ScadError::io(scratch.path(), e))?;

        // Close our handle; the path is still deleted on drop
        let input = scratch.into_temp_path();

        let mut command = self.command(&input, output);
        debug!("Running {:?}", command);

        let start = Instant::now();
        let result = command.output().map_err(|source| ScadError::RendererUnavailable {
            program: self.program.clone(),
            source,
        })?;
        let duration = start.elapsed();

        let stdout = String::from_utf8_lossy(&result.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&result.stderr).trim().to_string();

        if !result.status.success() {
            return Err(ScadError::RenderFailure {
                status: result.status,
                stderr,
            });
        }

        if !stderr.is_empty() {
            warn!("{} reported: {}", self.program, stderr);
        }
        info!("Rendered {} in {:.2?}", output.display(), duration);

        Ok(RenderOutcome {
            output: output.to_path_buf(),
            duration,
            stdout,
            stderr,
        })
    }

    fn command(&self, input: &Path, output: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.extra_args).arg("-o").arg(output).arg(input);
        if self.quiet {
            command.arg("--quiet");
        }
        command
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_creation() {
        let renderer = Renderer::new();
        assert_eq!(renderer.program(), "openscad");
        assert!(renderer.quiet);
        assert!(renderer.extra_args.is_empty());
    }

    #[test]
    fn test_command_line_layout() {
        let renderer = Renderer::new()
            .with_program("/opt/openscad/bin/openscad")
            .with_args(["--export-format", "binstl"]);
        let command = renderer.command(Path::new("in.scad"), Path::new("out.stl"));

        assert_eq!(command.get_program(), "/opt/openscad/bin/openscad");
        let args: Vec<_> = command.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(
            args,
            ["--export-format", "binstl", "-o", "out.stl", "in.scad", "--quiet"]
        );
    }

    #[test]
    fn test_loud_renderer_omits_quiet_flag() {
        let renderer = Renderer::new().quiet(false);
        let command = renderer.command(Path::new("in.scad"), Path::new("out.stl"));
        assert!(command.get_args().all(|a| a != "--quiet"));
    }

    #[test]
    fn test_missing_program_is_unavailable() {
        let renderer = Renderer::new().with_program("/nonexistent/scadgen-test-openscad");
        assert!(!renderer.is_available());

        let err = renderer
            .render_source("cube(1);", Path::new("unused.stl"))
            .unwrap_err();
        assert!(matches!(err, ScadError::RendererUnavailable { .. }));
    }

    #[test]
    fn test_from_env_follows_openscad_path() {
        let expected = std::env::var("OPENSCAD_PATH")
            .ok()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());
        assert_eq!(Renderer::from_env().program(), expected);
    }

    #[test]
    fn test_with_config_builds_the_command() {
        let mut config = RendererConfig {
            openscad_path: None,
            extra_args: vec!["--export-format".into(), "asciistl".into()],
            quiet: true,
        };
        config.apply_vars(|name| match name {
            "OPENSCAD_PATH" => Some("/opt/openscad/openscad".into()),
            "SCADGEN_QUIET" => Some("false".into()),
            _ => None,
        });

        let renderer = Renderer::with_config(&config);
        let command = renderer.command(Path::new("in.scad"), Path::new("out.stl"));

        assert_eq!(command.get_program(), "/opt/openscad/openscad");
        let args: Vec<_> = command.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(args, ["--export-format", "asciistl", "-o", "out.stl", "in.scad"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_launchable_program_is_available() {
        assert!(Renderer::new().with_program("sh").is_available());
    }
}
