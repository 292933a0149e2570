// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Renderer configuration

use crate::io::DEFAULT_PROGRAM;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File looked up in the working directory by [`RendererConfig::load`]
pub const CONFIG_FILE: &str = "scadgen.toml";

/// How to invoke OpenSCAD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// OpenSCAD executable path
    pub openscad_path: Option<String>,
    /// Arguments passed before `-o`
    pub extra_args: Vec<String>,
    /// Pass `--quiet` to the renderer
    pub quiet: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            openscad_path: None, // Resolved through PATH
            extra_args: Vec::new(),
            quiet: true,
        }
    }
}

impl RendererConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: RendererConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `scadgen.toml` if present, then apply environment variable overrides
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_env();
        Ok(config)
    }

    /// `OPENSCAD_PATH` and `SCADGEN_QUIET` take precedence over file values
    pub fn apply_env(&mut self) {
        self.apply_vars(|name| std::env::var(name).ok());
    }

    /// Apply overrides from any variable source.
    ///
    /// An empty `OPENSCAD_PATH` is ignored, and a `SCADGEN_QUIET` that is not
    /// `true` or `false` leaves `quiet` as it was.
    pub fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(openscad) = var("OPENSCAD_PATH") {
            if !openscad.is_empty() {
                self.openscad_path = Some(openscad);
            }
        }

        if let Some(quiet) = var("SCADGEN_QUIET") {
            self.quiet = quiet.trim().parse().unwrap_or(self.quiet);
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Executable to launch
    pub fn program(&self) -> &str {
        self.openscad_path.as_deref().unwrap_or(DEFAULT_PROGRAM)
    }
}
