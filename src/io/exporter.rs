// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Scene export

use super::renderer::{RenderOutcome, Renderer};
use crate::error::{Result, ScadError};
use crate::scene::Object;
use log::debug;
use std::path::Path;

/// Render `object` to `path` with the default renderer.
///
/// The output format follows the extension of `path`, as decided by OpenSCAD.
pub fn save_as<O: Object + ?Sized>(object: &O, path: impl AsRef<Path>) -> Result<RenderOutcome> {
    save_with(&Renderer::from_env(), object, path)
}

/// Render `object` to `path` with a specific renderer
pub fn save_with<O: Object + ?Sized>(
    renderer: &Renderer,
    object: &O,
    path: impl AsRef<Path>,
) -> Result<RenderOutcome> {
    let source = object.scad_with_transforms();
    debug!("Exporting scene ({} bytes): {}", source.len(), source);
    renderer.render_source(&source, path.as_ref())
}

/// Write the OpenSCAD source of `object` to `path` without rendering it
pub fn write_scad<O: Object + ?Sized>(object: &O, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let source = object.scad_with_transforms();
    std::fs::write(path, format!("{}\n", source)).map_err(|e| ScadError::io(path, e))?;
    debug!("Wrote {} bytes of OpenSCAD to {}", source.len() + 1, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Cube;
    use tempfile::TempDir;

    #[test]
    fn test_write_scad() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("cube.scad");

        let mut cube = Cube::new(3, true)?;
        cube.translate(1, 2, 3)?;
        write_scad(&cube, &path)?;

        let written = std::fs::read_to_string(&path)?;
        assert_eq!(
            written,
            "translate(v=[1, 2, 3]) cube(size=[3, 3, 3], center=true);\n"
        );
        Ok(())
    }

    #[test]
    fn test_write_scad_reports_path() {
        let cube = Cube::new(1, false).unwrap();
        let err = write_scad(&cube, "/nonexistent-dir/scadgen/cube.scad").unwrap_err();
        assert!(matches!(err, ScadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent-dir/scadgen/cube.scad"));
    }
}
