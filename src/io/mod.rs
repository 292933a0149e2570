// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - scene import, OpenSCAD export, and the renderer subprocess

mod exporter;
mod importer;
mod renderer;

pub use exporter::{save_as, save_with, write_scad};
pub use importer::{import_scene_file, parse_scene, scene_to_json};
pub use renderer::{RenderOutcome, Renderer, DEFAULT_PROGRAM};
