// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! scadgen
//!
//! Build OpenSCAD scenes from Rust: primitives, transforms and boolean
//! operations serialize to OpenSCAD source, which can be handed to the
//! `openscad` binary to produce STL, 3MF, PNG and the other formats it supports.
//!
//! ```no_run
//! use scadgen::prelude::*;
//!
//! # fn main() -> scadgen::Result<()> {
//! let mut hole = Cylinder::new(2, 20)?;
//! hole.translate(0, 0, -5)?;
//! let part = difference(Cube::new(10, true)?, hole);
//! part.save_as("part.stl")?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod scene;
pub mod utils;

pub use config::RendererConfig;
pub use error::{Result, ScadError};
pub use io::{import_scene_file, parse_scene, save_as, write_scad, RenderOutcome, Renderer};
pub use scene::{
    difference, group, intersection, union, Circle, Cube, Cylinder, Difference, Group,
    Intersection, Node, Object, Sphere, Square, TransformOp, Transformation, Union,
};

/// Everything needed to build and export a scene
pub mod prelude {
    pub use crate::error::{Result, ScadError};
    pub use crate::scene::{
        difference, group, intersection, union, Circle, Cube, Cylinder, Difference, Group,
        Intersection, Node, Object, Sphere, Square, Union,
    };
}

/// Render a scene to OpenSCAD source text
pub fn to_scad<O: Object + ?Sized>(object: &O) -> String {
    object.scad_with_transforms()
}
