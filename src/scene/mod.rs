// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Scene graph
//!
//! Objects are built in code, transformed, combined, and finally rendered to
//! OpenSCAD source text.

pub mod args;
mod composite;
mod node;
mod object;
mod primitives;
mod repr;
mod transform;

pub use args::{Dims, Extent, DEFAULT_SIDES};
pub use composite::{difference, group, intersection, union, Difference, Group, Intersection, Union};
pub use node::Node;
pub use object::{Object, Scad};
pub use primitives::{Circle, Cube, Cylinder, Sphere, Square};
pub use transform::{TransformOp, Transformation};

pub(crate) use repr::NodeRepr;
