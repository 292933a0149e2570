// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Primitive shapes
//!
//! Every constructor validates its arguments and fails with
//! [`ScadError::InvalidArgument`](crate::ScadError::InvalidArgument) naming
//! the shape and the parameter at fault.

use super::args::{self, Dims, DEFAULT_SIDES};
use super::object::Object;
use super::repr::{CubeRepr, CylinderRepr, RoundRepr, SquareRepr};
use super::transform::Transformation;
use crate::error::{Result, ScadError};
use crate::utils::{Flag, Num, NumList};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Implements the transform-list half of [`Object`] for a struct with a
/// `transforms` field.
macro_rules! transform_list {
    () => {
        fn transforms(&self) -> &[Transformation] {
            &self.transforms
        }

        fn push_transform(&mut self, transform: Transformation) {
            self.transforms.push(transform);
        }
    };
}
pub(crate) use transform_list;

/// 2D rectangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SquareRepr")]
pub struct Square {
    size: [f64; 2],
    centered: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    transforms: Vec<Transformation>,
}

impl Square {
    /// `size` is one number for a true square or `[width, height]`
    pub fn new(size: impl Into<Dims<2>>, centered: bool) -> Result<Self> {
        Ok(Self {
            size: args::lengths("Square", "size", size.into())?,
            centered,
            transforms: Vec::new(),
        })
    }

    pub fn size(&self) -> [f64; 2] {
        self.size
    }

    pub fn centered(&self) -> bool {
        self.centered
    }
}

impl Object for Square {
    transform_list!();

    fn write_scad(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "square(size={}, center={});",
            NumList(&self.size),
            Flag(self.centered)
        )
    }
}

/// 2D circle approximated by a regular polygon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RoundRepr")]
pub struct Circle {
    radius: f64,
    sides: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    transforms: Vec<Transformation>,
}

impl Circle {
    pub fn new(radius: impl Into<f64>) -> Result<Self> {
        Self::with_sides(radius, DEFAULT_SIDES)
    }

    pub fn with_sides(radius: impl Into<f64>, sides: u32) -> Result<Self> {
        Ok(Self {
            radius: args::length("Circle", "radius", radius.into())?,
            sides: args::sides("Circle", sides)?,
            transforms: Vec::new(),
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }
}

impl Object for Circle {
    transform_list!();

    fn write_scad(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "circle(r={}, $fn={});", Num(self.radius), self.sides)
    }
}

/// Axis-aligned box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CubeRepr")]
pub struct Cube {
    size: [f64; 3],
    centered: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    transforms: Vec<Transformation>,
}

impl Cube {
    /// `size` is one number for a true cube or `[x, y, z]`
    pub fn new(size: impl Into<Dims<3>>, centered: bool) -> Result<Self> {
        Ok(Self {
            size: args::lengths("Cube", "size", size.into())?,
            centered,
            transforms: Vec::new(),
        })
    }

    pub fn size(&self) -> [f64; 3] {
        self.size
    }

    pub fn centered(&self) -> bool {
        self.centered
    }
}

impl Object for Cube {
    transform_list!();

    fn write_scad(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cube(size={}, center={});",
            NumList(&self.size),
            Flag(self.centered)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RoundRepr")]
pub struct Sphere {
    radius: f64,
    sides: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    transforms: Vec<Transformation>,
}

impl Sphere {
    pub fn new(radius: impl Into<f64>) -> Result<Self> {
        Self::with_sides(radius, DEFAULT_SIDES)
    }

    pub fn with_sides(radius: impl Into<f64>, sides: u32) -> Result<Self> {
        Ok(Self {
            radius: args::length("Sphere", "radius", radius.into())?,
            sides: args::sides("Sphere", sides)?,
            transforms: Vec::new(),
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }
}

impl Object for Sphere {
    transform_list!();

    fn write_scad(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sphere(r={}, $fn={});", Num(self.radius), self.sides)
    }
}

/// Cylinder or truncated cone along +z
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CylinderRepr")]
pub struct Cylinder {
    radius: [f64; 2],
    height: f64,
    sides: u32,
    centered: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    transforms: Vec<Transformation>,
}

impl Cylinder {
    /// `radius` is one number, or `[bottom, top]` for a cone
    pub fn new(radius: impl Into<Dims<2>>, height: impl Into<f64>) -> Result<Self> {
        Self::with_options(radius, height, DEFAULT_SIDES, false)
    }

    pub fn with_options(
        radius: impl Into<Dims<2>>,
        height: impl Into<f64>,
        sides: u32,
        centered: bool,
    ) -> Result<Self> {
        let radius = args::lengths("Cylinder", "radius", radius.into())?;
        if radius == [0.0, 0.0] {
            return Err(ScadError::invalid(
                "Cylinder",
                "expects at least one non-zero `radius`",
            ));
        }
        Ok(Self {
            radius,
            height: args::length("Cylinder", "height", height.into())?,
            sides: args::sides("Cylinder", sides)?,
            centered,
            transforms: Vec::new(),
        })
    }

    /// `[bottom, top]`
    pub fn radius(&self) -> [f64; 2] {
        self.radius
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn centered(&self) -> bool {
        self.centered
    }
}

impl Object for Cylinder {
    transform_list!();

    fn write_scad(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cylinder(r1={}, r2={}, h={}, center={}, $fn={});",
            Num(self.radius[0]),
            Num(self.radius[1]),
            Num(self.height),
            Flag(self.centered),
            self.sides
        )
    }
}
