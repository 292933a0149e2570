// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Transformation records

use super::args;
use crate::error::{Result, ScadError};
use crate::utils::NumList;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The OpenSCAD operator a [`Transformation`] applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformOp {
    Scale,
    Resize,
    Rotate,
    Translate,
}

impl TransformOp {
    /// OpenSCAD operator name
    pub fn name(self) -> &'static str {
        match self {
            TransformOp::Scale => "scale",
            TransformOp::Resize => "resize",
            TransformOp::Rotate => "rotate",
            TransformOp::Translate => "translate",
        }
    }

    /// Keyword the operator takes its vector under
    pub fn arg_name(self) -> &'static str {
        match self {
            TransformOp::Scale | TransformOp::Translate => "v",
            TransformOp::Resize => "newsize",
            TransformOp::Rotate => "a",
        }
    }
}

/// A single transform applied to an object.
///
/// Renders as the OpenSCAD operator call that wraps the statement after it,
/// e.g. `translate(v=[1, 2, 3])`. The only way to obtain one is through the
/// checked constructors (or deserialization, which calls them), so every
/// value carries a finite vector:
///
/// ```compile_fail
/// use scadgen::{TransformOp, Transformation};
///
/// let t = Transformation {
///     op: TransformOp::Translate,
///     vector: nalgebra::Vector3::new(f64::NAN, 0.0, 0.0),
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TransformRepr", into = "TransformRepr")]
pub struct Transformation {
    op: TransformOp,
    vector: Vector3<f64>,
}

impl Transformation {
    pub fn scale(x: f64, y: f64, z: f64) -> Result<Self> {
        Self::checked(TransformOp::Scale, x, y, z)
    }

    pub fn resize(x: f64, y: f64, z: f64) -> Result<Self> {
        Self::checked(TransformOp::Resize, x, y, z)
    }

    /// Rotation angles in degrees about x, y and z
    pub fn rotate(x: f64, y: f64, z: f64) -> Result<Self> {
        Self::checked(TransformOp::Rotate, x, y, z)
    }

    pub fn translate(x: f64, y: f64, z: f64) -> Result<Self> {
        Self::checked(TransformOp::Translate, x, y, z)
    }

    fn checked(op: TransformOp, x: f64, y: f64, z: f64) -> Result<Self> {
        let context = op.name();
        let vector = Vector3::new(
            args::finite(context, "x", x)?,
            args::finite(context, "y", y)?,
            args::finite(context, "z", z)?,
        );
        Ok(Self { op, vector })
    }

    pub fn op(&self) -> TransformOp {
        self.op
    }

    pub fn name(&self) -> &'static str {
        self.op.name()
    }

    pub fn arg_name(&self) -> &'static str {
        self.op.arg_name()
    }

    pub fn vector(&self) -> &Vector3<f64> {
        &self.vector
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}={})",
            self.name(),
            self.arg_name(),
            NumList(self.vector.as_slice())
        )
    }
}

/// Wire form: `{"Translate": [1, 2, 3]}`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum TransformRepr {
    Scale([f64; 3]),
    Resize([f64; 3]),
    Rotate([f64; 3]),
    Translate([f64; 3]),
}

impl TryFrom<TransformRepr> for Transformation {
    type Error = ScadError;

    fn try_from(repr: TransformRepr) -> Result<Self> {
        match repr {
            TransformRepr::Scale([x, y, z]) => Transformation::scale(x, y, z),
            TransformRepr::Resize([x, y, z]) => Transformation::resize(x, y, z),
            TransformRepr::Rotate([x, y, z]) => Transformation::rotate(x, y, z),
            TransformRepr::Translate([x, y, z]) => Transformation::translate(x, y, z),
        }
    }
}

impl From<Transformation> for TransformRepr {
    fn from(t: Transformation) -> Self {
        let v = [t.vector.x, t.vector.y, t.vector.z];
        match t.op {
            TransformOp::Scale => TransformRepr::Scale(v),
            TransformOp::Resize => TransformRepr::Resize(v),
            TransformOp::Rotate => TransformRepr::Rotate(v),
            TransformOp::Translate => TransformRepr::Translate(v),
        }
    }
}

/// Validate a list of wire-form transforms, keeping their order
pub(crate) fn from_reprs(reprs: Vec<TransformRepr>) -> Result<Vec<Transformation>> {
    reprs.into_iter().map(Transformation::try_from).collect()
}
