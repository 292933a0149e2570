// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Constructor argument normalization and validation

use crate::error::{Result, ScadError};
use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// Default `$fn` resolution for round primitives
pub const DEFAULT_SIDES: u32 = 12;

/// An `N`-dimensional extent given either as one number or as `N` numbers.
///
/// A single number expands to a uniform extent, so `Dims::<3>::from(5)` and
/// `Dims::from([5, 5, 5])` are the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dims<const N: usize>(pub(crate) [f64; N]);

impl<const N: usize> Dims<N> {
    pub fn uniform(value: f64) -> Self {
        Self([value; N])
    }

    pub fn as_array(&self) -> &[f64; N] {
        &self.0
    }
}

macro_rules! impl_dims_from {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> From<$t> for Dims<N> {
                fn from(value: $t) -> Self {
                    Self([f64::from(value); N])
                }
            }

            impl<const N: usize> From<[$t; N]> for Dims<N> {
                fn from(values: [$t; N]) -> Self {
                    Self(values.map(f64::from))
                }
            }
        )*
    };
}

impl_dims_from!(f64, f32, i32, u32, i16, u16, i8, u8);

impl From<(f64, f64)> for Dims<2> {
    fn from((a, b): (f64, f64)) -> Self {
        Self([a, b])
    }
}

impl From<(f64, f64, f64)> for Dims<3> {
    fn from((a, b, c): (f64, f64, f64)) -> Self {
        Self([a, b, c])
    }
}

impl From<Vector2<f64>> for Dims<2> {
    fn from(v: Vector2<f64>) -> Self {
        Self([v.x, v.y])
    }
}

impl From<Vector3<f64>> for Dims<3> {
    fn from(v: Vector3<f64>) -> Self {
        Self([v.x, v.y, v.z])
    }
}

/// Serialized form of an extent: a bare number or a list whose length is
/// only known once it is resolved against a constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Extent {
    Uniform(f64),
    Each(Vec<f64>),
}

impl Extent {
    pub fn resolve<const N: usize>(self, context: &'static str, param: &str) -> Result<Dims<N>> {
        match self {
            Extent::Uniform(value) => Ok(Dims::uniform(value)),
            Extent::Each(values) => {
                let len = values.len();
                <[f64; N]>::try_from(values).map(Dims).map_err(|_| {
                    ScadError::invalid(
                        context,
                        format!(
                            "expects `{param}` to be either a single number or a list of {n} numbers, \
                             instead found a list of {len}",
                            n = N
                        ),
                    )
                })
            }
        }
    }
}

/// Reject NaN and infinities.
pub fn finite(context: &'static str, param: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScadError::invalid(
            context,
            format!("expects `{param}` to be a finite number, instead found: `{value}`"),
        ))
    }
}

/// A length: finite and not negative.
pub fn length(context: &'static str, param: &str, value: f64) -> Result<f64> {
    let value = finite(context, param, value)?;
    if value < 0.0 {
        return Err(ScadError::invalid(
            context,
            format!("expects `{param}` to be non-negative, instead found: `{value}`"),
        ));
    }
    Ok(value)
}

pub fn lengths<const N: usize>(
    context: &'static str,
    param: &str,
    dims: Dims<N>,
) -> Result<[f64; N]> {
    for value in dims.0 {
        length(context, param, value)?;
    }
    Ok(dims.0)
}

/// `$fn` of 0 leaves the resolution to the renderer; 1 and 2 are degenerate.
pub fn sides(context: &'static str, sides: u32) -> Result<u32> {
    if sides == 1 || sides == 2 {
        return Err(ScadError::invalid(
            context,
            format!("expects `sides` to be 0 or at least 3, instead found: `{sides}`"),
        ));
    }
    Ok(sides)
}
