// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! The capability set shared by every drawable object

use super::transform::Transformation;
use crate::error::Result;
use crate::io::RenderOutcome;
use nalgebra::Vector3;
use std::fmt;
use std::path::Path;

/// Anything that can be placed in a scene.
///
/// Implementors only provide access to their transform list and a writer for
/// their own statement; transforms and full rendering come for free. Shape
/// fields are fixed once an object is constructed, only the transform list
/// grows afterwards.
pub trait Object {
    fn transforms(&self) -> &[Transformation];

    /// Storage hook for the transform methods below; append through
    /// `scale`/`resize`/`rotate`/`translate` instead.
    #[doc(hidden)]
    fn push_transform(&mut self, transform: Transformation);

    /// Write this object's own statement, without its transforms
    fn write_scad(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Write every transform, most recently applied first, then the statement.
    ///
    /// The last transform applied ends up outermost, because each OpenSCAD
    /// operator wraps everything that follows it.
    fn write_scad_with_transforms(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for transform in self.transforms().iter().rev() {
            write!(f, "{} ", transform)?;
        }
        self.write_scad(f)
    }

    /// Own statement as a string
    fn scad(&self) -> String {
        Scad::own(self).to_string()
    }

    /// Full statement including transforms
    fn scad_with_transforms(&self) -> String {
        Scad::full(self).to_string()
    }

    fn scale(
        &mut self,
        x: impl Into<f64>,
        y: impl Into<f64>,
        z: impl Into<f64>,
    ) -> Result<&mut Self>
    where
        Self: Sized,
    {
        let transform = Transformation::scale(x.into(), y.into(), z.into())?;
        self.push_transform(transform);
        Ok(self)
    }

    fn scale_uniform(&mut self, factor: impl Into<f64>) -> Result<&mut Self>
    where
        Self: Sized,
    {
        let factor = factor.into();
        self.scale(factor, factor, factor)
    }

    /// Resize to an absolute bounding box
    fn resize(
        &mut self,
        x: impl Into<f64>,
        y: impl Into<f64>,
        z: impl Into<f64>,
    ) -> Result<&mut Self>
    where
        Self: Sized,
    {
        let transform = Transformation::resize(x.into(), y.into(), z.into())?;
        self.push_transform(transform);
        Ok(self)
    }

    /// Rotate by angles in degrees
    fn rotate(
        &mut self,
        x: impl Into<f64>,
        y: impl Into<f64>,
        z: impl Into<f64>,
    ) -> Result<&mut Self>
    where
        Self: Sized,
    {
        let transform = Transformation::rotate(x.into(), y.into(), z.into())?;
        self.push_transform(transform);
        Ok(self)
    }

    fn rotate_v(&mut self, angles: Vector3<f64>) -> Result<&mut Self>
    where
        Self: Sized,
    {
        self.rotate(angles.x, angles.y, angles.z)
    }

    fn translate(
        &mut self,
        x: impl Into<f64>,
        y: impl Into<f64>,
        z: impl Into<f64>,
    ) -> Result<&mut Self>
    where
        Self: Sized,
    {
        let transform = Transformation::translate(x.into(), y.into(), z.into())?;
        self.push_transform(transform);
        Ok(self)
    }

    fn translate_v(&mut self, offset: Vector3<f64>) -> Result<&mut Self>
    where
        Self: Sized,
    {
        self.translate(offset.x, offset.y, offset.z)
    }

    // By-value forms, for building a child inline:
    // `union([Cube::new(1, false)?.translated(5, 0, 0)?, ...])`

    fn scaled(mut self, x: impl Into<f64>, y: impl Into<f64>, z: impl Into<f64>) -> Result<Self>
    where
        Self: Sized,
    {
        self.scale(x, y, z)?;
        Ok(self)
    }

    fn resized(mut self, x: impl Into<f64>, y: impl Into<f64>, z: impl Into<f64>) -> Result<Self>
    where
        Self: Sized,
    {
        self.resize(x, y, z)?;
        Ok(self)
    }

    fn rotated(mut self, x: impl Into<f64>, y: impl Into<f64>, z: impl Into<f64>) -> Result<Self>
    where
        Self: Sized,
    {
        self.rotate(x, y, z)?;
        Ok(self)
    }

    fn translated(
        mut self,
        x: impl Into<f64>,
        y: impl Into<f64>,
        z: impl Into<f64>,
    ) -> Result<Self>
    where
        Self: Sized,
    {
        self.translate(x, y, z)?;
        Ok(self)
    }

    /// Render this object to `path` through the default OpenSCAD renderer
    fn save_as(&self, path: impl AsRef<Path>) -> Result<RenderOutcome>
    where
        Self: Sized,
    {
        crate::io::save_as(self, path)
    }
}

/// Display adapter over an object's SCAD text
pub struct Scad<'a, T: ?Sized> {
    object: &'a T,
    with_transforms: bool,
}

impl<'a, T: Object + ?Sized> Scad<'a, T> {
    pub fn own(object: &'a T) -> Self {
        Self {
            object,
            with_transforms: false,
        }
    }

    pub fn full(object: &'a T) -> Self {
        Self {
            object,
            with_transforms: true,
        }
    }
}

impl<T: Object + ?Sized> fmt::Display for Scad<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.with_transforms {
            self.object.write_scad_with_transforms(f)
        } else {
            self.object.write_scad(f)
        }
    }
}
