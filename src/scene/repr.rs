// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Wire forms of scene objects
//!
//! A scene description is first read into these unchecked shapes and then
//! converted through the same constructors the builder API uses, so a loaded
//! scene obeys the same rules as one built in code and a rejected one fails
//! with [`ScadError::InvalidArgument`].

use super::args::{Dims, Extent, DEFAULT_SIDES};
use super::composite::{Difference, Group, Intersection, Union};
use super::node::Node;
use super::object::Object;
use super::primitives::{Circle, Cube, Cylinder, Sphere, Square};
use super::transform::{self, TransformRepr};
use crate::error::{Result, ScadError};
use serde::Deserialize;

fn default_sides() -> u32 {
    DEFAULT_SIDES
}

fn with_transforms<T: Object>(mut object: T, transforms: Vec<TransformRepr>) -> Result<T> {
    for transform in transform::from_reprs(transforms)? {
        object.push_transform(transform);
    }
    Ok(object)
}

/// Externally tagged node: `{"Cube": {...}}`
#[derive(Debug, Deserialize)]
pub(crate) enum NodeRepr {
    Square(SquareRepr),
    Circle(RoundRepr),
    Cube(CubeRepr),
    Sphere(RoundRepr),
    Cylinder(CylinderRepr),
    Group(ListRepr),
    Union(ListRepr),
    Intersection(ListRepr),
    Difference(DifferenceRepr),
}

impl TryFrom<NodeRepr> for Node {
    type Error = ScadError;

    fn try_from(repr: NodeRepr) -> Result<Self> {
        Ok(match repr {
            NodeRepr::Square(r) => Node::Square(r.try_into()?),
            NodeRepr::Circle(r) => Node::Circle(r.try_into()?),
            NodeRepr::Cube(r) => Node::Cube(r.try_into()?),
            NodeRepr::Sphere(r) => Node::Sphere(r.try_into()?),
            NodeRepr::Cylinder(r) => Node::Cylinder(r.try_into()?),
            NodeRepr::Group(r) => Node::Group(r.try_into()?),
            NodeRepr::Union(r) => Node::Union(r.try_into()?),
            NodeRepr::Intersection(r) => Node::Intersection(r.try_into()?),
            NodeRepr::Difference(r) => Node::Difference(r.try_into()?),
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SquareRepr {
    size: Extent,
    #[serde(default)]
    centered: bool,
    #[serde(default)]
    transforms: Vec<TransformRepr>,
}

impl TryFrom<SquareRepr> for Square {
    type Error = ScadError;

    fn try_from(repr: SquareRepr) -> Result<Self> {
        let size: Dims<2> = repr.size.resolve("Square", "size")?;
        with_transforms(Square::new(size, repr.centered)?, repr.transforms)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CubeRepr {
    size: Extent,
    #[serde(default)]
    centered: bool,
    #[serde(default)]
    transforms: Vec<TransformRepr>,
}

impl TryFrom<CubeRepr> for Cube {
    type Error = ScadError;

    fn try_from(repr: CubeRepr) -> Result<Self> {
        let size: Dims<3> = repr.size.resolve("Cube", "size")?;
        with_transforms(Cube::new(size, repr.centered)?, repr.transforms)
    }
}

/// Shared by [`Circle`] and [`Sphere`]
#[derive(Debug, Deserialize)]
pub(crate) struct RoundRepr {
    radius: f64,
    #[serde(default = "default_sides")]
    sides: u32,
    #[serde(default)]
    transforms: Vec<TransformRepr>,
}

impl TryFrom<RoundRepr> for Circle {
    type Error = ScadError;

    fn try_from(repr: RoundRepr) -> Result<Self> {
        let circle = Circle::with_sides(repr.radius, repr.sides)?;
        with_transforms(circle, repr.transforms)
    }
}

impl TryFrom<RoundRepr> for Sphere {
    type Error = ScadError;

    fn try_from(repr: RoundRepr) -> Result<Self> {
        let sphere = Sphere::with_sides(repr.radius, repr.sides)?;
        with_transforms(sphere, repr.transforms)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CylinderRepr {
    radius: Extent,
    height: f64,
    #[serde(default = "default_sides")]
    sides: u32,
    #[serde(default)]
    centered: bool,
    #[serde(default)]
    transforms: Vec<TransformRepr>,
}

impl TryFrom<CylinderRepr> for Cylinder {
    type Error = ScadError;

    fn try_from(repr: CylinderRepr) -> Result<Self> {
        let radius: Dims<2> = repr.radius.resolve("Cylinder", "radius")?;
        let cylinder = Cylinder::with_options(radius, repr.height, repr.sides, repr.centered)?;
        with_transforms(cylinder, repr.transforms)
    }
}

/// Shared by [`Group`], [`Union`] and [`Intersection`]
#[derive(Debug, Deserialize)]
pub(crate) struct ListRepr {
    children: Vec<NodeRepr>,
    #[serde(default)]
    transforms: Vec<TransformRepr>,
}

macro_rules! impl_list_from_repr {
    ($($name:ident),*) => {
        $(
            impl TryFrom<ListRepr> for $name {
                type Error = ScadError;

                fn try_from(repr: ListRepr) -> Result<Self> {
                    let children = repr
                        .children
                        .into_iter()
                        .map(Node::try_from)
                        .collect::<Result<Vec<_>>>()?;
                    with_transforms($name::new(children), repr.transforms)
                }
            }
        )*
    };
}

impl_list_from_repr!(Group, Union, Intersection);

#[derive(Debug, Deserialize)]
pub(crate) struct DifferenceRepr {
    minuend: Box<NodeRepr>,
    subtrahend: Box<NodeRepr>,
    #[serde(default)]
    transforms: Vec<TransformRepr>,
}

impl TryFrom<DifferenceRepr> for Difference {
    type Error = ScadError;

    fn try_from(repr: DifferenceRepr) -> Result<Self> {
        let minuend = Node::try_from(*repr.minuend)?;
        let subtrahend = Node::try_from(*repr.subtrahend)?;
        with_transforms(Difference::new(minuend, subtrahend), repr.transforms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(source: &str) -> Result<Node> {
        let repr: NodeRepr = serde_json::from_str(source).unwrap();
        Node::try_from(repr)
    }

    #[test]
    fn test_nested_rejection_keeps_its_context() {
        let err = load(
            r#"{"Union": {"children": [
                {"Cube": {"size": 1}},
                {"Difference": {
                    "minuend": {"Sphere": {"radius": 2}},
                    "subtrahend": {"Cylinder": {"radius": [0, 0], "height": 3}}
                }}
            ]}}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ScadError::InvalidArgument {
                context: "Cylinder",
                ..
            }
        ));
    }

    #[test]
    fn test_transform_rejection_names_the_operation() {
        let repr = NodeRepr::Sphere(RoundRepr {
            radius: 1.0,
            sides: DEFAULT_SIDES,
            transforms: vec![TransformRepr::Scale([1.0, f64::NAN, 1.0])],
        });
        let err = Node::try_from(repr).unwrap_err();
        assert_eq!(err.context(), Some("scale"));
    }

    #[test]
    fn test_composite_transforms_are_kept() {
        let node = load(
            r#"{"Group": {"children": [{"Circle": {"radius": 1}}],
                          "transforms": [{"Translate": [0, 0, 2]}]}}"#,
        )
        .unwrap();
        assert_eq!(
            node.to_string(),
            "translate(v=[0, 0, 2]) { circle(r=1, $fn=12); };"
        );
    }
}
