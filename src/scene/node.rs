// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Node: any object that can sit in a scene tree

use super::composite::{Difference, Group, Intersection, Union};
use super::object::{Object, Scad};
use super::primitives::{Circle, Cube, Cylinder, Sphere, Square};
use super::repr::NodeRepr;
use super::transform::Transformation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Owned child of a composite, and the root type of a serialized scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NodeRepr")]
pub enum Node {
    // Primitives
    Square(Square),
    Circle(Circle),
    Cube(Cube),
    Sphere(Sphere),
    Cylinder(Cylinder),

    // Composites
    Group(Group),
    Union(Union),
    Intersection(Intersection),
    Difference(Difference),
}

macro_rules! dispatch {
    ($node:expr, $inner:ident => $body:expr) => {
        match $node {
            Node::Square($inner) => $body,
            Node::Circle($inner) => $body,
            Node::Cube($inner) => $body,
            Node::Sphere($inner) => $body,
            Node::Cylinder($inner) => $body,
            Node::Group($inner) => $body,
            Node::Union($inner) => $body,
            Node::Intersection($inner) => $body,
            Node::Difference($inner) => $body,
        }
    };
}

impl Node {
    /// Lowercase variant name, as used in log output and the CLI
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Square(_) => "square",
            Node::Circle(_) => "circle",
            Node::Cube(_) => "cube",
            Node::Sphere(_) => "sphere",
            Node::Cylinder(_) => "cylinder",
            Node::Group(_) => "group",
            Node::Union(_) => "union",
            Node::Intersection(_) => "intersection",
            Node::Difference(_) => "difference",
        }
    }

    /// Direct children, empty for primitives
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Group(group) => group.children().iter().collect(),
            Node::Union(union) => union.children().iter().collect(),
            Node::Intersection(intersection) => intersection.children().iter().collect(),
            Node::Difference(difference) => vec![difference.minuend(), difference.subtrahend()],
            _ => Vec::new(),
        }
    }

    /// Number of nodes in this subtree, including itself
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(|child| child.count()).sum::<usize>()
    }
}

impl Object for Node {
    fn transforms(&self) -> &[Transformation] {
        dispatch!(self, inner => inner.transforms())
    }

    fn push_transform(&mut self, transform: Transformation) {
        dispatch!(self, inner => inner.push_transform(transform))
    }

    fn write_scad(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, inner => inner.write_scad(f))
    }
}

/// Full statement, transforms included
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Scad::full(self), f)
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Node {
                fn from(object: $variant) -> Self {
                    Node::$variant(object)
                }
            }
        )*
    };
}

impl_from_variant!(
    Square,
    Circle,
    Cube,
    Sphere,
    Cylinder,
    Group,
    Union,
    Intersection,
    Difference
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{difference, union};

    #[test]
    fn test_node_delegates_rendering() {
        let node = Node::from(Cube::new(1, false).unwrap());
        assert_eq!(node.kind(), "cube");
        assert_eq!(node.scad(), "cube(size=[1, 1, 1], center=false);");
        assert_eq!(node.to_string(), node.scad_with_transforms());
    }

    #[test]
    fn test_transforms_on_node_reach_the_variant() {
        let mut node = Node::from(Sphere::new(1).unwrap());
        node.translate(0, 0, 5).unwrap();
        assert_eq!(node.transforms().len(), 1);
        assert_eq!(
            node.to_string(),
            "translate(v=[0, 0, 5]) sphere(r=1, $fn=12);"
        );
    }

    #[test]
    fn test_count_and_children() {
        let tree: Node = difference(
            union([Cube::new(1, false).unwrap(), Cube::new(2, false).unwrap()]),
            Sphere::new(1).unwrap(),
        )
        .into();
        assert_eq!(tree.children().len(), 2);
        assert_eq!(tree.count(), 5);
    }
}
