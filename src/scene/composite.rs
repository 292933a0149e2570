// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Grouping and boolean operations
//!
//! Composites own their children. A child's own transforms travel with it and
//! are rendered inside the composite's block.

use super::node::Node;
use super::object::Object;
use super::primitives::transform_list;
use super::repr::{DifferenceRepr, ListRepr};
use super::transform::Transformation;
use crate::error::{Result, ScadError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Write `header{ child child };`, each child with its transforms
fn write_block<'a>(
    f: &mut fmt::Formatter<'_>,
    header: &str,
    children: impl IntoIterator<Item = &'a Node>,
) -> fmt::Result {
    write!(f, "{header}{{ ")?;
    for child in children {
        child.write_scad_with_transforms(f)?;
        f.write_str(" ")?;
    }
    f.write_str("};")
}

macro_rules! list_composite {
    ($(#[$meta:meta])* $name:ident, $header:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
        #[serde(try_from = "ListRepr")]
        pub struct $name {
            children: Vec<Node>,
            #[serde(skip_serializing_if = "Vec::is_empty")]
            transforms: Vec<Transformation>,
        }

        impl $name {
            pub fn new(children: Vec<Node>) -> Self {
                Self {
                    children,
                    transforms: Vec::new(),
                }
            }

            pub fn children(&self) -> &[Node] {
                &self.children
            }

            pub fn len(&self) -> usize {
                self.children.len()
            }

            pub fn is_empty(&self) -> bool {
                self.children.is_empty()
            }
        }

        impl Object for $name {
            transform_list!();

            fn write_scad(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_block(f, $header, &self.children)
            }
        }

        impl<N: Into<Node>> FromIterator<N> for $name {
            fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
                Self::new(iter.into_iter().map(Into::into).collect())
            }
        }
    };
}

list_composite!(
    /// Plain block, `{ ... };`: lets a set of objects share transforms
    Group,
    ""
);

list_composite!(
    /// `union() { ... };`
    Union,
    "union() "
);

list_composite!(
    /// `intersection() { ... };`
    Intersection,
    "intersection() "
);

/// `difference() { minuend subtrahend };`, the first child minus the second
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DifferenceRepr")]
pub struct Difference {
    minuend: Box<Node>,
    subtrahend: Box<Node>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    transforms: Vec<Transformation>,
}

impl Difference {
    pub fn new(minuend: impl Into<Node>, subtrahend: impl Into<Node>) -> Self {
        Self {
            minuend: Box::new(minuend.into()),
            subtrahend: Box::new(subtrahend.into()),
            transforms: Vec::new(),
        }
    }

    pub fn minuend(&self) -> &Node {
        &self.minuend
    }

    pub fn subtrahend(&self) -> &Node {
        &self.subtrahend
    }
}

impl Object for Difference {
    transform_list!();

    fn write_scad(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_block(
            f,
            "difference() ",
            [self.minuend.as_ref(), self.subtrahend.as_ref()],
        )
    }
}

/// For callers holding an arbitrary list: anything but exactly two fails
impl TryFrom<Vec<Node>> for Difference {
    type Error = ScadError;

    fn try_from(objects: Vec<Node>) -> Result<Self> {
        let count = objects.len();
        match <[Node; 2]>::try_from(objects) {
            Ok([minuend, subtrahend]) => Ok(Difference::new(minuend, subtrahend)),
            Err(_) => Err(ScadError::invalid(
                "difference",
                format!("expected two objects, instead found {count}"),
            )),
        }
    }
}

/// Group objects into a plain block
pub fn group<I>(objects: I) -> Group
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    objects.into_iter().collect()
}

/// Union of any number of objects; empty renders `union() { };`
pub fn union<I>(objects: I) -> Union
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    objects.into_iter().collect()
}

pub fn intersection<I>(objects: I) -> Intersection
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    objects.into_iter().collect()
}

/// `minuend` with `subtrahend` cut away
pub fn difference(minuend: impl Into<Node>, subtrahend: impl Into<Node>) -> Difference {
    Difference::new(minuend, subtrahend)
}

/// Variadic [`group`](crate::scene::group) over mixed object types
#[macro_export]
macro_rules! group {
    ($($object:expr),* $(,)?) => {{
        let objects: ::std::vec::Vec<$crate::Node> = ::std::vec![$($crate::Node::from($object)),*];
        $crate::scene::group(objects)
    }};
}

/// Variadic [`union`](crate::scene::union) over mixed object types
#[macro_export]
macro_rules! union {
    ($($object:expr),* $(,)?) => {{
        let objects: ::std::vec::Vec<$crate::Node> = ::std::vec![$($crate::Node::from($object)),*];
        $crate::scene::union(objects)
    }};
}

/// Variadic [`intersection`](crate::scene::intersection) over mixed object types
#[macro_export]
macro_rules! intersection {
    ($($object:expr),* $(,)?) => {{
        let objects: ::std::vec::Vec<$crate::Node> = ::std::vec![$($crate::Node::from($object)),*];
        $crate::scene::intersection(objects)
    }};
}
