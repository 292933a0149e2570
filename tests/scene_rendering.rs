// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Scene construction and OpenSCAD rendering tests

use scadgen::prelude::*;

#[test]
fn test_translate_precedes_own_statement() -> Result<()> {
    for (x, y, z) in [(1.0, 2.0, 3.0), (-4.5, 0.0, 12.25), (0.0, 0.0, 0.0)] {
        let mut cube = Cube::new(1, false)?;
        cube.translate(x, y, z)?;
        assert_eq!(
            cube.scad_with_transforms(),
            format!(
                "translate(v=[{}, {}, {}]) cube(size=[1, 1, 1], center=false);",
                x, y, z
            )
        );
    }
    Ok(())
}

#[test]
fn test_transforms_render_in_reverse_call_order() -> Result<()> {
    let mut sphere = Sphere::new(2)?;
    sphere.translate(10, 0, 0)?.rotate(0, 0, 45)?.scale(2, 2, 2)?;

    assert_eq!(
        sphere.scad_with_transforms(),
        "scale(v=[2, 2, 2]) rotate(a=[0, 0, 45]) translate(v=[10, 0, 0]) sphere(r=2, $fn=12);"
    );
    Ok(())
}

#[test]
fn test_invalid_transform_leaves_object_untouched() -> Result<()> {
    let mut cube = Cube::new(1, false)?;
    cube.translate(1, 1, 1)?;
    let before = cube.scad_with_transforms();

    for err in [
        cube.scale(f64::NAN, 1, 1).map(|_| ()).unwrap_err(),
        cube.rotate(0, f64::INFINITY, 0).map(|_| ()).unwrap_err(),
        cube.translate(0, 0, f64::NEG_INFINITY).map(|_| ()).unwrap_err(),
        cube.resize(f64::NAN, f64::NAN, f64::NAN).map(|_| ()).unwrap_err(),
    ] {
        assert!(matches!(err, ScadError::InvalidArgument { .. }));
    }

    assert_eq!(cube.transforms().len(), 1);
    assert_eq!(cube.scad_with_transforms(), before);
    Ok(())
}

#[test]
fn test_error_names_the_operation() {
    let mut circle = Circle::new(1).unwrap();
    let err = circle.rotate(f64::NAN, 0, 0).map(|_| ()).unwrap_err();
    assert_eq!(err.context(), Some("rotate"));
    assert!(err.to_string().starts_with("`rotate`"));
}

#[test]
fn test_resize_uses_resize_operator() -> Result<()> {
    let mut cube = Cube::new(1, true)?;
    cube.resize(10, 20, 30)?;
    assert_eq!(
        cube.scad_with_transforms(),
        "resize(newsize=[10, 20, 30]) cube(size=[1, 1, 1], center=true);"
    );
    Ok(())
}

#[test]
fn test_square_scalar_equals_pair() -> Result<()> {
    assert_eq!(Square::new(5, false)?.scad(), "square(size=[5, 5], center=false);");
    assert_eq!(Square::new([5, 5], false)?.scad(), Square::new(5, false)?.scad());
    Ok(())
}

#[test]
fn test_cylinder_defaults() -> Result<()> {
    assert_eq!(
        Cylinder::new(3, 10)?.scad(),
        "cylinder(r1=3, r2=3, h=10, center=false, $fn=12);"
    );
    Ok(())
}

#[test]
fn test_difference_keeps_operand_order() -> Result<()> {
    let mut a = Cube::new(10, true)?;
    a.rotate(0, 0, 15)?;
    let mut b = Cylinder::new(2, 20)?;
    b.translate(0, 0, -10)?;

    let a_text = a.scad_with_transforms();
    let b_text = b.scad_with_transforms();
    let d = difference(a, b);

    assert_eq!(d.scad(), format!("difference() {{ {} {} }};", a_text, b_text));
    Ok(())
}

#[test]
fn test_empty_union() {
    assert_eq!(union(Vec::<Node>::new()).scad(), "union() { };");
    assert_eq!(scadgen::union![].scad(), "union() { };");
}

#[test]
fn test_nested_composites_with_transforms() -> Result<()> {
    let mut post = Cylinder::with_options(1, 10, 24, false)?;
    post.translate(4, 0, 0)?;

    let mut arm = group([Node::from(post), Node::from(Cube::new([8, 1, 1], false)?)]);
    arm.rotate(0, 0, 90)?;

    let mut base = Cube::new([20, 20, 2], true)?;
    base.translate(0, 0, -1)?;

    let scene = union([Node::from(base), Node::from(arm)]);
    assert_eq!(
        scene.scad_with_transforms(),
        "union() { \
         translate(v=[0, 0, -1]) cube(size=[20, 20, 2], center=true); \
         rotate(a=[0, 0, 90]) { \
         translate(v=[4, 0, 0]) cylinder(r1=1, r2=1, h=10, center=false, $fn=24); \
         cube(size=[8, 1, 1], center=false); \
         }; \
         };"
    );
    Ok(())
}

#[test]
fn test_by_value_builders() -> Result<()> {
    let scene = intersection([
        Sphere::new(5)?.translated(1, 0, 0)?,
        Sphere::new(5)?.translated(-1, 0, 0)?.scaled(1, 1, 0.5)?,
    ]);
    assert_eq!(
        scene.scad(),
        "intersection() { \
         translate(v=[1, 0, 0]) sphere(r=5, $fn=12); \
         scale(v=[1, 1, 0.5]) translate(v=[-1, 0, 0]) sphere(r=5, $fn=12); \
         };"
    );
    Ok(())
}

#[test]
fn test_rendering_is_deterministic() -> Result<()> {
    let mut hull = difference(
        union([Cube::new([4, 4, 4], true)?, Cube::new([2, 2, 6], true)?]),
        Sphere::with_sides(2.5, 48)?,
    );
    hull.translate(1, 1, 1)?;

    let first = hull.scad_with_transforms();
    let second = hull.scad_with_transforms();
    assert_eq!(first, second);
    assert_eq!(first, Node::from(hull).to_string());
    Ok(())
}
