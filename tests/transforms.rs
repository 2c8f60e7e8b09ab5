// tests/transforms.rs
use approx::{assert_abs_diff_eq, assert_relative_eq};
use glam::{DMat4, DVec3};
use hexapod_robot::{Point, is_rigid, y_rotate_x_translate, z_rotate_xy_translate};

const EPS: f64 = 1e-9;

fn assert_point_near(p: &Point, x: f64, y: f64, z: f64) {
    assert_abs_diff_eq!(p.x, x, epsilon = EPS);
    assert_abs_diff_eq!(p.y, y, epsilon = EPS);
    assert_abs_diff_eq!(p.z, z, epsilon = EPS);
}

#[test]
fn test_builders_produce_rigid_transforms() {
    for theta in [-270.0, -90.0, -33.3, 0.0, 45.0, 90.0, 135.0, 359.0] {
        assert!(is_rigid(&y_rotate_x_translate(theta, 12.5), EPS), "y {theta}");
        assert!(
            is_rigid(&z_rotate_xy_translate(theta, -4.0, 7.0), EPS),
            "z {theta}"
        );
    }
}

#[test]
fn test_is_rigid_rejects_scaling_and_projection() {
    assert!(!is_rigid(&DMat4::from_scale(DVec3::splat(2.0)), EPS));

    let mut skewed_bottom = y_rotate_x_translate(30.0, 1.0);
    skewed_bottom.x_axis.w = 0.5;
    assert!(!is_rigid(&skewed_bottom, EPS));
}

#[test]
fn test_y_rotation_then_x_translation() {
    // Pitch by 90 degrees carries +X onto -Z, then the frame sits at x = 5.
    let frame = y_rotate_x_translate(90.0, 5.0);
    assert_point_near(&Point::new(1.0, 0.0, 0.0).with_respect_to(&frame), 5.0, 0.0, -1.0);
    assert_point_near(&Point::origin().with_respect_to(&frame), 5.0, 0.0, 0.0);
}

#[test]
fn test_z_rotation_then_xy_translation() {
    let frame = z_rotate_xy_translate(90.0, 1.0, 2.0);
    assert_point_near(&Point::new(1.0, 0.0, 0.0).with_respect_to(&frame), 1.0, 3.0, 0.0);
    assert_point_near(&Point::new(0.0, 0.0, 4.0).with_respect_to(&frame), 1.0, 2.0, 4.0);
}

#[test]
fn test_frame_change_round_trip() {
    let frame = z_rotate_xy_translate(37.0, 12.0, -5.0) * y_rotate_x_translate(-20.0, 8.0);
    let original = Point::new(1.5, -2.0, 3.25);

    let back = original
        .with_respect_to(&frame)
        .with_respect_to(&frame.inverse());

    assert_relative_eq!(back.x, original.x, epsilon = 1e-12, max_relative = 1e-9);
    assert_relative_eq!(back.y, original.y, epsilon = 1e-12, max_relative = 1e-9);
    assert_relative_eq!(back.z, original.z, epsilon = 1e-12, max_relative = 1e-9);
}

#[test]
fn test_composition_is_not_commutative() {
    let a = y_rotate_x_translate(30.0, 10.0);
    let b = z_rotate_xy_translate(45.0, 0.0, 3.0);
    assert!(!(a * b).abs_diff_eq(b * a, 1e-6));
}

#[test]
fn test_frame_change_drops_name() {
    let named = Point::new(1.0, 2.0, 3.0).with_name("marker");
    let moved = named.with_respect_to(&z_rotate_xy_translate(0.0, 1.0, 1.0));
    assert_eq!(moved.name, None);
    assert_point_near(&moved, 2.0, 3.0, 3.0);
}
