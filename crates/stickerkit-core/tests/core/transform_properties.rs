use proptest::prelude::*;
use stickerkit_core::{trap_to_rect, AffineTransform2D, Point};

const EPS: f64 = 1e-6;

proptest! {
    #[test]
    fn prop_post_scale_round_trip(
        s in 0.05f64..20.0,
        px in -500.0f64..500.0,
        py in -500.0f64..500.0,
        angle in -180.0f64..180.0,
    ) {
        let mut t = AffineTransform2D::identity();
        t.post_rotate(angle, 10.0, 20.0);
        t.post_translate(30.0, -40.0);
        let original = t;

        t.post_scale(s, s, px, py);
        t.post_scale(1.0 / s, 1.0 / s, px, py);
        prop_assert!(t.approx_eq(&original, 1e-6));
    }

    #[test]
    fn prop_scale_magnitude_ignores_pivot(
        px in -1000.0f64..1000.0,
        py in -1000.0f64..1000.0,
    ) {
        let mut t = AffineTransform2D::identity();
        t.post_scale(2.0, 2.0, px, py);
        prop_assert!((t.scale_magnitude() - 2.0).abs() < EPS);
    }

    #[test]
    fn prop_rotation_degrees_ignores_pivot(
        px in -1000.0f64..1000.0,
        py in -1000.0f64..1000.0,
    ) {
        let mut t = AffineTransform2D::identity();
        t.post_rotate(30.0, px, py);
        prop_assert!((t.rotation_degrees() - 30.0).abs() < EPS);
    }

    #[test]
    fn prop_rotation_survives_uniform_scale(
        angle in -179.0f64..179.0,
        s in 0.1f64..10.0,
    ) {
        let mut t = AffineTransform2D::identity();
        t.post_rotate(angle, 0.0, 0.0);
        t.post_scale(s, s, 5.0, 5.0);
        prop_assert!((t.rotation_degrees() - angle).abs() < 1e-6);
        prop_assert!((t.scale_magnitude() - s).abs() < 1e-9);
    }

    #[test]
    fn prop_inverse_maps_back(
        x in -100.0f64..100.0,
        y in -100.0f64..100.0,
        angle in -180.0f64..180.0,
        s in 0.1f64..10.0,
    ) {
        let mut t = AffineTransform2D::identity();
        t.post_scale(s, s, 0.0, 0.0);
        t.post_rotate(angle, 3.0, 4.0);
        t.post_translate(-7.0, 11.0);

        let p = Point::new(x, y);
        let back = t.inverted().unwrap().map_point(t.map_point(p));
        prop_assert!((back.x - x).abs() < 1e-6 && (back.y - y).abs() < 1e-6);
    }

    #[test]
    fn prop_trap_to_rect_is_sorted(
        xs in proptest::array::uniform4(-1000.0f64..1000.0),
        ys in proptest::array::uniform4(-1000.0f64..1000.0),
    ) {
        let points: Vec<Point> = xs.iter().zip(ys.iter()).map(|(x, y)| Point::new(*x, *y)).collect();
        let rect = trap_to_rect(&points);
        prop_assert!(rect.left <= rect.right);
        prop_assert!(rect.top <= rect.bottom);
    }
}
