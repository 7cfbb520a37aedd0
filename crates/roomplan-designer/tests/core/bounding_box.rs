use proptest::prelude::*;
use roomplan_core::{Dimensions, Point3, Scale3};
use roomplan_designer::BoundingBox;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

proptest! {
    #[test]
    fn box_is_symmetric_about_position(
        x in -10.0f64..10.0,
        y in -2.0f64..2.0,
        z in -10.0f64..10.0,
        w in 0.01f64..5.0,
        h in 0.01f64..5.0,
        d in 0.01f64..5.0,
        s in 0.1f64..3.0,
        theta in -10.0f64..10.0,
    ) {
        let b = BoundingBox::compute(
            Point3::new(x, y, z),
            Dimensions::new(w, h, d),
            Scale3::uniform(s),
            theta,
        );
        prop_assert!(close(b.max_x - x, x - b.min_x));
        prop_assert!(close(b.max_y - y, y - b.min_y));
        prop_assert!(close(b.max_z - z, z - b.min_z));
    }

    #[test]
    fn footprint_grows_towards_diagonal(
        w in 0.01f64..5.0,
        d in 0.01f64..5.0,
        a in 0.0f64..FRAC_PI_4,
        b in 0.0f64..FRAC_PI_4,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let area = |theta: f64| {
            BoundingBox::compute(Point3::ORIGIN, Dimensions::new(w, 1.0, d), Scale3::IDENTITY, theta)
                .footprint_area()
        };
        prop_assert!(area(lo) <= area(hi) + 1e-9);
    }

    #[test]
    fn quarter_turns_swap_extents(w in 0.01f64..5.0, d in 0.01f64..5.0, k in 0i32..8) {
        let theta = k as f64 * FRAC_PI_2;
        let b = BoundingBox::compute(Point3::ORIGIN, Dimensions::new(w, 1.0, d), Scale3::IDENTITY, theta);
        let (ew, ed) = if k % 2 == 0 { (w, d) } else { (d, w) };
        prop_assert!(close(b.width(), ew));
        prop_assert!(close(b.depth(), ed));
    }
}

#[test]
fn test_height_band_ignores_yaw() {
    let b = BoundingBox::compute(
        Point3::ORIGIN,
        Dimensions::new(1.0, 2.0, 3.0),
        Scale3::IDENTITY,
        FRAC_PI_4,
    );
    assert_eq!(b.min_y, -1.0);
    assert_eq!(b.max_y, 1.0);
}
