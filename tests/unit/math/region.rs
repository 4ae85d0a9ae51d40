//! Tests for rectangles, sectors, composites and inversion

#[cfg(test)]
mod tests {
    use roadtile::math::region::{Region, Shape};
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    // Tests rectangle bounds are inclusive
    // Verified by using exclusive upper bounds
    #[test]
    fn test_rectangle_contains() {
        let rect = Region::rectangle((0.0, 1.0), (2.0, 4.0));
        assert!(rect.contains((0.5, 3.0)));
        assert!(rect.contains((1.0, 4.0)));
        assert!(!rect.contains((1.1, 3.0)));
        assert!(!rect.contains((0.5, 1.9)));
    }

    // Tests swapped bounds describe the same rectangle
    // Verified by removing the bound ordering
    #[test]
    fn test_rectangle_normalizes_bounds() {
        let forward = Region::rectangle((0.0, 1.0), (2.0, 4.0));
        let backward = Region::rectangle((1.0, 0.0), (4.0, 2.0));
        assert_eq!(forward, backward);
        assert!(backward.contains((0.5, 3.0)));
    }

    // Tests a quarter sector contains only its quadrant within the radius
    // Verified by flipping the heading sign
    #[test]
    fn test_sector_quadrant() {
        let sector = Region::sector((0.0, 0.0), 1.0, 0.0, FRAC_PI_2);
        assert!(sector.contains((0.5, 0.5)));
        assert!(sector.contains((0.0, 0.0)));
        assert!(!sector.contains((-0.5, 0.5)));
        assert!(!sector.contains((0.5, -0.5)));
        assert!(!sector.contains((0.9, 0.9)));
    }

    // Tests a sector sweeping across zero
    // Verified by computing the view without wrapping
    #[test]
    fn test_sector_across_zero() {
        let sector = Region::sector((0.0, 0.0), 2.0, 3.0 * FRAC_PI_2, TAU);
        assert!(sector.contains((-0.5, 0.5)));
        assert!(!sector.contains((0.5, 0.5)));
        assert!(!sector.contains((-0.5, -0.5)));
    }

    // Tests degenerate sector parameters are normalized
    // Verified by keeping negative radii
    #[test]
    fn test_sector_normalization() {
        let sector = Region::sector((1.0, 1.0), -3.0, -FRAC_PI_2, 5.0 * PI);
        match sector.shape() {
            Shape::Sector {
                radius,
                theta_min,
                theta_max,
                ..
            } => {
                assert!(radius.abs() < f64::EPSILON);
                assert!((theta_min - 3.0 * FRAC_PI_2).abs() < 1e-9);
                assert!((theta_max - PI).abs() < 1e-9);
            }
            other => unreachable!("expected a sector, got {other:?}"),
        }
        assert!(sector.contains((1.0, 1.0)));
        assert!(!sector.contains((1.5, 1.0)));
    }

    // Tests double inversion restores membership everywhere
    // Verified by making not() a no-op
    #[test]
    fn test_double_inversion() {
        let region = Region::sector((0.0, 0.0), 1.0, 0.0, PI);
        let inverted = !region.clone();
        let restored = !inverted.clone();
        assert!(inverted.is_inverted());
        assert_eq!(restored, region);

        for &point in &[(0.5, 0.1), (-0.5, 0.0), (3.0, 3.0), (0.0, 0.0)] {
            assert_eq!(inverted.contains(point), !region.contains(point));
            assert_eq!(restored.contains(point), region.contains(point));
        }
    }

    // Tests inverted members carve holes from positive members
    // Verified by treating inverted members as union members
    #[test]
    fn test_composite_with_hole() {
        let annulus = Region::composite(vec![
            Region::sector((0.0, 0.0), 1.0, 0.0, FRAC_PI_2),
            !Region::sector((0.0, 0.0), 0.25, 0.0, FRAC_PI_2),
        ]);
        assert!(annulus.contains((0.5, 0.5)));
        assert!(!annulus.contains((0.1, 0.1)));
        assert!(!annulus.contains((2.0, 2.0)));
    }

    // Tests composite membership does not depend on member order
    // Verified by stopping at the first member
    #[test]
    fn test_composite_order_independent() {
        let a = Region::rectangle((0.0, 1.0), (0.0, 1.0));
        let b = Region::rectangle((2.0, 3.0), (2.0, 3.0));
        let hole = !Region::rectangle((0.4, 0.6), (0.4, 0.6));

        let forward = Region::composite(vec![a.clone(), b.clone(), hole.clone()]);
        let backward = Region::composite(vec![hole, b, a]);

        for row in 0..16_i32 {
            for col in 0..16_i32 {
                let point = (f64::from(row) * 0.2, f64::from(col) * 0.2);
                assert_eq!(forward.contains(point), backward.contains(point));
            }
        }
        assert!(forward.contains((2.5, 2.5)));
        assert!(!forward.contains((0.5, 0.5)));
    }

    // Tests empty composites contain nothing and invert to everything
    // Verified by returning true for empty member lists
    #[test]
    fn test_empty_composite() {
        let empty = Region::empty();
        assert!(!empty.contains((0.0, 0.0)));
        assert!((!empty).contains((0.0, 0.0)));
    }
}
