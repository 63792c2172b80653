use crate::point_types::GridPoint;

/// Manhattan (L1) distance between two points: `|dx| + |dy|`.
///
/// Widened to `u64` so that any pair of `i32` coordinates fits.
#[inline]
pub fn manhattan(a: GridPoint, b: GridPoint) -> u64 {
    u64::from(a.x.abs_diff(b.x)) + u64::from(a.y.abs_diff(b.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_point(rng: &mut impl Rng) -> GridPoint {
        GridPoint::new(rng.random_range(-64..64), rng.random_range(-64..64))
    }

    #[test]
    fn test_manhattan_known_values() {
        assert_eq!(manhattan(GridPoint::new(0, 0), GridPoint::new(15, 15)), 30);
        assert_eq!(manhattan(GridPoint::new(3, 9), GridPoint::new(7, 2)), 11);
        assert_eq!(manhattan(GridPoint::new(-2, 4), GridPoint::new(2, -4)), 16);
    }

    #[test]
    fn test_manhattan_matches_axis_differences_over_grid() {
        let target = GridPoint::new(5, 11);
        for y in 0..16 {
            for x in 0..16 {
                let d = manhattan(GridPoint::new(x, y), target);
                assert_eq!(d, u64::from((x - 5).unsigned_abs() + (y - 11).unsigned_abs()));
            }
        }
    }

    #[test]
    fn test_manhattan_extreme_coordinates() {
        let far = GridPoint::new(2_000_000_000, 2_000_000_000);
        assert_eq!(manhattan(GridPoint::new(0, 0), far), 4_000_000_000);
        assert_eq!(
            manhattan(GridPoint::new(i32::MIN, i32::MIN), GridPoint::new(i32::MAX, i32::MAX)),
            2 * u64::from(u32::MAX)
        );
    }

    #[test]
    fn test_manhattan_symmetric_and_zero_on_self() {
        let mut rng = rand::rng();
        for _ in 0..1_000 {
            let a = random_point(&mut rng);
            let b = random_point(&mut rng);
            assert_eq!(manhattan(a, b), manhattan(b, a));
            assert_eq!(manhattan(a, a), 0);
            assert_eq!(a.manhattan_distance(&b), manhattan(a, b));
        }
    }

    #[test]
    fn test_manhattan_triangle_inequality() {
        let mut rng = rand::rng();
        for _ in 0..1_000 {
            let a = random_point(&mut rng);
            let b = random_point(&mut rng);
            let c = random_point(&mut rng);
            assert!(manhattan(a, c) <= manhattan(a, b) + manhattan(b, c));
        }
    }
}
