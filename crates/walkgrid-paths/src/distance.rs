use walkgrid_core::Coord;

/// Euclidean (L2) distance between two coordinates.
///
/// For lattice neighbors this is 1.0 along a cardinal direction and √2
/// along a diagonal, which is the edge weight used by
/// [`PathFinder`](crate::PathFinder).
#[inline]
pub fn euclidean(a: Coord, b: Coord) -> f64 {
    let dx = (b.column - a.column) as f64;
    let dy = (b.row - a.row) as f64;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_step_is_unit() {
        assert_eq!(euclidean(Coord::new(2, 3), Coord::new(3, 3)), 1.0);
        assert_eq!(euclidean(Coord::new(2, 3), Coord::new(2, 2)), 1.0);
    }

    #[test]
    fn diagonal_step_is_sqrt_two() {
        let d = euclidean(Coord::new(2, 3), Coord::new(3, 4));
        assert!((d - std::f64::consts::SQRT_2).abs() < 1e-12);
    }
}
