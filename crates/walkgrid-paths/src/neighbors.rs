//! Boundary-aware neighbor enumeration over flat grid indices.

/// Cached neighbor computation helper for a fixed grid geometry.
///
/// Enumerates cardinal (4-way) or all (8-way) neighbors of a flat cell
/// index, filtered by a predicate, with no wraparound at grid edges. A
/// diagonal candidate is only considered when both adjoining cardinal
/// directions are in bounds.
pub struct Neighbors {
    num_columns: i32,
    num_rows: i32,
    buf: Vec<usize>,
}

impl Neighbors {
    /// Create a helper for a `num_columns` × `num_rows` grid.
    pub fn new(num_columns: i32, num_rows: i32) -> Self {
        Self {
            num_columns,
            num_rows,
            buf: Vec::with_capacity(8),
        }
    }

    /// 4-directional neighbors of `index` (above, below, left, right),
    /// keeping only those for which `keep` returns `true`.
    pub fn cardinal(&mut self, index: usize, keep: impl Fn(usize) -> bool) -> &[usize] {
        self.buf.clear();
        self.push_cardinal(index, &keep);
        &self.buf
    }

    /// 8-directional neighbors of `index` (the cardinal four, then the
    /// four diagonals), keeping only those for which `keep` returns `true`.
    pub fn all(&mut self, index: usize, keep: impl Fn(usize) -> bool) -> &[usize] {
        self.buf.clear();
        self.push_cardinal(index, &keep);

        let (x, y) = self.split(index);
        let look_above = y - 1 >= 0;
        let look_below = y + 1 < self.num_rows;
        let look_left = x - 1 >= 0;
        let look_right = x + 1 < self.num_columns;

        if look_left && look_above {
            self.pick(x - 1, y - 1, &keep);
        }
        if look_right && look_above {
            self.pick(x + 1, y - 1, &keep);
        }
        if look_left && look_below {
            self.pick(x - 1, y + 1, &keep);
        }
        if look_right && look_below {
            self.pick(x + 1, y + 1, &keep);
        }
        &self.buf
    }

    fn push_cardinal(&mut self, index: usize, keep: &impl Fn(usize) -> bool) {
        let (x, y) = self.split(index);
        if y - 1 >= 0 {
            self.pick(x, y - 1, keep);
        }
        if y + 1 < self.num_rows {
            self.pick(x, y + 1, keep);
        }
        if x - 1 >= 0 {
            self.pick(x - 1, y, keep);
        }
        if x + 1 < self.num_columns {
            self.pick(x + 1, y, keep);
        }
    }

    #[inline]
    fn split(&self, index: usize) -> (i32, i32) {
        let w = self.num_columns as usize;
        ((index % w) as i32, (index / w) as i32)
    }

    #[inline]
    fn pick(&mut self, x: i32, y: i32, keep: &impl Fn(usize) -> bool) {
        let picked = (x + y * self.num_columns) as usize;
        if keep(picked) {
            self.buf.push(picked);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_interior() {
        let mut n = Neighbors::new(5, 5);
        // Cell (2, 2): above, below, left, right.
        assert_eq!(n.cardinal(12, |_| true), &[7, 17, 11, 13]);
    }

    #[test]
    fn cardinal_corner_has_two() {
        let mut n = Neighbors::new(5, 5);
        assert_eq!(n.cardinal(0, |_| true), &[5, 1]);
        assert_eq!(n.cardinal(24, |_| true), &[19, 23]);
    }

    #[test]
    fn all_interior_has_eight() {
        let mut n = Neighbors::new(5, 5);
        assert_eq!(n.all(12, |_| true), &[7, 17, 11, 13, 6, 8, 16, 18]);
    }

    #[test]
    fn all_corner_has_three() {
        let mut n = Neighbors::new(5, 5);
        // No wraparound: (0, 0) sees below, right and lower-right only.
        assert_eq!(n.all(0, |_| true), &[5, 1, 6]);
    }

    #[test]
    fn keep_filters_candidates() {
        let mut n = Neighbors::new(5, 5);
        assert_eq!(n.cardinal(12, |i| i != 17), &[7, 11, 13]);
    }
}
