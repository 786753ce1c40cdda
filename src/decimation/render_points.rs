/// Decimated polyline in pixel space.
///
/// Coordinates live in two preallocated arrays with a running count, so the
/// number of emitted points can never exceed the capacity chosen by the
/// decimator up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPoints {
    xs: Vec<i64>,
    ys: Vec<i64>,
    len: usize,
}

impl RenderPoints {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            xs: vec![0; capacity],
            ys: vec![0; capacity],
            len: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots allocated for this result.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.xs.len()
    }

    #[must_use]
    pub fn xs(&self) -> &[i64] {
        &self.xs[..self.len]
    }

    #[must_use]
    pub fn ys(&self) -> &[i64] {
        &self.ys[..self.len]
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<(i64, i64)> {
        (index < self.len).then(|| (self.xs[index], self.ys[index]))
    }

    #[must_use]
    pub fn first(&self) -> Option<(i64, i64)> {
        self.get(0)
    }

    #[must_use]
    pub fn last(&self) -> Option<(i64, i64)> {
        self.len.checked_sub(1).and_then(|index| self.get(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.xs().iter().copied().zip(self.ys().iter().copied())
    }

    /// Polyline closed down to `baseline_y`, ready to be filled as a polygon.
    #[must_use]
    pub fn fill_outline(&self, baseline_y: i64) -> Vec<(i64, i64)> {
        let (Some((first_x, _)), Some((last_x, _))) = (self.first(), self.last()) else {
            return Vec::new();
        };

        let mut outline = Vec::with_capacity(self.len + 2);
        outline.extend(self.iter());
        outline.push((last_x, baseline_y));
        outline.push((first_x, baseline_y));
        outline
    }

    /// Appends a point. A full buffer folds the point into its last slot.
    pub(crate) fn push(&mut self, x: i64, y: i64) {
        if self.len == self.capacity() {
            if self.len > 0 {
                self.xs[self.len - 1] = x;
                self.ys[self.len - 1] = y;
            }
            return;
        }
        self.xs[self.len] = x;
        self.ys[self.len] = y;
        self.len += 1;
    }

    /// Point `back` positions from the end; `tail(1)` is the last point.
    pub(crate) fn tail(&self, back: usize) -> (i64, i64) {
        let index = self.len - back;
        (self.xs[index], self.ys[index])
    }

    pub(crate) fn set_tail_y(&mut self, back: usize, y: i64) {
        let index = self.len - back;
        self.ys[index] = y;
    }
}

#[cfg(test)]
mod tests {
    use super::RenderPoints;

    #[test]
    fn fill_outline_closes_to_baseline() {
        let mut points = RenderPoints::with_capacity(3);
        points.push(1, 10);
        points.push(4, 20);

        assert_eq!(
            points.fill_outline(50),
            vec![(1, 10), (4, 20), (4, 50), (1, 50)]
        );
    }

    #[test]
    fn empty_points_have_no_outline() {
        let points = RenderPoints::with_capacity(4);
        assert!(points.fill_outline(0).is_empty());
        assert_eq!(points.last(), None);
    }

    #[test]
    fn tail_addresses_points_from_the_end() {
        let mut points = RenderPoints::with_capacity(4);
        points.push(0, 1);
        points.push(0, 2);
        points.set_tail_y(2, 7);

        assert_eq!(points.tail(1), (0, 2));
        assert_eq!(points.tail(2), (0, 7));
    }
}
