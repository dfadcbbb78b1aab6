use std::ops::Range;

/// Half-open interval `[start, end)` of positions.
///
/// The interval is also its own forward cursor: iterating yields each
/// position once, front to back.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Interval {
    start: usize,
    end: usize,
    front: usize,
    back: usize,
}

impl Interval {
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "interval start {start} exceeds end {end}");
        Self {
            start,
            end,
            front: start,
            back: end,
        }
    }

    pub fn begin(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, position: usize) -> bool {
        self.start <= position && position < self.end
    }

    /// Whether the cursor has positions left to yield.
    pub fn has_next(&self) -> bool {
        self.front < self.back
    }

    /// Rewinds the cursor to `start`.
    pub fn rewind(&mut self) {
        self.front = self.start;
        self.back = self.end;
    }
}

impl From<Range<usize>> for Interval {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl Iterator for Interval {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.front < self.back {
            let pos = self.front;
            self.front += 1;
            Some(pos)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl DoubleEndedIterator for Interval {
    fn next_back(&mut self) -> Option<usize> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.back)
        } else {
            None
        }
    }
}

impl ExactSizeIterator for Interval {}

#[cfg(test)]
mod tests {
    use super::Interval;

    #[test]
    fn yields_half_open_positions() {
        let interval = Interval::new(2, 5);
        assert_eq!(interval.len(), 3);
        assert_eq!(interval.collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn empty_interval_yields_nothing() {
        let mut interval = Interval::new(4, 4);
        assert!(interval.is_empty());
        assert!(!interval.has_next());
        assert_eq!(interval.next(), None);
    }

    #[test]
    fn cursor_can_be_rewound() {
        let mut interval = Interval::from(0..3);
        assert_eq!(interval.next(), Some(0));
        assert_eq!(interval.next_back(), Some(2));
        assert_eq!(interval.size_hint(), (1, Some(1)));
        interval.rewind();
        assert!(interval.has_next());
        assert_eq!(interval.rev().collect::<Vec<_>>(), vec![2, 1, 0]);
    }

    #[test]
    fn bounds_are_preserved_while_iterating() {
        let mut interval = Interval::new(1, 3);
        interval.next();
        assert_eq!(interval.begin(), 1);
        assert_eq!(interval.end(), 3);
        assert!(interval.contains(1));
        assert!(!interval.contains(3));
    }

    #[test]
    #[should_panic(expected = "interval start 3 exceeds end 1")]
    fn reversed_bounds_panic() {
        let _ = Interval::new(3, 1);
    }
}
