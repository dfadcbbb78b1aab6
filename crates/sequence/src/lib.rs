//! Array-backed sequence container with a chainable operation pipeline.
//!
//! Operations come in two kinds:
//!
//! - *cumulative* operations produce a sequence and can be chained. The
//!   in-place ones (`reverse`, `shuffle`, `sort_by_less`, `add_all`) take
//!   `&mut self` and hand back `&mut Self`; the derived ones (`copy`,
//!   `slice`, `filter`, `reverse_copy`, `randomised_copy`, `random_get`)
//!   borrow the receiver and return a fresh owned sequence.
//! - *terminal* operations return a scalar, a flag, an element reference or
//!   nothing, and end a chain.
//!
//! ```
//! use sequence::Sequence;
//!
//! let mut seq: Sequence<i32> = [3, 1, 2].into_iter().collect();
//! assert_eq!(seq.sort_by_less(|a, b| a < b).as_slice(), &[1, 2, 3]);
//! assert_eq!(seq.filter(|&x| x > 1).reverse().as_slice(), &[3, 2]);
//! ```
//!
//! Every sequence also carries an external iteration cursor driven by
//! `reset_cursor`, `has_next` and `next`. Newly derived sequences start with
//! the cursor at zero.

mod error;
mod interval;
mod random;
mod sort;

use std::fmt;
use std::ops::Index;

use log::{debug, trace};

pub use error::SequenceError;
pub use interval::Interval;
pub use random::{RandomSource, default_source};
pub use sort::INSERTION_THRESHOLD;

pub struct Sequence<T> {
    elements: Vec<T>,
    cursor: usize,
}

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            cursor: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    // ---- cursor ----

    /// Moves the cursor back to the first element.
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor to `position`. Panics unless `position <= len()`.
    pub fn reset_cursor_to(&mut self, position: usize) {
        self.try_reset_cursor(position)
            .unwrap_or_else(|err| panic!("{err}"));
    }

    pub fn try_reset_cursor(&mut self, position: usize) -> Result<(), SequenceError> {
        let len = self.elements.len();
        if position > len {
            return Err(SequenceError::CursorOutOfRange { position, len });
        }
        trace!("cursor reset to {position} of {len}");
        self.cursor = position;
        Ok(())
    }

    pub fn has_next(&self) -> bool {
        self.cursor < self.elements.len()
    }

    /// Returns the element under the cursor and advances past it.
    ///
    /// Panics when the cursor is exhausted; check `has_next` first or use
    /// `try_next`.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> &T {
        self.try_next().unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn try_next(&mut self) -> Result<&T, SequenceError> {
        let cursor = self.cursor;
        let item = self
            .elements
            .get(cursor)
            .ok_or(SequenceError::CursorExhausted {
                cursor,
                len: self.elements.len(),
            })?;
        self.cursor += 1;
        Ok(item)
    }

    /// Current cursor position without advancing it.
    pub fn current(&self) -> usize {
        self.cursor
    }

    /// Elements from the cursor to the end, leaving the cursor untouched.
    pub fn remaining(&self) -> std::slice::Iter<'_, T> {
        self.elements[self.cursor..].iter()
    }

    // ---- in-place cumulative operations ----

    pub fn reverse(&mut self) -> &mut Self {
        trace!("reverse {} elements", self.elements.len());
        self.elements.reverse();
        self.cursor = 0;
        self
    }

    /// Uniformly permutes the elements using the thread-local generator.
    pub fn shuffle(&mut self) -> &mut Self {
        let mut rng = default_source();
        self.shuffle_with(&mut rng)
    }

    pub fn shuffle_with<R: RandomSource>(&mut self, rng: &mut R) -> &mut Self {
        trace!("shuffle {} elements", self.elements.len());
        rng.permute(&mut self.elements);
        self.cursor = 0;
        self
    }

    /// Stable sort where `less(a, b)` means `a` orders before `b`.
    ///
    /// `less` should be a strict weak order. Any other predicate leaves the
    /// order unspecified but keeps every element.
    pub fn sort_by_less<F>(&mut self, mut less: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        trace!("sort {} elements", self.elements.len());
        sort::sort_by_less(&mut self.elements, &mut less);
        self.cursor = 0;
        self
    }

    pub fn sort_by_key<K, F>(&mut self, mut key: F) -> &mut Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by_less(|a, b| key(a) < key(b))
    }

    pub fn sort(&mut self) -> &mut Self
    where
        T: Ord,
    {
        self.sort_by_less(|a, b| a < b)
    }

    // ---- terminal operations ----

    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn try_get(&self, index: usize) -> Result<&T, SequenceError> {
        self.elements.get(index).ok_or(SequenceError::IndexOutOfBounds {
            index,
            len: self.elements.len(),
        })
    }

    pub fn first(&self) -> &T {
        self.try_first().unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn try_first(&self) -> Result<&T, SequenceError> {
        self.elements.first().ok_or(SequenceError::Empty)
    }

    pub fn last(&self) -> &T {
        self.try_last().unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn try_last(&self) -> Result<&T, SequenceError> {
        self.elements.last().ok_or(SequenceError::Empty)
    }

    /// Appends `element` and returns the new length.
    pub fn add(&mut self, element: T) -> usize {
        self.elements.push(element);
        self.elements.len()
    }

    /// Overwrites the element at `position`. Never grows the sequence;
    /// returns `false` when `position` is out of range.
    pub fn add_at(&mut self, element: T, position: usize) -> bool {
        match self.elements.get_mut(position) {
            Some(slot) => {
                *slot = element;
                true
            }
            None => false,
        }
    }

    /// Erases the element at `position`, shifting later elements left.
    ///
    /// The cursor returns to zero whether or not anything was removed.
    pub fn remove(&mut self, position: usize) -> bool {
        self.cursor = 0;
        if position < self.elements.len() {
            self.elements.remove(position);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.elements.clear();
        self.cursor = 0;
    }

    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.elements.contains(element)
    }

    pub fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.elements.iter().position(|item| item == element)
    }

    pub fn count_if<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.iter().filter(|item| predicate(*item)).count()
    }

    /// Sums `map(element)` over all elements.
    pub fn accumulate<F>(&self, map: F) -> i64
    where
        F: FnMut(&T) -> i64,
    {
        self.elements.iter().map(map).sum()
    }

    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        self.elements.iter().for_each(action);
    }
}

impl<T: Clone> Sequence<T> {
    // ---- derived cumulative operations ----

    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Elements in `[start, end)`. Panics unless `start < end <= len()`.
    pub fn slice(&self, start: usize, end: usize) -> Self {
        self.try_slice(start, end)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn try_slice(&self, start: usize, end: usize) -> Result<Self, SequenceError> {
        let len = self.elements.len();
        if start >= end || end > len {
            return Err(SequenceError::InvalidSlice { start, end, len });
        }
        self.try_slice_interval(Interval::new(start, end))
    }

    pub fn slice_interval(&self, interval: Interval) -> Self {
        self.try_slice_interval(interval)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn try_slice_interval(&self, interval: Interval) -> Result<Self, SequenceError> {
        let len = self.elements.len();
        if interval.is_empty() || interval.end() > len {
            return Err(SequenceError::InvalidSlice {
                start: interval.begin(),
                end: interval.end(),
                len,
            });
        }

        let mut positions = interval;
        positions.rewind();
        let mut out = Self::with_capacity(positions.len());
        for position in positions {
            out.add(self.elements[position].clone());
        }
        Ok(out)
    }

    /// Appends clones of every element of `other`, in order.
    pub fn add_all(&mut self, other: &Sequence<T>) -> &mut Self {
        self.elements.extend_from_slice(&other.elements);
        self
    }

    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.elements
            .iter()
            .filter(|item| predicate(*item))
            .cloned()
            .collect()
    }

    pub fn reverse_copy(&self) -> Self {
        let mut out = self.copy();
        out.reverse();
        out
    }

    pub fn randomised_copy(&self) -> Self {
        let mut rng = default_source();
        self.randomised_copy_with(&mut rng)
    }

    pub fn randomised_copy_with<R: RandomSource>(&self, rng: &mut R) -> Self {
        let mut out = self.copy();
        out.shuffle_with(rng);
        out
    }

    /// Draws `how_many` elements uniformly *with replacement*.
    ///
    /// `how_many` is clamped to `len()`, so the result never outgrows the
    /// receiver but may repeat elements. The receiver's cursor is untouched.
    pub fn random_get(&self, how_many: usize) -> Self {
        let mut rng = default_source();
        self.random_get_with(how_many, &mut rng)
    }

    pub fn random_get_with<R: RandomSource>(&self, how_many: usize, rng: &mut R) -> Self {
        let len = self.elements.len();
        let take = how_many.min(len);
        if take < how_many {
            debug!("random_get clamped from {how_many} to {take}");
        }

        let mut out = Self::with_capacity(take);
        for _ in 0..take {
            out.add(self.elements[rng.random_index(len)].clone());
        }
        out
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Clones start with the cursor at zero.
impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            cursor: 0,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("elements", &self.elements)
            .field("cursor", &self.cursor)
            .finish()
    }
}

/// Equality compares elements only; cursors are ignored.
impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.get(index)
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(elements: Vec<T>) -> Self {
        Self {
            elements,
            cursor: 0,
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
