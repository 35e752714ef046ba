//! Random-access cursors over a vector's buffer.
//!
//! A cursor is a position into a borrowed buffer. It never owns memory, and the
//! borrow ties it to the vector: the vector cannot be moved from, reassigned or
//! dropped while a cursor into it is alive. Positions may step outside
//! `[0, len)`; such a cursor can still be compared, offset and subtracted, but
//! dereferencing it yields `None`.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::slice;

use super::Vector;

/// Read-only cursor. Two cursors are comparable iff they point into the same
/// vector, decided by the address of the vector itself, not of its buffer.
pub struct Cursor<'a, T> {
    owner: &'a Vector<T>,
    pos: isize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(owner: &'a Vector<T>, pos: isize) -> Self {
        Self { owner, pos }
    }

    fn data(&self) -> &'a [T] {
        &self.owner.data
    }

    /// Index the cursor points at.
    pub fn index(&self) -> isize {
        self.pos
    }

    /// The element under the cursor, or `None` at `end()` or outside the buffer.
    pub fn get(&self) -> Option<&'a T> {
        usize::try_from(self.pos).ok().and_then(|i| self.data().get(i))
    }

    /// The elements from the cursor's position up to the end. Empty when the
    /// cursor is at or past `end()` or before the start.
    pub fn iter(&self) -> slice::Iter<'a, T> {
        usize::try_from(self.pos)
            .ok()
            .and_then(|i| self.data().get(i..))
            .unwrap_or(&[])
            .iter()
    }

    /// Prefix increment.
    pub fn step_forward(&mut self) -> &mut Self {
        self.pos += 1;
        self
    }

    /// Prefix decrement.
    pub fn step_back(&mut self) -> &mut Self {
        self.pos -= 1;
        self
    }

    /// Postfix increment: advances and returns the cursor as it was.
    pub fn post_increment(&mut self) -> Self {
        let before = *self;
        self.pos += 1;
        before
    }

    /// Postfix decrement.
    pub fn post_decrement(&mut self) -> Self {
        let before = *self;
        self.pos -= 1;
        before
    }

    /// Signed element count from `origin` to `self`.
    pub fn distance_from(&self, origin: &Self) -> isize {
        debug_assert!(self.same_buffer(origin), "cursors over different buffers");
        self.pos - origin.pos
    }

    fn same_buffer(&self, other: &Self) -> bool {
        std::ptr::eq(self.owner, other.owner)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("pos", &self.pos)
            .field("len", &self.data().len())
            .finish()
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_buffer(other) && self.pos == other.pos
    }
}

impl<T> PartialOrd for Cursor<'_, T> {
    /// Cursors over different buffers are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.same_buffer(other).then(|| self.pos.cmp(&other.pos))
    }
}

impl<T> Add<isize> for Cursor<'_, T> {
    type Output = Self;
    fn add(mut self, n: isize) -> Self {
        self.pos += n;
        self
    }
}

impl<T> Sub<isize> for Cursor<'_, T> {
    type Output = Self;
    fn sub(mut self, n: isize) -> Self {
        self.pos -= n;
        self
    }
}

impl<T> AddAssign<isize> for Cursor<'_, T> {
    fn add_assign(&mut self, n: isize) {
        self.pos += n;
    }
}

impl<T> SubAssign<isize> for Cursor<'_, T> {
    fn sub_assign(&mut self, n: isize) {
        self.pos -= n;
    }
}

impl<'a, T> Sub for Cursor<'a, T> {
    type Output = isize;
    fn sub(self, origin: Cursor<'a, T>) -> isize {
        self.distance_from(&origin)
    }
}

impl<'a, T> IntoIterator for Cursor<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Writable cursor. Holds the only borrow of the buffer, so it cannot be compared
/// with another cursor into the same vector.
pub struct CursorMut<'a, T> {
    data: &'a mut [T],
    pos: isize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(data: &'a mut [T], pos: isize) -> Self {
        Self { data, pos }
    }

    pub fn index(&self) -> isize {
        self.pos
    }

    pub fn get(&self) -> Option<&T> {
        usize::try_from(self.pos).ok().and_then(|i| self.data.get(i))
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        usize::try_from(self.pos).ok().and_then(|i| self.data.get_mut(i))
    }

    /// Write under the cursor; returns `false` (and writes nothing) outside the buffer.
    pub fn set(&mut self, value: T) -> bool {
        match self.get_mut() {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn step_forward(&mut self) -> &mut Self {
        self.pos += 1;
        self
    }

    pub fn step_back(&mut self) -> &mut Self {
        self.pos -= 1;
        self
    }

    pub fn is_end(&self) -> bool {
        self.pos == self.data.len() as isize
    }
}

impl<T> AddAssign<isize> for CursorMut<'_, T> {
    fn add_assign(&mut self, n: isize) {
        self.pos += n;
    }
}

impl<T> SubAssign<isize> for CursorMut<'_, T> {
    fn sub_assign(&mut self, n: isize) {
        self.pos -= n;
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("pos", &self.pos)
            .field("len", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{vector, Vector};

    #[test]
    fn traversal_matches_indexing() {
        let v = vector![4, 8, 15, 16, 23, 42];
        let via_cursor: Vec<i32> = v.begin().into_iter().copied().collect();
        let via_index: Vec<i32> = (0..v.dimensions()).map(|i| v[i]).collect();
        assert_eq!(via_cursor, via_index);

        let mut it = v.begin();
        let mut n = 0;
        while it != v.end() {
            assert_eq!(it.get(), Some(&v[n]));
            it.step_forward();
            n += 1;
        }
        assert_eq!(n, v.dimensions());
    }

    #[test]
    fn stepping_and_offsets() {
        let v = vector![1, 2, 3, 4, 5];
        let mut it = v.begin();
        let before = it.post_increment();
        assert_eq!(before.get(), Some(&1));
        assert_eq!(it.get(), Some(&2));
        it.step_back();
        assert_eq!(it, v.begin());
        assert_eq!(it.post_decrement(), v.begin());
        assert_eq!(it.get(), None);

        let it = v.begin() + 3;
        assert_eq!(it.get(), Some(&4));
        assert_eq!((it - 2).get(), Some(&2));
        let mut it = v.end();
        it -= 1;
        assert_eq!(it.get(), Some(&5));
        it += 1;
        assert_eq!(it, v.end());
        assert_eq!(it.get(), None);
    }

    #[test]
    fn difference_and_ordering() {
        let v = vector![0.5, 1.5, 2.5];
        let (b, e) = (v.begin(), v.end());
        assert_eq!(e - b, 3);
        assert_eq!(b - e, -3);
        assert!(b < e);
        assert!(b <= b);
        assert!(e > b + 2);
        assert!(e >= e);
        assert!(b != e);
        assert_eq!(b.partial_cmp(&e), Some(std::cmp::Ordering::Less));
        assert!(b.eq(&b));
        assert!(!b.eq(&e));
    }

    #[test]
    fn iteration_from_position() {
        let v = vector![0.5, 1.5, 2.5];
        let b = v.begin();
        assert_eq!(b.iter().len(), 3);
        assert_eq!((b + 2).iter().copied().collect::<Vec<_>>(), vec![2.5]);
        assert_eq!(v.end().iter().next(), None);
        assert_eq!((b - 1).iter().len(), 0);
        assert_eq!((b + 7).iter().len(), 0);
        let mut sum = 0.0;
        for x in b + 1 {
            sum += *x;
        }
        assert_eq!(sum, 4.0);
        // iterating does not move the cursor
        assert_eq!(b.get(), Some(&0.5));
    }

    #[test]
    fn cursors_over_different_buffers_are_unordered() {
        let a = vector![1, 2];
        let b = vector![1, 2];
        assert_ne!(a.begin(), b.begin());
        assert!(!a.begin().eq(&b.begin()));
        assert_eq!(a.begin().partial_cmp(&b.begin()), None);
    }

    #[test]
    fn cursors_over_different_empty_vectors_are_distinct() {
        let a: Vector<i32> = Vector::default();
        let b: Vector<i32> = Vector::default();
        assert_eq!(a.begin(), a.end());
        assert_ne!(a.begin(), b.begin());
        assert_ne!(a.end(), b.end());
        assert_eq!(a.begin().partial_cmp(&b.begin()), None);

        let c: Vector<u8> = Vec::new().into();
        let d: Vector<u8> = Vec::new().into();
        assert!(!c.begin().eq(&d.begin()));
    }

    #[test]
    fn empty_vector_begin_is_end() {
        let v: Vector<f64> = Vector::default();
        assert_eq!(v.begin(), v.end());
        assert_eq!(v.end() - v.begin(), 0);
        assert_eq!(v.begin().iter().next(), None);
    }

    #[test]
    fn mutable_cursor_writes_through() {
        let mut v = vector![0, 0, 0];
        let mut it = v.begin_mut();
        let mut k = 1;
        while !it.is_end() {
            assert!(it.set(k));
            k *= 10;
            it.step_forward();
        }
        assert!(!it.set(7));
        it -= 2;
        if let Some(x) = it.get_mut() {
            *x += 5;
        }
        assert_eq!(v, vector![1, 15, 100]);
    }
}
