//! Fixed-length numeric vectors.
//!
//! A [`Vector`] exclusively owns a contiguous buffer whose length (its
//! *dimensions*) is fixed at construction. Copies are deep ([`Clone`]); moves
//! transfer the buffer in constant time and, through [`Vector::take`] and
//! [`Vector::move_assign`], leave the source as a valid empty vector.
//!
//! Arithmetic and reductions live in [`arith`]; random-access cursors in
//! [`cursor`].
//!
//! # Example
//! ```rust
//! use vctr::{vector, Vector};
//!
//! let mut v = vector![1, 2, 3];
//! let c = v.clone();
//! v[0] = 99;
//! assert_eq!(c[0], 1);
//!
//! let w = v.take();
//! assert_eq!(w.dimensions(), 3);
//! assert_eq!(v.dimensions(), 0);
//! ```

pub mod arith;
pub mod cursor;

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{Result, VError};

pub use cursor::{Cursor, CursorMut};

/// Build a [`Vector`] from a list of values, like `vec!`.
#[macro_export]
macro_rules! vector {
    () => {
        $crate::Vector::default()
    };
    ($elem:expr; $n:expr) => {
        $crate::Vector::filled($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Vector::from(vec![$($x),+])
    };
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Vector<T> {
    data: Box<[T]>,
}

impl<T> Vector<T> {
    /// Number of elements.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checked read access.
    pub fn get(&self, index: usize) -> Result<&T> {
        let dimensions = self.dimensions();
        self.data
            .get(index)
            .ok_or(VError::OutOfBounds { index, dimensions })
    }

    /// Checked write access.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let dimensions = self.dimensions();
        self.data
            .get_mut(index)
            .ok_or(VError::OutOfBounds { index, dimensions })
    }

    /// Checked write; returns the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        Ok(std::mem::replace(self.get_mut(index)?, value))
    }

    /// Move the buffer out, leaving `self` empty with 0 dimensions.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Replace the contents with a deep copy of `other`.
    pub fn assign(&mut self, other: &Self)
    where
        T: Clone,
    {
        self.clone_from(other);
    }

    /// Take over `other`'s buffer, releasing ours and leaving `other` empty.
    pub fn move_assign(&mut self, other: &mut Self) {
        *self = other.take();
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }

    /// Cursor at index 0.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, 0)
    }

    /// Cursor one past the last element.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.dimensions() as isize)
    }

    /// Writable cursor at index 0.
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(&mut self.data, 0)
    }
}

impl<T: Clone> Vector<T> {
    /// Copy `values` element-wise, in order.
    pub fn from_values(values: &[T]) -> Self {
        Self { data: values.into() }
    }

    /// `dimensions` copies of `fill`.
    pub fn filled(dimensions: usize, fill: T) -> Self {
        Self { data: vec![fill; dimensions].into_boxed_slice() }
    }
}

impl<T: Default> Vector<T> {
    /// `dimensions` default values (zero for numeric types).
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self {
            data: std::iter::repeat_with(T::default).take(dimensions).collect(),
        }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self { data: Box::default() }
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(values: Vec<T>) -> Self {
        Self { data: values.into_boxed_slice() }
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(values: &[T]) -> Self {
        Self::from_values(values)
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(values: [T; N]) -> Self {
        Self { data: Box::new(values) }
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(v: Vector<T>) -> Self {
        v.into_vec()
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { data: iter.into_iter().collect() }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

/// Panics with the `OutOfBounds` message; use [`Vector::get`] to handle it instead.
impl<T> Index<usize> for Vector<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(x) => x,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(x) => x,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, "]")
    }
}
