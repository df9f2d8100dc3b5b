//! Bounds-Checked Integer Array
//!
//! A fixed-capacity sequence of signed integers with bounds-checked element
//! access. The capacity is set once at construction and never changes; every
//! read or write validates its index against `[0, size)` and fails with a
//! distinguishable error on out-of-range access. Negative indices are
//! rejected outright, never wrapped.

use std::fmt;
use std::ops::{Index, IndexMut};

use thiserror::Error;

/// Result type for array operations
pub type IntArrayResult<T> = Result<T, IntArrayError>;

/// Errors raised by [`IntArray`] construction and element access
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntArrayError {
    /// Construction with a non-positive capacity
    #[error("array dimensions must be greater than 0, got {size}")]
    InvalidSize {
        /// The rejected capacity
        size: i64,
    },

    /// Element access outside `[0, size)`, in either direction
    #[error("index {index} is out of bounds [0,{size})")]
    IndexOutOfBounds {
        /// The rejected index
        index: i64,
        /// The array capacity
        size: i64,
    },
}

/// A fixed-size array of signed integers with bounds-checked access.
///
/// The backing storage is allocated at construction, zero-filled, and owned
/// exclusively by the instance. Cloning produces an independent copy.
///
/// # Example
///
/// ```
/// use intarray_core::IntArray;
///
/// let mut arr = IntArray::new(10)?;
/// arr.set(3, 25)?;
/// assert_eq!(arr.get(3)?, 25);
/// assert_eq!(arr.size(), 10);
/// # Ok::<(), intarray_core::IntArrayError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntArray {
    data: Box<[i64]>,
}

impl IntArray {
    /// Create a new array with `size` zero-filled elements.
    ///
    /// Fails with [`IntArrayError::InvalidSize`] if `size` is not positive.
    pub fn new(size: i64) -> IntArrayResult<Self> {
        if size <= 0 {
            return Err(IntArrayError::InvalidSize { size });
        }
        Ok(Self {
            data: vec![0; size as usize].into_boxed_slice(),
        })
    }

    /// The capacity fixed at construction.
    pub fn size(&self) -> i64 {
        self.data.len() as i64
    }

    /// Read the element at `index`.
    ///
    /// Fails with [`IntArrayError::IndexOutOfBounds`] if `index` falls
    /// outside `[0, size)`.
    pub fn get(&self, index: i64) -> IntArrayResult<i64> {
        let slot = self.check_index(index)?;
        Ok(self.data[slot])
    }

    /// Store `value` at `index`, overwriting the prior value.
    ///
    /// Fails with [`IntArrayError::IndexOutOfBounds`] if `index` falls
    /// outside `[0, size)`; a failed write leaves the array unmodified.
    pub fn set(&mut self, index: i64, value: i64) -> IntArrayResult<()> {
        let slot = self.check_index(index)?;
        self.data[slot] = value;
        Ok(())
    }

    /// Read-only view of the backing storage.
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    // Validate an index and translate it to a storage offset
    fn check_index(&self, index: i64) -> IntArrayResult<usize> {
        if index < 0 || index >= self.size() {
            Err(IntArrayError::IndexOutOfBounds {
                index,
                size: self.size(),
            })
        } else {
            Ok(index as usize)
        }
    }
}

impl Index<i64> for IntArray {
    type Output = i64;

    /// Subscript read, delegating to the same bounds check as [`IntArray::get`].
    ///
    /// # Panics
    ///
    /// Panics if `index` falls outside `[0, size)`.
    fn index(&self, index: i64) -> &i64 {
        match self.check_index(index) {
            Ok(slot) => &self.data[slot],
            Err(err) => panic!("{err}"),
        }
    }
}

impl IndexMut<i64> for IntArray {
    /// Subscript write, delegating to the same bounds check as [`IntArray::set`].
    ///
    /// # Panics
    ///
    /// Panics if `index` falls outside `[0, size)`.
    fn index_mut(&mut self, index: i64) -> &mut i64 {
        match self.check_index(index) {
            Ok(slot) => &mut self.data[slot],
            Err(err) => panic!("{err}"),
        }
    }
}

impl fmt::Display for IntArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "int array[{}]", self.size())
    }
}

/// Library version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the library version string.
///
/// A process-wide constant query; always matches the package's declared
/// version at build time.
pub fn version() -> &'static str {
    VERSION
}
