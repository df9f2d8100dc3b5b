//! Integration tests exercising the array through its public surface.

use intarray_core::{version, IntArray, IntArrayError};
use pretty_assertions::assert_eq;

#[test]
fn test_basic() {
    assert_eq!(version(), "0.9.0");

    let size = 35;
    let mut arr = IntArray::new(size).unwrap();
    assert_eq!(arr.size(), size, "check size");

    // the method versions
    let index = 3;
    let value = 25;
    arr.set(index, value).unwrap();
    assert_eq!(arr.get(index).unwrap(), value, "check value");

    // the subscript versions
    let index = 8;
    let value = -1035;
    arr[index] = value;
    assert_eq!(arr[index], value, "check value []");
}

#[test]
fn test_out_of_bounds_access() {
    let mut arr = IntArray::new(100).unwrap();

    let err = arr.set(200, 25).unwrap_err();
    assert!(matches!(err, IntArrayError::IndexOutOfBounds { .. }));

    // negative indices are rejected, not wrapped to size + index
    let err = arr.set(-10, 25).unwrap_err();
    assert!(matches!(err, IntArrayError::IndexOutOfBounds { .. }));
    assert_eq!(arr.get(90).unwrap(), 0);

    // no valid slot was disturbed by the failed writes
    assert!(arr.as_slice().iter().all(|&v| v == 0));
}
