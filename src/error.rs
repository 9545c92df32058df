//! Error types.

#[cfg(feature = "std")]
use std::error::Error;
use core::fmt;

/// Error value indicating a ring buffer was requested with no room at all.
///
/// Returned by [`RingBuffer::new`](../struct.RingBuffer.html#method.new)
/// when `size` is zero.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd, Hash)]
pub struct ZeroCapacityError;

const ZEROCAP: &str = "ring buffer capacity must be positive";

#[cfg(feature = "std")]
impl Error for ZeroCapacityError {}

impl fmt::Display for ZeroCapacityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(ZEROCAP)
    }
}

impl fmt::Debug for ZeroCapacityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ZeroCapacityError: {}", ZEROCAP)
    }
}

/// Error value indicating insufficient capacity
///
/// Only `try_write` produces it; plain `write` drops the element instead.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
pub struct CapacityError<T = ()> {
    /// The element that caused the error.
    pub element: T,
}

impl<T> CapacityError<T> {
    /// Takes the rejected element back out of the error.
    pub fn into_element(self) -> T {
        self.element
    }
}

const CAPERROR: &str = "insufficient capacity";

#[cfg(feature = "std")]
impl<T> Error for CapacityError<T> {}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(CAPERROR)
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CapacityError: {}", CAPERROR)
    }
}
