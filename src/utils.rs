//! Index arithmetic shared by the buffer and its iterators.

#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(index < capacity);
    debug_assert!(addend <= capacity);
    (index + addend) % capacity
}

/// Maps any signed position onto a slot in `[0, capacity)`.
///
/// Negative positions count back from the end of the backing store, so `-1`
/// is the last slot. This is a floored modulo, not `%`, which would keep the
/// sign of `index`.
#[inline]
pub fn wrap_index(index: isize, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    if capacity > isize::MAX as usize {
        // Every isize fits; only negatives need shifting.
        return if index < 0 {
            capacity - index.unsigned_abs()
        } else {
            index as usize
        };
    }
    index.rem_euclid(capacity as isize) as usize
}

/// Splits the `len` slots starting at `start` into the part before the end of
/// the backing store and the part that wrapped around to the front.
#[inline]
pub fn occupied(start: usize, len: usize, capacity: usize) -> ((usize, usize), (usize, usize)) {
    debug_assert!(len <= capacity);
    if start + len <= capacity {
        ((start, start + len), (0, 0))
    } else {
        ((start, capacity), (0, start + len - capacity))
    }
}
