//! A fixed size ring buffer.
//!
//! The backing store is allocated once, when the buffer is created, and is
//! never resized. Elements are written at one end and read from the other;
//! both positions wrap around the end of the store, so nothing is ever
//! shifted and every operation is `O(1)`.
//!
//! # Full buffers drop writes
//!
//! Unlike a blocking queue, [`write`] on a full buffer does **not** wait and
//! does **not** grow the buffer: the element is silently discarded and the
//! buffer is left untouched. Use [`try_write`] to get the element back
//! instead.
//!
//! # Feature Flags
//! The **ringbuffer** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd and implement `std::error::Error` for the error types.
//!     Without it the crate only needs `alloc`.
//!
//! # Logging
//!
//! Records are emitted through the [`log`] facade: a `debug` record when a
//! zero capacity buffer is rejected and a `trace` record for each write
//! dropped on a full buffer. Nothing is printed unless the application
//! installs a logger.
//!
//! # Examples
//! ```
//! use ringbuffer::RingBuffer;
//!
//! let mut buffer = RingBuffer::new(3).unwrap();
//! assert_eq!(buffer.capacity(), 3);
//!
//! buffer.write(1);
//! buffer.write(2);
//! buffer.write(3);
//! buffer.write(4); // full, dropped
//!
//! assert_eq!(buffer.read(), Some(1));
//! assert_eq!(buffer.read(), Some(2));
//! assert_eq!(buffer.read(), Some(3));
//! assert_eq!(buffer.read(), None);
//! ```
//!
//! # Positional access
//!
//! [`write_at`] and [`read_at`] address **physical** slots of the backing
//! store, not offsets from the read position. Indices may be negative and
//! are wrapped into `0..capacity()`.
//!
//! ```
//! use ringbuffer::RingBuffer;
//!
//! let mut buffer = RingBuffer::new(4).unwrap();
//! buffer.extend(0..4);
//! buffer.read();
//!
//! // slot 0 held the element that was just read
//! assert_eq!(buffer.read_at(0), None);
//! assert_eq!(buffer.read_at(1), Some(&1));
//! assert_eq!(buffer.read_at(-1), Some(&3));
//! ```
//!
//! [`write`]: struct.RingBuffer.html#method.write
//! [`try_write`]: struct.RingBuffer.html#method.try_write
//! [`write_at`]: struct.RingBuffer.html#method.write_at
//! [`read_at`]: struct.RingBuffer.html#method.read_at
//! [`log`]: https://docs.rs/log

#![cfg_attr(not(any(feature = "std", test)), no_std)]

#![deny(missing_docs)]

extern crate alloc;

use alloc::boxed::Box;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter;

use log::{debug, trace};

pub use odds::IndexRange as RangeArgument;

pub mod error;
mod iter_impls;
mod utils;

pub use crate::error::{CapacityError, ZeroCapacityError};
pub use crate::iter_impls::{Drain, IntoIter, Iter, IterMut};
use crate::utils::{occupied, wrap_add, wrap_index};

/// A fixed capacity ring buffer.
///
/// The "default" usage of this type as a queue is to use `write` to add to
/// the buffer, and `read` to remove from it. `extend` writes in this manner,
/// and iterating over `RingBuffer` goes in read order.
///
/// The buffer is not synchronized. Sharing one between a producer and a
/// consumer thread needs a lock around it.
pub struct RingBuffer<T> {
    slots: Box<[Option<T>]>,
    len: usize,
    read: usize,
    write: usize,
}

impl<T> RingBuffer<T> {
    /// Creates an empty `RingBuffer` holding at most `size` elements.
    ///
    /// All storage is allocated here.
    ///
    /// # Errors
    ///
    /// Returns `ZeroCapacityError` if `size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let buffer: RingBuffer<u8> = RingBuffer::new(5).unwrap();
    /// assert!(buffer.is_empty());
    ///
    /// assert!(RingBuffer::<u8>::new(0).is_err());
    /// ```
    pub fn new(size: usize) -> Result<Self, ZeroCapacityError> {
        if size == 0 {
            debug!("refusing to create a ring buffer with zero capacity");
            return Err(ZeroCapacityError);
        }
        Ok(RingBuffer {
            slots: empty_slots(size),
            len: 0,
            read: 0,
            write: 0,
        })
    }

    /// Return the capacity of the `RingBuffer`.
    ///
    /// This is the `size` given to `new` and never changes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of elements waiting to be read.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut v = RingBuffer::new(4).unwrap();
    /// assert_eq!(v.len(), 0);
    /// v.write(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer contains no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the buffer is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(1).unwrap();
    ///
    /// assert!(!buf.is_full());
    ///
    /// buf.write(1);
    ///
    /// assert!(buf.is_full());
    /// ```
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    fn write_expecting_space_available(&mut self, element: T) {
        debug_assert!(!self.is_full());
        let slot = self.write;
        self.slots[slot] = Some(element);
        self.write = wrap_add(slot, 1, self.capacity());
        self.len += 1;
    }

    /// Appends an element to the write end of the buffer.
    ///
    /// If the buffer is full the element is dropped and nothing changes.
    /// This is not treated as an error; see `try_write` to detect it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(2).unwrap();
    /// buf.write(1);
    /// buf.write(2);
    /// buf.write(3);
    ///
    /// assert_eq!(buf.len(), 2);
    /// assert_eq!(buf.read(), Some(1));
    /// assert_eq!(buf.read(), Some(2));
    /// ```
    pub fn write(&mut self, element: T) {
        if self.is_full() {
            trace!("ring buffer full ({} slots), dropping write", self.capacity());
            return;
        }
        self.write_expecting_space_available(element);
    }

    /// Appends an element to the write end of the buffer, handing it back
    /// if there is no room.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(1).unwrap();
    /// assert!(buf.try_write("a").is_ok());
    ///
    /// let err = buf.try_write("b").unwrap_err();
    /// assert_eq!(err.element, "b");
    /// ```
    pub fn try_write(&mut self, element: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError { element });
        }
        self.write_expecting_space_available(element);
        Ok(())
    }

    /// Overwrites physical slot `index` of the backing store.
    ///
    /// `index` is wrapped into `0..capacity()`, negative values counting back
    /// from the end. The slot is addressed directly: it is **not** an offset
    /// from the read position, and the length and both positions are left
    /// alone. Writing to a slot that holds no element stores the value there
    /// without making it readable through `read` or `peek`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(5).unwrap();
    /// buf.extend(0..5);
    /// buf.write_at(3, 100);
    /// buf.write_at(-1, 200);
    ///
    /// let items: Vec<_> = buf.drain().collect();
    /// assert_eq!(items, vec![0, 1, 2, 100, 200]);
    /// ```
    pub fn write_at(&mut self, index: isize, element: T) {
        let slot = wrap_index(index, self.capacity());
        self.slots[slot] = Some(element);
    }

    /// Removes the next element from the read end of the buffer.
    ///
    /// Returns the element, or `None` if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(3).unwrap();
    /// assert_eq!(buf.read(), None);
    /// buf.write(1);
    /// buf.write(2);
    /// assert_eq!(buf.read(), Some(1));
    /// assert_eq!(buf.read(), Some(2));
    /// assert_eq!(buf.read(), None);
    /// ```
    pub fn read(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let slot = self.read;
        self.read = wrap_add(slot, 1, self.capacity());
        self.len -= 1;
        self.slots[slot].take()
    }

    /// Returns the content of physical slot `index` without removing it.
    ///
    /// Uses the same wrapping as `write_at`. Returns `None` when the buffer
    /// is empty, whatever `index` is, and for slots that hold nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(5).unwrap();
    /// assert_eq!(buf.read_at(0), None);
    ///
    /// buf.extend(0..5);
    /// assert_eq!(buf.read_at(3), Some(&3));
    /// assert_eq!(buf.read_at(-2), Some(&3));
    /// assert_eq!(buf.read_at(8), Some(&3));
    /// ```
    pub fn read_at(&self, index: isize) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[wrap_index(index, self.capacity())].as_ref()
    }

    /// Mutable counterpart of `read_at`.
    pub fn read_at_mut(&mut self, index: isize) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        let slot = wrap_index(index, self.capacity());
        self.slots[slot].as_mut()
    }

    /// Returns the element `read` would return next, leaving it in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(2).unwrap();
    /// assert_eq!(buf.peek(), None);
    ///
    /// buf.write(7);
    /// assert_eq!(buf.peek(), Some(&7));
    /// assert_eq!(buf.len(), 1);
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.read].as_ref()
    }

    /// Returns a mutable reference to the element `read` would return next.
    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.read].as_mut()
    }

    /// Clears the buffer, dropping every value held in any slot.
    ///
    /// Afterwards the buffer is indistinguishable from a new one of the same
    /// capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut v = RingBuffer::new(4).unwrap();
    /// v.write(1);
    /// v.clear();
    /// assert!(v.is_empty());
    /// ```
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.len = 0;
        self.read = 0;
        self.write = 0;
    }

    /// Returns an iterator in read order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(4).unwrap();
    /// buf.write(5);
    /// buf.write(3);
    /// buf.write(4);
    /// let b: &[_] = &[&5, &3, &4];
    /// let c: Vec<&i32> = buf.iter().collect();
    /// assert_eq!(&c[..], b);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        let ((start, end), (_, wrapped)) = occupied(self.read, self.len, self.capacity());
        Iter::new(&self.slots[start..end], &self.slots[..wrapped])
    }

    /// Returns an iterator in read order that returns mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<T> {
        let ((start, end), (_, wrapped)) = occupied(self.read, self.len, self.capacity());
        let (front, back) = self.slots.split_at_mut(start);
        IterMut::new(&mut back[..end - start], &mut front[..wrapped])
    }

    /// Returns an iterator over a sub-range of the elements waiting to be
    /// read. Offset 0 is the element `read` would return next.
    ///
    /// # Panics
    ///
    /// Panics if the starting point is greater than the end point or if
    /// the end point is greater than the length of the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(4).unwrap();
    /// buf.extend(0..4);
    /// buf.read();
    /// buf.write(4);
    ///
    /// let window: Vec<_> = buf.range(1..3).cloned().collect();
    /// assert_eq!(window, vec![2, 3]);
    ///
    /// let tail: Vec<_> = buf.range(2..).cloned().collect();
    /// assert_eq!(tail, vec![3, 4]);
    /// ```
    pub fn range<R>(&self, range: R) -> Iter<T>
        where R: RangeArgument<usize>
    {
        let len = self.len;
        let start = range.start().unwrap_or(0);
        let end = range.end().unwrap_or(len);
        assert!(start <= end, "range lower bound was too large");
        assert!(end <= len, "range upper bound was too large");

        let first = wrap_add(self.read, start, self.capacity());
        let ((a, b), (_, wrapped)) = occupied(first, end - start, self.capacity());
        Iter::new(&self.slots[a..b], &self.slots[..wrapped])
    }

    /// Creates an iterator that reads every element out of the buffer.
    ///
    /// The buffer is empty once the iterator is dropped, even if it was not
    /// consumed until the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(4).unwrap();
    /// buf.extend(vec![1, 2, 3]);
    /// let drained: Vec<_> = buf.drain().collect();
    /// assert_eq!(drained, vec![1, 2, 3]);
    /// assert!(buf.is_empty());
    /// ```
    pub fn drain(&mut self) -> Drain<T> {
        Drain::new(self)
    }
}

fn empty_slots<T>(size: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(size).collect()
}

impl<T: Clone> Clone for RingBuffer<T> {
    fn clone(&self) -> Self {
        RingBuffer {
            slots: self.slots.clone(),
            len: self.len,
            read: self.read,
            write: self.write,
        }
    }
}

impl<T: PartialEq> PartialEq for RingBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

#[cfg(test)]
impl<T: PartialEq> PartialEq<Vec<T>> for RingBuffer<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.len == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingBuffer<T> {}

impl<T: Hash> Hash for RingBuffer<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T> Extend<T> for RingBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter {
            self.write(elt);
        }
    }
}

impl<T> IntoIterator for RingBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingBuffer<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn filled(size: usize) -> RingBuffer<i32> {
        let mut buf = RingBuffer::new(size).unwrap();
        for i in 0..size as i32 {
            buf.write(i);
        }
        buf
    }

    #[test]
    fn fresh_buffer() {
        for size in 1..8 {
            let buf: RingBuffer<i32> = RingBuffer::new(size).unwrap();
            assert!(buf.is_empty());
            assert!(!buf.is_full());
            assert_eq!(buf.len(), 0);
            assert_eq!(buf.capacity(), size);
        }
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert_eq!(RingBuffer::<i32>::new(0).unwrap_err(), ZeroCapacityError);
    }

    #[test]
    fn capacity_one() {
        let mut buf = RingBuffer::new(1).unwrap();
        buf.write('a');
        assert!(buf.is_full());
        buf.write('b');
        assert_eq!(buf.read(), Some('a'));
        assert!(buf.is_empty());
        buf.write('c');
        assert_eq!(buf.peek(), Some(&'c'));
        assert_eq!(buf.read_at(-7), Some(&'c'));
    }

    #[test]
    fn write_read_in_order() {
        let mut buf = filled(5);
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.capacity(), 5);
        for i in 0..5 {
            assert_eq!(buf.read(), Some(i));
        }
        assert_eq!(buf.read(), None);
    }

    #[test]
    fn write_full_drops() {
        let mut buf = filled(5);
        assert!(buf.is_full());
        for i in 5..8 {
            buf.write(i);
            assert_eq!(buf.len(), 5);
        }
        assert_eq!(buf, vec![0, 1, 2, 3, 4]);
        for i in 0..5 {
            assert_eq!(buf.read(), Some(i));
        }
    }

    #[test]
    fn try_write_full_returns_element() {
        let mut buf = filled(2);
        let err = buf.try_write(9).unwrap_err();
        assert_eq!(err.element, 9);
        assert_eq!(buf, vec![0, 1]);

        buf.read();
        assert_eq!(buf.try_write(9), Ok(()));
        assert_eq!(buf, vec![1, 9]);
    }

    #[test]
    fn read_empty() {
        let mut buf = RingBuffer::new(5).unwrap();
        assert_eq!(buf.read(), None);
        assert_eq!(buf.len(), 0);
        for i in 0..5 {
            buf.write(i);
        }
        for i in 0..5 {
            assert_eq!(buf.read(), Some(i));
        }
        assert_eq!(buf.read(), None);
        assert_eq!(buf.read(), None);
        assert_eq!(buf.len(), 0);

        // positions did not move on the empty reads
        buf.write(42);
        assert_eq!(buf.read_at(0), Some(&42));
        assert_eq!(buf.read(), Some(42));
    }

    #[test]
    fn reuse_buffer() {
        let mut buf = filled(5);
        buf.read();
        buf.read();
        buf.write(0);
        buf.write(1);
        let got: Vec<_> = buf.drain().collect();
        assert_eq!(got, vec![2, 3, 4, 0, 1]);
    }

    #[test]
    fn interleaved_reads_and_writes_keep_fifo() {
        let mut buf = RingBuffer::new(3).unwrap();
        let mut next_in = 0;
        let mut next_out = 0;
        for round in 0..20 {
            for _ in 0..(round % 3) + 1 {
                if !buf.is_full() {
                    buf.write(next_in);
                    next_in += 1;
                }
            }
            for _ in 0..(round % 2) + 1 {
                if let Some(v) = buf.read() {
                    assert_eq!(v, next_out);
                    next_out += 1;
                }
            }
        }
    }

    #[test]
    fn write_at_patches_one_slot() {
        let mut buf = filled(5);
        buf.write_at(3, 100);
        assert_eq!(buf.len(), 5);
        for i in 0..5 {
            let v = buf.read().unwrap();
            if i == 3 {
                assert_eq!(v, 100);
            } else {
                assert_eq!(v, i);
            }
        }
    }

    #[test]
    fn write_at_negative_index() {
        let mut buf = filled(5);
        buf.write_at(-2, 100);
        buf.write_at(-10, 200);
        assert_eq!(buf, vec![200, 1, 2, 100, 4]);
    }

    #[test]
    fn write_at_is_physical_not_logical() {
        let mut buf = filled(5);
        buf.read();
        buf.read();
        // read position is now slot 2; slot 3 holds 3
        buf.write_at(3, 100);
        assert_eq!(buf, vec![2, 100, 4]);
    }

    #[test]
    fn write_at_leaves_positions_alone() {
        let mut buf = RingBuffer::new(4).unwrap();
        buf.write_at(2, 7);
        assert!(buf.is_empty());
        assert_eq!(buf.read(), None);
        assert_eq!(buf.peek(), None);

        buf.write(1);
        assert_eq!(buf.len(), 1);
        assert_eq!(buf.peek(), Some(&1));
        assert_eq!(buf.read_at(2), Some(&7));
    }

    #[test]
    fn read_at() {
        let mut buf = filled(5);
        buf.write_at(3, 100);
        assert_eq!(buf.read_at(3), Some(&100));
        assert_eq!(buf.read_at(3), Some(&100));
        assert_eq!(buf.read_at(-2), Some(&100));
        assert_eq!(buf.read_at(-7), Some(&100));
        assert_eq!(buf.read_at(13), Some(&100));
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.peek(), Some(&0));
    }

    #[test]
    fn read_at_empty_is_none() {
        let mut buf = filled(3);
        buf.drain();
        for i in -4..4 {
            assert_eq!(buf.read_at(i), None);
        }
    }

    #[test]
    fn read_at_mut() {
        let mut buf = filled(3);
        if let Some(v) = buf.read_at_mut(-1) {
            *v = 9;
        }
        assert_eq!(buf, vec![0, 1, 9]);
    }

    #[test]
    fn peek_does_not_advance() {
        let mut buf = filled(3);
        assert_eq!(buf.peek(), Some(&0));
        assert_eq!(buf.peek(), Some(&0));
        assert_eq!(buf.len(), 3);
        if let Some(v) = buf.peek_mut() {
            *v = 10;
        }
        assert_eq!(buf.read(), Some(10));
        assert_eq!(buf.peek(), Some(&1));
    }

    #[test]
    fn clear_resets() {
        let mut buf = filled(4);
        buf.read();
        buf.write(9);
        buf.clear();
        assert!(buf.is_empty());
        assert!(!buf.is_full());
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.capacity(), 4);
        assert_eq!(buf.peek(), None);
        buf.write(1);
        assert_eq!(buf.read_at(0), Some(&1));
        assert_eq!(buf.read_at(1), None);
    }

    #[test]
    fn capacity_never_changes() {
        let mut buf = RingBuffer::new(3).unwrap();
        buf.extend(0..10);
        buf.read();
        buf.write_at(-1, 5);
        buf.clear();
        buf.extend(0..2);
        assert_eq!(buf.capacity(), 3);
    }

    #[test]
    fn range_bounds() {
        let mut buf = filled(5);
        buf.read();
        buf.write(5);
        assert_eq!(buf.range(..).cloned().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(buf.range(..2).cloned().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(buf.range(3..5).cloned().collect::<Vec<_>>(), vec![4, 5]);
        assert_eq!(buf.range(2..2).count(), 0);
    }

    #[test]
    #[should_panic(expected = "range upper bound was too large")]
    fn range_past_len() {
        let buf = filled(3);
        let _ = buf.range(1..4);
    }

    #[test]
    fn clone_and_eq() {
        let mut a = filled(4);
        a.read();
        let b = a.clone();
        assert_eq!(a, b);

        // same contents at different physical positions
        let mut c = RingBuffer::new(4).unwrap();
        c.extend(1..4);
        assert_eq!(a, c);

        c.write(4);
        assert!(a != c);
    }

    #[test]
    fn debug_prints_read_order() {
        let mut buf = filled(3);
        buf.read();
        buf.write(3);
        assert_eq!(format!("{:?}", buf), "[1, 2, 3]");
    }

    #[test]
    fn drops_each_element_once() {
        struct Bump(Rc<Cell<usize>>);

        impl Drop for Bump {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let drops = Rc::new(Cell::new(0));
        {
            let mut buf = RingBuffer::new(3).unwrap();
            for _ in 0..4 {
                buf.write(Bump(drops.clone()));
            }
            // the fourth write was dropped on the spot
            assert_eq!(drops.get(), 1);

            drop(buf.read());
            assert_eq!(drops.get(), 2);

            buf.write_at(1, Bump(drops.clone()));
            assert_eq!(drops.get(), 3);

            buf.clear();
            assert_eq!(drops.get(), 5);

            buf.write(Bump(drops.clone()));
        }
        assert_eq!(drops.get(), 6);
    }
}
