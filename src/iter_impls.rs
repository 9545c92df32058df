//! Iterators over a `RingBuffer`.

use core::iter::{Chain, FusedIterator};
use core::slice;

use crate::RingBuffer;

/// `RingBuffer` iterator, front (next to read) to back.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    inner: Chain<slice::Iter<'a, Option<T>>, slice::Iter<'a, Option<T>>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(front: &'a [Option<T>], back: &'a [Option<T>]) -> Self {
        Iter { inner: front.iter().chain(back.iter()) }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter { inner: self.inner.clone() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        // occupied slots always hold a value
        self.inner.next().and_then(Option::as_ref)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back().and_then(Option::as_ref)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// `RingBuffer` mutable iterator, front to back.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T: 'a> {
    inner: Chain<slice::IterMut<'a, Option<T>>, slice::IterMut<'a, Option<T>>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(front: &'a mut [Option<T>], back: &'a mut [Option<T>]) -> Self {
        IterMut { inner: front.iter_mut().chain(back.iter_mut()) }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        self.inner.next().and_then(Option::as_mut)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.inner.next_back().and_then(Option::as_mut)
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

/// A draining iterator over a `RingBuffer`, created by
/// [`RingBuffer::drain`](struct.RingBuffer.html#method.drain).
///
/// Every element is read out even if the iterator is dropped early.
pub struct Drain<'a, T: 'a> {
    buffer: &'a mut RingBuffer<T>,
}

impl<'a, T> Drain<'a, T> {
    pub(crate) fn new(buffer: &'a mut RingBuffer<T>) -> Self {
        Drain { buffer }
    }
}

impl<'a, T> Drop for Drain<'a, T> {
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}

impl<'a, T> Iterator for Drain<'a, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.buffer.read()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.buffer.len();
        (len, Some(len))
    }
}

impl<'a, T> ExactSizeIterator for Drain<'a, T> {}

impl<'a, T> FusedIterator for Drain<'a, T> {}

/// An owning iterator that reads a `RingBuffer` out in FIFO order.
pub struct IntoIter<T> {
    buffer: RingBuffer<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(buffer: RingBuffer<T>) -> Self {
        IntoIter { buffer }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.buffer.read()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.buffer.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
