use core::fmt;
use std::slice;
use std::vec;

use crate::{ChunkCapacity, Usize};

/// A fixed-capacity run of elements, one link of a `ChunkedList` chain.
///
/// Handles to chunks are yielded by `ChunkedList::chunks()` and
/// `ChunkedList::pop_chunk()`; they expose the live elements only.
pub struct Chunk<T, const N: usize>
where
    Usize<N>: ChunkCapacity,
{
    items: Vec<T>,
}

impl<T, const N: usize> Chunk<T, N>
where
    Usize<N>: ChunkCapacity,
{
    pub(crate) fn new() -> Self {
        Self {
            items: Vec::with_capacity(N),
        }
    }

    pub(crate) fn with_value(value: T) -> Self {
        let mut chunk = Self::new();
        chunk.push(value);
        chunk
    }

    /// Moves up to `N` elements out of `iter`, in order.
    pub(crate) fn from_iter_bounded<I: Iterator<Item = T>>(iter: &mut I) -> Self {
        let mut chunk = Self::new();
        chunk.items.extend(iter.by_ref().take(N));
        chunk
    }

    /// Clones `values`, which must not be longer than `N`, in order.
    pub(crate) fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        assert!(
            values.len() <= N,
            "{} elements do not fit in a chunk of capacity {N}",
            values.len()
        );

        let mut chunk = Self::new();
        chunk.items.extend_from_slice(values);
        chunk
    }

    pub(crate) fn push(&mut self, value: T) {
        assert!(!self.is_full(), "chunk is full: cannot push more elements");
        self.items.push(value);
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Fills the remaining slots from `iter` without exceeding `N`.
    pub(crate) fn fill_from<I: Iterator<Item = T>>(&mut self, iter: &mut I) {
        let room = N - self.len();
        self.items.extend(iter.by_ref().take(room));
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Returns a reference to the element at `index`, or `None` past the live region.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` past the live region.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Returns the number of live elements in the chunk.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == N
    }

    /// Returns the number of slots of the chunk, that is `N`.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Clone, const N: usize> Clone for Chunk<T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn clone(&self) -> Self {
        let mut chunk = Self::new();
        chunk.items.extend_from_slice(&self.items);
        chunk
    }
}

impl<T, const N: usize> fmt::Debug for Chunk<T, N>
where
    T: fmt::Debug,
    Usize<N>: ChunkCapacity,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T, const N: usize> IntoIterator for Chunk<T, N>
where
    Usize<N>: ChunkCapacity,
{
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Chunk<T, N>
where
    Usize<N>: ChunkCapacity,
{
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Chunk<T, N>
where
    Usize<N>: ChunkCapacity,
{
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use crate::chunk::Chunk;

    #[test]
    fn chunk_new_is_empty() {
        let sut: Chunk<i64, 4> = Chunk::new();
        assert_eq!(sut.len(), 0);
        assert!(sut.is_empty());
        assert!(!sut.is_full());
        assert_eq!(sut.capacity(), 4);
        assert_eq!(sut.get(0), None);
    }

    #[test]
    fn chunk_from_slice_copies_elements_in_order() {
        let sut: Chunk<i64, 4> = Chunk::from_slice(&[1, 2, 3]);
        assert_eq!(sut.len(), 3);
        assert_eq!(sut.as_slice(), &[1, 2, 3]);
        assert_eq!(sut.get(2), Some(&3));
        assert_eq!(sut.get(3), None);

        let sut: Chunk<i64, 4> = Chunk::from_slice(&[]);
        assert!(sut.is_empty());

        let sut: Chunk<i64, 4> = Chunk::from_slice(&[1, 2, 3, 4]);
        assert!(sut.is_full());
    }

    #[test]
    fn chunk_from_slice_panics_on_overflowing_input() {
        let result = std::panic::catch_unwind(|| Chunk::<i64, 2>::from_slice(&[1, 2, 3]));
        assert!(result.is_err());
    }

    #[test]
    fn chunk_from_iter_bounded_takes_at_most_capacity() {
        let mut iter = 0..10;

        let sut: Chunk<i64, 4> = Chunk::from_iter_bounded(&mut iter);
        assert_eq!(sut.as_slice(), &[0, 1, 2, 3]);

        let sut: Chunk<i64, 4> = Chunk::from_iter_bounded(&mut iter);
        assert_eq!(sut.as_slice(), &[4, 5, 6, 7]);

        let sut: Chunk<i64, 4> = Chunk::from_iter_bounded(&mut iter);
        assert_eq!(sut.as_slice(), &[8, 9]);

        let sut: Chunk<i64, 4> = Chunk::from_iter_bounded(&mut iter);
        assert!(sut.is_empty());
    }

    #[test]
    fn chunk_push_and_pop_work_at_the_tail_slot() {
        let mut sut: Chunk<i64, 2> = Chunk::with_value(10);
        sut.push(20);
        assert!(sut.is_full());
        assert_eq!(sut.as_slice(), &[10, 20]);

        assert_eq!(sut.pop(), Some(20));
        assert_eq!(sut.pop(), Some(10));
        assert_eq!(sut.pop(), None);
    }

    #[test]
    fn chunk_push_panics_when_full() {
        let mut sut: Chunk<i64, 1> = Chunk::with_value(10);
        let result = std::panic::catch_unwind(move || sut.push(20));
        assert!(result.is_err());
    }

    #[test]
    fn chunk_fill_from_stops_at_capacity() {
        let mut sut: Chunk<i64, 4> = Chunk::with_value(0);
        let mut iter = 1..10;
        sut.fill_from(&mut iter);
        assert_eq!(sut.as_slice(), &[0, 1, 2, 3]);
        assert_eq!(iter.next(), Some(4));
    }

    #[test]
    fn chunk_clone_keeps_reservation() {
        let base: Chunk<i64, 8> = Chunk::from_slice(&[1, 2]);
        let sut = base.clone();
        assert_eq!(sut.as_slice(), base.as_slice());
        assert!(sut.items.capacity() >= 8);
    }

    #[test]
    fn chunk_debug_lists_live_elements() {
        let sut: Chunk<i64, 4> = Chunk::from_slice(&[1, 2]);
        assert_eq!(format!("{sut:?}"), "[1, 2]");
    }

    #[test]
    fn chunk_get_mut_writes_in_place() {
        let mut sut: Chunk<i64, 4> = Chunk::from_slice(&[1, 2]);
        *sut.get_mut(1).unwrap() = 20;
        assert_eq!(sut.as_slice(), &[1, 20]);
        assert_eq!(sut.get_mut(2), None);
    }
}
