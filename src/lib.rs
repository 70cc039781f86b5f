//! # chunked_list
//!
//! `chunked_list` implements an **unrolled linked list**: elements live in
//! fixed-capacity chunks chained one after the other, combining the cache
//! friendliness of an array within a chunk with linked-list-like growth
//! across chunks.
//!
//! ## Features
//! - Ordered sequence with index based element access.
//! - Chunked storage: every chunk but the last is always full, so an index
//!   translates directly to a chunk and an offset.
//! - Growth and shrink at the back only, one element or one chunk at a time.
//! - Element iterators (`Iter`, `IterMut`, `IntoIter`), a `Cursor` that
//!   walks elements between `begin` and `end`, and a chunk-level view.
//!
//! ## Example
//! ```rust
//! use chunked_list::ChunkedList;
//!
//! let mut list: ChunkedList<i64, 4> = ChunkedList::from([1, 2, 3, 4, 5]);
//! list.push_back(6);
//!
//! assert_eq!(list.len(), 6);
//! assert_eq!(list.chunk_count(), 2);
//! assert_eq!(list[4], 5);
//!
//! assert_eq!(list.pop(), Ok(6));
//! assert_eq!(list.pop_back(), Some(5));
//! assert_eq!(list.chunk_count(), 1);
//! ```

mod chunk;
mod chunks;
mod cursor;
mod error;
mod into_iter;
mod iter;
mod iter_mut;
mod sailed;

pub use chunk::Chunk;
pub use chunks::Chunks;
pub use cursor::Cursor;
pub use error::ChunkedListError;
pub use into_iter::IntoIter;
pub use iter::Iter;
pub use iter_mut::IterMut;

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::iter::{Chain, Once};
use std::mem;
use std::ops::{Index, IndexMut};
use std::slice;

use log::trace;

pub enum Usize<const N: usize> {}

/// Chunk capacities a `ChunkedList` can be instantiated with.
///
/// Implemented for `Usize<1>` through `Usize<64>` and for the powers of two up to `Usize<4096>`.
pub trait ChunkCapacity: crate::sailed::Sailed {}

/// A sequence container storing its elements in a chain of fixed-capacity chunks.
///
/// # Layout
/// - Every chunk holds up to `N` elements.
/// - Every chunk except the tail is full; the tail is empty only when the whole list is.
/// - A list always owns at least one chunk, a new list owns exactly one empty chunk.
///
/// # Type Parameters
/// - `T`: The type of elements stored in the list.
/// - `N`: The maximum number of elements that each chunk can hold, `16` by default.
///
/// # Example
/// ```rust
/// use chunked_list::ChunkedList;
///
/// let mut list: ChunkedList<i64, 4> = ChunkedList::new();
/// list.push_back(10);
/// list.push_back(20);
/// list.push_back(30);
///
/// assert!(!list.is_empty());
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.chunk_count(), 1);
///
/// assert_eq!(list.pop_back(), Some(30));
/// assert_eq!(list.pop_back(), Some(20));
/// assert_eq!(list.pop_back(), Some(10));
/// assert_eq!(list.pop_back(), None);
/// ```
pub struct ChunkedList<T, const N: usize = 16>
where
    Usize<N>: ChunkCapacity,
{
    /// Full chunks, head first.
    packed: Vec<Chunk<T, N>>,
    tail: Chunk<T, N>,
}

impl<T, const N: usize, const M: usize> From<[T; M]> for ChunkedList<T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const N: usize> FromIterator<T> for ChunkedList<T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T, const N: usize> Extend<T> for ChunkedList<T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = &mut iter.into_iter().peekable();

        self.tail.fill_from(iter);

        while iter.peek().is_some() {
            let chunk = Chunk::from_iter_bounded(iter);
            self.link_chunk(chunk);
        }
    }
}

impl<'a, T, const N: usize> Extend<&'a T> for ChunkedList<T, N>
where
    T: Clone,
    Usize<N>: ChunkCapacity,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T, const N: usize> Default for ChunkedList<T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> ChunkedList<T, N>
where
    Usize<N>: ChunkCapacity,
{
    /// Creates a new `ChunkedList` holding a single empty chunk.
    ///
    /// # Example
    /// ```rust
    /// use chunked_list::ChunkedList;
    ///
    /// let list: ChunkedList<i64, 6> = ChunkedList::new();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.chunk_count(), 1);
    /// ```
    pub fn new() -> Self {
        Self {
            packed: Vec::new(),
            tail: Chunk::new(),
        }
    }

    /// Creates a `ChunkedList` by cloning the elements of `values`, in order.
    ///
    /// All chunks but the last one are full.
    ///
    /// # Example
    /// ```rust
    /// use chunked_list::ChunkedList;
    ///
    /// let list: ChunkedList<i64, 4> = ChunkedList::from_slice(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    ///
    /// assert_eq!(list.len(), 9);
    /// assert_eq!(list.chunk_count(), 3);
    /// assert_eq!(format!("{list:?}"), "[[1, 2, 3, 4], [5, 6, 7, 8], [9]]");
    /// ```
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        let mut packed: Vec<_> = values.chunks(N).map(Chunk::from_slice).collect();
        let tail = packed.pop().unwrap_or_else(Chunk::new);
        Self { packed, tail }
    }

    /// Adds an element to the back of the `ChunkedList`.
    ///
    /// If the tail chunk is full, a new chunk holding the element is linked after it.
    ///
    /// # Example
    /// ```rust
    /// use chunked_list::ChunkedList;
    ///
    /// let mut list: ChunkedList<i64, 2> = ChunkedList::new();
    /// list.push_back(10);
    /// list.push_back(20);
    /// assert_eq!(list.chunk_count(), 1);
    ///
    /// list.push_back(30);
    /// assert_eq!(list.chunk_count(), 2);
    /// assert_eq!(list, [10, 20, 30]);
    /// ```
    pub fn push_back(&mut self, value: T) {
        if self.tail.is_full() {
            self.link_chunk(Chunk::with_value(value));
        } else {
            self.tail.push(value);
        }
    }

    /// Removes and returns the last element of the `ChunkedList`.
    ///
    /// When the removal empties the tail chunk and that chunk is not the only one,
    /// the chunk is evicted from the chain.
    ///
    /// # Errors
    /// Returns `ChunkedListError::Empty` if the list holds no elements.
    ///
    /// # Example
    /// ```rust
    /// use chunked_list::{ChunkedList, ChunkedListError};
    ///
    /// let mut list: ChunkedList<i64, 2> = ChunkedList::from([10, 20, 30]);
    /// assert_eq!(list.chunk_count(), 2);
    ///
    /// assert_eq!(list.pop(), Ok(30));
    /// assert_eq!(list.chunk_count(), 1);
    ///
    /// assert_eq!(list.pop(), Ok(20));
    /// assert_eq!(list.pop(), Ok(10));
    /// assert_eq!(list.pop(), Err(ChunkedListError::Empty));
    /// ```
    pub fn pop(&mut self) -> Result<T, ChunkedListError> {
        let value = self.tail.pop().ok_or(ChunkedListError::Empty)?;

        if self.tail.is_empty() && !self.packed.is_empty() {
            self.pop_chunk();
        }

        Ok(value)
    }

    /// Removes and returns the last element of the `ChunkedList`, if any.
    ///
    /// This is `pop` with the error discarded.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        self.pop().ok()
    }

    /// Evicts the tail chunk, whatever its fill level, and hands it back.
    ///
    /// The previous chunk becomes the new tail. When the tail is the only chunk,
    /// it is replaced by a fresh empty one so that the list keeps owning a chunk.
    ///
    /// # Example
    /// ```rust
    /// use chunked_list::ChunkedList;
    ///
    /// let mut list: ChunkedList<i64, 2> = ChunkedList::from([1, 2, 3]);
    ///
    /// let chunk = list.pop_chunk();
    /// assert_eq!(chunk.as_slice(), &[3]);
    /// assert_eq!(list, [1, 2]);
    ///
    /// let chunk = list.pop_chunk();
    /// assert_eq!(chunk.as_slice(), &[1, 2]);
    /// assert!(list.is_empty());
    /// assert_eq!(list.chunk_count(), 1);
    /// ```
    pub fn pop_chunk(&mut self) -> Chunk<T, N> {
        let replacement = self.packed.pop().unwrap_or_else(Chunk::new);
        let evicted = mem::replace(&mut self.tail, replacement);

        trace!(
            "evicted tail chunk holding {} elements, {} chunks left",
            evicted.len(),
            self.chunk_count()
        );

        evicted
    }

    /// Removes all elements, leaving a single empty chunk.
    ///
    /// # Example
    /// ```rust
    /// use chunked_list::ChunkedList;
    ///
    /// let mut list: ChunkedList<i32, 2> = ChunkedList::from([1, 2, 3]);
    /// list.clear();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.chunk_count(), 1);
    /// assert_eq!(list.front(), None);
    /// ```
    pub fn clear(&mut self) {
        while !self.packed.is_empty() {
            self.pop_chunk();
        }

        self.pop_chunk();
    }

    /// Returns a reference to the element at `index`.
    ///
    /// The index translates to chunk `index / N` and slot `index % N` within it.
    ///
    /// # Errors
    /// Returns `ChunkedListError::OutOfRange` if `index >= self.len()`.
    ///
    /// # Example
    /// ```rust
    /// use chunked_list::{ChunkedList, ChunkedListError};
    ///
    /// let list: ChunkedList<i64, 4> = ChunkedList::from([1, 2, 3, 4, 5]);
    ///
    /// assert_eq!(list.at(4), Ok(&5));
    /// assert_eq!(list.at(5), Err(ChunkedListError::OutOfRange { index: 5, len: 5 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, ChunkedListError> {
        let (chunk_index, offset) = self.locate(index)?;

        self.chunk_at(chunk_index)
            .and_then(|chunk| chunk.get(offset))
            .ok_or(ChunkedListError::OutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns `ChunkedListError::OutOfRange` if `index >= self.len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ChunkedListError> {
        let (chunk_index, offset) = self.locate(index)?;
        let len = self.len();

        self.chunk_at_mut(chunk_index)
            .and_then(|chunk| chunk.get_mut(offset))
            .ok_or(ChunkedListError::OutOfRange { index, len })
    }

    /// Returns a reference to the element at the specified index, if any.
    ///
    /// # Examples
    /// ```
    /// use chunked_list::ChunkedList;
    ///
    /// let mut list: ChunkedList<i64, 4> = ChunkedList::new();
    /// list.push_back(10);
    /// list.push_back(20);
    ///
    /// assert_eq!(list.get(0), Some(&10));
    /// assert_eq!(list.get(1), Some(&20));
    /// assert_eq!(list.get(2), None); // Out of bounds
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.at(index).ok()
    }

    /// Returns a mutable reference to the element at the specified index, if any.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.at_mut(index).ok()
    }

    /// Returns a reference to the first element, if any.
    ///
    /// # Examples
    /// ```
    /// use chunked_list::ChunkedList;
    ///
    /// let mut list: ChunkedList<i64, 4> = ChunkedList::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_back(10);
    /// list.push_back(20);
    /// assert_eq!(list.front(), Some(&10));
    /// ```
    pub fn front(&self) -> Option<&T> {
        self.packed.first().unwrap_or(&self.tail).get(0)
    }

    /// Returns a mutable reference to the first element, if any.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match self.packed.first_mut() {
            Some(chunk) => chunk.get_mut(0),
            None => self.tail.get_mut(0),
        }
    }

    /// Returns a reference to the last element, if any.
    ///
    /// # Examples
    /// ```
    /// use chunked_list::ChunkedList;
    ///
    /// let mut list: ChunkedList<i64, 4> = ChunkedList::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(10);
    /// list.push_back(20);
    /// assert_eq!(list.back(), Some(&20));
    /// ```
    pub fn back(&self) -> Option<&T> {
        self.tail.as_slice().last()
    }

    /// Returns a mutable reference to the last element, if any.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.tail.as_mut_slice().last_mut()
    }

    /// Returns the number of elements currently stored in the `ChunkedList`.
    ///
    /// Computed from the chunk count and the fill level of the tail, without traversal.
    ///
    /// # Example
    /// ```rust
    /// use chunked_list::ChunkedList;
    ///
    /// let list: ChunkedList<i64, 2> = ChunkedList::from([1, 2, 3]);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        (self.chunk_count() - 1) * N + self.tail.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tail.is_empty()
    }

    /// Returns the number of chunks in the chain, never less than one.
    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.packed.len() + 1
    }

    /// Provides an iterator over list's elements, from head to tail.
    ///
    /// # Examples
    /// ```
    /// use chunked_list::ChunkedList;
    ///
    /// let list: ChunkedList<_, 2> = ChunkedList::from([0, 1, 2]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter::from_list(self)
    }

    /// Provides a mutable iterator over list's elements, from head to tail.
    ///
    /// # Examples
    /// ```
    /// use chunked_list::ChunkedList;
    ///
    /// let mut list: ChunkedList<_, 2> = ChunkedList::from([0, 1, 2]);
    /// list.iter_mut().for_each(|value| *value *= 10);
    ///
    /// assert_eq!(list, [0, 10, 20]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, N> {
        IterMut::from_list(self)
    }

    /// Provides a cursor resting on the first element.
    ///
    /// On an empty list the cursor equals `end()`.
    ///
    /// # Examples
    /// ```
    /// use chunked_list::ChunkedList;
    ///
    /// let list: ChunkedList<_, 2> = ChunkedList::from([1, 2, 3]);
    ///
    /// let mut cursor = list.begin();
    /// let mut seen = Vec::new();
    /// while cursor != list.end() {
    ///     seen.push(*cursor.current().unwrap());
    ///     cursor.move_next().unwrap();
    /// }
    ///
    /// assert_eq!(seen, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T, N> {
        Cursor::from_begin(self)
    }

    /// Provides a cursor resting one past the last element, in the tail chunk.
    #[inline]
    pub fn end(&self) -> Cursor<'_, T, N> {
        Cursor::from_end(self)
    }

    /// Provides an iterator over the chunks of the list, from head to tail.
    ///
    /// # Examples
    /// ```
    /// use chunked_list::ChunkedList;
    ///
    /// let list: ChunkedList<_, 2> = ChunkedList::from([1, 2, 3]);
    ///
    /// let lens: Vec<_> = list.chunks().map(|chunk| chunk.len()).collect();
    /// assert_eq!(lens, [2, 1]);
    /// ```
    #[inline]
    pub fn chunks(&self) -> Chunks<'_, T, N> {
        Chunks::from_list(self)
    }

    pub(crate) fn chain(&self) -> Chain<slice::Iter<'_, Chunk<T, N>>, Once<&Chunk<T, N>>> {
        self.packed.iter().chain(std::iter::once(&self.tail))
    }

    pub(crate) fn chain_mut(
        &mut self,
    ) -> Chain<slice::IterMut<'_, Chunk<T, N>>, Once<&mut Chunk<T, N>>> {
        self.packed.iter_mut().chain(std::iter::once(&mut self.tail))
    }

    pub(crate) fn chunk_at(&self, chunk_index: usize) -> Option<&Chunk<T, N>> {
        match chunk_index.cmp(&self.packed.len()) {
            Ordering::Less => self.packed.get(chunk_index),
            Ordering::Equal => Some(&self.tail),
            Ordering::Greater => None,
        }
    }

    fn chunk_at_mut(&mut self, chunk_index: usize) -> Option<&mut Chunk<T, N>> {
        match chunk_index.cmp(&self.packed.len()) {
            Ordering::Less => self.packed.get_mut(chunk_index),
            Ordering::Equal => Some(&mut self.tail),
            Ordering::Greater => None,
        }
    }

    fn locate(&self, index: usize) -> Result<(usize, usize), ChunkedListError> {
        let len = self.len();
        if index >= len {
            return Err(ChunkedListError::OutOfRange { index, len });
        }

        Ok((index / N, index % N))
    }

    /// Links `chunk` after the current tail, which must be full.
    fn link_chunk(&mut self, chunk: Chunk<T, N>) {
        debug_assert!(self.tail.is_full());

        let previous = mem::replace(&mut self.tail, chunk);
        self.packed.push(previous);

        trace!("linked a new tail chunk, {} chunks now", self.chunk_count());
    }
}

impl<T, const N: usize> Drop for ChunkedList<T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn drop(&mut self) {
        // Release chunks tail to head.
        while let Some(chunk) = self.packed.pop() {
            drop(mem::replace(&mut self.tail, chunk));
        }
    }
}

impl<T, const N: usize> Index<usize> for ChunkedList<T, N>
where
    Usize<N>: ChunkCapacity,
{
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.at(index) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for ChunkedList<T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T: Clone, const N: usize> Clone for ChunkedList<T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn clone(&self) -> Self {
        Self {
            packed: self.packed.clone(),
            tail: self.tail.clone(),
        }
    }
}

impl<T, const N: usize, const M: usize> PartialEq<[T; M]> for ChunkedList<T, N>
where
    T: PartialEq,
    Usize<N>: ChunkCapacity,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T, const N: usize> PartialEq<&[T]> for ChunkedList<T, N>
where
    T: PartialEq,
    Usize<N>: ChunkCapacity,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, const N: usize> PartialEq<[T]> for ChunkedList<T, N>
where
    T: PartialEq,
    Usize<N>: ChunkCapacity,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T, const N: usize> PartialEq for ChunkedList<T, N>
where
    T: PartialEq,
    Usize<N>: ChunkCapacity,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T, const N: usize> Eq for ChunkedList<T, N>
where
    T: Eq,
    Usize<N>: ChunkCapacity,
{
}

impl<T, const N: usize> PartialOrd for ChunkedList<T, N>
where
    T: PartialOrd,
    Usize<N>: ChunkCapacity,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T, const N: usize> Ord for ChunkedList<T, N>
where
    T: Ord,
    Usize<N>: ChunkCapacity,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T, const N: usize> Hash for ChunkedList<T, N>
where
    T: Hash,
    Usize<N>: ChunkCapacity,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|v| v.hash(state));
    }
}

impl<T, const N: usize> std::fmt::Debug for ChunkedList<T, N>
where
    T: std::fmt::Debug,
    Usize<N>: ChunkCapacity,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.chunks()).finish()
    }
}

impl<T, const N: usize> IntoIterator for ChunkedList<T, N>
where
    Usize<N>: ChunkCapacity,
{
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_list(self)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a ChunkedList<T, N>
where
    Usize<N>: ChunkCapacity,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::from_list(self)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut ChunkedList<T, N>
where
    Usize<N>: ChunkCapacity,
{
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut::from_list(self)
    }
}
