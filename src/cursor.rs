use core::fmt;
use core::ptr;

use crate::error::ChunkedListError;
use crate::{ChunkCapacity, ChunkedList, Usize};

/// A cursor over the elements of a ChunkedList.
///
/// A Cursor rests on an element, identified by its chunk and its offset within that chunk,
/// or on the `end` position one past the last element of the tail chunk.
/// Moving it crosses chunk boundaries transparently.
///
/// Two cursors are equal when they rest on the same position of the same list.
pub struct Cursor<'a, T, const N: usize>
where
    T: 'a,
    Usize<N>: ChunkCapacity,
{
    chunk: usize,
    offset: usize,
    list: &'a ChunkedList<T, N>,
}

impl<'a, T, const N: usize> Cursor<'a, T, N>
where
    T: 'a,
    Usize<N>: ChunkCapacity,
{
    pub(crate) fn from_begin(list: &'a ChunkedList<T, N>) -> Self {
        Self {
            chunk: 0,
            offset: 0,
            list,
        }
    }

    pub(crate) fn from_end(list: &'a ChunkedList<T, N>) -> Self {
        Self {
            chunk: list.chunk_count() - 1,
            offset: list.tail.len(),
            list,
        }
    }

    pub fn as_list(&self) -> &'a ChunkedList<T, N> {
        self.list
    }

    /// Returns the element under the cursor, `None` at `end`.
    pub fn current(&self) -> Option<&'a T> {
        self.list
            .chunk_at(self.chunk)
            .and_then(|chunk| chunk.get(self.offset))
    }

    /// Returns the position of the cursor as an element index, `len()` at `end`.
    pub fn index(&self) -> usize {
        self.chunk * N + self.offset
    }

    pub fn is_end(&self) -> bool {
        self.index() == self.list.len()
    }

    /// Moves the cursor to the next element, or to `end` from the last one.
    ///
    /// # Errors
    /// Returns `ChunkedListError::CursorPastEnd`, leaving the cursor untouched, if it rests at `end`.
    pub fn move_next(&mut self) -> Result<(), ChunkedListError> {
        let len = self.list.chunk_at(self.chunk).map_or(0, |chunk| chunk.len());

        if self.offset >= len {
            return Err(ChunkedListError::CursorPastEnd);
        }

        if self.offset + 1 < len || self.chunk + 1 >= self.list.chunk_count() {
            self.offset += 1;
        } else {
            self.chunk += 1;
            self.offset = 0;
        }

        Ok(())
    }

    /// Moves the cursor to the previous element.
    ///
    /// # Errors
    /// Returns `ChunkedListError::CursorBeforeStart`, leaving the cursor untouched, if it rests
    /// on the first element (or at `end` of an empty list).
    pub fn move_prev(&mut self) -> Result<(), ChunkedListError> {
        if self.offset > 0 {
            self.offset -= 1;
            return Ok(());
        }

        if self.chunk == 0 {
            return Err(ChunkedListError::CursorBeforeStart);
        }

        self.chunk -= 1;
        self.offset = self
            .list
            .chunk_at(self.chunk)
            .map_or(0, |chunk| chunk.len().saturating_sub(1));

        Ok(())
    }

    /// Returns the element after the cursor without moving it.
    pub fn peek_next(&self) -> Option<&'a T> {
        let mut cursor = *self;
        cursor.move_next().ok()?;
        cursor.current()
    }

    /// Returns the element before the cursor without moving it.
    pub fn peek_prev(&self) -> Option<&'a T> {
        let mut cursor = *self;
        cursor.move_prev().ok()?;
        cursor.current()
    }
}

impl<T, const N: usize> Clone for Cursor<'_, T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize> Copy for Cursor<'_, T, N> where Usize<N>: ChunkCapacity {}

impl<T, const N: usize> PartialEq for Cursor<'_, T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.list, other.list) && self.chunk == other.chunk && self.offset == other.offset
    }
}

impl<T, const N: usize> Eq for Cursor<'_, T, N> where Usize<N>: ChunkCapacity {}

impl<T, const N: usize> fmt::Debug for Cursor<'_, T, N>
where
    T: fmt::Debug,
    Usize<N>: ChunkCapacity,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("chunk", &self.chunk)
            .field("offset", &self.offset)
            .field("current", &self.current())
            .finish()
    }
}
