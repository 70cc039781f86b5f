use core::iter::FusedIterator;
use std::iter::{Chain, Once};
use std::slice;

use crate::chunk::Chunk;
use crate::{ChunkCapacity, ChunkedList, Usize};

/// An iterator over the chunks of a ChunkedList, from head to tail.
///
/// This struct is created by ChunkedList::chunks().
pub struct Chunks<'a, T, const N: usize>
where
    Usize<N>: ChunkCapacity,
{
    delegate: Chain<slice::Iter<'a, Chunk<T, N>>, Once<&'a Chunk<T, N>>>,
}

impl<'a, T, const N: usize> Chunks<'a, T, N>
where
    Usize<N>: ChunkCapacity,
{
    pub(crate) fn from_list(list: &'a ChunkedList<T, N>) -> Self {
        Self {
            delegate: list.chain(),
        }
    }
}

impl<T, const N: usize> Clone for Chunks<'_, T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn clone(&self) -> Self {
        Self {
            delegate: self.delegate.clone(),
        }
    }
}

impl<'a, T, const N: usize> Iterator for Chunks<'a, T, N>
where
    Usize<N>: ChunkCapacity,
{
    type Item = &'a Chunk<T, N>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.delegate.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.delegate.size_hint()
    }
}

impl<T, const N: usize> ExactSizeIterator for Chunks<'_, T, N> where Usize<N>: ChunkCapacity {}

impl<T, const N: usize> FusedIterator for Chunks<'_, T, N> where Usize<N>: ChunkCapacity {}

#[cfg(test)]
mod tests {
    use crate::ChunkedList;

    #[test]
    fn chunks_follow_the_chain_from_head_to_tail() {
        let list = ChunkedList::<usize, 4>::from([1, 2, 3, 4, 5, 6, 7, 8, 9]);

        let mut sut = list.chunks();
        assert_eq!(sut.len(), 3);

        let chunk = sut.next().unwrap();
        assert_eq!(chunk.as_slice(), &[1, 2, 3, 4]);
        assert!(chunk.is_full());

        let chunk = sut.next().unwrap();
        assert_eq!(chunk.iter().copied().collect::<Vec<_>>(), [5, 6, 7, 8]);

        let chunk = sut.next().unwrap();
        assert_eq!(chunk.as_slice(), &[9]);
        assert_eq!(chunk.get(0), Some(&9));
        assert_eq!(chunk.get(1), None);
        assert!(!chunk.is_full());

        assert!(sut.next().is_none());
        assert!(sut.next().is_none());
        assert_eq!(sut.len(), 0);
    }

    #[test]
    fn chunks_of_empty_list_yield_the_single_empty_chunk() {
        let list = ChunkedList::<usize, 4>::new();
        let chunks: Vec<_> = list.chunks().collect();
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].is_empty());
    }

    #[test]
    fn chunks_export_every_element_once() {
        let list: ChunkedList<usize, 3> = (0..10).collect();
        let exported: Vec<usize> = list
            .chunks()
            .flat_map(|chunk| chunk.as_slice().iter().copied())
            .collect();
        assert_eq!(exported, (0..10).collect::<Vec<_>>());
        assert_eq!(list.chunks().count(), list.chunk_count());
    }
}
