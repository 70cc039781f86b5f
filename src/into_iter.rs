use core::iter::FusedIterator;
use std::iter::{Chain, Flatten, Once};
use std::mem;
use std::vec;

use crate::chunk::Chunk;
use crate::{ChunkCapacity, ChunkedList, Usize};

/// An owning iterator over the elements of a ChunkedList.
///
/// This struct is created by ChunkedList::into_iter().
pub struct IntoIter<T, const N: usize>
where
    Usize<N>: ChunkCapacity,
{
    delegate: Flatten<Chain<vec::IntoIter<Chunk<T, N>>, Once<Chunk<T, N>>>>,
    len: usize,
}

impl<T, const N: usize> IntoIter<T, N>
where
    Usize<N>: ChunkCapacity,
{
    pub(crate) fn from_list(mut list: ChunkedList<T, N>) -> Self {
        let len = list.len();
        let packed = mem::take(&mut list.packed);
        let tail = list.pop_chunk();

        Self {
            delegate: packed.into_iter().chain(std::iter::once(tail)).flatten(),
            len,
        }
    }
}

impl<T: Clone, const N: usize> Clone for IntoIter<T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn clone(&self) -> Self {
        Self {
            delegate: self.delegate.clone(),
            len: self.len,
        }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N>
where
    Usize<N>: ChunkCapacity,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let out = self.delegate.next()?;
        self.len -= 1;
        Some(out)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        self.delegate.fold(init, f)
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let out = self.delegate.next_back()?;
        self.len -= 1;
        Some(out)
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn len(&self) -> usize {
        self.len
    }
}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> where Usize<N>: ChunkCapacity {}

impl<T, const N: usize> core::fmt::Debug for IntoIter<T, N>
where
    T: core::fmt::Debug,
    Usize<N>: ChunkCapacity,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter")
            .field(&self.delegate)
            .field(&self.len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::ChunkedList;

    #[test]
    fn into_iter_forward() {
        let list = ChunkedList::<String, 2>::from_iter((0..5).map(|i| i.to_string()));
        let sut = list.into_iter();
        assert_eq!(sut.len(), 5);
        assert_eq!(sut.collect::<Vec<_>>(), ["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn into_iter_backward() {
        let list = ChunkedList::<usize, 2>::from([0, 1, 2, 3, 4]);
        let sut = list.into_iter().rev();
        assert_eq!(sut.collect::<Vec<_>>(), [4, 3, 2, 1, 0]);
    }

    #[test]
    fn into_iter_on_empty_list_yields_nothing() {
        let list = ChunkedList::<usize, 2>::new();
        let mut sut = list.into_iter();
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.next(), None);
        assert_eq!(sut.next_back(), None);
    }

    #[test]
    fn double_ended_into_iter_works_correctly() {
        let list = ChunkedList::<usize, 3>::from([0, 1, 2, 3, 4]);

        let mut sut = list.into_iter();
        assert_eq!(sut.next(), Some(0));
        assert_eq!(sut.next_back(), Some(4));
        assert_eq!(sut.len(), 3);

        let rest = sut.clone();
        assert_eq!(sut.collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(rest.rev().collect::<Vec<_>>(), [3, 2, 1]);
    }

    #[test]
    fn debug_works_correctly() {
        let list = ChunkedList::<usize, 2>::from([0, 1, 2, 3, 4]);
        let mut sut = list.into_iter();
        sut.next();

        let out = format!("{sut:?}");
        assert!(out.starts_with("IntoIter("));
        assert!(out.contains("IntoIter([1])"));
        assert!(out.contains("[2, 3]"));
        assert!(out.contains("[4]"));
        assert!(out.ends_with(", 4)"));
    }
}
