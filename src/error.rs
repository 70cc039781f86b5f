/// Errors reported by fallible `ChunkedList` operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkedListError {
    /// Indexed access past the last element.
    #[error("index out of range: the len is {len} but the index is {index}")]
    OutOfRange { index: usize, len: usize },

    /// Removal from a list holding no elements.
    #[error("cannot remove an element from an empty list")]
    Empty,

    /// A cursor resting at `end` was moved forward.
    #[error("cursor cannot move past the end of the list")]
    CursorPastEnd,

    /// A cursor resting at `begin` was moved backward.
    #[error("cursor cannot move before the start of the list")]
    CursorBeforeStart,
}
