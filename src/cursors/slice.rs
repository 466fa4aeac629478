use crate::cursor::Cursor;
use crate::step::Step;
use std::convert::Infallible;

/// Cursor over an array-backed sequence
///
/// The cursor is a copyable snapshot of (data, position), so copies taken at
/// any point advance independently of each other and of the original.
#[derive(Debug, PartialEq, Eq)]
pub enum SliceCursor<'data, T> {
    Valid { data: &'data [T], position: usize },
    EndOfSequence { data: &'data [T] },
}

// Manual impls: a derive would demand `T: Copy` although only the slice
// reference is copied.
impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<'data, T> SliceCursor<'data, T> {
    pub fn new(data: &'data [T]) -> Self {
        if data.is_empty() {
            return SliceCursor::EndOfSequence { data };
        }
        SliceCursor::Valid { data, position: 0 }
    }

    /// Look at the element the next `advance` would yield, without moving
    pub fn peek(&self) -> Option<&'data T> {
        match self {
            SliceCursor::Valid { data, position } => data.get(*position),
            SliceCursor::EndOfSequence { .. } => None,
        }
    }

    /// Number of elements still to be yielded
    pub fn remaining(&self) -> usize {
        match self {
            SliceCursor::Valid { data, position } => data.len() - position,
            SliceCursor::EndOfSequence { .. } => 0,
        }
    }

    /// Get the source data without consuming the cursor
    pub fn source(&self) -> &'data [T] {
        match self {
            SliceCursor::Valid { data, .. } => data,
            SliceCursor::EndOfSequence { data } => data,
        }
    }
}

impl<'data, T> Cursor for SliceCursor<'data, T> {
    type Element = &'data T;
    type Error = Infallible;

    fn advance(&mut self) -> Result<Step<Self::Element>, Self::Error> {
        match *self {
            SliceCursor::Valid { data, position } => {
                let value = &data[position];
                *self = if position + 1 >= data.len() {
                    SliceCursor::EndOfSequence { data }
                } else {
                    SliceCursor::Valid {
                        data,
                        position: position + 1,
                    }
                };
                Ok(Step::Item(value))
            }
            SliceCursor::EndOfSequence { .. } => Ok(Step::EndOfSequence),
        }
    }

    fn position(&self) -> usize {
        match self {
            SliceCursor::Valid { position, .. } => *position,
            SliceCursor::EndOfSequence { data } => data.len(),
        }
    }

    fn is_exhausted(&self) -> bool {
        matches!(self, SliceCursor::EndOfSequence { .. })
    }
}
