use crate::step::Step;
use std::error::Error;

/// Generic cursor trait for one-at-a-time traversal
///
/// A cursor tracks a position in a sequence of elements and hands them out one
/// per call to `advance`. Consumers only see elements and the end signal, never
/// the representation of the underlying collection.
///
/// Once `advance` has returned `Step::EndOfSequence`, every later call must
/// return `Step::EndOfSequence` again.
pub trait Cursor {
    /// The type of elements this cursor produces
    type Element;

    /// Error type for failures of the backing resource
    ///
    /// In-memory cursors cannot fail and use `std::convert::Infallible`.
    type Error: Error;

    /// Produce the next element and move forward by one, or signal the end
    fn advance(&mut self) -> Result<Step<Self::Element>, Self::Error>;

    /// Number of elements produced so far
    fn position(&self) -> usize;

    /// Check if the cursor is known to be at the end
    ///
    /// When true, every further `advance` signals `EndOfSequence`. Streaming
    /// cursors only learn this once the end has been signaled.
    fn is_exhausted(&self) -> bool;
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Element = C::Element;
    type Error = C::Error;

    fn advance(&mut self) -> Result<Step<Self::Element>, Self::Error> {
        (**self).advance()
    }

    fn position(&self) -> usize {
        (**self).position()
    }

    fn is_exhausted(&self) -> bool {
        (**self).is_exhausted()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Element = C::Element;
    type Error = C::Error;

    fn advance(&mut self) -> Result<Step<Self::Element>, Self::Error> {
        (**self).advance()
    }

    fn position(&self) -> usize {
        (**self).position()
    }

    fn is_exhausted(&self) -> bool {
        (**self).is_exhausted()
    }
}

/// Convenience function to advance any cursor
pub fn advance<C: Cursor>(cursor: &mut C) -> Result<Step<C::Element>, C::Error> {
    cursor.advance()
}
