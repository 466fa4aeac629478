use crate::cursor::Cursor;
use crate::step::Step;

/// Cursor adapter that only yields elements accepted by a predicate
///
/// Rejected elements are consumed from the inner cursor and skipped.
/// `position` counts the elements this adapter has yielded.
#[derive(Debug, Clone)]
pub struct Filter<C, P> {
    cursor: C,
    predicate: P,
    position: usize,
}

impl<C, P> Filter<C, P> {
    pub fn new(cursor: C, predicate: P) -> Self {
        Self {
            cursor,
            predicate,
            position: 0,
        }
    }
}

impl<C, P> Cursor for Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Element) -> bool,
{
    type Element = C::Element;
    type Error = C::Error;

    fn advance(&mut self) -> Result<Step<Self::Element>, Self::Error> {
        loop {
            match self.cursor.advance()? {
                Step::Item(value) if (self.predicate)(&value) => {
                    self.position += 1;
                    return Ok(Step::Item(value));
                }
                Step::Item(_) => continue,
                Step::EndOfSequence => return Ok(Step::EndOfSequence),
            }
        }
    }

    fn position(&self) -> usize {
        self.position
    }

    fn is_exhausted(&self) -> bool {
        self.cursor.is_exhausted()
    }
}

/// Convenience function to create a Filter cursor
pub fn filter<C, P>(cursor: C, predicate: P) -> Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Element) -> bool,
{
    Filter::new(cursor, predicate)
}

/// Extension trait to add .filter() method support for cursors
pub trait FilterExt: Cursor + Sized {
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        Filter::new(self, predicate)
    }
}

impl<C> FilterExt for C where C: Cursor {}
