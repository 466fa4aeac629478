use crate::cursor::Cursor;
use crate::step::Step;
use std::convert::Infallible;

/// Cursor over the keys of a mapping container
///
/// Wraps the container's own key iterator. The cursor holds a shared borrow
/// of the mapping, so the key order stays stable for as long as it lives.
/// Cloning the cursor gives an independent cursor at the same position.
#[derive(Debug, Clone)]
pub struct KeyCursor<I> {
    keys: Option<I>,
    position: usize,
}

impl<I: Iterator> KeyCursor<I> {
    pub fn new(keys: I) -> Self {
        KeyCursor {
            keys: Some(keys),
            position: 0,
        }
    }
}

impl<I: Iterator> Cursor for KeyCursor<I> {
    type Element = I::Item;
    type Error = Infallible;

    fn advance(&mut self) -> Result<Step<Self::Element>, Self::Error> {
        let Some(keys) = self.keys.as_mut() else {
            return Ok(Step::EndOfSequence);
        };

        match keys.next() {
            Some(key) => {
                self.position += 1;
                Ok(Step::Item(key))
            }
            None => {
                // Drop the inner iterator so a non-fused one cannot resurrect.
                self.keys = None;
                Ok(Step::EndOfSequence)
            }
        }
    }

    fn position(&self) -> usize {
        self.position
    }

    fn is_exhausted(&self) -> bool {
        self.keys.is_none()
    }
}
