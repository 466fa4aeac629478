use crate::cursor::Cursor;
use crate::step::Step;

/// Cursor adapter that transforms each element using a mapping function
#[derive(Debug, Clone)]
pub struct Map<C, F> {
    cursor: C,
    mapper: F,
}

impl<C, F> Map<C, F> {
    pub fn new(cursor: C, mapper: F) -> Self {
        Map { cursor, mapper }
    }

    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C, F, U> Cursor for Map<C, F>
where
    C: Cursor,
    F: FnMut(C::Element) -> U,
{
    type Element = U;
    type Error = C::Error;

    fn advance(&mut self) -> Result<Step<Self::Element>, Self::Error> {
        let step = self.cursor.advance()?;
        Ok(step.map(&mut self.mapper))
    }

    fn position(&self) -> usize {
        self.cursor.position()
    }

    fn is_exhausted(&self) -> bool {
        self.cursor.is_exhausted()
    }
}

/// Convenience function to create a Map cursor
pub fn map<C, F, U>(cursor: C, mapper: F) -> Map<C, F>
where
    C: Cursor,
    F: FnMut(C::Element) -> U,
{
    Map::new(cursor, mapper)
}

/// Extension trait to add .map() method support for cursors
pub trait MapExt: Cursor + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: FnMut(Self::Element) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all cursors
impl<C> MapExt for C where C: Cursor {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::LineCursor;
    use crate::{Mapping, SliceCursor};

    #[test]
    fn test_map_elements() {
        let data = [1, 2, 3];
        let mut cursor = SliceCursor::new(&data).map(|v| v * 2);

        assert_eq!(cursor.advance(), Ok(Step::Item(2)));
        assert_eq!(cursor.advance(), Ok(Step::Item(4)));
        assert_eq!(cursor.advance(), Ok(Step::Item(6)));
        assert_eq!(cursor.advance(), Ok(Step::EndOfSequence));
        assert_eq!(cursor.advance(), Ok(Step::EndOfSequence));
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_map_keys_to_entries() {
        let dict: Mapping<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
        let mut cursor = map(dict.keys(), |key| (*key, dict.get(key).copied()));

        assert_eq!(cursor.advance(), Ok(Step::Item(("a", Some(1)))));
        assert_eq!(cursor.advance(), Ok(Step::Item(("b", Some(2)))));
        assert!(cursor.advance().unwrap().is_end());
    }

    #[test]
    fn test_map_counts_calls_lazily() {
        let data = ["x", "y", "z"];
        let mut calls = 0;
        {
            let mut cursor = SliceCursor::new(&data).map(|s| {
                calls += 1;
                s.len()
            });
            cursor.advance().unwrap();
        }
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_map_propagates_errors() {
        let mut lines = LineCursor::new(b"abc\n".as_slice());
        lines.close();
        let mut cursor = (&mut lines).map(|line| line.len());

        assert!(cursor.advance().is_err());
    }
}
