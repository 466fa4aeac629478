use crate::cursor::Cursor;
use crate::step::Step;
use std::convert::Infallible;
use std::iter::FusedIterator;

/// Iterator over the remaining elements of a fallible cursor
///
/// Stops after `EndOfSequence` or after yielding the first error.
#[derive(Debug, Clone)]
pub struct Items<C> {
    cursor: C,
    done: bool,
}

impl<C> Items<C> {
    pub fn new(cursor: C) -> Self {
        Items {
            cursor,
            done: false,
        }
    }

    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for Items<C> {
    type Item = Result<C::Element, C::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.cursor.advance() {
            Ok(Step::Item(value)) => Some(Ok(value)),
            Ok(Step::EndOfSequence) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<C: Cursor> FusedIterator for Items<C> {}

/// Iterator over the remaining elements of a cursor that cannot fail
#[derive(Debug, Clone)]
pub struct Values<C> {
    cursor: C,
}

impl<C> Values<C> {
    pub fn new(cursor: C) -> Self {
        Values { cursor }
    }
}

impl<C> Iterator for Values<C>
where
    C: Cursor<Error = Infallible>,
{
    type Item = C::Element;

    fn next(&mut self) -> Option<Self::Item> {
        match self.cursor.advance() {
            Ok(step) => step.into_option(),
            Err(never) => match never {},
        }
    }
}

impl<C> FusedIterator for Values<C> where C: Cursor<Error = Infallible> {}

/// Extension trait bridging cursors to `std::iter::Iterator`
pub trait IterExt: Cursor + Sized {
    /// Iterate as `Result`s, stopping after the first error
    fn items(self) -> Items<Self> {
        Items::new(self)
    }

    /// Iterate plain elements; only available for cursors that cannot fail
    fn values(self) -> Values<Self>
    where
        Self: Cursor<Error = Infallible>,
    {
        Values::new(self)
    }

    /// Drain every remaining element, stopping at the first error
    fn collect_remaining(&mut self) -> Result<Vec<Self::Element>, Self::Error> {
        let mut results = Vec::new();

        loop {
            match self.advance()? {
                Step::Item(value) => results.push(value),
                Step::EndOfSequence => break,
            }
        }

        Ok(results)
    }
}

impl<C> IterExt for C where C: Cursor {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::LineCursor;
    use crate::error::CursorError;
    use crate::{Mapping, SliceCursor};
    use std::io::{self, BufReader, Read};

    #[test]
    fn test_values_in_for_loop() {
        let data = [1, 2, 3];
        let mut total = 0;

        for value in SliceCursor::new(&data).values() {
            total += value;
        }

        assert_eq!(total, 6);
    }

    #[test]
    fn test_values_over_mapping_keys() {
        let dict: Mapping<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        let pairs: Vec<(&str, i32)> = dict
            .keys()
            .values()
            .map(|key| (*key, dict.get(key).copied().unwrap_or_default()))
            .collect();

        assert_eq!(pairs, vec![("a", 1), ("b", 2), ("c", 3)]);
    }

    #[test]
    fn test_items_over_lines() {
        let lines: Result<Vec<String>, CursorError> =
            LineCursor::new(b"x\ny\n".as_slice()).items().collect();

        assert_eq!(lines.unwrap(), vec!["x\n".to_string(), "y\n".to_string()]);
    }

    struct FailAfterFirst {
        served: bool,
    }

    impl Read for FailAfterFirst {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::other("boom"));
            }
            self.served = true;
            buf[..2].copy_from_slice(b"a\n");
            Ok(2)
        }
    }

    #[test]
    fn test_items_stop_after_error() {
        let reader = BufReader::with_capacity(2, FailAfterFirst { served: false });
        let mut items = LineCursor::new(reader).items();

        assert_eq!(items.next().unwrap().unwrap(), "a\n");
        assert!(matches!(items.next(), Some(Err(CursorError::Read { line: 2, .. }))));
        assert!(items.next().is_none());
        assert!(items.next().is_none());
    }

    #[test]
    fn test_collect_remaining_after_partial_advance() {
        let data = ["a", "b", "c"];
        let mut cursor = SliceCursor::new(&data);

        cursor.advance().unwrap();
        let rest = cursor.collect_remaining().unwrap();

        assert_eq!(rest, vec![&"b", &"c"]);
        assert_eq!(cursor.collect_remaining().unwrap(), Vec::<&&str>::new());
    }
}
