use crate::cursor::Cursor;
use crate::cursors::{KeyCursor, SliceCursor};
use crate::mapping::Mapping;
use std::collections::{BTreeMap, HashMap, btree_map, hash_map};

/// Producer of traversal cursors
///
/// Like `IntoIterator`, `cursor` consumes the enumerable handle. Ordinary
/// containers implement this for shared references, so requesting a cursor
/// never mutates them and any number of independent cursors can coexist.
/// Self-cursoring resources implement it for `&mut Self` and return the same
/// handle.
pub trait Enumerable {
    /// The type of elements the produced cursor yields
    type Element;

    /// Cursor produced by this enumerable
    type Cursor: Cursor<Element = Self::Element>;

    /// Produce a cursor positioned before the first element
    fn cursor(self) -> Result<Self::Cursor, <Self::Cursor as Cursor>::Error>;
}

/// Convenience function to request a cursor from any enumerable
pub fn get_cursor<E: Enumerable>(
    enumerable: E,
) -> Result<E::Cursor, <E::Cursor as Cursor>::Error> {
    enumerable.cursor()
}

impl<'data, T> Enumerable for &'data [T] {
    type Element = &'data T;
    type Cursor = SliceCursor<'data, T>;

    fn cursor(self) -> Result<Self::Cursor, <Self::Cursor as Cursor>::Error> {
        Ok(SliceCursor::new(self))
    }
}

impl<'data, T, const N: usize> Enumerable for &'data [T; N] {
    type Element = &'data T;
    type Cursor = SliceCursor<'data, T>;

    fn cursor(self) -> Result<Self::Cursor, <Self::Cursor as Cursor>::Error> {
        Ok(SliceCursor::new(self.as_slice()))
    }
}

impl<'data, T> Enumerable for &'data Vec<T> {
    type Element = &'data T;
    type Cursor = SliceCursor<'data, T>;

    fn cursor(self) -> Result<Self::Cursor, <Self::Cursor as Cursor>::Error> {
        Ok(SliceCursor::new(self.as_slice()))
    }
}

/// Enumerating a mapping yields its keys in insertion order.
impl<'m, K, V> Enumerable for &'m Mapping<K, V> {
    type Element = &'m K;
    type Cursor = KeyCursor<std::slice::Iter<'m, K>>;

    fn cursor(self) -> Result<Self::Cursor, <Self::Cursor as Cursor>::Error> {
        Ok(self.keys())
    }
}

/// Keys come out in key order.
impl<'m, K, V> Enumerable for &'m BTreeMap<K, V> {
    type Element = &'m K;
    type Cursor = KeyCursor<btree_map::Keys<'m, K, V>>;

    fn cursor(self) -> Result<Self::Cursor, <Self::Cursor as Cursor>::Error> {
        Ok(KeyCursor::new(self.keys()))
    }
}

/// Keys come out in the map's own iteration order, which cannot change while
/// the cursor borrows the map.
impl<'m, K, V, S> Enumerable for &'m HashMap<K, V, S> {
    type Element = &'m K;
    type Cursor = KeyCursor<hash_map::Keys<'m, K, V>>;

    fn cursor(self) -> Result<Self::Cursor, <Self::Cursor as Cursor>::Error> {
        Ok(KeyCursor::new(self.keys()))
    }
}
