//! # SeqCursor - Sequence Cursor Protocol
//!
//! Pull-based, one-at-a-time traversal of collections and streaming resources.
//!
//! An [`Enumerable`] produces a [`Cursor`]; each [`Cursor::advance`] yields
//! either the next element or [`Step::EndOfSequence`]. The library emphasizes:
//!
//! - **Explicit termination**: end of sequence is a value, never an error, and
//!   it never resurrects
//! - **Independent cursors**: cursors over in-memory containers are cheap
//!   snapshots that advance without affecting each other
//! - **Self-cursoring handles**: a [`LineCursor`] is its own cursor, consumed
//!   destructively and released on close or scope exit

pub mod config;
pub mod cursor;
pub mod cursors;
pub mod enumerable;
pub mod error;
pub mod filter;
pub mod iter;
pub mod map;
pub mod mapping;
pub mod step;

pub use config::ReadOptions;
pub use cursor::{Cursor, advance};
pub use cursors::{KeyCursor, LineCursor, SliceCursor, with_open};
pub use enumerable::{Enumerable, get_cursor};
pub use error::CursorError;
pub use filter::{Filter, FilterExt, filter};
pub use iter::{Items, IterExt, Values};
pub use map::{Map, MapExt, map};
pub use mapping::Mapping;
pub use step::Step;
