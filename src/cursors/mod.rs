pub mod keys;
pub mod lines;
pub mod slice;

pub use keys::KeyCursor;
pub use lines::{LineCursor, with_open};
pub use slice::SliceCursor;
