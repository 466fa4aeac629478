use serde::{Deserialize, Serialize};

pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// Options for streaming handles opened from the filesystem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadOptions {
    /// Capacity of the read buffer placed in front of the file
    pub buffer_capacity: usize,
    /// Keep the `\n` or `\r\n` terminator on each yielded line
    pub keep_line_endings: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            keep_line_endings: true,
        }
    }
}

impl ReadOptions {
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    pub fn with_keep_line_endings(mut self, keep: bool) -> Self {
        self.keep_line_endings = keep;
        self
    }
}
