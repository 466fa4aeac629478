use crate::config::ReadOptions;
use crate::cursor::Cursor;
use crate::enumerable::Enumerable;
use crate::error::CursorError;
use crate::step::Step;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace, warn};

#[derive(Debug)]
enum State<R> {
    Open(R),
    /// The reader is kept until close or drop.
    Exhausted { _reader: R },
    Closed,
}

/// Streaming handle that is its own cursor
///
/// Each `advance` consumes one line from the reader, so traversal is
/// destructive and cannot be restarted. Requesting a cursor from a
/// `&mut LineCursor` hands back the very same handle.
#[derive(Debug)]
pub struct LineCursor<R> {
    state: State<R>,
    position: usize,
    options: ReadOptions,
    buffer: Vec<u8>,
}

impl<R: BufRead> LineCursor<R> {
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, ReadOptions::default())
    }

    pub fn with_options(reader: R, options: ReadOptions) -> Self {
        LineCursor {
            state: State::Open(reader),
            position: 0,
            options,
            buffer: Vec::new(),
        }
    }
}

impl LineCursor<BufReader<File>> {
    /// Open a file for line-by-line traversal with default options
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CursorError> {
        Self::open_with(path, ReadOptions::default())
    }

    pub fn open_with(path: impl AsRef<Path>, options: ReadOptions) -> Result<Self, CursorError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CursorError::ResourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        // A zero-capacity BufReader reports end of file on its first fill.
        let capacity = options.buffer_capacity.max(1);
        debug!(path = %path.display(), buffer_capacity = capacity, "opened line cursor");

        Ok(Self::with_options(
            BufReader::with_capacity(capacity, file),
            options,
        ))
    }
}

impl<R> LineCursor<R> {
    /// Release the underlying reader
    ///
    /// Later `advance` calls, and requests for a cursor, fail with
    /// `CursorError::Closed`. Closing twice is a no-op.
    pub fn close(&mut self) {
        if !self.is_closed() {
            debug!(lines_read = self.position, "closed line cursor");
        }
        self.state = State::Closed;
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.state, State::Closed)
    }

    pub fn options(&self) -> &ReadOptions {
        &self.options
    }

    fn finish(&mut self) {
        let state = std::mem::replace(&mut self.state, State::Closed);
        if let State::Open(reader) = state {
            trace!(lines_read = self.position, "line cursor reached end of sequence");
            self.state = State::Exhausted { _reader: reader };
        } else {
            self.state = state;
        }
    }

    fn strip_line_ending(&self, mut line: String) -> String {
        if !self.options.keep_line_endings && line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        line
    }
}

impl<R: BufRead> Cursor for LineCursor<R> {
    type Element = String;
    type Error = CursorError;

    fn advance(&mut self) -> Result<Step<Self::Element>, Self::Error> {
        let reader = match &mut self.state {
            State::Open(reader) => reader,
            State::Exhausted { .. } => return Ok(Step::EndOfSequence),
            State::Closed => return Err(CursorError::Closed),
        };

        let line = self.position + 1;
        self.buffer.clear();

        match reader.read_until(b'\n', &mut self.buffer) {
            Ok(0) => {
                self.finish();
                return Ok(Step::EndOfSequence);
            }
            Ok(_) => {}
            Err(source) => {
                warn!(line = line, error = %source, "line cursor read failed, closing");
                self.state = State::Closed;
                return Err(CursorError::Read { line, source });
            }
        }

        let text = match String::from_utf8(std::mem::take(&mut self.buffer)) {
            Ok(text) => text,
            Err(_) => {
                warn!(line = line, "line cursor met invalid UTF-8, closing");
                self.state = State::Closed;
                return Err(CursorError::InvalidUtf8 { line });
            }
        };

        self.position = line;
        Ok(Step::Item(self.strip_line_ending(text)))
    }

    fn position(&self) -> usize {
        self.position
    }

    fn is_exhausted(&self) -> bool {
        matches!(self.state, State::Exhausted { .. })
    }
}

/// The handle is its own cursor: asking for one returns the same object.
impl<'h, R: BufRead> Enumerable for &'h mut LineCursor<R> {
    type Element = String;
    type Cursor = &'h mut LineCursor<R>;

    fn cursor(self) -> Result<Self::Cursor, <Self::Cursor as Cursor>::Error> {
        if self.is_closed() {
            return Err(CursorError::Closed);
        }
        Ok(self)
    }
}

/// Open `path`, hand the cursor to `f`, and release the file afterwards
///
/// The file is closed whether `f` succeeds, fails, or unwinds.
pub fn with_open<P, F, T, E>(path: P, f: F) -> Result<T, E>
where
    P: AsRef<Path>,
    F: FnOnce(&mut LineCursor<BufReader<File>>) -> Result<T, E>,
    E: From<CursorError>,
{
    let mut cursor = LineCursor::open(path)?;
    let result = f(&mut cursor);
    cursor.close();
    result
}
