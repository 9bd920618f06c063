//! Position-tracked reader over an in-memory string

use crate::{CharSource, ReaderError};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A character reader over a fixed string with mark/reset support
///
/// Positions count `char`s, not bytes. All operations take `&self` and are
/// serialized through a single lock, so a reader may be shared between
/// threads without corrupting its position or mark.
#[derive(Debug)]
pub struct ChunkReader {
    state: Mutex<ReaderState>,
}

#[derive(Debug)]
struct ReaderState {
    /// `None` once closed
    text: Option<Vec<char>>,
    position: usize,
    mark: usize,
}

impl ReaderState {
    fn open_text(&self) -> Result<&[char], ReaderError> {
        self.text.as_deref().ok_or(ReaderError::Closed)
    }
}

impl ChunkReader {
    /// Create a reader positioned at the start of `text`
    pub fn new(text: &str) -> Self {
        Self {
            state: Mutex::new(ReaderState {
                text: Some(text.chars().collect()),
                position: 0,
                mark: 0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ReaderState> {
        // Every update is a single assignment, so a poisoned state is still valid
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether unread characters remain
    pub fn ready(&self) -> Result<bool, ReaderError> {
        let state = self.lock();
        let text = state.open_text()?;
        Ok(state.position < text.len())
    }

    /// Read the next character, or `None` at the end of the text
    pub fn read_one(&self) -> Result<Option<char>, ReaderError> {
        let mut state = self.lock();
        let next = state.open_text()?.get(state.position).copied();
        if next.is_some() {
            state.position += 1;
        }
        Ok(next)
    }

    /// Copy up to `count` characters into `buf[offset..offset + count]`
    ///
    /// Returns `Some(0)` for a zero-length request, `None` when the text is
    /// exhausted, and otherwise the number of characters copied.
    pub fn read_into(
        &self,
        buf: &mut [char],
        offset: usize,
        count: usize,
    ) -> Result<Option<usize>, ReaderError> {
        let mut state = self.lock();
        let text = state.open_text()?;

        let in_bounds = offset
            .checked_add(count)
            .is_some_and(|end| end <= buf.len());
        if !in_bounds {
            return Err(ReaderError::OutOfBounds {
                offset,
                count,
                len: buf.len(),
            });
        }
        if count == 0 {
            return Ok(Some(0));
        }

        let position = state.position;
        if position >= text.len() {
            return Ok(None);
        }

        let n = count.min(text.len() - position);
        buf[offset..offset + n].copy_from_slice(&text[position..position + n]);
        state.position += n;
        Ok(Some(n))
    }

    /// Move the position by `n` characters, clamped to the text
    ///
    /// Negative values rewind, never past the start; positive values never
    /// pass the end. Returns the delta actually applied.
    pub fn skip(&self, n: i64) -> Result<i64, ReaderError> {
        let mut state = self.lock();
        let len = state.open_text()?.len() as i64;
        let position = state.position as i64;

        let delta = n.clamp(-position, len - position);
        state.position = (position + delta) as usize;
        Ok(delta)
    }

    /// Remember the current position for a later [`reset`](Self::reset)
    pub fn mark(&self) -> Result<(), ReaderError> {
        let mut state = self.lock();
        state.open_text()?;
        state.mark = state.position;
        Ok(())
    }

    /// Return to the last marked position, or the start if never marked
    pub fn reset(&self) -> Result<(), ReaderError> {
        let mut state = self.lock();
        state.open_text()?;
        state.position = state.mark;
        Ok(())
    }

    /// Release the text; every later operation fails with [`ReaderError::Closed`]
    pub fn close(&self) {
        self.lock().text = None;
    }

    /// Always `true`
    pub fn mark_supported(&self) -> bool {
        true
    }

    /// Whether [`close`](Self::close) has been called
    pub fn is_closed(&self) -> bool {
        self.lock().text.is_none()
    }

    /// Current position in characters
    pub fn position(&self) -> usize {
        self.lock().position
    }

    /// Length of the text in characters (zero once closed)
    pub fn len(&self) -> usize {
        self.lock().text.as_ref().map_or(0, Vec::len)
    }

    /// Whether the text has no characters
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CharSource for ChunkReader {
    fn ready(&self) -> Result<bool, ReaderError> {
        ChunkReader::ready(self)
    }

    fn read_one(&self) -> Result<Option<char>, ReaderError> {
        ChunkReader::read_one(self)
    }
}
