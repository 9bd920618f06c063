//! The character source seam

use crate::ReaderError;

/// A sequential character source with "more data available" semantics
pub trait CharSource {
    /// Whether at least one more character can be read right now
    fn ready(&self) -> Result<bool, ReaderError>;

    /// Read the next character, or `None` at the end of available data
    fn read_one(&self) -> Result<Option<char>, ReaderError>;
}

/// Read every currently available character into one chunk
///
/// Stops as soon as the source stops being ready, so the result may be empty.
pub fn drain<S: CharSource + ?Sized>(source: &S) -> Result<String, ReaderError> {
    let mut chunk = String::new();
    while source.ready()? {
        match source.read_one()? {
            Some(c) => chunk.push(c),
            None => break,
        }
    }
    Ok(chunk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io;

    /// Delivers its text in bursts separated by one "not ready" poll
    struct Bursts {
        bursts: Vec<&'static str>,
        burst: Cell<usize>,
        offset: Cell<usize>,
        paused: Cell<bool>,
    }

    impl Bursts {
        fn new(bursts: Vec<&'static str>) -> Self {
            Self {
                bursts,
                burst: Cell::new(0),
                offset: Cell::new(0),
                paused: Cell::new(false),
            }
        }
    }

    impl CharSource for Bursts {
        fn ready(&self) -> Result<bool, ReaderError> {
            if self.paused.replace(false) {
                return Ok(false);
            }
            Ok(self.burst.get() < self.bursts.len())
        }

        fn read_one(&self) -> Result<Option<char>, ReaderError> {
            let Some(burst) = self.bursts.get(self.burst.get()) else {
                return Ok(None);
            };
            let c = burst[self.offset.get()..].chars().next();
            if let Some(c) = c {
                self.offset.set(self.offset.get() + c.len_utf8());
            }
            if self.offset.get() >= burst.len() {
                self.burst.set(self.burst.get() + 1);
                self.offset.set(0);
                self.paused.set(true);
            }
            Ok(c)
        }
    }

    struct Broken;

    impl CharSource for Broken {
        fn ready(&self) -> Result<bool, ReaderError> {
            Ok(true)
        }

        fn read_one(&self) -> Result<Option<char>, ReaderError> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "source went away").into())
        }
    }

    #[test]
    fn test_drain_stops_at_pause() {
        let source = Bursts::new(vec!["ab", "cd"]);
        assert_eq!(drain(&source).unwrap(), "ab");
        assert_eq!(drain(&source).unwrap(), "cd");
        assert_eq!(drain(&source).unwrap(), "");
    }

    #[test]
    fn test_drain_propagates_io_error() {
        let err = drain(&Broken).unwrap_err();
        assert!(matches!(err, ReaderError::Io(_)));
    }
}
