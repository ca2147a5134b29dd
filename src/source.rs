use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::{error::Error, Result};

/// Command-line sentinel for reading from standard input
pub const STDIN_SENTINEL: &str = "-";

/// Returns true if the line starts a new FASTA record
#[inline]
pub fn is_header(line: &[u8]) -> bool {
    line.first() == Some(&b'>')
}

/// Where the FASTA content is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input, readable exactly once
    Stdin,
    /// A regular file, which can be reopened for every pass
    Path(PathBuf),
}
impl Input {
    /// Interprets a command-line argument, treating `-` as standard input
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIN_SENTINEL {
            Self::Stdin
        } else {
            Self::Path(PathBuf::from(arg))
        }
    }

    /// Whether a second pass over the same content is possible
    pub fn is_rewindable(&self) -> bool {
        matches!(self, Self::Path(_))
    }

    /// Opens a fresh buffered reader over the input
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::Path(path) => {
                let file = File::open(path).map_err(|e| Error::io(path, e))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }

    /// Returns the path if the input is a file
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdin => None,
            Self::Path(path) => Some(path),
        }
    }
}
impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "<stdin>"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Line-oriented reader that yields raw lines including their terminator.
///
/// Lines are kept as bytes so that writing them back reproduces the input exactly,
/// whatever the line endings or encoding.
pub struct LineReader<R: BufRead> {
    /// Inner reader
    inner: R,

    /// Reusable buffer holding the current line
    buffer: Vec<u8>,
}
impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buffer: Vec::new(),
        }
    }

    /// Reads the next line into the internal buffer
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn next_line(&mut self) -> Result<Option<&[u8]>> {
        self.buffer.clear();
        if self.inner.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }
        Ok(Some(&self.buffer))
    }
}
