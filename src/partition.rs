//! Partitioning pass
//!
//! The [`Partitioner`] reads the FASTA source once and writes every line to the
//! currently open output file. Files are rotated only at header lines, once the
//! quota planned for the current file has been used up, so each output file holds
//! a contiguous run of whole records.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use auto_impl::auto_impl;
use log::{debug, info};

use crate::{
    error::{Error, InputError},
    source::{is_header, LineReader},
    Naming, Result, SplitMode, SplitPlan,
};

/// Where output files are created
#[auto_impl(&mut, Box)]
pub trait Destination {
    /// Writer for a single output file
    type Sink: Write;

    /// Opens (creating or truncating) the output file `name`
    fn open(&mut self, name: &str) -> Result<Self::Sink>;
}

/// Writes output files into a directory on disk
#[derive(Debug, Clone)]
pub struct DirectoryDestination {
    dir: PathBuf,

    /// Canonical path that must never be opened for writing
    protected: Option<PathBuf>,
}
impl DirectoryDestination {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            protected: None,
        }
    }

    /// Refuses to open any output that resolves to `path` (typically the input file)
    pub fn protecting<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let path = path.as_ref();
        let canonical = fs::canonicalize(path).map_err(|e| Error::io(path, e))?;
        self.protected = Some(canonical);
        Ok(self)
    }
}
impl Destination for DirectoryDestination {
    type Sink = BufWriter<File>;

    fn open(&mut self, name: &str) -> Result<Self::Sink> {
        let path = self.dir.join(name);
        if let Some(protected) = &self.protected {
            if fs::canonicalize(&path).is_ok_and(|target| &target == protected) {
                return Err(InputError::OutputIsInput(path).into());
            }
        }
        let file = File::create(&path).map_err(|e| Error::io(path, e))?;
        Ok(BufWriter::new(file))
    }
}

/// The single output file open at any time
struct OutputFile<W: Write> {
    /// Name the file was opened under
    name: String,

    /// Inner writer
    sink: W,

    /// Number of sequences planned for this file
    quota: usize,

    /// Number of sequences written so far
    n_seqs: usize,
}
impl<W: Write> OutputFile<W> {
    fn new(name: String, sink: W, quota: usize) -> Self {
        Self {
            name,
            sink,
            quota,
            n_seqs: 0,
        }
    }

    fn is_full(&self) -> bool {
        self.n_seqs >= self.quota
    }

    fn write_line(&mut self, line: &[u8]) -> Result<()> {
        self.sink.write_all(line)?;
        Ok(())
    }

    /// Flushes the buffered content; the handle is closed when `self` is dropped
    fn close(mut self) -> Result<()> {
        self.sink.flush()?;
        debug!("Closed {} after {} sequences", self.name, self.n_seqs);
        Ok(())
    }
}

/// Outcome of a partitioning pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitSummary {
    /// Names of the files created, in partition order
    pub files: Vec<String>,

    /// Number of sequences written
    pub n_sequences: usize,
}

/// Writes the FASTA source into the files described by a [`SplitPlan`]
pub struct Partitioner<D: Destination> {
    plan: SplitPlan,
    naming: Naming,
    destination: D,

    /// Progress verbosity level (0-3)
    verbosity: u8,

    /// Currently open file, if any
    current: Option<OutputFile<D::Sink>>,

    /// 1-based index of the current file
    file_index: usize,

    /// Names already used in this run
    used_names: HashSet<String>,

    summary: SplitSummary,
}
impl<D: Destination> Partitioner<D> {
    pub fn new(plan: SplitPlan, naming: Naming, destination: D) -> Self {
        Self {
            plan,
            naming,
            destination,
            verbosity: 0,
            current: None,
            file_index: 0,
            used_names: HashSet::new(),
            summary: SplitSummary::default(),
        }
    }

    /// Sets the progress verbosity level
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Runs the write pass over `reader`
    ///
    /// # Errors
    ///
    /// Fails with [`InputError::BodyBeforeHeader`] if the input does not start with a
    /// header, with [`InputError::DuplicateName`] if two partitions map to the same
    /// file name, and with an I/O error if any file cannot be read or written. Files
    /// completed before the error are left in place.
    pub fn run<R: BufRead>(mut self, reader: R) -> Result<SplitSummary> {
        let mut lines = LineReader::new(reader);
        let mut line_number = 0;
        while let Some(line) = lines.next_line()? {
            line_number += 1;
            if is_header(line) {
                self.on_header(line)?;
            }
            match self.current.as_mut() {
                Some(file) => file.write_line(line)?,
                None => return Err(InputError::BodyBeforeHeader { line: line_number }.into()),
            }
        }
        self.close_current()?;
        Ok(self.summary)
    }

    fn on_header(&mut self, header: &[u8]) -> Result<()> {
        if self.current.as_ref().is_none_or(OutputFile::is_full) {
            self.rotate(header)?;
        }
        if let Some(file) = self.current.as_mut() {
            file.n_seqs += 1;
        }
        self.summary.n_sequences += 1;

        if self.verbosity > 2 && self.plan.mode().requires_count() {
            info!("Adding sequence: {}", header_text(header));
        }
        Ok(())
    }

    /// Closes the current file and opens the next planned one
    fn rotate(&mut self, header: &[u8]) -> Result<()> {
        self.close_current()?;

        self.file_index += 1;
        let quota = self.plan.quota(self.file_index);
        if quota == 0 {
            return Err(InputError::MoreSequencesThanCounted {
                expected: self.plan.total().unwrap_or_default(),
            }
            .into());
        }

        let name = self
            .naming
            .file_name(self.file_index, self.plan.digit_width(), header)?;
        if !self.used_names.insert(name.clone()) {
            return Err(InputError::DuplicateName(name).into());
        }
        self.report_open(quota, header);
        let sink = self.destination.open(&name)?;
        self.summary.files.push(name.clone());
        self.current = Some(OutputFile::new(name, sink, quota));
        Ok(())
    }

    fn close_current(&mut self) -> Result<()> {
        match self.current.take() {
            Some(file) => file.close(),
            None => Ok(()),
        }
    }

    fn report_open(&self, quota: usize, header: &[u8]) {
        let n_files = self
            .plan
            .n_files()
            .map_or_else(|| "unknown".to_string(), |n| n.to_string());
        info!("Creating split file {}/{n_files}...", self.file_index);
        if self.verbosity > 0 {
            info!(
                "   Split file {} will contain {quota} sequences",
                self.file_index
            );
        }
        if self.verbosity > 1 && self.plan.mode() == SplitMode::PerSequence {
            info!("   for sequence: {}", header_text(header));
        }
    }
}

/// Header text without the marker and line terminator
fn header_text(header: &[u8]) -> String {
    let text = String::from_utf8_lossy(header);
    text.trim_end()
        .strip_prefix('>')
        .unwrap_or_default()
        .to_string()
}
