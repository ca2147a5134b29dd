use std::path::PathBuf;

use crate::SplitMode;

/// Custom Result type for fastasplit operations, wrapping the custom [`Error`] type
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the fastasplit library, encompassing all possible error cases
/// that can occur while counting, planning, or partitioning a FASTA file.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Invalid or contradictory split configuration
    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    /// Input content that cannot be partitioned
    #[error(transparent)]
    InputError(#[from] InputError),

    /// I/O errors tied to a specific file or directory
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Standard I/O errors from the Rust standard library
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// The operator declined to create a large number of output files
    ///
    /// # Fields
    /// * `n_files` - The number of files that would have been created
    #[error("Aborted: declined to create {n_files} output files")]
    UserAborted { n_files: usize },
}
impl Error {
    /// Attach a path to an I/O error
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if the error is a declined confirmation
    pub fn is_user_aborted(&self) -> bool {
        matches!(self, Self::UserAborted { .. })
    }
}

/// Errors raised while validating the split configuration
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The sequence or file count is zero
    #[error("Invalid positive integer value: 0")]
    ZeroCount,

    /// Neither a count nor per-sequence mode was requested
    #[error("A count is required unless splitting every sequence into its own file")]
    MissingCount,

    /// Standard input cannot be rewound for the counting pass
    ///
    /// # Arguments
    /// * `SplitMode` - The mode that needs a pre-count
    #[error("FASTA cannot be read from stdin in {0} mode")]
    StdinRequiresCount(SplitMode),

    /// The mode needs a total sequence count but none was provided
    #[error("{0} mode requires the total number of sequences")]
    UnknownTotal(SplitMode),
}

/// Errors caused by FASTA content that has no well-defined partition
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum InputError {
    /// A sequence line appears before any header
    ///
    /// # Fields
    /// * `line` - The 1-based line number of the offending line
    #[error("Sequence data found before the first header (line {line})")]
    BodyBeforeHeader { line: usize },

    /// The header has no token usable as a file name
    #[error("Cannot derive a file name from header: {0}")]
    UnnamedHeader(String),

    /// The file name derived from a header would escape the output directory
    #[error("Header-derived file name is not a plain file name: {0}")]
    UnsafeName(String),

    /// The write pass found more sequences than the counting pass
    ///
    /// # Fields
    /// * `expected` - The number of sequences found while counting
    #[error("Input has more sequences than the {expected} counted (was it modified?)")]
    MoreSequencesThanCounted { expected: usize },

    /// Two partitions were given the same file name in one run
    #[error("Output file name produced twice: {0}")]
    DuplicateName(String),

    /// The output file would replace the FASTA file being split
    #[error("Refusing to overwrite the input file {}", .0.display())]
    OutputIsInput(PathBuf),
}
