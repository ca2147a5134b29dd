//! # fastasplit
//!
//! Split a FASTA file into smaller FASTA files, either one file per sequence, a fixed
//! number of sequences per file, or sequences spread evenly over a fixed number of files.
//!
//! A run is a counting pass ([`count_sequences`]), a plan ([`SplitPlan`]), an optional
//! confirmation ([`Confirm`]), and a single partitioning pass ([`Partitioner`]).
//! [`split_fasta`] drives the whole pipeline from a [`SplitConfig`].
//!
//! ```no_run
//! use fastasplit::{split_fasta, Fixed, Input, SplitConfig, SplitMode};
//!
//! let config = SplitConfig::new(Input::from_arg("genome.fa"), SplitMode::FixedFileCount(8))
//!     .with_directory("chunks");
//! let summary = split_fasta(&config, Fixed(false))?;
//! println!("{} files", summary.files.len());
//! # Ok::<(), fastasplit::Error>(())
//! ```

mod config;
mod confirm;
mod counter;
mod error;
mod naming;
mod partition;
mod plan;
mod source;
mod split;

pub use config::{SplitConfig, MAX_VERBOSITY};
pub use confirm::{Confirm, ConfirmGate, Fixed, Prompt, TerminalPrompt, DEFAULT_FILE_LIMIT};
pub use counter::{count_input, count_sequences};
pub use error::{ConfigError, Error, InputError, Result};
pub use naming::{Naming, DEFAULT_PREFIX, EXTENSION};
pub use partition::{Destination, DirectoryDestination, Partitioner, SplitSummary};
pub use plan::{digits, SplitMode, SplitPlan, FALLBACK_DIGIT_WIDTH};
pub use source::{is_header, Input, LineReader, STDIN_SENTINEL};
pub use split::split_fasta;
