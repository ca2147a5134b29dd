use std::path::PathBuf;

use crate::{ConfirmGate, Input, Naming, SplitMode};

/// Highest meaningful progress verbosity level
pub const MAX_VERBOSITY: u8 = 3;

/// Everything a split run needs, handed explicitly to the pipeline
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// FASTA source
    pub input: Input,

    /// Splitting strategy
    pub mode: SplitMode,

    /// Directory the output files are written into (created if absent)
    pub directory: PathBuf,

    /// Output file naming scheme
    pub naming: Naming,

    /// Large file count confirmation settings
    pub gate: ConfirmGate,

    /// Progress verbosity level (0-3)
    pub verbosity: u8,
}
impl SplitConfig {
    /// Creates a configuration writing `split.<n>.fa` files into the working directory
    pub fn new(input: Input, mode: SplitMode) -> Self {
        Self {
            input,
            mode,
            directory: PathBuf::from("."),
            naming: Naming::default(),
            gate: ConfirmGate::default(),
            verbosity: 0,
        }
    }

    #[must_use]
    pub fn with_directory<P: Into<PathBuf>>(mut self, directory: P) -> Self {
        self.directory = directory.into();
        self
    }

    #[must_use]
    pub fn with_naming(mut self, naming: Naming) -> Self {
        self.naming = naming;
        self
    }

    #[must_use]
    pub fn with_gate(mut self, gate: ConfirmGate) -> Self {
        self.gate = gate;
        self
    }

    /// Sets the verbosity, capped at [`MAX_VERBOSITY`]
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity.min(MAX_VERBOSITY);
        self
    }
}
