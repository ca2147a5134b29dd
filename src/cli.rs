use std::path::PathBuf;

use clap::{ArgAction, Parser};
use fastasplit::{
    ConfigError, ConfirmGate, Input, Naming, SplitConfig, SplitMode, DEFAULT_FILE_LIMIT,
    DEFAULT_PREFIX,
};

#[derive(Debug, Parser)]
#[command(name = "fastasplit", version)]
#[command(about = "Split a fasta file into smaller fasta files.", long_about = None)]
pub struct Args {
    /// Path to fasta file. Read from stdin if '-' is given (only with -e)
    #[arg(value_name = "FASTA")]
    pub fasta: String,

    /// Do not prompt for confirmation when creating a large number of files
    #[arg(long)]
    pub force: bool,

    /// Number of files above which confirmation is requested
    #[arg(long, value_name = "INT", default_value_t = DEFAULT_FILE_LIMIT)]
    pub limit: usize,

    /// Number of files to split fasta into, or number of sequences per file if -s is provided.
    /// Required if -e is not provided
    #[arg(
        short = 'n',
        long = "number",
        value_name = "INT",
        help_heading = "Split options",
        conflicts_with = "every"
    )]
    pub number: Option<usize>,

    /// -n represents number of sequences to put in each file
    #[arg(short, long, help_heading = "Split options", requires = "number")]
    pub seqnum: bool,

    /// Split each sequence into its own file. Do not provide -n
    #[arg(short, long, help_heading = "Split options")]
    pub every: bool,

    /// Directory to place split files in, created if absent
    #[arg(
        short,
        long,
        value_name = "DIR",
        default_value = ".",
        help_heading = "Naming options"
    )]
    pub directory: PathBuf,

    /// Prefix to use for naming all split files.
    /// Default is 'split', or first word of sequence header if -e
    #[arg(short, long, value_name = "PREFIX", help_heading = "Naming options")]
    pub prefix: Option<String>,

    /// Use with -e. Use full sequence header as file name instead of just the first word
    #[arg(short, long = "fullhead", help_heading = "Naming options")]
    pub full: bool,

    /// Suppress progress messages
    #[arg(short, long, help_heading = "Message options")]
    pub quiet: bool,

    /// Increases verbosity level. Can be invoked up to 3 times
    #[arg(short, long, action = ArgAction::Count, help_heading = "Message options")]
    pub verbose: u8,
}

impl Args {
    pub fn mode(&self) -> Result<SplitMode, ConfigError> {
        match (self.every, self.number, self.seqnum) {
            (true, _, _) => Ok(SplitMode::PerSequence),
            (false, Some(n), true) => Ok(SplitMode::FixedCountPerFile(n)),
            (false, Some(n), false) => Ok(SplitMode::FixedFileCount(n)),
            (false, None, _) => Err(ConfigError::MissingCount),
        }
    }

    pub fn naming(&self) -> Naming {
        match (&self.prefix, self.every) {
            (Some(prefix), _) => Naming::Prefix(prefix.clone()),
            (None, true) => Naming::Header { full: self.full },
            (None, false) => Naming::Prefix(DEFAULT_PREFIX.to_string()),
        }
    }

    pub fn config(&self) -> Result<SplitConfig, ConfigError> {
        let config = SplitConfig::new(Input::from_arg(&self.fasta), self.mode()?)
            .with_directory(&self.directory)
            .with_naming(self.naming())
            .with_gate(ConfirmGate::new(self.limit, self.force))
            .with_verbosity(self.verbose);
        Ok(config)
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::parse_from(std::iter::once("fastasplit").chain(args.iter().copied()))
    }

    #[test]
    fn test_default_mode_is_file_count() {
        let args = parse(&["-n", "4", "in.fa"]);
        assert_eq!(args.mode(), Ok(SplitMode::FixedFileCount(4)));
        assert_eq!(args.naming(), Naming::Prefix("split".to_string()));
    }

    #[test]
    fn test_seqnum_mode() {
        let args = parse(&["-n", "4", "-s", "-p", "chunk", "in.fa"]);
        assert_eq!(args.mode(), Ok(SplitMode::FixedCountPerFile(4)));
        assert_eq!(args.naming(), Naming::Prefix("chunk".to_string()));
    }

    #[test]
    fn test_every_mode_naming() {
        let args = parse(&["-e", "-f", "-"]);
        assert_eq!(args.mode(), Ok(SplitMode::PerSequence));
        assert_eq!(args.naming(), Naming::Header { full: true });

        let args = parse(&["-e", "-p", "x", "in.fa"]);
        assert_eq!(args.naming(), Naming::Prefix("x".to_string()));
    }

    #[test]
    fn test_missing_count() {
        let args = parse(&["in.fa"]);
        assert_eq!(args.mode(), Err(ConfigError::MissingCount));
    }

    #[test]
    fn test_conflicting_flags_rejected() {
        let argv = ["fastasplit", "-e", "-n", "3", "in.fa"];
        assert!(Args::try_parse_from(argv).is_err());
        let argv = ["fastasplit", "-n", "abc", "in.fa"];
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_verbosity_and_gate() -> Result<(), ConfigError> {
        let config = parse(&["-vvvv", "--force", "--limit", "5", "-n", "2", "in.fa"]).config()?;
        assert_eq!(config.verbosity, 3);
        assert!(config.gate.force);
        assert_eq!(config.gate.limit, 5);
        Ok(())
    }
}
