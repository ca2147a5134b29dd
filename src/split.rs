use std::fs;

use log::info;

use crate::{
    count_input,
    error::{ConfigError, Error},
    Confirm, DirectoryDestination, Partitioner, Result, SplitConfig, SplitPlan, SplitSummary,
};

/// Splits a FASTA file according to `config`.
///
/// Runs the counting pass (when the input can be rewound), plans the output files,
/// asks `confirm` if the plan exceeds the file limit, creates the output directory,
/// and finally runs the partitioning pass.
///
/// Nothing is created on disk before the confirmation gate has been passed. Files
/// written before a later failure are not removed.
pub fn split_fasta<C: Confirm>(config: &SplitConfig, confirm: C) -> Result<SplitSummary> {
    if config.mode.requires_count() && !config.input.is_rewindable() {
        return Err(ConfigError::StdinRequiresCount(config.mode).into());
    }

    let total = if config.input.is_rewindable() {
        Some(count_input(&config.input, config.mode)?)
    } else {
        None
    };
    let plan = SplitPlan::new(config.mode, total)?;

    if let Some(n_files) = plan.n_files() {
        config.gate.check(n_files, confirm)?;
    }

    fs::create_dir_all(&config.directory).map_err(|e| Error::io(&config.directory, e))?;

    let mut destination = DirectoryDestination::new(&config.directory);
    if let Some(path) = config.input.path() {
        destination = destination.protecting(path)?;
    }

    let reader = config.input.open()?;
    let summary = Partitioner::new(plan, config.naming.clone(), destination)
        .with_verbosity(config.verbosity)
        .run(reader)?;

    info!(
        "Wrote {} sequences from {} into {} files",
        summary.n_sequences,
        config.input,
        summary.files.len()
    );
    Ok(summary)
}

#[cfg(test)]
mod testing {
    use super::*;
    use crate::{Fixed, Input, SplitMode};

    #[test]
    fn test_stdin_rejected_for_count_modes() {
        for mode in [SplitMode::FixedCountPerFile(2), SplitMode::FixedFileCount(2)] {
            let config = SplitConfig::new(Input::Stdin, mode);
            let err = split_fasta(&config, Fixed(true)).unwrap_err();
            assert!(matches!(
                err,
                Error::ConfigError(ConfigError::StdinRequiresCount(m)) if m == mode
            ));
        }
    }

    #[test]
    fn test_missing_input() {
        let config = SplitConfig::new(
            Input::from_arg("/nonexistent/input.fa"),
            SplitMode::FixedFileCount(2),
        );
        let err = split_fasta(&config, Fixed(true)).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_uncreatable_output_directory() -> anyhow::Result<()> {
        let tmp = tempfile::TempDir::new()?;
        let input = tmp.path().join("input.fa");
        std::fs::write(&input, ">a\nA\n")?;
        // a directory cannot be created beneath a regular file
        let directory = input.join("out");

        let config = SplitConfig::new(Input::Path(input), SplitMode::FixedFileCount(1))
            .with_directory(&directory);
        let err = split_fasta(&config, Fixed(true)).unwrap_err();
        assert!(matches!(err, Error::Io { ref path, .. } if *path == directory));
        Ok(())
    }
}
