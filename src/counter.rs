use std::io::BufRead;

use log::info;

use crate::{
    error::{ConfigError, Error},
    source::{is_header, LineReader},
    Input, Result, SplitMode,
};

/// Counts the header lines in a FASTA stream in a single forward pass
pub fn count_sequences<R: BufRead>(reader: R) -> Result<usize> {
    let mut lines = LineReader::new(reader);
    let mut n_seqs = 0;
    while let Some(line) = lines.next_line()? {
        if is_header(line) {
            n_seqs += 1;
        }
    }
    Ok(n_seqs)
}

/// Opens the input and counts its sequences.
///
/// The handle used for counting is closed before returning so the write pass can
/// reopen the same path. Standard input cannot be counted because it cannot be
/// rewound afterwards.
///
/// # Arguments
/// * `input` - The FASTA source
/// * `mode` - The split mode requesting the count, reported on error
pub fn count_input(input: &Input, mode: SplitMode) -> Result<usize> {
    let Some(path) = input.path() else {
        return Err(ConfigError::StdinRequiresCount(mode).into());
    };
    info!("Counting total sequences in fasta file...");
    let n_seqs = count_sequences(input.open()?).map_err(|e| match e {
        Error::IoError(source) => Error::io(path, source),
        e => e,
    })?;
    info!("Found {n_seqs} sequences in fasta file");
    Ok(n_seqs)
}
