//! Output planning
//!
//! Given the total number of sequences and a [`SplitMode`], the planner decides how many
//! output files are needed, how many sequences each file receives, and how wide the
//! zero-padded numeric suffix of the generated file names must be.

use std::fmt;

use crate::{error::ConfigError, Result};

/// Suffix width used when the number of output files cannot be known in advance
pub const FALLBACK_DIGIT_WIDTH: usize = 3;

/// Number of decimal digits needed to print `n`
pub fn digits(n: usize) -> usize {
    itoa::Buffer::new().format(n).len()
}

/// Strategy used to partition the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMode {
    /// One output file per sequence
    PerSequence,

    /// Up to `N` sequences per output file; the last file holds the remainder
    FixedCountPerFile(usize),

    /// Sequences spread evenly over `F` output files
    FixedFileCount(usize),
}
impl SplitMode {
    /// Whether partition decisions depend on the total number of sequences
    pub fn requires_count(&self) -> bool {
        !matches!(self, Self::PerSequence)
    }
}
impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PerSequence => write!(f, "per-sequence"),
            Self::FixedCountPerFile(n) => write!(f, "{n}-sequences-per-file"),
            Self::FixedFileCount(n) => write!(f, "{n}-files"),
        }
    }
}

/// Output plan shared between the planner and the partitioner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPlan {
    /// Splitting strategy
    mode: SplitMode,

    /// Total number of sequences in the input, if known
    total: Option<usize>,

    /// Number of planned output files, if known
    ///
    /// For [`SplitMode::FixedFileCount`] this is always `F`, even when there are fewer
    /// sequences than files (trailing files then have a zero quota and are never created).
    n_files: Option<usize>,

    /// Width of the zero-padded numeric suffix
    digit_width: usize,
}
impl SplitPlan {
    /// Builds the plan for `mode` given the total sequence count.
    ///
    /// # Errors
    ///
    /// Fails with [`ConfigError::ZeroCount`] for a zero `N` or `F`, and with
    /// [`ConfigError::UnknownTotal`] when a count mode is planned without a total.
    pub fn new(mode: SplitMode, total: Option<usize>) -> Result<Self> {
        let (n_files, digit_width) = match mode {
            SplitMode::PerSequence => (total, total.map_or(FALLBACK_DIGIT_WIDTH, digits)),
            SplitMode::FixedCountPerFile(0) | SplitMode::FixedFileCount(0) => {
                return Err(ConfigError::ZeroCount.into())
            }
            SplitMode::FixedCountPerFile(per_file) => {
                let total = total.ok_or(ConfigError::UnknownTotal(mode))?;
                let n_files = total.div_ceil(per_file);
                (Some(n_files), digits(n_files))
            }
            SplitMode::FixedFileCount(n_files) => {
                if total.is_none() {
                    return Err(ConfigError::UnknownTotal(mode).into());
                }
                (Some(n_files), digits(n_files))
            }
        };
        Ok(Self {
            mode,
            total,
            n_files,
            digit_width,
        })
    }

    pub fn mode(&self) -> SplitMode {
        self.mode
    }

    pub fn total(&self) -> Option<usize> {
        self.total
    }

    pub fn n_files(&self) -> Option<usize> {
        self.n_files
    }

    pub fn digit_width(&self) -> usize {
        self.digit_width
    }

    /// Number of sequences planned for the file at the 1-based `index`
    ///
    /// Returns 0 for indices beyond the planned file count.
    pub fn quota(&self, index: usize) -> usize {
        if index == 0 || self.n_files.is_some_and(|n| index > n) {
            return 0;
        }
        match self.mode {
            SplitMode::PerSequence => 1,
            SplitMode::FixedCountPerFile(per_file) => {
                let total = self.total.unwrap_or_default();
                per_file.min(total - per_file * (index - 1))
            }
            SplitMode::FixedFileCount(n_files) => {
                let total = self.total.unwrap_or_default();
                let per_file = total / n_files;
                // earliest files absorb the remainder
                per_file + usize::from(index <= total % n_files)
            }
        }
    }

    /// All planned quotas in file order, if the file count is known
    pub fn quotas(&self) -> Option<Vec<usize>> {
        self.n_files
            .map(|n_files| (1..=n_files).map(|index| self.quota(index)).collect())
    }
}

#[cfg(test)]
mod testing {
    use super::*;
    use crate::Error;

    #[test]
    fn test_digits() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(100), 3);
        assert_eq!(digits(12345), 5);
    }

    #[test]
    fn test_file_count_with_remainder() -> Result<()> {
        let plan = SplitPlan::new(SplitMode::FixedFileCount(3), Some(10))?;
        assert_eq!(plan.quotas(), Some(vec![4, 3, 3]));
        assert_eq!(plan.digit_width(), 1);
        Ok(())
    }

    #[test]
    fn test_file_count_even() -> Result<()> {
        let plan = SplitPlan::new(SplitMode::FixedFileCount(3), Some(9))?;
        assert_eq!(plan.quotas(), Some(vec![3, 3, 3]));
        Ok(())
    }

    #[test]
    fn test_file_count_more_files_than_sequences() -> Result<()> {
        let plan = SplitPlan::new(SplitMode::FixedFileCount(5), Some(2))?;
        assert_eq!(plan.quotas(), Some(vec![1, 1, 0, 0, 0]));
        assert_eq!(plan.n_files(), Some(5));
        Ok(())
    }

    #[test]
    fn test_file_count_width() -> Result<()> {
        let plan = SplitPlan::new(SplitMode::FixedFileCount(100), Some(1000))?;
        assert_eq!(plan.digit_width(), 3);
        let plan = SplitPlan::new(SplitMode::FixedFileCount(99), Some(1000))?;
        assert_eq!(plan.digit_width(), 2);
        Ok(())
    }

    #[test]
    fn test_count_per_file() -> Result<()> {
        let plan = SplitPlan::new(SplitMode::FixedCountPerFile(4), Some(10))?;
        assert_eq!(plan.n_files(), Some(3));
        assert_eq!(plan.quotas(), Some(vec![4, 4, 2]));
        assert_eq!(plan.quota(4), 0);
        Ok(())
    }

    #[test]
    fn test_count_per_file_exact() -> Result<()> {
        let plan = SplitPlan::new(SplitMode::FixedCountPerFile(5), Some(10))?;
        assert_eq!(plan.quotas(), Some(vec![5, 5]));
        Ok(())
    }

    #[test]
    fn test_count_per_file_width_follows_file_count() -> Result<()> {
        let plan = SplitPlan::new(SplitMode::FixedCountPerFile(1), Some(1500))?;
        assert_eq!(plan.n_files(), Some(1500));
        assert_eq!(plan.digit_width(), 4);
        Ok(())
    }

    #[test]
    fn test_per_sequence() -> Result<()> {
        let plan = SplitPlan::new(SplitMode::PerSequence, Some(250))?;
        assert_eq!(plan.n_files(), Some(250));
        assert_eq!(plan.digit_width(), 3);
        assert_eq!(plan.quota(1), 1);
        assert_eq!(plan.quota(250), 1);
        assert_eq!(plan.quota(251), 0);

        let plan = SplitPlan::new(SplitMode::PerSequence, None)?;
        assert_eq!(plan.n_files(), None);
        assert_eq!(plan.digit_width(), FALLBACK_DIGIT_WIDTH);
        assert_eq!(plan.quota(100_000), 1);
        assert_eq!(plan.quotas(), None);
        Ok(())
    }

    #[test]
    fn test_zero_counts_rejected() {
        for mode in [SplitMode::FixedCountPerFile(0), SplitMode::FixedFileCount(0)] {
            let err = SplitPlan::new(mode, Some(10)).unwrap_err();
            assert!(matches!(err, Error::ConfigError(ConfigError::ZeroCount)));
        }
    }

    #[test]
    fn test_unknown_total_rejected() {
        for mode in [SplitMode::FixedCountPerFile(2), SplitMode::FixedFileCount(2)] {
            let err = SplitPlan::new(mode, None).unwrap_err();
            assert!(matches!(
                err,
                Error::ConfigError(ConfigError::UnknownTotal(m)) if m == mode
            ));
        }
    }

    #[test]
    fn test_quotas_sum_to_total() -> Result<()> {
        for total in 0..40 {
            for n in 1..12 {
                for mode in [SplitMode::FixedCountPerFile(n), SplitMode::FixedFileCount(n)] {
                    let plan = SplitPlan::new(mode, Some(total))?;
                    let quotas = plan.quotas().unwrap_or_default();
                    assert_eq!(quotas.iter().sum::<usize>(), total, "{mode} over {total}");
                }
            }
        }
        Ok(())
    }
}
