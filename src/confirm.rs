use std::io::{self, BufRead, Write};

use auto_impl::auto_impl;

use crate::{error::Error, Result};

/// File count above which confirmation is requested
pub const DEFAULT_FILE_LIMIT: usize = 100;

/// Capability to ask the operator whether to go ahead with a large split
#[auto_impl(&mut, Box)]
pub trait Confirm {
    /// Returns `Ok(true)` to proceed with creating `n_files` output files
    fn confirm(&mut self, n_files: usize) -> Result<bool>;
}

/// Always answers with the stored decision
#[derive(Debug, Clone, Copy)]
pub struct Fixed(pub bool);
impl Confirm for Fixed {
    fn confirm(&mut self, _n_files: usize) -> Result<bool> {
        Ok(self.0)
    }
}

/// Interactive prompt reading `y`/`n` answers
pub struct Prompt<R: BufRead, W: Write> {
    input: R,
    output: W,
}
impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}
impl<R: BufRead, W: Write> Confirm for Prompt<R, W> {
    fn confirm(&mut self, n_files: usize) -> Result<bool> {
        let mut answer = String::new();
        loop {
            write!(
                self.output,
                "This command will create {n_files} output files. Are you sure you want to proceed? (y/n) "
            )?;
            self.output.flush()?;

            answer.clear();
            if self.input.read_line(&mut answer)? == 0 {
                // nobody left to answer
                return Ok(false);
            }
            match answer.trim().to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => {}
            }
        }
    }
}

/// Prompt on stderr, answer from stdin.
///
/// Stdin is only locked while a question is pending, so the same process can read
/// FASTA content from stdin afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;
impl Confirm for TerminalPrompt {
    fn confirm(&mut self, n_files: usize) -> Result<bool> {
        Prompt::new(io::stdin().lock(), io::stderr()).confirm(n_files)
    }
}

/// Gate that decides whether the operator must be asked before splitting
#[derive(Debug, Clone, Copy)]
pub struct ConfirmGate {
    /// Largest file count accepted without asking
    pub limit: usize,

    /// Never ask
    pub force: bool,
}
impl Default for ConfirmGate {
    fn default() -> Self {
        Self {
            limit: DEFAULT_FILE_LIMIT,
            force: false,
        }
    }
}
impl ConfirmGate {
    pub fn new(limit: usize, force: bool) -> Self {
        Self { limit, force }
    }

    /// Whether `n_files` output files need confirmation
    pub fn needs_confirmation(&self, n_files: usize) -> bool {
        !self.force && n_files > self.limit
    }

    /// Asks `confirm` if needed, failing with [`Error::UserAborted`] on a decline
    pub fn check<C: Confirm>(&self, n_files: usize, mut confirm: C) -> Result<()> {
        if self.needs_confirmation(n_files) && !confirm.confirm(n_files)? {
            return Err(Error::UserAborted { n_files });
        }
        Ok(())
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    /// Records how often it was asked
    struct Counting {
        asked: usize,
        answer: bool,
    }
    impl Confirm for Counting {
        fn confirm(&mut self, _n_files: usize) -> Result<bool> {
            self.asked += 1;
            Ok(self.answer)
        }
    }

    #[test]
    fn test_gate_below_limit_does_not_ask() -> Result<()> {
        let mut confirm = Counting {
            asked: 0,
            answer: false,
        };
        ConfirmGate::default().check(100, &mut confirm)?;
        assert_eq!(confirm.asked, 0);
        Ok(())
    }

    #[test]
    fn test_gate_above_limit_asks() -> Result<()> {
        let mut confirm = Counting {
            asked: 0,
            answer: true,
        };
        ConfirmGate::default().check(101, &mut confirm)?;
        assert_eq!(confirm.asked, 1);
        Ok(())
    }

    #[test]
    fn test_gate_decline_aborts() {
        let err = ConfirmGate::new(10, false).check(11, Fixed(false)).unwrap_err();
        assert!(matches!(err, Error::UserAborted { n_files: 11 }));
        assert!(err.is_user_aborted());
    }

    #[test]
    fn test_gate_force_skips() -> Result<()> {
        ConfirmGate::new(10, true).check(10_000, Fixed(false))
    }

    #[test]
    fn test_prompt_repeats_until_answer() -> Result<()> {
        let mut output = Vec::new();
        let mut prompt = Prompt::new(&b"maybe\n\nY\n"[..], &mut output);
        assert!(prompt.confirm(250)?);

        let text = String::from_utf8_lossy(&output);
        assert_eq!(text.matches("create 250 output files").count(), 3);
        Ok(())
    }

    #[test]
    fn test_prompt_decline_and_eof() -> Result<()> {
        let mut prompt = Prompt::new(&b"n\n"[..], io::sink());
        assert!(!prompt.confirm(250)?);

        let mut prompt = Prompt::new(&b""[..], io::sink());
        assert!(!prompt.confirm(250)?);
        Ok(())
    }
}
