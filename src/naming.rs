use crate::{error::InputError, Result};

/// Extension of every generated file
pub const EXTENSION: &str = "fa";

/// Default prefix for numbered output files
pub const DEFAULT_PREFIX: &str = "split";

/// How output files are named
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Naming {
    /// `<prefix>.<zero-padded index>.fa`
    Prefix(String),

    /// Named after the header line that opens the file.
    ///
    /// Uses the first whitespace-delimited token of the header, or the whole header
    /// text when `full` is set.
    Header { full: bool },
}
impl Default for Naming {
    fn default() -> Self {
        Self::Prefix(DEFAULT_PREFIX.to_string())
    }
}
impl Naming {
    /// Builds the name of an output file
    ///
    /// # Arguments
    /// * `index` - 1-based index of the file
    /// * `width` - Width the index is zero-padded to
    /// * `header` - The header line that opens the file
    pub fn file_name(&self, index: usize, width: usize, header: &[u8]) -> Result<String> {
        match self {
            Self::Prefix(prefix) => Ok(format!("{prefix}.{index:0width$}.{EXTENSION}")),
            Self::Header { full } => {
                let name = header_name(header, *full)?;
                Ok(format!("{name}.{EXTENSION}"))
            }
        }
    }
}

/// Derives a file stem from a header line
fn header_name(header: &[u8], full: bool) -> Result<String> {
    let Ok(text) = std::str::from_utf8(header) else {
        return Err(InputError::UnnamedHeader(String::from_utf8_lossy(header).into_owned()).into());
    };
    let text = text.trim();
    let name = if full {
        text.strip_prefix('>').unwrap_or(text).trim()
    } else {
        let mut words = text.split_whitespace();
        match words.next() {
            // a bare '>' separated from the identifier
            Some(">") => words.next().unwrap_or_default(),
            Some(word) => word.strip_prefix('>').unwrap_or(word),
            None => "",
        }
    };

    if name.is_empty() {
        return Err(InputError::UnnamedHeader(text.to_string()).into());
    }
    if name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(InputError::UnsafeName(name.to_string()).into());
    }
    Ok(name.to_string())
}
