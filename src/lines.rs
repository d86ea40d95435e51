//! Counting the lines of a file that actually say something.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Counts the lines in the file at `path` that are neither blank nor
/// comments. A comment is a line whose first non-whitespace character is
/// `#`.
///
/// # Errors
///
/// [`Error::Io`] if the file can't be opened or read. Bytes that aren't valid
/// UTF-8 are not an error; they are read as replacement characters.
pub fn meaningful_line_count<P>(path: P) -> Result<usize>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let count = File::open(path)
        .and_then(|file| count_meaningful_lines(BufReader::new(file)))
        .map_err(|source| {
            warn!(path = %path.display(), error = %source, "could not count lines");
            Error::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;

    debug!(path = %path.display(), count, "counted meaningful lines");
    Ok(count)
}

/// Like [`meaningful_line_count`] but for anything that can be read line
/// by line.
///
/// # Examples
///
/// ```
/// use exercises::lines::count_meaningful_lines;
///
/// let text = "# header\n\nfirst\n   # indented comment\n  second  \n";
/// assert_eq!(count_meaningful_lines(text.as_bytes()).unwrap(), 2);
/// ```
pub fn count_meaningful_lines<R>(reader: R) -> io::Result<usize>
where
    R: BufRead,
{
    let mut count = 0;
    for line in reader.split(b'\n') {
        if is_meaningful(&String::from_utf8_lossy(&line?)) {
            count += 1;
        }
    }
    Ok(count)
}

fn is_meaningful(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && !line.starts_with('#')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_meaningful() {
        assert!(is_meaningful("x"));
        assert!(is_meaningful("  x = 1 # trailing comment"));
        assert!(!is_meaningful(""));
        assert!(!is_meaningful(" \t "));
        assert!(!is_meaningful("#"));
        assert!(!is_meaningful("   # indented"));
    }

    #[test]
    fn test_count_reader() {
        assert_eq!(count_meaningful_lines("".as_bytes()).unwrap(), 0);
        assert_eq!(count_meaningful_lines("a\nb".as_bytes()).unwrap(), 2);
        assert_eq!(count_meaningful_lines("a\r\n\r\nb\r\n".as_bytes()).unwrap(), 2);
    }

    #[test]
    fn test_count_reader_invalid_utf8() {
        let bytes: &[u8] = b"# caf\xe9\ncode\n\xff\xfe\n  \n";
        assert_eq!(count_meaningful_lines(bytes).unwrap(), 2);
    }
}
