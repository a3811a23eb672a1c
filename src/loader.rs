//! Transaction sources: delimited text, one transaction per line and one
//! item per field.
//!
//! Fields are trimmed and empty fields skipped, so trailing delimiters and
//! `\r\n` line endings are harmless. A blank line is an empty transaction.
//!
//! Quoting is not supported: every delimiter splits, so `"a,b"` is read as
//! the two items `"a` and `b"`.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{AprioriError, Result};

pub const DEFAULT_DELIMITER: char = ',';

/// Source name used in errors when reading from a bare reader.
const READER_SOURCE: &str = "<reader>";

/// Items as string tokens.
pub fn read_transactions<R: BufRead>(reader: R, delimiter: char) -> Result<Vec<Vec<String>>> {
    read_rows(reader, Path::new(READER_SOURCE), delimiter, |field, _| {
        Ok(field.to_owned())
    })
}

/// Items as unsigned integers; any other field is `MalformedInput`.
pub fn read_numeric_transactions<R: BufRead>(reader: R, delimiter: char) -> Result<Vec<Vec<u64>>> {
    read_numeric_rows(reader, Path::new(READER_SOURCE), delimiter)
}

pub fn load_transactions<P: AsRef<Path>>(path: P, delimiter: char) -> Result<Vec<Vec<String>>> {
    let path = path.as_ref();
    read_rows(open(path)?, path, delimiter, |field, _| Ok(field.to_owned()))
}

pub fn load_numeric_transactions<P: AsRef<Path>>(
    path: P,
    delimiter: char,
) -> Result<Vec<Vec<u64>>> {
    let path = path.as_ref();
    read_numeric_rows(open(path)?, path, delimiter)
}

fn read_numeric_rows<R: BufRead>(
    reader: R,
    source: &Path,
    delimiter: char,
) -> Result<Vec<Vec<u64>>> {
    read_rows(reader, source, delimiter, |field, line| {
        field.parse().map_err(|_| {
            AprioriError::malformed(line, format!("expected an integer item, got {:?}", field))
        })
    })
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|err| AprioriError::unavailable(path, err))
}

/// Undecodable text is `MalformedInput` at its line; any other read
/// failure means `source` itself is unreadable.
fn read_rows<R, T, F>(
    reader: R,
    source: &Path,
    delimiter: char,
    mut parse: F,
) -> Result<Vec<Vec<T>>>
where
    R: BufRead,
    F: FnMut(&str, usize) -> Result<T>,
{
    reader
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let line_no = i + 1;
            let line = line.map_err(|err| match err.kind() {
                io::ErrorKind::InvalidData => AprioriError::malformed(line_no, err.to_string()),
                _ => AprioriError::unavailable(source, err),
            })?;
            line.split(delimiter)
                .map(str::trim)
                .filter(|field| !field.is_empty())
                .map(|field| parse(field, line_no))
                .collect::<Result<Vec<T>>>()
        })
        .collect()
}
