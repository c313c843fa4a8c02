// Copyright 2025 Chisomo Makombo Sakala
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use crate::error::DatasetError;
use std::fmt::Display;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

/// Reads a dataset file: one base-10 integer per line, ended by the first blank line.
///
/// Anything after the first blank line is ignored, even if more numbers follow.
/// Each line must hold a whole integer once trimmed, so `12abc` or `3.5` count
/// as malformed. Malformed lines, including ones that are not valid UTF-8, are
/// logged and skipped.
pub fn read_dataset<T>(path: &Path) -> Result<Vec<T>, DatasetError>
where
  T: FromStr,
  T::Err: Display,
{
  let file = File::open(path).map_err(|source| DatasetError::Open {
    path: path.to_path_buf(),
    source,
  })?;

  parse_dataset(BufReader::new(file), path)
}

/// Same as [`read_dataset`], over any buffered reader. `origin` is only used in
/// diagnostics.
pub fn parse_dataset<T, R>(mut reader: R, origin: &Path) -> Result<Vec<T>, DatasetError>
where
  T: FromStr,
  T::Err: Display,
  R: BufRead,
{
  let mut values = Vec::new();
  let mut buf = Vec::new();
  let mut line_no = 0;

  loop {
    buf.clear();
    line_no += 1;
    let read = reader
      .read_until(b'\n', &mut buf)
      .map_err(|source| DatasetError::Read {
        path: origin.to_path_buf(),
        line: line_no,
        source,
      })?;
    if read == 0 {
      break;
    }

    let raw = buf.strip_suffix(b"\n").unwrap_or(&buf);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    if raw.is_empty() {
      tracing::debug!(line = line_no, "Blank line reached, end of data");
      break;
    }

    let line = match std::str::from_utf8(raw) {
      Ok(line) => line,
      Err(e) => {
        tracing::warn!(line = line_no, error = %e, "Skipping malformed line");
        continue;
      }
    };

    match line.trim().parse::<T>() {
      Ok(value) => values.push(value),
      Err(e) => {
        tracing::warn!(line = line_no, content = ?line, error = %e, "Skipping malformed line");
      }
    }
  }

  Ok(values)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Cursor;
  use std::io::Write;
  use tempfile::NamedTempFile;

  fn parse(input: &str) -> Vec<i64> {
    parse_dataset(Cursor::new(input), Path::new("<memory>")).unwrap()
  }

  #[test]
  fn test_stops_at_first_blank_line() {
    assert_eq!(parse("3\n1\n2\n\n4\n"), vec![3, 1, 2]);
  }

  #[test]
  fn test_reads_to_eof_without_terminator() {
    assert_eq!(parse("10\n20\n30"), vec![10, 20, 30]);
    assert_eq!(parse(""), Vec::<i64>::new());
  }

  #[test]
  fn test_leading_blank_line_yields_nothing() {
    assert_eq!(parse("\n1\n2\n"), Vec::<i64>::new());
  }

  #[test]
  fn test_malformed_lines_are_skipped() {
    assert_eq!(parse("1\nabc\n2\n3.5\n  4  \n-7\n\n"), vec![1, 2, 4, -7]);
  }

  #[test]
  fn test_whitespace_only_line_is_malformed_not_blank() {
    assert_eq!(parse("1\n   \n2\n\n9\n"), vec![1, 2]);
  }

  #[test]
  fn test_non_utf8_line_is_skipped() {
    let values: Vec<i64> =
      parse_dataset(Cursor::new(&b"3\n\xff\xfe\n1\n\n7\n"[..]), Path::new("<memory>")).unwrap();
    assert_eq!(values, vec![3, 1]);
  }

  #[test]
  fn test_crlf_line_endings() {
    assert_eq!(parse("5\r\n6\r\n\r\n7\r\n"), vec![5, 6]);
  }

  #[test]
  fn test_read_dataset_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "9\n8\n7\n\n").unwrap();

    let values: Vec<u32> = read_dataset(file.path()).unwrap();
    assert_eq!(values, vec![9, 8, 7]);
  }

  #[test]
  fn test_missing_file_is_an_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");

    let err = read_dataset::<i64>(&missing).unwrap_err();
    assert!(matches!(err, DatasetError::Open { ref path, .. } if path == &missing));
  }
}
