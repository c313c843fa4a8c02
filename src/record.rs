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
use crate::error::ReportError;
use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// One measurement of a single sort run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
  algorithm: String,
  file: String,
  size: usize,
  elapsed_secs: f64,
}

impl BenchmarkRecord {
  pub fn new(algorithm: &str, file: &Path, size: usize, elapsed_secs: f64) -> Self {
    BenchmarkRecord {
      algorithm: algorithm.to_string(),
      file: file.display().to_string(),
      size,
      elapsed_secs,
    }
  }

  pub fn algorithm(&self) -> &str {
    &self.algorithm
  }

  pub fn file(&self) -> &str {
    &self.file
  }

  pub fn size(&self) -> usize {
    self.size
  }

  pub fn elapsed_secs(&self) -> f64 {
    self.elapsed_secs
  }
}

/// The results-log line format.
impl fmt::Display for BenchmarkRecord {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Algorithm: {}, File: {}, Size: {}, Time: {}s",
      self.algorithm, self.file, self.size, self.elapsed_secs
    )
  }
}

/// How records are laid out in the results file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordFormat {
  /// `Algorithm: <name>, File: <path>, Size: <n>, Time: <secs>s`
  #[default]
  Text,
  /// One JSON object per line.
  Json,
}

/// Appends `record` as a single line to `path`, creating the file if needed.
///
/// Existing contents are never truncated.
pub fn append_record(
  path: &Path,
  record: &BenchmarkRecord,
  format: RecordFormat,
) -> Result<(), ReportError> {
  let mut line = match format {
    RecordFormat::Text => record.to_string(),
    RecordFormat::Json => serde_json::to_string(record)?,
  };
  // Written in a single call so each record lands as one append.
  line.push('\n');

  let mut file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .map_err(|source| ReportError::Open {
      path: path.to_path_buf(),
      source,
    })?;

  file.write_all(line.as_bytes()).map_err(|source| ReportError::Write {
    path: path.to_path_buf(),
    source,
  })?;

  tracing::debug!(path = %path.display(), "Benchmark record appended");
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::tempdir;

  #[test]
  fn test_text_line_format() {
    let record = BenchmarkRecord::new("Insertion Sort", Path::new("data/in.txt"), 5, 0.25);
    assert_eq!(
      record.to_string(),
      "Algorithm: Insertion Sort, File: data/in.txt, Size: 5, Time: 0.25s"
    );
  }

  #[test]
  fn test_append_never_truncates() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("results.txt");
    fs::write(&out, "previous run\n").unwrap();

    let first = BenchmarkRecord::new("Insertion Sort", Path::new("a.txt"), 3, 0.5);
    let second = BenchmarkRecord::new("Insertion Sort", Path::new("b.txt"), 4, 1.0);
    append_record(&out, &first, RecordFormat::Text).unwrap();
    append_record(&out, &second, RecordFormat::Text).unwrap();

    let contents = fs::read_to_string(&out).unwrap();
    assert_eq!(
      contents,
      "previous run\n\
       Algorithm: Insertion Sort, File: a.txt, Size: 3, Time: 0.5s\n\
       Algorithm: Insertion Sort, File: b.txt, Size: 4, Time: 1s\n"
    );
  }

  #[test]
  fn test_each_record_is_one_terminated_line() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("results.txt");

    let record = BenchmarkRecord::new("Insertion Sort", Path::new("c.txt"), 7, 2.5);
    append_record(&out, &record, RecordFormat::Text).unwrap();
    append_record(&out, &record, RecordFormat::Json).unwrap();

    let contents = fs::read_to_string(&out).unwrap();
    assert_eq!(contents.matches('\n').count(), 2);
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], record.to_string());
    assert_eq!(serde_json::from_str::<BenchmarkRecord>(lines[1]).unwrap(), record);
  }

  #[test]
  fn test_json_format() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("results.jsonl");

    let record = BenchmarkRecord::new("Standard Library Sort", Path::new("x.txt"), 2, 0.125);
    append_record(&out, &record, RecordFormat::Json).unwrap();

    let contents = fs::read_to_string(&out).unwrap();
    let parsed: BenchmarkRecord = serde_json::from_str(contents.trim_end()).unwrap();
    assert_eq!(parsed, record);
    assert!(contents.contains(r#""elapsed_secs":0.125"#));
  }

  #[test]
  fn test_unopenable_path_is_reported() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("missing_dir").join("results.txt");

    let record = BenchmarkRecord::new("Insertion Sort", Path::new("a.txt"), 1, 0.0);
    let err = append_record(&out, &record, RecordFormat::Text).unwrap_err();
    assert!(matches!(err, ReportError::Open { .. }));
  }
}
