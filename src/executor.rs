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
use crate::dataset::read_dataset;
use crate::record::BenchmarkRecord;
use crate::record::RecordFormat;
use crate::record::append_record;
use crate::strategy::SortStrategy;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

/// Result of a single [`SortExecutor::execute`] call.
#[derive(Debug)]
pub enum RunOutcome<T> {
  /// Nothing was loaded (empty or unreadable input), so nothing was sorted or recorded.
  Skipped,
  Completed(CompletedRun<T>),
}

/// A run that got as far as sorting.
#[derive(Debug)]
pub struct CompletedRun<T> {
  /// The sequence after sorting.
  pub data: Vec<T>,
  pub record: BenchmarkRecord,
  /// False when the record could not be appended to the results file.
  pub persisted: bool,
}

/// Times one bound strategy over a dataset read from disk.
///
/// A run moves through load, sort, report and never goes back. An empty
/// dataset ends the run right after loading.
pub struct SortExecutor<T> {
  strategy: Box<dyn SortStrategy<T>>,
  format: RecordFormat,
}

impl<T> SortExecutor<T>
where
  T: FromStr,
  T::Err: Display,
{
  pub fn new(strategy: Box<dyn SortStrategy<T>>) -> Self {
    SortExecutor {
      strategy,
      format: RecordFormat::default(),
    }
  }

  pub fn with_format(mut self, format: RecordFormat) -> Self {
    self.format = format;
    self
  }

  pub fn strategy_name(&self) -> &'static str {
    self.strategy.name()
  }

  /// Loads `input`, sorts it with the bound strategy, and appends a record to `output`.
  ///
  /// Read failures are logged and treated as an empty dataset. Write failures
  /// are logged and reported through [`CompletedRun::persisted`].
  pub fn execute(&self, input: &Path, output: &Path) -> RunOutcome<T> {
    let span = tracing::info_span!(
      "sort_run",
      algorithm = self.strategy.name(),
      input = %input.display()
    );
    let _enter = span.enter();

    let mut data = self.load(input);
    if data.is_empty() {
      tracing::info!("Nothing to benchmark");
      return RunOutcome::Skipped;
    }
    tracing::debug!(size = data.len(), "Dataset loaded");

    let elapsed_secs = self.measure(&mut data);
    tracing::info!(size = data.len(), elapsed_secs, "Sort finished");

    let record = BenchmarkRecord::new(self.strategy.name(), input, data.len(), elapsed_secs);
    let persisted = match append_record(output, &record, self.format) {
      Ok(()) => true,
      Err(e) => {
        tracing::error!(error = %e, "Benchmark computed but not persisted");
        false
      }
    };

    RunOutcome::Completed(CompletedRun {
      data,
      record,
      persisted,
    })
  }

  fn load(&self, input: &Path) -> Vec<T> {
    read_dataset(input).unwrap_or_else(|e| {
      tracing::error!(error = %e, "Failed to load dataset");
      Vec::new()
    })
  }

  /// Runs the strategy over `data`, returning the wall time in seconds.
  fn measure(&self, data: &mut [T]) -> f64 {
    let start = Instant::now();
    self.strategy.sort(data);
    start.elapsed().as_secs_f64()
  }
}
