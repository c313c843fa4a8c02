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
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error enum for the sortbench library.
#[derive(Error, Debug)]
pub enum SortBenchError {
  #[error("Configuration error")]
  Config(#[from] ConfigError),

  #[error("Dataset could not be loaded")]
  Dataset(#[from] DatasetError),

  #[error("Benchmark record could not be persisted")]
  Report(#[from] ReportError),

  #[error("Dataset generation failed")]
  Generate(#[from] GenerateError),
}

/// Errors related to settings and argument validation (src/config.rs).
#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("Failed to load settings")]
  Load(#[source] Box<figment::Error>),

  #[error("count ({count}) cannot be greater than max_value ({max_value})")]
  CountExceedsMax { count: u32, max_value: u32 },
}

/// Errors related to reading an input dataset (src/dataset.rs).
#[derive(Error, Debug)]
pub enum DatasetError {
  #[error("Could not open file {path}")]
  Open {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to read line {line} of {path}")]
  Read {
    path: PathBuf,
    line: usize,
    #[source]
    source: std::io::Error,
  },
}

/// Errors related to appending a benchmark record (src/record.rs).
#[derive(Error, Debug)]
pub enum ReportError {
  #[error("Unable to open output file: {path}")]
  Open {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to append record to {path}")]
  Write {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to serialize benchmark record")]
  Serialize(#[from] serde_json::Error),
}

/// Errors raised by the non-repeating sampler (src/sampler.rs).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SamplerError {
  #[error("No more numbers to sample")]
  Exhausted,
}

/// Errors related to writing a generated dataset (src/generator.rs).
#[derive(Error, Debug)]
pub enum GenerateError {
  #[error("Could not open file {path}")]
  Create {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to write to {path}")]
  Write {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Sampler ran dry after {drawn} of {requested} values")]
  Sampler {
    drawn: u32,
    requested: u32,
    #[source]
    source: SamplerError,
  },
}
