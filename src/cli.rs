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
use crate::config::DEFAULT_CONFIG_FILE;
use crate::record::RecordFormat;
use crate::strategy::Algorithm;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Time a sorting strategy over an integer dataset")]
pub struct ExecutorCli {
  /// Dataset to sort: one integer per line, terminated by a blank line.
  pub input_filename: PathBuf,

  /// Results log. One record is appended per completed run.
  pub output_filename: PathBuf,

  /// Sorting strategy to benchmark.
  #[arg(long, value_enum)]
  pub algorithm: Option<Algorithm>,

  /// Layout of the appended record.
  #[arg(long, value_enum)]
  pub format: Option<RecordFormat>,

  /// Optional JSON settings file.
  #[arg(long, env = "SORTBENCH_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
  pub config: PathBuf,
}

#[derive(Debug, Parser)]
#[command(version, about = "Write a list of distinct random integers for sortbench")]
pub struct GeneratorCli {
  /// Exclusive upper bound of the generated values.
  pub max_value: u32,

  /// How many distinct values to write. Must not exceed max_value.
  pub count: u32,

  /// File to create (truncated if it already exists).
  pub output_file: PathBuf,

  /// Seed for the random number generator.
  #[arg(long)]
  pub seed: Option<u64>,

  /// Optional JSON settings file.
  #[arg(long, env = "SORTBENCH_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
  pub config: PathBuf,
}

/// Parses the process arguments, exiting with status 1 on invalid input.
///
/// `--help` and `--version` still exit 0.
pub fn parse_or_exit<P: Parser>() -> P {
  P::try_parse().unwrap_or_else(|e| {
    let code = if e.use_stderr() { 1 } else { 0 };
    let _ = e.print();
    std::process::exit(code)
  })
}
