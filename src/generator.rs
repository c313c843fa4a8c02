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
use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::sampler::NonRepeatingSampler;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;

/// Writes `config.count()` distinct values from `[0, config.max_value())` to
/// the output file, in draw order, one per line, then a blank terminator line.
pub fn generate(config: &GeneratorConfig) -> Result<(), GenerateError> {
  let path = config.output_file();
  let span = tracing::info_span!(
    "generate",
    max_value = config.max_value(),
    count = config.count(),
    seed = config.seed()
  );
  let _enter = span.enter();

  let file = File::create(path).map_err(|source| GenerateError::Create {
    path: path.to_path_buf(),
    source,
  })?;
  let mut out = BufWriter::new(file);
  let write_err = |source| GenerateError::Write {
    path: path.to_path_buf(),
    source,
  };

  let mut sampler = NonRepeatingSampler::new(config.seed(), config.max_value());
  for drawn in 0..config.count() {
    let value = sampler.sample().map_err(|source| GenerateError::Sampler {
      drawn,
      requested: config.count(),
      source,
    })?;
    writeln!(out, "{}", value).map_err(write_err)?;
  }
  writeln!(out).map_err(write_err)?;
  out.flush().map_err(write_err)?;

  tracing::info!(path = %path.display(), "Dataset written");
  Ok(())
}
