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
use crate::cli::ExecutorCli;
use crate::cli::GeneratorCli;
use crate::error::ConfigError;
use crate::record::RecordFormat;
use crate::strategy::Algorithm;
use figment::Figment;
use figment::providers::Env;
use figment::providers::Format;
use figment::providers::Json;
use figment::providers::Serialized;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;

// --- Default Values ---
pub const DEFAULT_CONFIG_FILE: &str = "sortbench.json";
pub const DEFAULT_SEED: u64 = 12345;
pub const ENV_PREFIX: &str = "SORTBENCH_";

/// Settings shared by both binaries.
///
/// Resolved from, lowest to highest priority: built-in defaults, the JSON
/// settings file, then `SORTBENCH_*` environment variables. Explicit CLI flags
/// are applied on top by the `TryFrom` conversions below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
  pub algorithm: Algorithm,
  pub format: RecordFormat,
  pub seed: u64,
}

impl Default for Settings {
  fn default() -> Self {
    Settings {
      algorithm: Algorithm::default(),
      format: RecordFormat::default(),
      seed: DEFAULT_SEED,
    }
  }
}

impl Settings {
  pub fn figment(config_file: &Path) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(Settings::default()));
    if config_file.is_file() {
      figment = figment.merge(Json::file_exact(config_file));
    }
    figment.merge(Env::prefixed(ENV_PREFIX).only(&["algorithm", "format", "seed"]))
  }

  /// Loads settings. A missing settings file is not an error.
  pub fn load(config_file: &Path) -> Result<Self, ConfigError> {
    Self::figment(config_file)
      .extract()
      .map_err(|e| ConfigError::Load(Box::new(e)))
  }
}

/// Fully resolved configuration for one executor run.
#[derive(Debug)]
pub struct ExecutorConfig {
  pub input: PathBuf,
  pub output: PathBuf,
  pub algorithm: Algorithm,
  pub format: RecordFormat,
}

impl TryFrom<ExecutorCli> for ExecutorConfig {
  type Error = ConfigError;

  fn try_from(
    ExecutorCli {
      input_filename,
      output_filename,
      algorithm,
      format,
      config,
    }: ExecutorCli,
  ) -> Result<Self, Self::Error> {
    let settings = Settings::load(&config)?;

    Ok(ExecutorConfig {
      input: input_filename,
      output: output_filename,
      algorithm: algorithm.unwrap_or(settings.algorithm),
      format: format.unwrap_or(settings.format),
    })
  }
}

/// Validated configuration for one generation run.
#[derive(Debug)]
pub struct GeneratorConfig {
  max_value: u32,
  count: u32,
  output_file: PathBuf,
  seed: u64,
}

impl GeneratorConfig {
  /// Rejects `count > max_value`: there would not be enough distinct values.
  pub fn new(
    max_value: u32,
    count: u32,
    output_file: PathBuf,
    seed: u64,
  ) -> Result<Self, ConfigError> {
    if count > max_value {
      return Err(ConfigError::CountExceedsMax { count, max_value });
    }

    Ok(GeneratorConfig {
      max_value,
      count,
      output_file,
      seed,
    })
  }

  pub fn max_value(&self) -> u32 {
    self.max_value
  }

  pub fn count(&self) -> u32 {
    self.count
  }

  pub fn output_file(&self) -> &Path {
    &self.output_file
  }

  pub fn seed(&self) -> u64 {
    self.seed
  }
}

impl TryFrom<GeneratorCli> for GeneratorConfig {
  type Error = ConfigError;

  fn try_from(
    GeneratorCli {
      max_value,
      count,
      output_file,
      seed,
      config: config_file,
    }: GeneratorCli,
  ) -> Result<Self, Self::Error> {
    // Bounds are checked before the settings file is read.
    let mut config = GeneratorConfig::new(max_value, count, output_file, DEFAULT_SEED)?;

    let settings = Settings::load(&config_file)?;
    config.seed = seed.unwrap_or(settings.seed);
    Ok(config)
  }
}
