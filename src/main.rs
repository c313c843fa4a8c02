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
use anyhow::Context;
use anyhow::Result;
use sortbench::cli::ExecutorCli;
use sortbench::cli::parse_or_exit;
use sortbench::config::ExecutorConfig;
use sortbench::executor::RunOutcome;
use sortbench::executor::SortExecutor;
use sortbench::logging::setup_tracing;

fn main() -> Result<()> {
  let _guard = setup_tracing()?;

  let cli: ExecutorCli = parse_or_exit();
  let main_span = tracing::info_span!("executor");
  let _enter = main_span.enter();

  let config = ExecutorConfig::try_from(cli).context("Invalid configuration")?;
  tracing::debug!(?config, "Configuration resolved");
  tracing::info!(algorithm = %config.algorithm, "Benchmarking {}", config.input.display());

  let executor = SortExecutor::<i64>::new(config.algorithm.strategy()).with_format(config.format);

  match executor.execute(&config.input, &config.output) {
    RunOutcome::Skipped => {
      tracing::info!("No record written");
    }
    RunOutcome::Completed(run) => {
      println!("Time taken: {}s", run.record.elapsed_secs());
    }
  }

  Ok(())
}
