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

//! # Sortbench
//!
//! `sortbench` times in-place sorting strategies over integer datasets read
//! from disk and appends one record per run to a results log. A companion
//! generator writes datasets of distinct random values in the format the
//! executor reads.
//!
//! This crate backs the `sortbench` and `gen-sortable` binaries, but its
//! modules can be used on their own.
//!
//! ## Core Modules
//!
//! * [`strategy`]: The `SortStrategy` trait and the `Algorithm` selector.
//! * [`insertion`]: The `InsertionSort` strategy.
//! * [`dataset`]: Reads blank-line-terminated integer lists.
//! * [`record`]: The `BenchmarkRecord` and the append-only results log.
//! * [`executor`]: `SortExecutor`, which drives load, timed sort, and report.
//! * [`sampler`]: Sampling without replacement from `[0, max)`.
//! * [`generator`]: Writes sampled datasets to disk.
//! * [`cli`]: Defines the `clap`-based command-line interfaces.
//! * [`config`]: Resolves settings and validates CLI arguments.
//! * [`error`]: Defines the custom error types for the library.
//! * [`logging`]: Provides the `setup_tracing` utility.

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod executor;
pub mod generator;
pub mod insertion;
pub mod logging;
pub mod record;
pub mod sampler;
pub mod strategy;
