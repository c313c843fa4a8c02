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
use crate::insertion::InsertionSort;
use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// A sorting algorithm that can be bound to a [`SortExecutor`](crate::executor::SortExecutor).
///
/// Implementations reorder `data` into ascending order in place and have no
/// other side effects. Stability is not required.
pub trait SortStrategy<T> {
  /// Sorts `data` ascending, in place.
  fn sort(&self, data: &mut [T]);

  /// Human-readable name, used only for reporting. Never empty.
  fn name(&self) -> &'static str;
}

/// Baseline strategy backed by the standard library's stable sort.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdSort;

impl<T: Ord> SortStrategy<T> for StdSort {
  fn sort(&self, data: &mut [T]) {
    data.sort();
  }

  fn name(&self) -> &'static str {
    "Standard Library Sort"
  }
}

/// The closed set of strategies selectable from the command line or settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
  #[default]
  Insertion,
  Std,
}

impl Algorithm {
  /// Builds the strategy handle an executor will own.
  pub fn strategy<T: Ord + Copy + 'static>(self) -> Box<dyn SortStrategy<T>> {
    match self {
      Algorithm::Insertion => Box::new(InsertionSort),
      Algorithm::Std => Box::new(StdSort),
    }
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Algorithm::Insertion => f.write_str("insertion"),
      Algorithm::Std => f.write_str("std"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_algorithm_builds_named_strategy() {
    let insertion = Algorithm::Insertion.strategy::<i64>();
    assert_eq!(insertion.name(), "Insertion Sort");

    let std = Algorithm::Std.strategy::<i64>();
    assert_eq!(std.name(), "Standard Library Sort");
  }

  #[test]
  fn test_std_sort_through_trait_object() {
    let strategy: Box<dyn SortStrategy<i64>> = Box::new(StdSort);
    let mut data = vec![9, -1, 4, 4, 0];
    strategy.sort(&mut data);
    assert_eq!(data, vec![-1, 0, 4, 4, 9]);
  }

  #[test]
  fn test_algorithm_display_matches_cli_names() {
    for algorithm in Algorithm::value_variants() {
      let name = algorithm.to_string();
      assert_eq!(Algorithm::from_str(&name, false).unwrap(), *algorithm);
    }
  }

  #[test]
  fn test_algorithm_names_round_trip_through_serde() {
    let json = serde_json::to_string(&Algorithm::Std).unwrap();
    assert_eq!(json, r#""std""#);
    let parsed: Algorithm = serde_json::from_str(r#""insertion""#).unwrap();
    assert_eq!(parsed, Algorithm::Insertion);
  }
}
