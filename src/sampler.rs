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
use crate::error::SamplerError;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Draws values from `[0, max_value)` without replacement.
///
/// The pool starts as every value in range. Each draw picks a uniform index,
/// returns the value there and swap-removes it, so a draw is O(1) and the pool
/// itself keeps no particular order.
#[derive(Debug, Clone)]
pub struct NonRepeatingSampler {
  rng: StdRng,
  pool: Vec<u32>,
}

impl NonRepeatingSampler {
  pub fn new(seed: u64, max_value: u32) -> Self {
    NonRepeatingSampler {
      rng: StdRng::seed_from_u64(seed),
      pool: (0..max_value).collect(),
    }
  }

  /// Draws the next value, or [`SamplerError::Exhausted`] once every value
  /// in range has been emitted.
  pub fn sample(&mut self) -> Result<u32, SamplerError> {
    if self.pool.is_empty() {
      return Err(SamplerError::Exhausted);
    }

    let index = self.rng.random_range(0..self.pool.len());
    Ok(self.pool.swap_remove(index))
  }

  /// Number of values that can still be drawn.
  pub fn remaining(&self) -> usize {
    self.pool.len()
  }
}

impl Iterator for NonRepeatingSampler {
  type Item = u32;

  fn next(&mut self) -> Option<u32> {
    self.sample().ok()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.pool.len(), Some(self.pool.len()))
  }
}
