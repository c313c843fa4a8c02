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
use crate::strategy::SortStrategy;

/// Classic in-place insertion sort.
///
/// O(n²) comparisons and moves in the worst case, O(1) extra space. Elements
/// are only shifted past a key when strictly greater than it, so equal keys
/// keep their relative order and sorted input is left untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct InsertionSort;

impl<T: Ord + Copy> SortStrategy<T> for InsertionSort {
  fn sort(&self, data: &mut [T]) {
    for i in 1..data.len() {
      let key = data[i];
      let mut j = i;

      while j > 0 && data[j - 1] > key {
        data[j] = data[j - 1];
        j -= 1;
      }
      data[j] = key;
    }
  }

  fn name(&self) -> &'static str {
    "Insertion Sort"
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::Rng;
  use rand::SeedableRng;
  use rand::rngs::StdRng;

  fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
  }

  fn sorted(mut data: Vec<i64>) -> Vec<i64> {
    InsertionSort.sort(&mut data);
    data
  }

  #[test]
  fn test_edge_cases() {
    assert_eq!(sorted(vec![]), Vec::<i64>::new());
    assert_eq!(sorted(vec![42]), vec![42]);
    assert_eq!(sorted(vec![5, 3]), vec![3, 5]);
    assert_eq!(sorted(vec![7; 16]), vec![7; 16]);
    assert_eq!(sorted((0..100).rev().collect()), (0..100).collect::<Vec<i64>>());
  }

  #[test]
  fn test_random_input_becomes_sorted_permutation() {
    let mut rng = StdRng::seed_from_u64(12345);
    for _ in 0..20 {
      let len = rng.random_range(0..300);
      let input: Vec<i64> = (0..len).map(|_| rng.random_range(-500..500)).collect();

      let mut expected = input.clone();
      expected.sort();

      let output = sorted(input);
      assert!(is_sorted(&output));
      assert_eq!(output, expected);
    }
  }

  #[test]
  fn test_sorting_is_idempotent() {
    let once = sorted(vec![8, 1, 9, 1, -3, 0]);
    let twice = sorted(once.clone());
    assert_eq!(once, twice);
  }

  /// Orders by `key` only, so the tag exposes any reordering of equal keys.
  #[derive(Debug, Clone, Copy, PartialEq, Eq)]
  struct Tagged {
    key: u8,
    tag: u8,
  }

  impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
      Some(self.cmp(other))
    }
  }

  impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
      self.key.cmp(&other.key)
    }
  }

  #[test]
  fn test_equal_keys_keep_relative_order() {
    let mut data = vec![
      Tagged { key: 2, tag: 0 },
      Tagged { key: 1, tag: 1 },
      Tagged { key: 2, tag: 2 },
      Tagged { key: 1, tag: 3 },
    ];
    InsertionSort.sort(&mut data);

    let tags: Vec<u8> = data.iter().map(|t| t.tag).collect();
    assert_eq!(tags, vec![1, 3, 0, 2]);
  }

  #[test]
  fn test_sorted_input_is_unchanged() {
    // All keys equal: any move under a non-strict comparison would shuffle tags.
    let original: Vec<Tagged> = (0..10).map(|tag| Tagged { key: 4, tag }).collect();
    let mut data = original.clone();
    InsertionSort.sort(&mut data);
    assert_eq!(
      data.iter().map(|t| t.tag).collect::<Vec<_>>(),
      original.iter().map(|t| t.tag).collect::<Vec<_>>()
    );
  }
}
