//! Lexicographic enumeration of `k`-subsets of `0..n`.
//!
//! The order matches the recursive "choose with increasing start index"
//! enumeration. The subset search relies on it to break ties.

use std::iter::FusedIterator;

/// Iterator over every `k`-combination of `0..n`, as ascending index vectors,
/// in lexicographic order.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            exhausted: k > n,
        }
    }

    /// Advance `indices` to the next combination, or report exhaustion.
    fn advance(&mut self) -> bool {
        let k = self.indices.len();
        // rightmost slot that has not reached its ceiling `n - k + slot`
        let Some(slot) =
            (0..k).rev().find(|&slot| self.indices[slot] < self.n - k + slot)
        else {
            return false;
        };

        self.indices[slot] += 1;
        for next in slot + 1..k {
            self.indices[next] = self.indices[next - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        if !self.started {
            self.started = true;
        } else if !self.advance() {
            self.exhausted = true;
            return None;
        }

        Some(self.indices.clone())
    }
}

impl FusedIterator for Combinations {}

/// `C(n, k)`, or `None` if an intermediate product overflows a `usize`.
pub fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    (0..k).try_fold(1usize, |acc, i| {
        // exact at every step: acc * (n - i) is divisible by (i + 1)
        acc.checked_mul(n - i).map(|product| product / (i + 1))
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use test_strategy::proptest;

    use super::*;

    /// Recursive reference enumeration.
    fn recursive(n: usize, k: usize) -> Vec<Vec<usize>> {
        fn helper(
            n: usize,
            k: usize,
            start: usize,
            current: &mut Vec<usize>,
            result: &mut Vec<Vec<usize>>,
        ) {
            if current.len() == k {
                result.push(current.clone());
                return;
            }
            for idx in start..n {
                current.push(idx);
                helper(n, k, idx + 1, current, result);
                current.pop();
            }
        }

        let mut result = Vec::new();
        let mut current = Vec::new();
        helper(n, k, 0, &mut current, &mut result);
        result
    }

    #[test]
    fn four_choose_three_in_order() {
        let combos: Vec<_> = Combinations::new(4, 3).collect();
        assert_eq!(
            combos,
            vec![vec![0, 1, 2], vec![0, 1, 3], vec![0, 2, 3], vec![1, 2, 3]]
        );
    }

    #[test]
    fn choose_all_yields_single_combination() {
        let combos: Vec<_> = Combinations::new(3, 3).collect();
        assert_eq!(combos, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn choose_zero_yields_empty_combination() {
        let combos: Vec<_> = Combinations::new(5, 0).collect();
        assert_eq!(combos, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn oversized_subset_yields_nothing() {
        assert_eq!(Combinations::new(2, 3).count(), 0);
        assert_eq!(Combinations::new(0, 1).count(), 0);
    }

    #[test]
    fn iterator_is_fused() {
        let mut combos = Combinations::new(2, 2);
        assert_eq!(combos.next(), Some(vec![0, 1]));
        assert_eq!(combos.next(), None);
        assert_eq!(combos.next(), None);
    }

    #[test]
    fn binomial_values() {
        assert_eq!(binomial(4, 3), Some(4));
        assert_eq!(binomial(10, 5), Some(252));
        assert_eq!(binomial(5, 0), Some(1));
        assert_eq!(binomial(3, 4), Some(0));
        assert_eq!(binomial(usize::MAX, 3), None);
    }

    #[proptest(cases = 64)]
    fn matches_recursive_enumeration(
        #[strategy(0usize..10)] n: usize,
        #[strategy(0usize..=#n)] k: usize,
    ) {
        let iterative: Vec<_> = Combinations::new(n, k).collect();
        prop_assert_eq!(iterative.len(), binomial(n, k).unwrap());
        prop_assert_eq!(iterative, recursive(n, k));
    }
}
