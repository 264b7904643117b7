//! Lazy combinatorial iterators: combinations, combinations-with-replacement, and
//! permutations. Hand-rolled because no combinatorics crate appears anywhere in the
//! retrieval pack; the lazy, pull-based style mirrors the teacher's `ConfigIterator`
//! (`src/config.rs`): an `Option<state>` that turns to `None` once exhausted.

/// The number of ways to choose `k` items from `n`, saturating at `u128::MAX`.
pub fn binomial(n: u128, k: u128) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        result = result.saturating_mul(n - i) / (i + 1);
    }
    result
}

/// Lazily yields every `k`-combination of `items`, in lexicographic index order.
pub struct Combinations<T> {
    items: Vec<T>,
    k: usize,
    indices: Option<Vec<usize>>,
}

impl<T: Clone> Combinations<T> {
    /// Construct a combinations iterator. Yields nothing if `k > items.len()`.
    pub fn new(items: Vec<T>, k: usize) -> Self {
        let n = items.len();
        let indices = if k > n { None } else { Some((0..k).collect()) };
        Self { items, k, indices }
    }
}

impl<T: Clone> Iterator for Combinations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let indices = self.indices.take()?;
        let result = indices.iter().map(|&i| self.items[i].clone()).collect();

        let n = self.items.len();
        let k = self.k;
        let mut next = indices;
        let mut advanced = false;
        let mut i = k;
        while i > 0 {
            i -= 1;
            if next[i] != i + n - k {
                next[i] += 1;
                for j in (i + 1)..k {
                    next[j] = next[j - 1] + 1;
                }
                advanced = true;
                break;
            }
        }
        if advanced {
            self.indices = Some(next);
        }
        Some(result)
    }
}

/// Lazily yields every `k`-combination-with-replacement of `items`, in lexicographic order.
pub struct CombinationsWithReplacement<T> {
    items: Vec<T>,
    k: usize,
    indices: Option<Vec<usize>>,
}

impl<T: Clone> CombinationsWithReplacement<T> {
    /// Construct the iterator. Yields nothing if `items` is empty and `k > 0`.
    pub fn new(items: Vec<T>, k: usize) -> Self {
        let n = items.len();
        let indices = if n == 0 && k > 0 { None } else { Some(vec![0; k]) };
        Self { items, k, indices }
    }
}

impl<T: Clone> Iterator for CombinationsWithReplacement<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let indices = self.indices.take()?;
        let result = indices.iter().map(|&i| self.items[i].clone()).collect();

        let n = self.items.len();
        let k = self.k;
        let mut next = indices;
        let mut advanced = false;
        let mut i = k;
        while i > 0 {
            i -= 1;
            if next[i] != n - 1 {
                next[i] += 1;
                for j in (i + 1)..k {
                    next[j] = next[i];
                }
                advanced = true;
                break;
            }
        }
        if advanced {
            self.indices = Some(next);
        }
        Some(result)
    }
}

/// Lazily yields every permutation of `items`, in lexicographic index order.
pub struct Permutations<T> {
    items: Vec<T>,
    indices: Option<Vec<usize>>,
}

impl<T: Clone> Permutations<T> {
    /// Construct a permutations iterator over all orderings of `items`.
    pub fn new(items: Vec<T>) -> Self {
        let n = items.len();
        let indices = Some((0..n).collect());
        Self { items, indices }
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let indices = self.indices.take()?;
        let result = indices.iter().map(|&i| self.items[i].clone()).collect();

        let mut next = indices;
        let n = next.len();
        if n < 2 {
            return Some(result);
        }

        let mut i = n - 1;
        while i > 0 && next[i - 1] >= next[i] {
            i -= 1;
        }
        if i == 0 {
            return Some(result);
        }
        let pivot = i - 1;
        let mut j = n - 1;
        while next[j] <= next[pivot] {
            j -= 1;
        }
        next.swap(pivot, j);
        next[(pivot + 1)..].reverse();
        self.indices = Some(next);
        Some(result)
    }
}

#[cfg(test)]
#[path = "unit_tests/combinatorics.rs"]
mod tests;
