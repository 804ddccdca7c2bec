/// Iterator over C(n,5): every way of choosing five of `n` indices,
/// in lexicographic order.
pub struct FiveCardCombinations {
    n: usize,
    indices: [usize; 5],
    done: bool,
}

impl FiveCardCombinations {
    pub fn new(n: usize) -> Self {
        Self { n, indices: [0, 1, 2, 3, 4], done: n < 5 }
    }
}

impl Iterator for FiveCardCombinations {
    type Item = [usize; 5];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.indices;

        // Find rightmost index that can be incremented
        match (0..5).rev().find(|&i| self.indices[i] < self.n - (5 - i)) {
            Some(i) => {
                self.indices[i] += 1;
                // Reset all indices to the right
                for j in (i + 1)..5 {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(result)
    }
}

/// Number of five-card subsets of `n` cards.
pub fn count(n: usize) -> usize {
    if n < 5 {
        return 0;
    }
    (0..5).fold(1, |acc, i| acc * (n - i) / (i + 1))
}
