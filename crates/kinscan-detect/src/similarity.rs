//! Fuzzy string similarity.
//!
//! The default scorer is the indel ratio: `2 * LCS / (len(a) + len(b))` scaled
//! to 0..=100 and rounded half up, computed over chars. Substituting one
//! character costs a deletion plus an insertion, so "Smith"/"Smyth" scores 80.

/// Symmetric similarity score in `0..=100`.
///
/// Implementations must return 100 for identical non-empty input and 0 when
/// either side is empty.
pub trait SimilarityScorer {
    fn score(&self, a: &str, b: &str) -> u8;
}

/// Case-sensitive indel-distance ratio.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndelRatio;

impl SimilarityScorer for IndelRatio {
    fn score(&self, a: &str, b: &str) -> u8 {
        ratio(a, b)
    }
}

/// Indel-distance ratio of `a` and `b`, see module docs.
pub fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let common = lcs_len(&a, &b);
    ((200 * common + total / 2) / total) as u8
}

/// Longest common subsequence length, two-row DP.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
