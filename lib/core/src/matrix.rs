//! Dense pairwise similarity matrix.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::tfidf::DocVector;

/// Dense N×N cosine similarity matrix, row-major.
///
/// Symmetric, values in `[0, 1]`, diagonal exactly `1.0` for records
/// with non-empty normalized text and `0.0` for the zero-vector edge
/// case. Built once by the indexer and read-only afterwards.
///
/// The full pairwise computation is O(N²·K) time and O(N²) space.
/// That is a deliberate ceiling: the catalog is thousands of records,
/// and exact dense similarity is cheaper than maintaining an
/// approximate index at this scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    dim: usize,
    data: Vec<f32>,
}

impl SimilarityMatrix {
    /// Compute the full pairwise matrix from L2-normalized rows.
    ///
    /// Rows are computed in parallel. Each pair is evaluated in both
    /// row contexts with an identical merge-join summation order, so
    /// `get(i, j)` and `get(j, i)` are bit-identical.
    #[must_use]
    pub fn from_doc_vectors(rows: &[DocVector]) -> Self {
        let dim = rows.len();
        let data: Vec<f32> = rows
            .par_iter()
            .enumerate()
            .flat_map_iter(|(i, a)| {
                rows.iter().enumerate().map(move |(j, b)| {
                    if i == j {
                        if a.is_zero() {
                            0.0
                        } else {
                            1.0
                        }
                    } else {
                        a.dot(b).clamp(0.0, 1.0)
                    }
                })
            })
            .collect();

        Self { dim, data }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.data[i * self.dim + j]
    }

    /// Similarity of row `i` against every row, in row order.
    #[inline]
    #[must_use]
    pub fn row(&self, i: usize) -> &[f32] {
        &self.data[i * self.dim..(i + 1) * self.dim]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tfidf::TfidfVectorizer;

    fn matrix(docs: &[&str]) -> SimilarityMatrix {
        let rows = TfidfVectorizer::new().fit_transform(docs);
        SimilarityMatrix::from_doc_vectors(&rows)
    }

    #[test]
    fn test_symmetry() {
        let m = matrix(&[
            "action car chase thief",
            "action car chase diamond",
            "romance wedding love",
            "action heist crew",
        ]);
        for i in 0..m.dim() {
            for j in 0..m.dim() {
                assert_eq!(m.get(i, j), m.get(j, i));
            }
        }
    }

    #[test]
    fn test_self_similarity_is_one() {
        let m = matrix(&["action car", "romance wedding", "heist crew"]);
        for i in 0..m.dim() {
            assert_eq!(m.get(i, i), 1.0);
        }
    }

    #[test]
    fn test_zero_vector_diagonal() {
        // Normalization can leave a record with no features; its
        // self-similarity is the documented 0.0, not 1.0.
        let m = matrix(&["action car", ""]);
        assert_eq!(m.get(1, 1), 0.0);
        assert_eq!(m.get(0, 1), 0.0);
    }

    #[test]
    fn test_scores_in_unit_range() {
        let m = matrix(&["action car chase", "action car chase", "romance"]);
        for i in 0..m.dim() {
            for j in 0..m.dim() {
                let s = m.get(i, j);
                assert!((0.0..=1.0).contains(&s));
            }
        }
    }

    #[test]
    fn test_row_matches_get() {
        let m = matrix(&["action car", "car chase", "romance"]);
        let row = m.row(1);
        assert_eq!(row.len(), m.dim());
        for (j, &s) in row.iter().enumerate() {
            assert_eq!(s, m.get(1, j));
        }
    }
}
