//! Dense row-major feature matrix
//!
//! One row per sentence, one column per vocabulary term. A summarization
//! call's matrix is small and K-Means needs random row access, so a dense
//! layout beats a sparse map here.

/// Dense row-major matrix of non-negative feature weights.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    n_rows: usize,
    n_cols: usize,
    data: Vec<f64>,
}

impl FeatureMatrix {
    /// Create a zero-filled matrix.
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            data: vec![0.0; n_rows * n_cols],
        }
    }

    /// Number of rows (sentences).
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns (vocabulary terms).
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Borrow row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_rows`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n_cols..(i + 1) * self.n_cols]
    }

    /// Mutably borrow row `i` as a slice.
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i * self.n_cols..(i + 1) * self.n_cols]
    }

    /// Read the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.n_cols + col]
    }

    /// Write the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.n_cols + col] = value;
    }

    /// Scale every row to unit Euclidean norm.
    ///
    /// All-zero rows stay all-zero; they are a valid state, not an error.
    pub fn l2_normalize_rows(&mut self) {
        for i in 0..self.n_rows {
            let row = self.row_mut(i);
            let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
            if norm > 0.0 {
                for value in row {
                    *value /= norm;
                }
            }
        }
    }
}

/// Squared Euclidean distance between two equal-length vectors.
pub(crate) fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}
