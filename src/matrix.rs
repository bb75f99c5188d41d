//! Dense Matrix Storage and Arithmetic.
#![allow(clippy::needless_range_loop)] // Matrix algorithms use explicit indexing
//!
//! A row-major matrix of `f64` backed by a flat vector, sized for the
//! small systems the elimination and factorization routines operate on.
//! Routines never mutate caller-owned matrices: working copies are taken
//! per call and fresh outputs are returned.

use serde::{Deserialize, Serialize};

use crate::error::{SolveError, SolveResult};

/// A dense matrix backed by a flat row-major vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
    /// Flat row-major storage
    pub data: Vec<f64>,
}

impl Matrix {
    /// Create a matrix of the given size, initialized to zero
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Create the identity matrix of size `n`
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Create a matrix from row slices; all rows must have equal length
    pub fn from_rows(rows: &[Vec<f64>]) -> SolveResult<Self> {
        let n = rows.len();
        let m = rows.first().map_or(0, |r| r.len());

        for row in rows {
            if row.len() != m {
                return Err(SolveError::Shape(format!(
                    "ragged rows: expected {} columns, found {}",
                    m,
                    row.len()
                )));
            }
        }

        Ok(Self {
            rows: n,
            cols: m,
            data: rows.iter().flat_map(|r| r.iter().copied()).collect(),
        })
    }

    /// Create a matrix from flat row-major data
    pub fn from_vec(data: Vec<f64>, rows: usize, cols: usize) -> SolveResult<Self> {
        if data.len() != rows * cols {
            return Err(SolveError::DimensionMismatch {
                expected: rows * cols,
                got: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Create an `n x 1` column vector from a slice
    pub fn column_vector(values: &[f64]) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            data: values.to_vec(),
        }
    }

    /// Create a matrix with entries drawn uniformly from `[min, max)`
    pub fn random_uniform(rows: usize, cols: usize, min: f64, max: f64) -> Self {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        let data = (0..rows * cols).map(|_| rng.gen_range(min..max)).collect();
        Self { rows, cols, data }
    }

    /// Element at `(row, col)`
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Mutable reference to the element at `(row, col)`
    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut f64 {
        &mut self.data[row * self.cols + col]
    }

    /// Set the element at `(row, col)`
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// Row `r` as a slice
    pub fn row(&self, r: usize) -> &[f64] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Column `c` as an owned vector
    pub fn col(&self, c: usize) -> Vec<f64> {
        (0..self.rows).map(|r| self.at(r, c)).collect()
    }

    /// Swap rows `i` and `j` in place
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for k in 0..self.cols {
            self.data.swap(i * self.cols + k, j * self.cols + k);
        }
    }

    /// Swap columns `i` and `j` in place
    pub fn swap_cols(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for r in 0..self.rows {
            self.data.swap(r * self.cols + i, r * self.cols + j);
        }
    }

    /// Concatenate `other` to the right of `self`; row counts must match
    pub fn hstack(&self, other: &Matrix) -> SolveResult<Matrix> {
        if self.rows != other.rows {
            return Err(SolveError::DimensionMismatch {
                expected: self.rows,
                got: other.rows,
            });
        }

        let cols = self.cols + other.cols;
        let mut out = Matrix::zeros(self.rows, cols);
        for r in 0..self.rows {
            out.data[r * cols..r * cols + self.cols].copy_from_slice(self.row(r));
            out.data[r * cols + self.cols..(r + 1) * cols].copy_from_slice(other.row(r));
        }
        Ok(out)
    }

    /// Transpose
    pub fn transpose(&self) -> Matrix {
        let mut out = Matrix::zeros(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                out.set(c, r, self.at(r, c));
            }
        }
        out
    }

    /// Matrix product `self * other`
    pub fn matmul(&self, other: &Matrix) -> SolveResult<Matrix> {
        if self.cols != other.rows {
            return Err(SolveError::DimensionMismatch {
                expected: self.cols,
                got: other.rows,
            });
        }

        let mut out = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let aik = self.at(i, k);
                if aik == 0.0 {
                    continue;
                }
                for j in 0..other.cols {
                    *out.at_mut(i, j) += aik * other.at(k, j);
                }
            }
        }
        Ok(out)
    }

    /// Matrix-vector product `self * vec`
    pub fn mul_vec(&self, vec: &[f64]) -> SolveResult<Vec<f64>> {
        if self.cols != vec.len() {
            return Err(SolveError::DimensionMismatch {
                expected: self.cols,
                got: vec.len(),
            });
        }

        let mut out = vec![0.0; self.rows];
        for i in 0..self.rows {
            for j in 0..self.cols {
                out[i] += self.at(i, j) * vec[j];
            }
        }
        Ok(out)
    }

    /// Element-wise difference `self - other`
    pub fn sub(&self, other: &Matrix) -> SolveResult<Matrix> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(SolveError::DimensionMismatch {
                expected: self.rows * self.cols,
                got: other.rows * other.cols,
            });
        }

        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| a - b)
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Multiply every entry by a scalar
    pub fn scale(&self, scalar: f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| x * scalar).collect(),
        }
    }

    /// Frobenius norm
    pub fn norm_fro(&self) -> f64 {
        self.data.iter().map(|&x| x * x).sum::<f64>().sqrt()
    }

    /// Largest entry magnitude
    pub fn norm_max(&self) -> f64 {
        self.data.iter().fold(0.0, |acc, &x| acc.max(x.abs()))
    }

    /// Whether the matrix is square
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Whether the matrix has no entries
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

/// Infinity norm of the difference of two equal-length vectors
pub fn inf_norm_diff(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .fold(0.0, |acc, (&x, &y)| acc.max((x - y).abs()))
}

/// Euclidean norm of a vector
pub fn euclidean_norm(v: &[f64]) -> f64 {
    v.iter().map(|&x| x * x).sum::<f64>().sqrt()
}
