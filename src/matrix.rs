//! Flat row-major matrix storage.
//!
//! The kernels in this crate operate on plain `&[f32]` buffers with explicit
//! dimensions, exactly as they receive them from a campaign driver that owns
//! the storage. [`Matrix`] is a convenience owner for hosts of those kernels
//! (the demo binary, benches and tests): a `Vec<f32>` plus its logical shape,
//! with the zero/randomize helpers every experiment iteration needs.
//!
//! Element (i, j) of an `rows × cols` matrix lives at index `i * cols + j`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// An owned row-major f32 matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// Creates a zero-filled `rows × cols` matrix.
    pub fn zeroed(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Wraps an existing row-major buffer.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "buffer length {} does not match {}x{} matrix",
            data.len(),
            rows,
            cols
        );
        Matrix { rows, cols, data }
    }

    /// Creates a matrix filled with uniform random values in `-1.0..1.0`,
    /// reproducible from the given seed.
    pub fn random(rows: usize, cols: usize, seed: u64) -> Self {
        let mut m = Self::zeroed(rows, cols);
        m.randomize(&mut StdRng::seed_from_u64(seed));
        m
    }

    /// Refills the matrix with uniform random values in `-1.0..1.0`.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for value in self.data.iter_mut() {
            *value = rng.random_range(-1.0..1.0);
        }
    }

    /// Resets every element to zero, keeping the allocation.
    ///
    /// C is accumulated into by every kernel, so callers must zero it before
    /// each fresh multiply.
    pub fn fill_zero(&mut self) {
        self.data.fill(0.0);
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element at (row, col).
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col]
    }

    /// Sets the element at (row, col).
    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col] = value;
    }

    /// The underlying row-major buffer.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// The underlying row-major buffer, mutable.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_shape_and_contents() {
        let m = Matrix::zeroed(3, 5);
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 5);
        assert!(m.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_row_major_indexing() {
        let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(0, 2), 3.0);
        assert_eq!(m.get(1, 0), 4.0);
        assert_eq!(m.get(1, 2), 6.0);
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn test_from_vec_rejects_bad_length() {
        Matrix::from_vec(2, 3, vec![0.0; 5]);
    }

    #[test]
    fn test_random_is_seeded() {
        let a = Matrix::random(4, 4, 42);
        let b = Matrix::random(4, 4, 42);
        assert_eq!(a, b);
        assert!(a.as_slice().iter().all(|&x| (-1.0..1.0).contains(&x)));
    }

    #[test]
    fn test_fill_zero_resets() {
        let mut m = Matrix::random(2, 2, 7);
        m.fill_zero();
        assert!(m.as_slice().iter().all(|&x| x == 0.0));
    }
}
