use std::ops::Mul;

use crate::*;

/// The alternating cofactor sign, `(-1)^k`.
fn sign<T: Scalar>(k: usize) -> T {
  if k % 2 == 0 {
    T::one()
  } else {
    -T::one()
  }
}

impl<T: Scalar> Matrix<T> {
  pub(crate) fn check_square(&self) -> Result<(), MatrixError> {
    if !self.size().is_square() {
      return Err(MatrixError::NotSquare { size: self.size() });
    }
    Ok(())
  }

  /// Determinant by Laplace expansion along row zero.
  ///
  /// The 1x1 and 2x2 cases terminate the recursion; everything larger
  /// expands into sign-alternated products of first-row entries and their
  /// minors' determinants. O(n!), acceptable only for small matrices.
  pub fn determinant(&self) -> Result<T, MatrixError> {
    self.check_square()?;
    match self.rows() {
      1 => self.value(0, 0),
      2 => {
        Ok(self.value(0, 0)? * self.value(1, 1)? - self.value(0, 1)? * self.value(1, 0)?)
      }
      n => {
        let mut det = T::zero();
        for column in 0..n {
          let minor = self.minor_matrix(0, column)?;
          det += sign::<T>(column) * self.value(0, column)? * minor.determinant()?;
        }
        Ok(det)
      }
    }
  }

  /// Matrix of cofactors, `sign(i) * sign(j) * det(minor(i, j))`.
  ///
  /// The minor of a 1x1 matrix is empty and its determinant is taken as
  /// one, so the cofactor matrix of `[a]` is the 1x1 identity. That keeps
  /// adjugate and inverse defined for every order.
  pub fn cofactor_matrix(&self) -> Result<Self, MatrixError> {
    self.check_square()?;
    let mut result = Self::with_size(self.size());
    if self.rows() == 1 {
      result.put_cell(0, 0, Some(T::one()));
      return Ok(result);
    }
    for row in 0..self.rows() {
      for column in 0..self.columns() {
        let minor = self.minor_matrix(row, column)?;
        let cofactor = sign::<T>(row) * sign::<T>(column) * minor.determinant()?;
        result.put_cell(row, column, Some(cofactor));
      }
    }
    Ok(result)
  }

  /// Result row i is source column i. Unset cells stay unset.
  pub fn transpose(&self) -> Self {
    let mut result = Self::with_size(self.size().transposed());
    for row in 0..self.rows() {
      for column in 0..self.columns() {
        result.put_cell(column, row, self.cell(row, column));
      }
    }
    result
  }

  /// The transposed cofactor matrix.
  pub fn adjugate(&self) -> Result<Self, MatrixError> {
    Ok(self.cofactor_matrix()?.transpose())
  }

  /// `adjugate * (1 / determinant)`. Fails with `SingularMatrix` when the
  /// determinant is zero instead of propagating a non-finite scale factor.
  pub fn inverse(&self) -> Result<Self, MatrixError> {
    let det = self.determinant()?;
    if det == T::zero() {
      return Err(MatrixError::SingularMatrix);
    }
    Ok(self.adjugate()?.scale(T::one() / det))
  }

  /// Sum of the main diagonal.
  pub fn trace(&self) -> Result<T, MatrixError> {
    self.check_square()?;
    let mut trace = T::zero();
    for index in 0..self.rows() {
      trace += self.value(index, index)?;
    }
    Ok(trace)
  }

  /// Element-wise sum. Fails with `SizeMismatch` on shape disagreement.
  pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
    self.zip(other, |a, b| a + b)
  }

  /// Element-wise difference. Same shape contract as [`Matrix::add`].
  pub fn subtract(&self, other: &Self) -> Result<Self, MatrixError> {
    self.zip(other, |a, b| a - b)
  }

  fn zip(&self, other: &Self, f: impl Fn(T, T) -> T) -> Result<Self, MatrixError> {
    if self.size() != other.size() {
      return Err(MatrixError::SizeMismatch {
        left: self.size(),
        right: other.size(),
      });
    }
    let mut result = Self::with_size(self.size());
    for row in 0..self.rows() {
      for column in 0..self.columns() {
        let value = f(self.value(row, column)?, other.value(row, column)?);
        result.put_cell(row, column, Some(value));
      }
    }
    Ok(result)
  }

  /// Element-wise multiplication by a scalar. Never fails; unset cells
  /// stay unset.
  pub fn scale(&self, factor: T) -> Self {
    let mut result = Self::with_size(self.size());
    for row in 0..self.rows() {
      for column in 0..self.columns() {
        result.put_cell(row, column, self.cell(row, column).map(|v| v * factor));
      }
    }
    result
  }

  /// Standard matrix product, row by column dot products over the shared
  /// dimension. Fails with `IncompatibleDimensions` unless left columns
  /// equal right rows.
  pub fn multiply(&self, other: &Self) -> Result<Self, MatrixError> {
    if self.columns() != other.rows() {
      return Err(MatrixError::IncompatibleDimensions {
        left: self.size(),
        right: other.size(),
      });
    }
    let size = MatrixSize::new(self.rows(), other.columns())?;
    let mut result = Self::with_size(size);
    for row in 0..self.rows() {
      for column in 0..other.columns() {
        let mut value = T::zero();
        for shared in 0..self.columns() {
          value += self.value(row, shared)? * other.value(shared, column)?;
        }
        result.put_cell(row, column, Some(value));
      }
    }
    Ok(result)
  }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
  type Output = Matrix<T>;

  fn mul(self, factor: T) -> Matrix<T> {
    self.scale(factor)
  }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
  type Output = Matrix<T>;

  fn mul(self, factor: T) -> Matrix<T> {
    self.scale(factor)
  }
}

#[test]
fn determinant_and_inverse_match_cgmath() {
  use cgmath::SquareMatrix;

  // cgmath's Matrix3::new takes columns
  let cg: cgmath::Matrix3<f64> = cgmath::Matrix3::new(1., 0., 1., 2., 4., 0., 3., 5., 6.);
  let cg_inverse = cg.invert().unwrap();

  let m = Matrix::from_rows(vec![
    vec![1., 2., 3.],
    vec![0., 4., 5.],
    vec![1., 0., 6.],
  ])
  .unwrap();

  assert_eq!(m.determinant().unwrap(), cg.determinant());

  let inverse = m.inverse().unwrap();
  for row in 0..3 {
    for column in 0..3 {
      let ours = inverse.value(row, column).unwrap();
      let theirs = cg_inverse[column][row];
      assert!((ours - theirs).abs() < 1e-12);
    }
  }
}
