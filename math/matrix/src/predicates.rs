use crate::*;

impl<T: Scalar> Matrix<T> {
  /// Element-wise comparison within a relative tolerance,
  /// `|a - b| <= epsilon * max(1, |a|, |b|)` per cell. Sizes must match
  /// and unset cells only compare equal to unset cells.
  ///
  /// This is the comparison the symmetry and orthogonality checks use,
  /// since determinant/inverse chains accumulate rounding error that the
  /// exact `PartialEq` would reject.
  pub fn approx_eq_eps(&self, other: &Self, epsilon: T) -> bool {
    if self.size() != other.size() {
      return false;
    }
    for row in 0..self.rows() {
      for column in 0..self.columns() {
        match (self.cell(row, column), other.cell(row, column)) {
          (None, None) => {}
          (Some(a), Some(b)) => {
            let magnitude = T::one().max(a.abs()).max(b.abs());
            if (a - b).abs() > epsilon * magnitude {
              return false;
            }
          }
          _ => return false,
        }
      }
    }
    true
  }

  /// [`Matrix::approx_eq_eps`] with the default tolerance,
  /// `T::epsilon().sqrt()`.
  pub fn approx_eq(&self, other: &Self) -> bool {
    self.approx_eq_eps(other, T::epsilon().sqrt())
  }

  /// A matrix that equals its own transpose, within the default
  /// tolerance. Trivially false for non-square shapes.
  pub fn is_symmetric(&self) -> bool {
    self.transpose().approx_eq(self)
  }

  /// A matrix whose transpose is its inverse, within the default
  /// tolerance. A singular or non-square matrix is reported as not
  /// orthogonal rather than as an error; an unset element still fails.
  pub fn is_orthogonal(&self) -> Result<bool, MatrixError> {
    match self.inverse() {
      Ok(inverse) => Ok(self.transpose().approx_eq(&inverse)),
      Err(MatrixError::SingularMatrix) | Err(MatrixError::NotSquare { .. }) => Ok(false),
      Err(other) => Err(other),
    }
  }
}
