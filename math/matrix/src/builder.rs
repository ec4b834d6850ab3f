use crate::*;

/// Fluent construction of populated matrices.
///
/// Population order is fixed: identity first, then the constant. When both
/// are requested the constant overwrites every cell, so the constant wins.
///
/// ```
/// use gridmath_matrix::*;
///
/// let identity: Matrix<f64> = MatrixBuilder::new().size(3, 3).as_identity().build().unwrap();
/// assert_eq!(identity.value(1, 1).unwrap(), 1.0);
/// assert_eq!(identity.value(1, 2).unwrap(), 0.0);
/// ```
pub struct MatrixBuilder<T> {
  size: Option<(usize, usize)>,
  identity: bool,
  constant: Option<T>,
}

impl<T: Scalar> MatrixBuilder<T> {
  pub fn new() -> Self {
    Self {
      size: None,
      identity: false,
      constant: None,
    }
  }

  pub fn size(mut self, rows: usize, columns: usize) -> Self {
    self.size = Some((rows, columns));
    self
  }

  pub fn with_size(mut self, size: MatrixSize) -> Self {
    self.size = Some((size.rows(), size.columns()));
    self
  }

  /// Populate ones on the main diagonal and zeros everywhere else.
  pub fn as_identity(mut self) -> Self {
    self.identity = true;
    self
  }

  /// Populate every cell with the given value.
  pub fn as_constant(mut self, value: T) -> Self {
    self.constant = Some(value);
    self
  }

  /// Builds the matrix. Fails with `InvalidSize` when no size was given
  /// or a dimension is zero. Without a population policy every cell is
  /// left unset.
  pub fn build(self) -> Result<Matrix<T>, MatrixError> {
    let (rows, columns) = self.size.ok_or(MatrixError::InvalidSize {
      rows: 0,
      columns: 0,
    })?;
    let mut matrix = Matrix::new(rows, columns)?;
    if self.identity {
      for row in 0..rows {
        for column in 0..columns {
          let value = if row == column { T::one() } else { T::zero() };
          matrix.put_cell(row, column, Some(value));
        }
      }
    }
    if let Some(constant) = self.constant {
      for row in 0..rows {
        for column in 0..columns {
          matrix.put_cell(row, column, Some(constant));
        }
      }
    }
    Ok(matrix)
  }
}

impl<T: Scalar> Default for MatrixBuilder<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Scalar> Matrix<T> {
  /// The square identity matrix of the given order.
  pub fn identity(order: usize) -> Result<Self, MatrixError> {
    MatrixBuilder::new().size(order, order).as_identity().build()
  }

  /// A matrix with every cell set to the given value.
  pub fn constant(rows: usize, columns: usize, value: T) -> Result<Self, MatrixError> {
    MatrixBuilder::new()
      .size(rows, columns)
      .as_constant(value)
      .build()
  }
}
