use std::fmt;

use crate::*;

/// Human readable grid with two-decimal cells and a trailing `RxC` size
/// annotation. Unset cells render as a dash. Not part of the algorithmic
/// contract, purely for inspection.
impl<T: Scalar> fmt::Display for Matrix<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    for row in 0..self.rows() {
      write!(f, "|")?;
      for column in 0..self.columns() {
        match self.cell(row, column) {
          Some(value) => write!(f, " {value:>8.2}")?,
          None => write!(f, " {:>8}", "-")?,
        }
      }
      writeln!(f, " |")?;
    }
    write!(f, "{}", self.size())
  }
}
