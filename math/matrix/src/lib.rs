//! Dense, real-valued matrices of dynamic size, with the classical
//! small-matrix algebra: add/subtract/scale/multiply, transpose, trace,
//! and the recursive determinant/cofactor/adjugate/inverse family built
//! on Laplace expansion.
//!
//! Every algebraic operation returns a freshly allocated matrix and never
//! mutates its inputs. The determinant is the textbook O(n!) cofactor
//! recursion, fine for the small matrices this crate targets; there is no
//! pivoting and no claim of stability for ill-conditioned inputs.

use std::fmt;

mod builder;
pub use builder::*;

mod display;

mod error;
pub use error::*;

mod linear;

mod matrix;
pub use matrix::*;

mod predicates;

mod size;
pub use size::*;

mod structural;


/// Element type of a matrix. Real numbers only, in practice f32 or f64.
pub trait Scalar:
  num_traits::Float + num_traits::NumAssign + fmt::Debug + fmt::Display + 'static
{
}

impl<T> Scalar for T where
  T: num_traits::Float + num_traits::NumAssign + fmt::Debug + fmt::Display + 'static
{
}
