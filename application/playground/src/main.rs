use gridmath_matrix::*;

/// Builds a small invertible matrix, inverts it, and multiplies back to
/// recover the identity. Smoke demonstration, not a real interface.
fn main() -> Result<(), MatrixError> {
  env_logger::builder().init();

  let m = Matrix::from_rows(vec![
    vec![1.0, 2.0, 3.0],
    vec![0.0, 4.0, 5.0],
    vec![1.0, 0.0, 6.0],
  ])?;
  println!("{m}");

  log::info!("determinant: {}", m.determinant()?);
  log::info!("trace: {}", m.trace()?);

  let inverse = m.inverse()?;
  println!("{inverse}");

  let recovered = inverse.multiply(&m)?;
  println!("{recovered}");

  let identity = Matrix::identity(3)?;
  log::info!(
    "inverse * m recovers the identity: {}",
    recovered.approx_eq(&identity)
  );

  Ok(())
}
