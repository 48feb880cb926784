use std::ops::AddAssign;

use num::Num;

/// Dot product and both squared norms of two dense vectors, in one pass.
///
/// # Arguments
/// * `vec` - left vector
/// * `other` - right vector, same length as `vec`
///
/// # Returns
/// * `(R, R, R)` - (dot, ||vec||^2, ||other||^2)
#[inline]
pub fn dot_and_norms<N, R>(vec: &[N], other: &[N]) -> (R, R, R)
where
    N: Into<R> + Copy,
    R: Num + AddAssign + Copy,
{
    debug_assert_eq!(
        vec.len(),
        other.len(),
        "Vectors must be of the same length to compute dot product."
    );

    let mut dot = R::zero();
    let mut norm_a = R::zero();
    let mut norm_b = R::zero();
    for (&a, &b) in vec.iter().zip(other.iter()) {
        let a: R = a.into();
        let b: R = b.into();
        dot += a * b;
        norm_a += a * a;
        norm_b += b * b;
    }
    (dot, norm_a, norm_b)
}

/// Dot product of two dense vectors
#[inline]
pub fn dot<N, R>(vec: &[N], other: &[N]) -> R
where
    N: Into<R> + Copy,
    R: Num + AddAssign + Copy,
{
    dot_and_norms::<N, R>(vec, other).0
}

/// Squared euclidean norm
#[inline]
pub fn norm_sq<N, R>(vec: &[N]) -> R
where
    N: Into<R> + Copy,
    R: Num + AddAssign + Copy,
{
    let mut result = R::zero();
    for &v in vec {
        let v: R = v.into();
        result += v * v;
    }
    result
}

/// Round to a fixed number of decimal places.
/// `-0.0` is folded into `0.0` so it prints as such.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 { 0.0 } else { rounded }
}
