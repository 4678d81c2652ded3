mod error;
pub use error::Error;

/// standard gravity, unit: m/s^2
pub const GRAVITY: f64 = 9.80665;

use ndarray::array;
use ndarray_linalg::svd::SVD;
use std::ops::Mul;

pub fn outer_product<Sa, Sb, Aa, Ab>(
    a: &ndarray::ArrayBase<Sa, ndarray::Ix1>,
    b: &ndarray::ArrayBase<Sb, ndarray::Ix1>,
) -> ndarray::Array<Ab, ndarray::Ix2>
where
    Sa: ndarray::Data<Elem = Aa>,
    Sb: ndarray::Data<Elem = Ab>,
    Ab: Clone + num_traits::identities::Zero + std::ops::Mul<Aa, Output = Ab>,
    Aa: Copy + ndarray::ScalarOperand,
{
    let mut res = ndarray::Array2::<Ab>::zeros((a.dim(), b.dim()));

    for i in 0..a.dim() {
        res.index_axis_mut(ndarray::Axis(0), i)
            .assign(&(b.mul(a[i])));
    }

    res
}

/// skew-symmetric cross-product matrix, `skew(v).dot(x) == v × x`
pub fn skew<S, A>(v: &ndarray::ArrayBase<S, ndarray::Ix1>) -> Result<ndarray::Array2<A>, Error>
where
    S: ndarray::Data<Elem = A>,
    A: num_traits::float::Float,
{
    if v.dim() != 3 {
        return Err(Error::WrongVecLen(v.dim()));
    }

    let zero = A::zero();
    Ok(array![
        [zero, -v[2], v[1]],
        [v[2], zero, -v[0]],
        [-v[1], v[0], zero],
    ])
}

/// cross product of two 3-vectors
pub fn cross<Sa, Sb, A>(
    a: &ndarray::ArrayBase<Sa, ndarray::Ix1>,
    b: &ndarray::ArrayBase<Sb, ndarray::Ix1>,
) -> Result<ndarray::Array1<A>, Error>
where
    Sa: ndarray::Data<Elem = A>,
    Sb: ndarray::Data<Elem = A>,
    A: num_traits::float::Float,
{
    for len in [a.dim(), b.dim()] {
        if len != 3 {
            return Err(Error::WrongVecLen(len));
        }
    }

    Ok(array![
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ])
}

/// L2 norm of every column
pub fn column_norms<S, A>(m: &ndarray::ArrayBase<S, ndarray::Ix2>) -> ndarray::Array1<A>
where
    S: ndarray::Data<Elem = A>,
    A: num_traits::float::Float,
{
    m.columns()
        .into_iter()
        .map(|col| col.fold(A::zero(), |acc, v| acc + *v * *v).sqrt())
        .collect()
}

/// right singular vector belonging to the smallest singular value of `m`
///
/// Uses the full V^T, so this also works for matrices with fewer rows than
/// columns, where the vector spans the nullspace.
pub fn smallest_right_singular_vector<S>(
    m: &ndarray::ArrayBase<S, ndarray::Ix2>,
) -> Result<ndarray::Array1<f64>, Error>
where
    S: ndarray::Data<Elem = f64>,
{
    if m.is_empty() {
        return Err(Error::EmptyMatrix);
    }

    let (_, _, vt) = m.svd(false, true)?;
    let vt = vt.ok_or(Error::NoSingularVectors)?;

    // LAPACK sorts singular values in descending order
    let last = vt.nrows() - 1;
    Ok(vt.row(last).to_owned())
}
