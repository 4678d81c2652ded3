use approx::assert_abs_diff_eq;
use ndarray::azip;
use rand::Rng;

pub fn assert_arr1_eq<Sa, Sb>(
    a: &ndarray::ArrayBase<Sa, ndarray::Ix1>,
    b: &ndarray::ArrayBase<Sb, ndarray::Ix1>,
) where
    Sa: ndarray::Data<Elem = f64>,
    Sb: ndarray::Data<Elem = f64>,
{
    assert_eq!(a.dim(), b.dim());

    azip!((a in a, b in b) assert_abs_diff_eq!(a, b, epsilon=1.0e-6));
}

pub fn assert_arr2_eq<Sa, Sb>(
    a: &ndarray::ArrayBase<Sa, ndarray::Ix2>,
    b: &ndarray::ArrayBase<Sb, ndarray::Ix2>,
) where
    Sa: ndarray::Data<Elem = f64>,
    Sb: ndarray::Data<Elem = f64>,
{
    assert_eq!(a.dim(), b.dim());

    azip!((a in a.columns(), b in b.columns()) assert_arr1_eq(&a, &b));
}

/// every column must have an L2 norm of 1
pub fn assert_unit_columns<S>(m: &ndarray::ArrayBase<S, ndarray::Ix2>)
where
    S: ndarray::Data<Elem = f64>,
{
    for col in m.columns() {
        assert_abs_diff_eq!(col.dot(&col).sqrt(), 1.0, epsilon = 1.0e-6);
    }
}

/// random unit vector, rejection-sampled from the unit cube
pub fn random_unit_vector<R: Rng>(rng: &mut R) -> ndarray::Array1<f64> {
    loop {
        let v: ndarray::Array1<f64> = ndarray::Array1::from_shape_fn(3, |_| rng.gen_range(-1.0..1.0));
        let norm = v.dot(&v).sqrt();
        if norm > 0.1 && norm <= 1.0 {
            return v / norm;
        }
    }
}

/// 3xN matrix of random unit columns
pub fn random_unit_columns<R: Rng>(rng: &mut R, n: usize) -> ndarray::Array2<f64> {
    let mut m = ndarray::Array2::zeros((3, n));
    for mut col in m.columns_mut() {
        col.assign(&random_unit_vector(rng));
    }
    m
}
