use crate::vectorset;
use crate::Error;
use crate::UnitAxis;
use crate::VectorSet;

/// best-fit rotation axis between two paired sets of unit vectors
///
/// A rotation leaves its axis unchanged, so the column differences
/// `target - reference` all lie in the plane orthogonal to it. The axis is
/// the right singular vector of the smallest singular value of the
/// transposed difference matrix. Its sign is whatever the decomposition
/// returns.
pub fn estimate_axis(reference: &VectorSet, target: &VectorSet) -> Result<UnitAxis, Error> {
    let n = vectorset::check_matched(reference, target)?;
    if n < 2 {
        log::warn!("only {} session, the rotation axis is underdetermined", n);
    }

    let diff = &target.view() - &reference.view();
    let axis = math::smallest_right_singular_vector(&diff.t())?;
    log::debug!("axis from decomposition: {}", axis);

    UnitAxis::new(axis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use rand::SeedableRng;

    #[test]
    fn rotation_about_z() {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let reference =
            VectorSet::new(array![[1.0, 0.0, s], [0.0, 1.0, 0.0], [0.0, 0.0, s]]).unwrap();
        // 90 degrees about z
        let target =
            VectorSet::new(array![[0.0, -1.0, 0.0], [1.0, 0.0, s], [0.0, 0.0, s]]).unwrap();

        let axis = estimate_axis(&reference, &target).unwrap();
        let axis = axis.as_array();
        assert_abs_diff_eq!(axis[0], 0.0, epsilon = 1.0e-9);
        assert_abs_diff_eq!(axis[1], 0.0, epsilon = 1.0e-9);
        assert_abs_diff_eq!(axis[2].abs(), 1.0, epsilon = 1.0e-9);
    }

    #[test]
    fn unit_norm() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);

        for n in 1..8 {
            let reference = VectorSet::new(testlib::random_unit_columns(&mut rng, n)).unwrap();
            let target = VectorSet::new(testlib::random_unit_columns(&mut rng, n)).unwrap();

            let axis = estimate_axis(&reference, &target).unwrap();
            let axis = axis.as_array();
            assert_abs_diff_eq!(axis.dot(axis).sqrt(), 1.0, epsilon = 1.0e-6);
        }
    }

    #[test]
    fn mismatch() {
        let a = VectorSet::new(array![[1.0, 0.0], [0.0, 1.0], [0.0, 0.0]]).unwrap();
        let b = VectorSet::new(array![[1.0], [0.0], [0.0]]).unwrap();

        assert!(matches!(
            estimate_axis(&a, &b),
            Err(Error::SessionCountMismatch {
                reference_len: 2,
                target_len: 1,
                ..
            })
        ));
    }
}
