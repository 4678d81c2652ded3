use crate::vectorset;
use crate::Error;
use crate::VectorSet;

/// how well a rotation maps the reference vectors onto the target vectors
#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ResidualReport {
    /// mean squared error
    pub mse: f64,
    pub abs_diff_min: f64,
    pub abs_diff_max: f64,
    pub abs_diff_mean: f64,
    /// population standard deviation
    pub abs_diff_std: f64,
}

impl std::fmt::Display for ResidualReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "mse - {}", self.mse)?;
        writeln!(f, "abs_diff_min - {}", self.abs_diff_min)?;
        writeln!(f, "abs_diff_max - {}", self.abs_diff_max)?;
        writeln!(f, "abs_diff_mean - {}", self.abs_diff_mean)?;
        write!(f, "abs_diff_std - {}", self.abs_diff_std)
    }
}

/// compare `rotation * reference` against `target`
pub fn verify(
    rotation: &ndarray::Array2<f64>,
    reference: &VectorSet,
    target: &VectorSet,
) -> Result<ResidualReport, Error> {
    if rotation.dim() != (3, 3) {
        return Err(Error::WrongMatrixShape(rotation.nrows(), rotation.ncols()));
    }
    vectorset::check_matched(reference, target)?;

    let estimate = rotation.dot(&reference.view());
    let diff = &target.view() - &estimate;
    let abs_diff = diff.mapv(f64::abs);

    let report = ResidualReport {
        mse: diff.mapv(|v| v * v).mean().ok_or(Error::NoSessions)?,
        abs_diff_min: abs_diff.fold(f64::INFINITY, |acc, v| acc.min(*v)),
        abs_diff_max: abs_diff.fold(f64::NEG_INFINITY, |acc, v| acc.max(*v)),
        abs_diff_mean: abs_diff.mean().ok_or(Error::NoSessions)?,
        abs_diff_std: abs_diff.std(0.0),
    };
    log::info!(
        "residuals: mse={} abs_diff min={} max={} mean={} std={}",
        report.mse,
        report.abs_diff_min,
        report.abs_diff_max,
        report.abs_diff_mean,
        report.abs_diff_std
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn exact() {
        let set = VectorSet::new(array![[1.0, 0.0], [0.0, 1.0], [0.0, 0.0]]).unwrap();
        let report = verify(&ndarray::Array2::eye(3), &set, &set).unwrap();

        assert_eq!(report.mse, 0.0);
        assert_eq!(report.abs_diff_min, 0.0);
        assert_eq!(report.abs_diff_max, 0.0);
        assert_eq!(report.abs_diff_mean, 0.0);
        assert_eq!(report.abs_diff_std, 0.0);
    }

    #[test]
    fn statistics() {
        let reference = VectorSet::new(array![[1.0], [0.0], [0.0]]).unwrap();
        let target = VectorSet::new(array![[0.0], [1.0], [0.0]]).unwrap();

        // identity leaves a difference of [-1, 1, 0]
        let report = verify(&ndarray::Array2::eye(3), &reference, &target).unwrap();
        assert_abs_diff_eq!(report.mse, 2.0 / 3.0, epsilon = 1.0e-12);
        assert_abs_diff_eq!(report.abs_diff_min, 0.0);
        assert_abs_diff_eq!(report.abs_diff_max, 1.0);
        assert_abs_diff_eq!(report.abs_diff_mean, 2.0 / 3.0, epsilon = 1.0e-12);
        assert_abs_diff_eq!(report.abs_diff_std, (2.0f64 / 9.0).sqrt(), epsilon = 1.0e-12);
    }

    #[test]
    fn wrong_shape() {
        let set = VectorSet::new(array![[1.0], [0.0], [0.0]]).unwrap();
        assert!(matches!(
            verify(&ndarray::Array2::eye(2), &set, &set),
            Err(Error::WrongMatrixShape(2, 2))
        ));
    }

    #[test]
    fn display() {
        let report = ResidualReport {
            mse: 0.5,
            abs_diff_min: 0.0,
            abs_diff_max: 1.0,
            abs_diff_mean: 0.25,
            abs_diff_std: 0.125,
        };
        assert_eq!(
            report.to_string(),
            "mse - 0.5\nabs_diff_min - 0\nabs_diff_max - 1\nabs_diff_mean - 0.25\nabs_diff_std - 0.125"
        );
    }
}
