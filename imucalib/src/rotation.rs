use crate::Error;
use crate::UnitAxis;

/// rotation matrix from axis-angle using Rodrigues' formula
///
/// `R = I + sin(angle) K + (1 - cos(angle)) K^2` with K being the
/// skew-symmetric cross-product matrix of the axis.
pub fn rotation_matrix(axis: &UnitAxis, angle: f64) -> Result<ndarray::Array2<f64>, Error> {
    let k = math::skew(axis.as_array())?;
    let k2 = k.dot(&k);

    Ok(ndarray::Array2::eye(3) + k * angle.sin() + k2 * (1.0 - angle.cos()))
}
