//! Rotation angle about a known axis.

use crate::vectorset;
use crate::Error;
use crate::UnitAxis;
use crate::VectorSet;

/// projections shorter than this count as parallel to the axis
pub const PARALLEL_EPS: f64 = 1.0e-12;

/// project every column onto the plane orthogonal to the axis
pub fn project_onto_plane(set: &VectorSet, axis: &UnitAxis) -> ndarray::Array2<f64> {
    let a = axis.as_array();
    let projection = ndarray::Array2::<f64>::eye(3) - math::outer_product(a, a);

    projection.dot(&set.view())
}

/// angle between the projections of every column pair, unit: rad
///
/// The result is in `[0, pi]`, the rotation sense is given by the axis sign.
pub fn session_angles(
    reference: &VectorSet,
    target: &VectorSet,
    axis: &UnitAxis,
) -> Result<ndarray::Array1<f64>, Error> {
    let n = vectorset::check_matched(reference, target)?;

    let proj_ref = project_onto_plane(reference, axis);
    let proj_target = project_onto_plane(target, axis);

    let mut thetas = ndarray::Array1::zeros(n);
    for (i, (a, b)) in proj_ref
        .columns()
        .into_iter()
        .zip(proj_target.columns())
        .enumerate()
    {
        let mag_a = a.dot(&a).sqrt();
        let mag_b = b.dot(&b).sqrt();
        for (mag, set) in [(mag_a, reference), (mag_b, target)] {
            if !(mag > PARALLEL_EPS) {
                return Err(Error::ParallelToAxis {
                    sensor: set.sensor().to_string(),
                    session: i,
                });
            }
        }

        // only absorbs rounding, both vectors have a valid direction here
        let cos = (a.dot(&b) / (mag_a * mag_b)).clamp(-1.0, 1.0);
        thetas[i] = cos.acos();
    }

    Ok(thetas)
}

/// mean of the per-session angles, unit: rad
pub fn estimate_angle(
    reference: &VectorSet,
    target: &VectorSet,
    axis: &UnitAxis,
) -> Result<f64, Error> {
    let thetas = session_angles(reference, target, axis)?;
    log::debug!("session angles: {}", thetas);

    thetas.mean().ok_or(Error::NoSessions)
}

/// flip the axis if the sets rotate clockwise about it
///
/// [estimate_angle] is unsigned, so the axis has to point such that a
/// positive rotation maps `reference` onto `target`. Returns the axis and
/// whether it was flipped.
pub fn orient_axis(
    reference: &VectorSet,
    target: &VectorSet,
    axis: &UnitAxis,
) -> Result<(UnitAxis, bool), Error> {
    vectorset::check_matched(reference, target)?;

    let proj_ref = project_onto_plane(reference, axis);
    let proj_target = project_onto_plane(target, axis);

    let mut sense = 0.0;
    for (a, b) in proj_ref.columns().into_iter().zip(proj_target.columns()) {
        sense += math::cross(&a, &b)?.dot(axis.as_array());
    }

    if sense < 0.0 {
        Ok((axis.flipped(), true))
    } else {
        Ok((axis.clone(), false))
    }
}
