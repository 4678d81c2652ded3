//! Reduce per-session sample streams to one unit vector per session.

use crate::Error;
use crate::Session;
use crate::Stream;
use crate::VectorSet;

/// arithmetic mean of one stream over all samples, None if there are none
pub fn session_mean(samples: &[crate::RawSample], stream: Stream) -> Option<ndarray::Array1<f64>> {
    if samples.is_empty() {
        return None;
    }

    let mut sum = ndarray::Array1::<f64>::zeros(3);
    for sample in samples {
        sum += &sample.vector(stream);
    }
    sum /= samples.len() as f64;

    Some(sum)
}

/// 3xN matrix of session means, column order is the session order
pub fn session_means(
    sensor: &str,
    sessions: &[Session],
    stream: Stream,
) -> Result<ndarray::Array2<f64>, Error> {
    if sessions.is_empty() {
        return Err(Error::NoSessions);
    }

    let mut means = ndarray::Array2::<f64>::zeros((3, sessions.len()));
    for (i, session) in sessions.iter().enumerate() {
        let mean = session_mean(&session.samples, stream).ok_or_else(|| Error::NoSamples {
            sensor: sensor.to_string(),
            session: i,
            name: session.name.clone(),
        })?;

        log::debug!(
            "{}: session {} ({}): {} samples, {:.1}s, mean {} = {}",
            sensor,
            i,
            session.name,
            session.samples.len(),
            session.duration(),
            stream,
            mean
        );

        means.column_mut(i).assign(&mean);
    }

    Ok(means)
}

/// scale every column to unit length
///
/// A zero-magnitude column is an error, it's never skipped or replaced.
pub fn normalize(
    sensor: &str,
    sessions: &[Session],
    mut means: ndarray::Array2<f64>,
) -> Result<VectorSet, Error> {
    let norms = math::column_norms(&means);

    for (i, (mut col, norm)) in means.columns_mut().into_iter().zip(norms.iter()).enumerate() {
        if *norm == 0.0 {
            return Err(Error::ZeroMeanVector {
                sensor: sensor.to_string(),
                session: i,
                name: sessions.get(i).map(|s| s.name.clone()).unwrap_or_default(),
            });
        }
        col /= *norm;
    }

    VectorSet::with_sensor(sensor, means)
}

/// session means normalized to unit vectors
pub fn aggregate(sensor: &str, sessions: &[Session], stream: Stream) -> Result<VectorSet, Error> {
    let means = session_means(sensor, sessions, stream)?;
    normalize(sensor, sessions, means)
}

/// linear acceleration and angular velocity sets in one go
pub fn aggregate_all(sensor: &str, sessions: &[Session]) -> Result<(VectorSet, VectorSet), Error> {
    Ok((
        aggregate(sensor, sessions, Stream::LinearAcceleration)?,
        aggregate(sensor, sessions, Stream::AngularVelocity)?,
    ))
}

/// warn about sessions whose mean acceleration isn't dominated by gravity
///
/// `tolerance` is the allowed relative deviation from [math::GRAVITY].
/// Returns the indices of the deviating sessions.
pub fn check_gravity(
    sensor: &str,
    sessions: &[Session],
    means: &ndarray::Array2<f64>,
    tolerance: f64,
) -> Vec<usize> {
    let mut deviating = Vec::new();

    for (i, norm) in math::column_norms(means).iter().enumerate() {
        let deviation = (norm - math::GRAVITY).abs() / math::GRAVITY;
        if deviation > tolerance {
            log::warn!(
                "{}: session {} ({}): mean acceleration {:.3} m/s^2 is {:.1}% off gravity, \
                 the session might not be static",
                sensor,
                i,
                sessions.get(i).map(|s| s.name.as_str()).unwrap_or(""),
                norm,
                deviation * 100.0
            );
            deviating.push(i);
        }
    }

    deviating
}
