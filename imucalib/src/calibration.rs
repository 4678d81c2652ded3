use crate::aggregate;
use crate::angle;
use crate::axis;
use crate::config::Config;
use crate::datareader;
use crate::rotation;
use crate::verify;
use crate::Error;
use crate::ResidualReport;
use crate::Stream;
use crate::VectorSet;

/// sign convention of the rotation axis
///
/// The decomposition only determines the axis up to its sign, and the angle
/// estimate is unsigned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisSign {
    /// point the axis such that the rotation from reference to target is
    /// counter-clockwise
    #[default]
    PositiveAngle,
    /// keep whatever sign the decomposition returned
    Decomposition,
}

/// rotation between two sensors
///
/// `rotation.dot(reference) ~= target` for the vector sets it was computed from.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Calibration {
    pub axis: ndarray::Array1<f64>,
    /// unit: rad
    pub angle: f64,
    pub rotation: ndarray::Array2<f64>,
    pub report: ResidualReport,
}

impl Calibration {
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self, Error> {
        let mut file = std::fs::File::open(path)?;
        Ok(bincode::deserialize_from(&mut file)?)
    }

    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), Error> {
        let mut file = std::fs::File::create(path)?;
        bincode::serialize_into(&mut file, self)?;
        Ok(())
    }

    /// human-readable rotation and residuals
    pub fn write_report<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), Error> {
        let mut file = std::fs::File::create(path)?;
        crate::output::write_report(&mut file, &self.rotation, Some(&self.report))
    }
}

/// rotation that maps `reference` onto `target`
pub fn calibrate(
    reference: &VectorSet,
    target: &VectorSet,
    axis_sign: AxisSign,
) -> Result<Calibration, Error> {
    let axis = axis::estimate_axis(reference, target)?;
    let axis = match axis_sign {
        AxisSign::PositiveAngle => {
            let (axis, flipped) = angle::orient_axis(reference, target, &axis)?;
            if flipped {
                log::info!("flipped rotation axis for a positive rotation angle");
            }
            axis
        }
        AxisSign::Decomposition => axis,
    };

    let theta = angle::estimate_angle(reference, target, &axis)?;
    let rotation = rotation::rotation_matrix(&axis, theta)?;
    log::info!("omega = {}", axis.as_array());
    log::info!("theta = {} ({:.3} deg)", theta, theta.to_degrees());
    log::info!("R = {}", rotation);

    let report = verify::verify(&rotation, reference, target)?;

    Ok(Calibration {
        axis: axis.into_inner(),
        angle: theta,
        rotation,
        report,
    })
}

/// calibrate from session files
pub struct Calibrator<'a> {
    config: &'a Config,
}

impl<'a> Calibrator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// unit vectors of one topic, one per session
    pub fn vectors(
        &self,
        files: &[std::path::PathBuf],
        topic: &str,
    ) -> Result<VectorSet, Error> {
        let sessions = datareader::read_sessions(files, topic)?;
        let means = aggregate::session_means(topic, &sessions, self.config.stream)?;

        if self.config.stream == Stream::LinearAcceleration {
            aggregate::check_gravity(topic, &sessions, &means, self.config.gravity_tolerance);
        }

        aggregate::normalize(topic, &sessions, means)
    }

    /// rotation that maps the reference topic onto the target topic
    pub fn run<P: AsRef<std::path::Path>>(
        &self,
        session_dir: P,
        reference_topic: &str,
        target_topic: &str,
    ) -> Result<(Calibration, VectorSet, VectorSet), Error> {
        let files = datareader::session_files(session_dir, &self.config.session_extension)?;
        log::info!("found {} sessions", files.len());

        let reference = self.vectors(&files, reference_topic)?;
        let target = self.vectors(&files, target_topic)?;
        let calibration = calibrate(&reference, &target, self.config.axis_sign)?;

        Ok((calibration, reference, target))
    }
}
