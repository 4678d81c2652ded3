/// which vector of a sample to look at
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stream {
    #[default]
    LinearAcceleration,
    AngularVelocity,
}

impl std::fmt::Display for Stream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LinearAcceleration => write!(f, "linear_acceleration"),
            Self::AngularVelocity => write!(f, "angular_velocity"),
        }
    }
}

/// raw IMU message of one sensor topic
#[derive(Clone, Debug)]
pub struct RawSample {
    /// unit: micro seconds
    pub time: u64,
    /// accelerometer sample, unit: m/s^2
    pub linear_acceleration: ndarray::Array1<f64>,
    /// gyroscope sample, unit: rad/s
    pub angular_velocity: ndarray::Array1<f64>,
}

impl RawSample {
    pub fn new(time: u64, linear_acceleration: [f64; 3], angular_velocity: [f64; 3]) -> Self {
        Self {
            time,
            linear_acceleration: ndarray::arr1(&linear_acceleration),
            angular_velocity: ndarray::arr1(&angular_velocity),
        }
    }

    pub fn vector(&self, stream: Stream) -> ndarray::ArrayView1<'_, f64> {
        match stream {
            Stream::LinearAcceleration => self.linear_acceleration.view(),
            Stream::AngularVelocity => self.angular_velocity.view(),
        }
    }

    pub fn time_seconds(&self) -> f64 {
        (self.time as f64) / 1_000_000.0
    }
}

/// all messages of one sensor topic within one recording
#[derive(Clone, Debug)]
pub struct Session {
    /// used in log and error messages, usually the file stem
    pub name: String,
    pub samples: Vec<RawSample>,
}

impl Session {
    pub fn new<N: Into<String>>(name: N, samples: Vec<RawSample>) -> Self {
        Self {
            name: name.into(),
            samples,
        }
    }

    /// duration between the first and the last sample, unit: seconds
    pub fn duration(&self) -> f64 {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => last.time_seconds() - first.time_seconds(),
            _ => 0.0,
        }
    }
}
