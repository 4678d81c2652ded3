use crate::Error;

/// allowed deviation of a unit vector's norm from 1
pub const UNIT_TOLERANCE: f64 = 1.0e-4;

/// sensor label of sets built without one
pub const UNNAMED_SENSOR: &str = "unnamed";

fn norm<S>(v: &ndarray::ArrayBase<S, ndarray::Ix1>) -> f64
where
    S: ndarray::Data<Elem = f64>,
{
    v.dot(v).sqrt()
}

/// false for NaN norms as well
fn is_unit(norm: f64) -> bool {
    (norm - 1.0).abs() <= UNIT_TOLERANCE
}

/// 3xN matrix of unit vectors, one column per session
///
/// Column order is the session order and defines which columns of two sets
/// are paired with each other. Deserializing goes through [VectorSet::new].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "ndarray::Array2<f64>", into = "ndarray::Array2<f64>")]
pub struct VectorSet {
    sensor: String,
    vectors: ndarray::Array2<f64>,
}

impl VectorSet {
    pub fn new(m: ndarray::Array2<f64>) -> Result<Self, Error> {
        Self::with_sensor(UNNAMED_SENSOR, m)
    }

    /// `sensor` is used in error messages
    pub fn with_sensor<N: Into<String>>(sensor: N, m: ndarray::Array2<f64>) -> Result<Self, Error> {
        let sensor = sensor.into();

        if m.nrows() != 3 {
            return Err(Error::WrongVecLen(m.nrows()));
        }
        if m.ncols() == 0 {
            return Err(Error::NoSessions);
        }

        for (session, col) in m.columns().into_iter().enumerate() {
            let norm = norm(&col);
            if !is_unit(norm) {
                return Err(Error::NotUnitVector {
                    sensor,
                    session,
                    norm,
                });
            }
        }

        Ok(Self { sensor, vectors: m })
    }

    pub fn sensor(&self) -> &str {
        &self.sensor
    }

    /// number of sessions
    pub fn len(&self) -> usize {
        self.vectors.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.ncols() == 0
    }

    pub fn view(&self) -> ndarray::ArrayView2<'_, f64> {
        self.vectors.view()
    }

    pub fn column(&self, session: usize) -> ndarray::ArrayView1<'_, f64> {
        self.vectors.column(session)
    }
}

impl TryFrom<ndarray::Array2<f64>> for VectorSet {
    type Error = Error;

    fn try_from(m: ndarray::Array2<f64>) -> Result<Self, Self::Error> {
        Self::new(m)
    }
}

impl From<VectorSet> for ndarray::Array2<f64> {
    fn from(set: VectorSet) -> Self {
        set.vectors
    }
}

/// make sure both sets can be paired column by column, returns the session count
pub fn check_matched(a: &VectorSet, b: &VectorSet) -> Result<usize, Error> {
    if a.len() != b.len() {
        return Err(Error::SessionCountMismatch {
            reference: a.sensor.clone(),
            reference_len: a.len(),
            target: b.sensor.clone(),
            target_len: b.len(),
        });
    }

    Ok(a.len())
}

/// rotation axis, unit length within [UNIT_TOLERANCE]
///
/// Deserializing goes through [UnitAxis::new].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "ndarray::Array1<f64>", into = "ndarray::Array1<f64>")]
pub struct UnitAxis(ndarray::Array1<f64>);

impl UnitAxis {
    /// rejects non-unit input instead of normalizing it
    pub fn new(v: ndarray::Array1<f64>) -> Result<Self, Error> {
        if v.dim() != 3 {
            return Err(Error::WrongVecLen(v.dim()));
        }

        let norm = norm(&v);
        if !is_unit(norm) {
            return Err(Error::NotUnitAxis(norm));
        }

        Ok(Self(v))
    }

    pub fn as_array(&self) -> &ndarray::Array1<f64> {
        &self.0
    }

    pub fn into_inner(self) -> ndarray::Array1<f64> {
        self.0
    }

    /// same axis, opposite rotation sense
    pub fn flipped(&self) -> Self {
        Self(-&self.0)
    }
}

impl TryFrom<ndarray::Array1<f64>> for UnitAxis {
    type Error = Error;

    fn try_from(v: ndarray::Array1<f64>) -> Result<Self, Self::Error> {
        Self::new(v)
    }
}

impl From<UnitAxis> for ndarray::Array1<f64> {
    fn from(axis: UnitAxis) -> Self {
        axis.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn vectorset() {
        let set = VectorSet::new(array![[1.0, 0.0], [0.0, 0.6], [0.0, 0.8]]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.sensor(), UNNAMED_SENSOR);
        testlib::assert_arr1_eq(&set.column(1), &array![0.0, 0.6, 0.8]);

        assert!(matches!(
            VectorSet::new(array![[1.0, 0.0], [0.0, 1.0]]),
            Err(Error::WrongVecLen(2))
        ));
        assert!(matches!(
            VectorSet::new(ndarray::Array2::zeros((3, 0))),
            Err(Error::NoSessions)
        ));
        assert!(matches!(
            VectorSet::new(array![[1.0, 0.0], [0.0, 2.0], [0.0, 0.0]]),
            Err(Error::NotUnitVector { session: 1, .. })
        ));
        assert!(matches!(
            VectorSet::new(array![[f64::NAN], [0.0], [0.0]]),
            Err(Error::NotUnitVector { session: 0, .. })
        ));

        match VectorSet::with_sensor("/imu", array![[2.0], [0.0], [0.0]]) {
            Err(Error::NotUnitVector { sensor, .. }) => assert_eq!(sensor, "/imu"),
            r => panic!("unexpected result: {:?}", r),
        }
    }

    #[test]
    fn matched() {
        let a = VectorSet::with_sensor("/a", array![[1.0, 0.0], [0.0, 1.0], [0.0, 0.0]]).unwrap();
        let b = VectorSet::with_sensor("/b", array![[1.0], [0.0], [0.0]]).unwrap();

        assert_eq!(check_matched(&a, &a).unwrap(), 2);

        let err = check_matched(&a, &b).unwrap_err();
        assert!(matches!(
            &err,
            Error::SessionCountMismatch {
                reference_len: 2,
                target_len: 1,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "session count mismatch: /a has 2 sessions, /b has 1"
        );
    }

    #[test]
    fn unit_axis() {
        let axis = UnitAxis::new(array![0.0, 0.0, 1.0]).unwrap();
        testlib::assert_arr1_eq(axis.flipped().as_array(), &array![0.0, 0.0, -1.0]);

        // within tolerance, kept as-is
        let axis = UnitAxis::new(array![0.0, 0.0, 1.00001]).unwrap();
        assert_eq!(axis.as_array()[2], 1.00001);

        assert!(matches!(
            UnitAxis::new(array![0.0, 0.0, 1.1]),
            Err(Error::NotUnitAxis(_))
        ));
        assert!(matches!(
            UnitAxis::new(array![0.0, 1.0]),
            Err(Error::WrongVecLen(2))
        ));
    }

    #[test]
    fn deserialize_validates() {
        let axis = UnitAxis::new(array![0.0, 0.6, 0.8]).unwrap();
        let json = serde_json::to_string(&axis).unwrap();
        let loaded: UnitAxis = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, axis);

        let long = serde_json::to_string(&array![0.0, 0.0, 2.0]).unwrap();
        assert!(serde_json::from_str::<UnitAxis>(&long).is_err());

        let set = VectorSet::new(array![[1.0, 0.0], [0.0, 1.0], [0.0, 0.0]]).unwrap();
        let json = serde_json::to_string(&set).unwrap();
        let loaded: VectorSet = serde_json::from_str(&json).unwrap();
        testlib::assert_arr2_eq(&loaded.view(), &set.view());

        let scaled = serde_json::to_string(&array![[3.0], [0.0], [0.0]]).unwrap();
        assert!(serde_json::from_str::<VectorSet>(&scaled).is_err());
    }
}
