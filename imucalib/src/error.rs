#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    BinCode(#[from] bincode::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Math(#[from] math::Error),
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    #[error("{}:{line}: malformed message", path.display())]
    MalformedMessage {
        path: std::path::PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("sensor {sensor}: session {session} ({name}) has no samples")]
    NoSamples {
        sensor: String,
        session: usize,
        name: String,
    },
    #[error("no sessions")]
    NoSessions,
    #[error("no session files in {}", .0.display())]
    NoSessionFiles(std::path::PathBuf),
    #[error("axis is not unit length, norm: {0}")]
    NotUnitAxis(f64),
    #[error("sensor {sensor}: session {session} is not a unit vector, norm: {norm}")]
    NotUnitVector {
        sensor: String,
        session: usize,
        norm: f64,
    },
    #[error("sensor {sensor}: session {session} is parallel to the rotation axis")]
    ParallelToAxis { sensor: String, session: usize },
    #[error("{}:{line}: can't read line", path.display())]
    ReadLine {
        path: std::path::PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error(
        "session count mismatch: {reference} has {reference_len} sessions, {target} has {target_len}"
    )]
    SessionCountMismatch {
        reference: String,
        reference_len: usize,
        target: String,
        target_len: usize,
    },
    #[error("unsupported configs")]
    UnsupportedConfigs,
    #[error("wrong matrix shape {0}x{1}, expected 3x3")]
    WrongMatrixShape(usize, usize),
    #[error("wrong vec len {0}, expected 3")]
    WrongVecLen(usize),
    #[error("sensor {sensor}: session {session} ({name}) has a zero-magnitude mean vector")]
    ZeroMeanVector {
        sensor: String,
        session: usize,
        name: String,
    },
}
