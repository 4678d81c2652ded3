//! Session files.
//!
//! Every recording session is one file holding JSON lines, one IMU message
//! per line:
//!
//! ```text
//! {"topic": "/imu", "time": 1200, "linear_acceleration": [0.1, 0.0, 9.8], "angular_velocity": [0.0, 0.0, 0.01]}
//! ```
//!
//! Messages of all topics of a session share the file. Unknown fields are
//! ignored, `time` is optional.

use crate::Error;
use crate::RawSample;
use crate::Session;
use std::io::BufRead;

#[derive(Debug, serde::Deserialize)]
struct Message {
    topic: String,
    /// unit: micro seconds
    #[serde(default)]
    time: u64,
    linear_acceleration: [f64; 3],
    angular_velocity: [f64; 3],
}

/// session files in `dir`, sorted by file name
///
/// The sort order is the session order, so it's the same for every topic.
pub fn session_files<P: AsRef<std::path::Path>>(
    dir: P,
    extension: &str,
) -> Result<Vec<std::path::PathBuf>, Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir.as_ref())? {
        let path = entry?.path();
        if path.is_file() && path.extension().map_or(false, |ext| ext == extension) {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(Error::NoSessionFiles(dir.as_ref().to_path_buf()));
    }

    files.sort();
    Ok(files)
}

/// read all messages of one topic
pub fn read_topic<R: BufRead>(
    reader: R,
    path: &std::path::Path,
    topic: &str,
) -> Result<Vec<RawSample>, Error> {
    let mut samples = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| Error::ReadLine {
            path: path.to_path_buf(),
            line: i + 1,
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let msg: Message =
            serde_json::from_str(&line).map_err(|source| Error::MalformedMessage {
                path: path.to_path_buf(),
                line: i + 1,
                source,
            })?;
        if msg.topic != topic {
            continue;
        }

        samples.push(RawSample::new(
            msg.time,
            msg.linear_acceleration,
            msg.angular_velocity,
        ));
    }

    Ok(samples)
}

pub fn read_session<P: AsRef<std::path::Path>>(path: P, topic: &str) -> Result<Session, Error> {
    let path = path.as_ref();
    let file = std::io::BufReader::new(std::fs::File::open(path)?);
    let samples = read_topic(file, path, topic)?;

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    log::debug!("{}: {} messages on {}", name, samples.len(), topic);

    Ok(Session::new(name, samples))
}

/// one session per file, in the given order
pub fn read_sessions<P: AsRef<std::path::Path>>(
    files: &[P],
    topic: &str,
) -> Result<Vec<Session>, Error> {
    files.iter().map(|path| read_session(path, topic)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    const SESSION: &str = r#"
{"topic": "/a", "time": 10, "linear_acceleration": [0.0, 0.0, 9.8], "angular_velocity": [0.0, 0.0, 0.1]}
{"topic": "/b", "time": 11, "linear_acceleration": [9.8, 0.0, 0.0], "angular_velocity": [0.1, 0.0, 0.0], "frame_id": "os"}

{"topic": "/a", "linear_acceleration": [0.0, 0.2, 9.6], "angular_velocity": [0.0, 0.0, 0.3]}
"#;

    #[test]
    fn topic() {
        let path = std::path::Path::new("s.imu");

        let a = read_topic(SESSION.as_bytes(), path, "/a").unwrap();
        assert_eq!(a.len(), 2);
        assert_eq!(a[0].time, 10);
        assert_eq!(a[1].time, 0);
        testlib::assert_arr1_eq(&a[1].linear_acceleration, &array![0.0, 0.2, 9.6]);
        testlib::assert_arr1_eq(&a[1].angular_velocity, &array![0.0, 0.0, 0.3]);

        let b = read_topic(SESSION.as_bytes(), path, "/b").unwrap();
        assert_eq!(b.len(), 1);
        testlib::assert_arr1_eq(&b[0].linear_acceleration, &array![9.8, 0.0, 0.0]);

        assert!(read_topic(SESSION.as_bytes(), path, "/c").unwrap().is_empty());
    }

    #[test]
    fn malformed() {
        let data = "{\"topic\": \"/a\", \"linear_acceleration\": [0.0, 0.0]}\n";
        let err = read_topic(data.as_bytes(), std::path::Path::new("s.imu"), "/a").unwrap_err();
        assert!(matches!(err, Error::MalformedMessage { line: 1, .. }));
    }

    #[test]
    fn invalid_utf8() {
        let mut data = SESSION.as_bytes().to_vec();
        data.extend_from_slice(b"{\"topic\": \"\xff\"}\n");

        let err = read_topic(data.as_slice(), std::path::Path::new("s.imu"), "/a").unwrap_err();
        match err {
            Error::ReadLine { path, line, .. } => {
                assert_eq!(path, std::path::Path::new("s.imu"));
                assert_eq!(line, 6);
            }
            e => panic!("unexpected error: {}", e),
        }
    }

    #[test]
    fn files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["02.imu", "01.imu", "notes.txt", "10.imu"] {
            std::fs::write(dir.path().join(name), SESSION).unwrap();
        }

        let files = session_files(dir.path(), "imu").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["01.imu", "02.imu", "10.imu"]);

        let sessions = read_sessions(&files, "/b").unwrap();
        assert_eq!(sessions.len(), 3);
        assert_eq!(sessions[0].name, "01");
        assert_eq!(sessions[2].samples.len(), 1);

        assert!(matches!(
            session_files(dir.path(), "bag"),
            Err(Error::NoSessionFiles(_))
        ));
    }
}
