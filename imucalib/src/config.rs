use crate::AxisSign;
use crate::Error;
use crate::Stream;

use serde::Deserialize;

fn default_session_extension() -> String {
    "imu".to_string()
}

fn default_gravity_tolerance() -> f64 {
    0.1
}

/// calibration config
#[derive(Deserialize, Debug)]
pub struct Config {
    /// stream used to find the rotation
    #[serde(default)]
    pub stream: Stream,
    /// how to pick the sign of the rotation axis
    #[serde(default)]
    pub axis_sign: AxisSign,
    /// file extension of session files, without the dot
    #[serde(default = "default_session_extension")]
    pub session_extension: String,
    /// allowed relative deviation of the mean acceleration from gravity
    /// before a session gets reported as non-static
    #[serde(default = "default_gravity_tolerance")]
    pub gravity_tolerance: f64,

    /// directory containing one file per session, relative to the config file
    #[serde(default)]
    pub session_dir: Option<std::path::PathBuf>,
    /// topic of the sensor the rotation maps from
    #[serde(default)]
    pub reference_topic: Option<String>,
    /// topic of the sensor the rotation maps onto
    #[serde(default)]
    pub target_topic: Option<String>,
    /// relative to the config file
    #[serde(default)]
    pub out_path: Option<std::path::PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stream: Stream::default(),
            axis_sign: AxisSign::default(),
            session_extension: default_session_extension(),
            gravity_tolerance: default_gravity_tolerance(),
            session_dir: None,
            reference_topic: None,
            target_topic: None,
            out_path: None,
        }
    }
}

fn path2abs(dir: &std::path::Path, relpath: &std::path::Path) -> std::path::PathBuf {
    dir.join(relpath)
}

/// parse a config, unknown keys are an error
pub fn parse(buffer: &str) -> Result<Config, Error> {
    let value: toml::Value = toml::from_str(buffer)?;
    let mut has_unsupported: bool = false;
    let cfg: Config = serde_ignored::deserialize(value, |path| {
        log::error!("unsupported config: {:?}", path.to_string());
        has_unsupported = true;
    })?;
    if has_unsupported {
        return Err(Error::UnsupportedConfigs);
    }

    Ok(cfg)
}

/// load config file
pub fn load<P: AsRef<std::path::Path>>(filename: P) -> Result<Config, Error> {
    let cfgdir = filename
        .as_ref()
        .parent()
        .unwrap_or_else(|| std::path::Path::new("."));

    let buffer = std::fs::read_to_string(filename.as_ref())?;
    let mut cfg = parse(&buffer)?;

    // make all paths absolute
    if let Some(v) = &cfg.session_dir {
        cfg.session_dir = Some(path2abs(cfgdir, v));
    }
    if let Some(v) = &cfg.out_path {
        cfg.out_path = Some(path2abs(cfgdir, v));
    }

    Ok(cfg)
}
