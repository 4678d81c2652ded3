use anyhow::anyhow;
use anyhow::Context as _;
use clap::Parser;

/// rotation between two IMUs from static recording sessions
#[derive(Debug, Parser)]
#[command(name = "calibrate", version)]
struct Opt {
    /// directory with one file per session
    #[arg(short = 'f', long)]
    session_dir: Option<std::path::PathBuf>,
    /// topic of the sensor the rotation maps from
    #[arg(short = 'a', long)]
    reference_topic: Option<String>,
    /// topic of the sensor the rotation maps onto
    #[arg(short = 't', long)]
    target_topic: Option<String>,
    /// human-readable output
    #[arg(short = 'o', long)]
    out_path: Option<std::path::PathBuf>,
    /// TOML config file
    #[arg(short = 'c', long)]
    config: Option<std::path::PathBuf>,
    /// also store the calibration in bincode format
    #[arg(long)]
    bincode: Option<std::path::PathBuf>,
}

const DEFAULT_REFERENCE_TOPIC: &str = "/uav1/dji_sdk/imu";
const DEFAULT_TARGET_TOPIC: &str = "/uav1/os_hori/os_cloud_node/imu";
const DEFAULT_OUT_PATH: &str = "./matrix.txt";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let opt = Opt::parse();

    let cfg = match &opt.config {
        Some(path) => imucalib::config::load(path).context("can't load config")?,
        None => imucalib::config::Config::default(),
    };
    log::debug!("{:#?}", cfg);

    let session_dir = opt
        .session_dir
        .or_else(|| cfg.session_dir.clone())
        .ok_or_else(|| anyhow!("no session dir given"))?;
    let reference_topic = opt
        .reference_topic
        .or_else(|| cfg.reference_topic.clone())
        .unwrap_or_else(|| DEFAULT_REFERENCE_TOPIC.to_string());
    let target_topic = opt
        .target_topic
        .or_else(|| cfg.target_topic.clone())
        .unwrap_or_else(|| DEFAULT_TARGET_TOPIC.to_string());
    let out_path = opt
        .out_path
        .or_else(|| cfg.out_path.clone())
        .unwrap_or_else(|| DEFAULT_OUT_PATH.into());

    println!("session_dir = {}", session_dir.display());
    println!("reference_topic = {}", reference_topic);
    println!("target_topic = {}", target_topic);

    let (calibration, reference, target) = imucalib::Calibrator::new(&cfg)
        .run(&session_dir, &reference_topic, &target_topic)
        .context("calibration failed")?;

    println!("\nomega = {}", calibration.axis);
    println!("theta = {}", calibration.angle);
    println!("R = {}", calibration.rotation);

    imucalib::output::write_matrix_file(
        &out_path,
        &calibration.rotation,
        Some((&reference, &target)),
    )
    .with_context(|| format!("can't write {}", out_path.display()))?;

    if let Some(path) = &opt.bincode {
        calibration
            .save(path)
            .with_context(|| format!("can't write {}", path.display()))?;
    }

    Ok(())
}
