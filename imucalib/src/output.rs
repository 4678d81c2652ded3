//! Human-readable calibration results.

use crate::Error;
use crate::ResidualReport;
use crate::VectorSet;
use std::io::Write;

/// write the rotation and, if given, the residual statistics
pub fn write_report<W: Write>(
    w: &mut W,
    rotation: &ndarray::Array2<f64>,
    report: Option<&ResidualReport>,
) -> Result<(), Error> {
    writeln!(w, "R -\n{}", rotation)?;

    if let Some(report) = report {
        writeln!(w, "\n{}", report)?;
    }

    Ok(())
}

/// write the rotation to `path`
///
/// When both sets are given, the rotation is verified against them and the
/// residual statistics are appended.
pub fn write_matrix_file<P: AsRef<std::path::Path>>(
    path: P,
    rotation: &ndarray::Array2<f64>,
    sets: Option<(&VectorSet, &VectorSet)>,
) -> Result<(), Error> {
    let report = match sets {
        Some((reference, target)) => Some(crate::verify::verify(rotation, reference, target)?),
        None => None,
    };

    let mut file = std::io::BufWriter::new(std::fs::File::create(path.as_ref())?);
    write_report(&mut file, rotation, report.as_ref())?;
    file.flush()?;

    log::info!("wrote {}", path.as_ref().display());
    Ok(())
}
