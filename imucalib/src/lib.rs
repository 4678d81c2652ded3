//! Rotational offset between two rigidly mounted IMUs.
//!
//! Every recording session is reduced to one gravity direction per sensor.
//! The rotation axis is the direction in which the two sets of directions
//! don't differ, the angle is their mean separation about that axis and the
//! rotation matrix follows from Rodrigues' formula.

pub mod aggregate;
pub mod angle;
pub mod axis;
mod calibration;
pub mod config;
mod data;
pub mod datareader;
mod error;
pub mod output;
pub mod rotation;
pub mod vectorset;
pub mod verify;

pub use calibration::*;
pub use data::*;
pub use error::*;
pub use vectorset::{UnitAxis, VectorSet};
pub use verify::ResidualReport;
