pub mod analyzer;
pub mod boundary;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod stamp;
pub mod ui;
pub mod version_file;

pub use analyzer::{compute_dev_version, compute_dev_version_with, DevVersionAnalyzer};
pub use domain::{CounterOverflow, DevVersion};
pub use error::{DevVersionError, Result};
