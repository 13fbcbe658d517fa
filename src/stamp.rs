//! Stamping a project with its development version

use crate::analyzer::compute_dev_version_with;
use crate::boundary::{BoundaryWarning, WarningSink};
use crate::config::Config;
use crate::error::Result;
use crate::version_file::{read_version_file, write_version_file};
use std::path::Path;

/// Compute the version of `config.rev` and write it to `config.write_to`
///
/// Relative `write_to` paths are taken relative to `project_dir`. When the
/// version cannot be computed and `fallback_version` is configured, the
/// version already in the file is kept, or the fallback is written.
///
/// # Returns
/// * `Ok(None)` - No `write_to` configured, nothing was done
/// * `Ok(Some(version))` - The version that was written
/// * `Err` - If the version cannot be determined or the file cannot be written
pub fn stamp_version(
    project_dir: &Path,
    config: &Config,
    sink: &dyn WarningSink,
) -> Result<Option<String>> {
    let Some(write_to) = config.write_to.as_ref() else {
        log::debug!("No write_to configured, skipping stamp");
        return Ok(None);
    };
    let path = project_dir.join(write_to);

    let version =
        match compute_dev_version_with(project_dir, &config.rev, config.counter_overflow, sink) {
            Ok(version) => version.to_string(),
            Err(e) => {
                let Some(fallback) = config.fallback_version.as_ref() else {
                    return Err(e);
                };
                let used = read_version_file(&path)?.unwrap_or_else(|| fallback.clone());
                sink.warn(BoundaryWarning::VersionUnavailable {
                    reason: e.to_string(),
                    used: used.clone(),
                });
                used
            }
        };

    write_version_file(&path, &version)?;
    log::info!("Wrote version {} to {}", version, path.display());

    Ok(Some(version))
}
