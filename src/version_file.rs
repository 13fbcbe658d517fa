//! Reading and writing the generated version module

use crate::error::Result;
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Render the contents of a version module for `version`
pub fn render_version_module(version: &str) -> String {
    format!(
        "__all__ = (\"__version__\",)\n__version__ = \"{}\"\n",
        version
    )
}

/// Write the version module, creating parent directories as needed
pub fn write_version_file(path: &Path, version: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render_version_module(version))?;
    Ok(())
}

/// Read the version stored in an existing version module
///
/// # Returns
/// * `Ok(Some(version))` - The file exists and assigns `__version__`
/// * `Ok(None)` - The file is missing or holds no assignment
/// * `Err` - If the file exists but cannot be read
pub fn read_version_file(path: &Path) -> Result<Option<String>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    Ok(Regex::new(r#"(?m)^__version__\s*=\s*["']([^"']+)["']"#)
        .ok()
        .and_then(|re| re.captures(&content))
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_version_module() {
        assert_eq!(
            render_version_module("2.0.0a20220401"),
            "__all__ = (\"__version__\",)\n__version__ = \"2.0.0a20220401\"\n"
        );
    }

    #[test]
    fn test_write_then_read_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("python/pkg/version.py");

        write_version_file(&path, "3.0.0a20220903").unwrap();
        assert_eq!(
            read_version_file(&path).unwrap().as_deref(),
            Some("3.0.0a20220903")
        );
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(
            read_version_file(&temp_dir.path().join("version.py")).unwrap(),
            None
        );
    }

    #[test]
    fn test_read_single_quoted_assignment() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("version.py");
        fs::write(&path, "# generated\n__version__ = '0.1.0'\n").unwrap();
        assert_eq!(read_version_file(&path).unwrap().as_deref(), Some("0.1.0"));
    }
}
