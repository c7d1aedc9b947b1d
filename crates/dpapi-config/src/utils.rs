use dpapi_error::DpapiError;
use std::path::{Path, PathBuf};

/// Every file below `dir`, descending at most `max_depth` levels, sorted by path.
pub fn read_dir_recursive(dir: &Path, max_depth: u16) -> Result<Vec<PathBuf>, DpapiError> {
    let mut files = Vec::new();
    let entries = std::fs::read_dir(dir).map_err(|e| {
        DpapiError::IoError(format!("Unable to read config directory {:?}: {}", dir, e))
    })?;
    for entry in entries {
        let path = entry?.path();
        if path.is_dir() {
            if max_depth > 0 {
                files.append(&mut read_dir_recursive(&path, max_depth - 1)?);
            }
        } else {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
