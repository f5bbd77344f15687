//! Reading mapping database files

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read a mapping database as UTF-8 text
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| Error::InputUnreadable {
        path: path.to_path_buf(),
        source: e,
    })
}
