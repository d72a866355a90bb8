//! Companion file path derivation.
//!
//! A JAM base is a family of files sharing a stem: `GENERAL.JHR` (headers),
//! `GENERAL.JDT` (text), and so on. The case of the header extension decides
//! the case of the derived one.

use std::path::{Path, PathBuf};

use crate::jam::types::error::{JamError, Result};

const HEADER_EXT_UPPER: &str = ".JHR";
const HEADER_EXT_LOWER: &str = ".jhr";

/// Derives a companion path by replacing the header extension.
///
/// - `base.JHR` → `base.` + `extension` upper-cased
/// - `base.jhr` → `base.` + `extension` as given
///
/// Mixed-case extensions such as `.Jhr` are rejected.
pub fn related_path(header_path: impl AsRef<Path>, extension: &str) -> Result<PathBuf> {
    let header_path = header_path.as_ref();
    let unsupported = || JamError::UnsupportedExtension(header_path.display().to_string());

    let path_str = header_path.to_str().ok_or_else(unsupported)?;
    if let Some(stem) = path_str.strip_suffix(HEADER_EXT_UPPER) {
        Ok(PathBuf::from(format!("{}.{}", stem, extension.to_uppercase())))
    } else if let Some(stem) = path_str.strip_suffix(HEADER_EXT_LOWER) {
        Ok(PathBuf::from(format!("{}.{}", stem, extension)))
    } else {
        Err(unsupported())
    }
}
