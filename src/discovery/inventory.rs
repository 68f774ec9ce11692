use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::core::error::{ImgSweepError, Result};

/// List the names of regular files directly inside `dir`.
///
/// No recursion and no filtering by name or extension. Symlinks count when
/// they resolve to a regular file. A directory that cannot be listed is an
/// error, there is nothing meaningful to compare against without it.
pub fn collect_inventory(dir: &Path) -> Result<BTreeSet<String>> {
    let to_inventory_error = |source| ImgSweepError::Inventory {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = BTreeSet::new();
    for entry in fs::read_dir(dir).map_err(to_inventory_error)? {
        let entry = entry.map_err(to_inventory_error)?;
        if entry.path().is_file() {
            names.insert(entry.file_name().to_string_lossy().into_owned());
        }
    }

    Ok(names)
}
