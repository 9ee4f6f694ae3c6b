use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Ensure `dir` exists and holds nothing from a previous run.
///
/// Destructive: every immediate child is deleted — regular files and symlinks
/// unlinked, subdirectories removed recursively. A child that cannot be
/// deleted is logged and skipped; the run continues. A missing directory is
/// created with any missing parents.
pub fn prepare_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
            let entry = entry?;
            let path = entry.path();
            let ft = match entry.file_type() {
                Ok(ft) => ft,
                Err(e) => {
                    eprintln!("Failed to delete {}. Reason: {}", path.display(), e);
                    continue;
                }
            };
            let res = if ft.is_dir() { fs::remove_dir_all(&path) } else { fs::remove_file(&path) };
            if let Err(e) = res {
                eprintln!("Failed to delete {}. Reason: {}", path.display(), e);
            }
        }
    } else {
        fs::create_dir_all(dir).with_context(|| format!("create dir {}", dir.display()))?;
    }
    Ok(())
}
