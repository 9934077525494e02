//! File helpers shared by commands that write records.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Creates the parent directory of `path` if it is missing.
///
/// # Example
///
/// ```rust,no_run
/// # use showdown_cli::io_utils::ensure_parent_dir;
/// ensure_parent_dir(std::path::Path::new("data/out/games.csv")).unwrap();
/// ```
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
        }
    }
    Ok(())
}

/// Opens `path` for writing, truncating any previous content.
pub fn create_output(path: &Path) -> Result<BufWriter<File>, String> {
    ensure_parent_dir(path)?;
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| format!("Failed to open output file {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/c.csv");
        ensure_parent_dir(&path).unwrap();
        assert!(dir.path().join("a/b").is_dir());
    }

    #[test]
    fn bare_file_name_needs_no_directory() {
        assert!(ensure_parent_dir(Path::new("games.csv")).is_ok());
    }

    #[test]
    fn create_output_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/games.csv");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "old content\n").unwrap();
        let mut w = create_output(&path).unwrap();
        writeln!(w, "new").unwrap();
        drop(w);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new\n");
    }
}
