use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// The `*.txt` files directly inside `dir`, sorted by name.
pub fn text_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("listing {:?}", dir))? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// File name as shown in logs and feature tables.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Writes `bytes` to a sibling temporary file, then renames it over `path`.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = path.with_file_name(format!(".{}.tmp", display_name(path)));
    fs::write(&tmp, bytes).with_context(|| format!("writing {:?}", tmp))?;
    fs::rename(&tmp, path).with_context(|| format!("moving {:?} to {:?}", tmp, path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        for name in ["b.txt", "a.txt", "notes.md"] {
            fs::write(dir.path().join(name), "x_NN").expect("write");
        }
        fs::create_dir(dir.path().join("sub.txt")).expect("mkdir");
        let names: Vec<String> = text_files(dir.path())
            .expect("list")
            .iter()
            .map(|p| display_name(p))
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_write_atomic_replaces() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.csv");
        write_atomic(&path, b"old").expect("write");
        write_atomic(&path, b"new").expect("write");
        assert_eq!(fs::read_to_string(&path).expect("read"), "new");
        assert_eq!(fs::read_dir(dir.path()).expect("list").count(), 1);
    }
}
