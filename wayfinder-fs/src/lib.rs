//! Capability-based file access for Wayfinder tools.
//!
//! Paths are UTF-8 (`camino`) and every lookup goes through a `cap-std`
//! directory handle opened with ambient authority.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io::{self, Read};

/// Open a UTF-8 file path for reading.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Read the whole file at `path` as UTF-8 text.
pub fn read_utf8_file(path: &Utf8Path) -> io::Result<String> {
    let mut file = open_utf8_file(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Open the parent directory of `path` and return it with the file name.
fn open_parent(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, &str)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} has no file name")))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Report whether `path` exists and is a regular file.
///
/// A missing file is an error of kind [`io::ErrorKind::NotFound`], so callers
/// can tell it apart from a directory.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_parent(path)?;
    dir.metadata(name).map(|meta| meta.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn workspace() -> (TempDir, Utf8PathBuf) {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        (dir, root)
    }

    #[rstest]
    fn reads_file_contents(workspace: (TempDir, Utf8PathBuf)) {
        let (_dir, root) = workspace;
        let path = root.join("places.json");
        std::fs::write(&path, "[]\n").expect("write places");
        assert_eq!(read_utf8_file(&path).expect("read places"), "[]\n");
    }

    #[rstest]
    fn distinguishes_files_from_directories(workspace: (TempDir, Utf8PathBuf)) {
        let (_dir, root) = workspace;
        let file = root.join("places.json");
        std::fs::write(&file, "[]").expect("write places");
        let nested = root.join("nested");
        std::fs::create_dir(&nested).expect("create dir");
        assert!(file_is_file(&file).expect("inspect file"));
        assert!(!file_is_file(&nested).expect("inspect dir"));
    }

    #[rstest]
    fn missing_files_report_not_found(workspace: (TempDir, Utf8PathBuf)) {
        let (_dir, root) = workspace;
        let err = file_is_file(&root.join("absent.json")).expect_err("missing file");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
