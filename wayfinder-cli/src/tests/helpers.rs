//! Test helpers for writing place batches to disk.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

pub(super) const SAMPLE_PLACES: &str = r#"[
    {"name": "Natural History Museum", "coordinate": {"latitude": 51.4967, "longitude": -0.1764},
     "category": "museum", "identity": "nhm"},
    {"name": "Science Museum", "coordinate": {"latitude": 51.4978, "longitude": -0.1745},
     "category": "museum", "identity": "sci"},
    {"name": "Hyde Park", "coordinate": {"latitude": 51.5073, "longitude": -0.1657},
     "category": "park", "identity": "hyde"},
    {"name": "Museum Café", "coordinate": {"latitude": 51.4968, "longitude": -0.1763},
     "identity": "cafe"},
    {"name": "Museum Tavern", "coordinate": {"latitude": 51.5180, "longitude": -0.1262}}
]"#;

pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }
}
