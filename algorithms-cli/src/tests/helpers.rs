//! Temp-file helpers shared by the CLI tests.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// A scratch directory holding a single `request.json`.
#[derive(Debug)]
pub(super) struct RequestDir {
    _dir: TempDir,
    root: Utf8PathBuf,
    request_path: Utf8PathBuf,
}

impl RequestDir {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let request_path = root.join("request.json");
        Self {
            _dir: dir,
            root,
            request_path,
        }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn request_path(&self) -> &Utf8Path {
        &self.request_path
    }

    pub(super) fn write_request(&self, body: &str) {
        write_utf8(&self.request_path, body.as_bytes());
    }
}
