//! Test helpers for writing catalog and profile fixtures.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Write raw bytes to a UTF-8 path, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Create a temporary workspace with a UTF-8 root path.
pub(super) fn workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Location of the demo catalog shipped with the repository.
pub(super) fn demo_catalog() -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("demos")
        .join("campus_catalog.json")
}
