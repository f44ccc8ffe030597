use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

pub fn artifact_path(dist_dir: &Path, archive_name: &str) -> PathBuf {
    dist_dir.join(archive_name)
}

pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
