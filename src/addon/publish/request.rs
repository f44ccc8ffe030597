use std::path::{Path, PathBuf};

use crate::{
    curseforge::{
        client::CurseForgeClient,
        error::ApiError,
        multipart::{MultipartBuilder, Part},
    },
    types::curseforge::UploadMetadata,
    utils::fs::{file_name_of, sha256_hex},
};

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode upload metadata")]
    Metadata(#[from] serde_json::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// A fully buffered upload body plus the facts worth logging about it.
#[derive(Debug)]
pub struct PreparedUpload {
    pub form: MultipartBuilder,
    pub file_name: String,
    pub size: usize,
    pub sha256: String,
}

/// Reads the archive into memory and lays out the two-part upload form:
/// `metadata` first, then `file`.
pub fn prepare_upload(
    metadata: &UploadMetadata,
    zip_path: &Path,
    boundary: &str,
) -> Result<PreparedUpload, UploadError> {
    let meta_bytes = serde_json::to_vec(metadata)?;
    let file_bytes = std::fs::read(zip_path).map_err(|source| UploadError::Read {
        path: zip_path.to_path_buf(),
        source,
    })?;

    let file_name = file_name_of(zip_path);
    let size = file_bytes.len();
    let sha256 = sha256_hex(&file_bytes);

    let form = MultipartBuilder::new(boundary)
        .part(Part::new("metadata", meta_bytes))
        .part(
            Part::new("file", file_bytes)
                .file_name(file_name.clone())
                .mime("application/zip"),
        );

    Ok(PreparedUpload {
        form,
        file_name,
        size,
        sha256,
    })
}

/// Sends a prepared upload and returns the id CurseForge assigned to the file,
/// when the response names one.
pub async fn post_upload_to_curseforge(
    client: &CurseForgeClient,
    project_id: &str,
    upload: PreparedUpload,
) -> Result<Option<i64>, UploadError> {
    let response = client.upload_file(project_id, upload.form.build()).await?;
    Ok(response.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::curseforge::{ChangelogType, ReleaseType};

    fn metadata() -> UploadMetadata {
        UploadMetadata {
            changelog: "https://example.com/v1.2.0".to_string(),
            changelog_type: ChangelogType::Markdown,
            display_name: "Foo v1.2.0".to_string(),
            game_versions: vec![7],
            release_type: ReleaseType::Release,
        }
    }

    #[test]
    fn body_holds_metadata_then_file() {
        let dir = tempfile::tempdir().unwrap();
        let zip = dir.path().join("Foo-1.2.0.zip");
        std::fs::write(&zip, b"PK\x03\x04payload").unwrap();

        let prepared = prepare_upload(&metadata(), &zip, "BND").unwrap();
        assert_eq!(prepared.file_name, "Foo-1.2.0.zip");
        assert_eq!(prepared.size, 11);
        assert!(prepared.form.boundary_collisions().is_empty());

        let body = prepared.form.build();
        let text = String::from_utf8_lossy(&body.bytes);
        let meta_at = text.find("name=\"metadata\"").unwrap();
        let file_at = text
            .find("name=\"file\"; filename=\"Foo-1.2.0.zip\"\r\nContent-Type: application/zip")
            .unwrap();
        assert!(meta_at < file_at);
        assert!(text.contains("\"displayName\":\"Foo v1.2.0\""));
        assert!(text.contains("\"gameVersions\":[7]"));
        assert_eq!(text.matches("--BND\r\n").count(), 2);
        assert!(text.ends_with("PK\u{3}\u{4}payload\r\n--BND--\r\n"));
    }

    #[test]
    fn unreadable_archive_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = prepare_upload(&metadata(), &dir.path().join("missing.zip"), "BND").unwrap_err();
        assert!(matches!(err, UploadError::Read { .. }));
    }
}
