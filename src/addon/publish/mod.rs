pub mod request;

use std::path::{Path, PathBuf};

use crate::{
    addon::{
        publish::request::{UploadError, post_upload_to_curseforge, prepare_upload},
        summary::RunSummary,
    },
    curseforge::client::CurseForgeClient,
    types::{
        addon::AddonEntry,
        curseforge::{ChangelogType, GameVersion, UploadMetadata},
        settings::PublishSettings,
    },
    utils::{
        fs::artifact_path,
        logger::{LogLevel, Logger, format_error_chain},
        spinner::with_spinner,
    },
};

#[derive(Debug)]
pub enum SkipReason {
    NoProjectId,
    MissingArchive(PathBuf),
}

#[derive(Debug)]
pub enum PublishOutcome {
    Uploaded { file_id: Option<i64> },
    Skipped(SkipReason),
    Failed(UploadError),
}

/// Ids of the game versions that belong to `type_id`, in API order.
pub fn filter_game_versions(versions: &[GameVersion], type_id: i64) -> Vec<i64> {
    versions
        .iter()
        .filter_map(|v| v.id_for_type(type_id))
        .collect()
}

/// Upload metadata for one addon. Only the first target version is sent.
pub fn build_metadata(
    addon_name: &str,
    version: &str,
    target_versions: &[i64],
    settings: &PublishSettings,
) -> UploadMetadata {
    UploadMetadata {
        changelog: settings.changelog_url(version),
        changelog_type: ChangelogType::Markdown,
        display_name: format!("{} v{}", addon_name, version),
        game_versions: target_versions.iter().take(1).copied().collect(),
        release_type: settings.release_type,
    }
}

/// One pass over the configured addons. Addons are handled strictly one after
/// the other so the console output follows config order.
pub struct PublishRun<'a> {
    pub client: &'a CurseForgeClient,
    pub settings: &'a PublishSettings,
    pub dist_dir: &'a Path,
    pub version: &'a str,
}

impl PublishRun<'_> {
    pub async fn publish_all(&self, addons: &[AddonEntry], target_versions: &[i64]) -> RunSummary {
        let mut summary = RunSummary::default();

        for addon in addons {
            let outcome = self.publish_addon(addon, target_versions).await;
            report_outcome(&addon.name, &outcome);

            match outcome {
                PublishOutcome::Uploaded { .. } => summary.uploaded += 1,
                PublishOutcome::Skipped(_) => summary.skipped += 1,
                PublishOutcome::Failed(_) => summary.errors += 1,
            }
        }

        summary
    }

    pub async fn publish_addon(&self, addon: &AddonEntry, target_versions: &[i64]) -> PublishOutcome {
        let Some(project_id) = addon.project_id() else {
            return PublishOutcome::Skipped(SkipReason::NoProjectId);
        };

        let zip_path = artifact_path(self.dist_dir, &addon.archive_name(self.version));
        if !zip_path.exists() {
            return PublishOutcome::Skipped(SkipReason::MissingArchive(zip_path));
        }

        let metadata = build_metadata(&addon.name, self.version, target_versions, self.settings);
        let upload = match prepare_upload(&metadata, &zip_path, &self.settings.boundary) {
            Ok(upload) => upload,
            Err(e) => return PublishOutcome::Failed(e),
        };

        let logger = Logger::new();
        let size_line = format!("{} bytes", upload.size);
        let sha_line = format!("sha256 {}", upload.sha256);
        logger.log_message_with_trace(
            LogLevel::Info,
            &format!("Uploading {} to project {}", upload.file_name, project_id),
            vec![size_line.as_str(), sha_line.as_str()],
        );

        let collisions = upload.form.boundary_collisions().join(", ");
        if !collisions.is_empty() {
            logger.log_message(
                LogLevel::Warning,
                &format!(
                    "Multipart boundary {:?} occurs inside part(s) {}; the server may misread the body",
                    self.settings.boundary, collisions
                ),
            );
        }

        let spinner = with_spinner(&format!("Uploading {}...", upload.file_name));
        let result = post_upload_to_curseforge(self.client, project_id, upload).await;
        spinner.finish_and_clear();

        match result {
            Ok(file_id) => PublishOutcome::Uploaded { file_id },
            Err(e) => PublishOutcome::Failed(e),
        }
    }
}

fn report_outcome(name: &str, outcome: &PublishOutcome) {
    let logger = Logger::new();
    match outcome {
        PublishOutcome::Uploaded { file_id } => logger.log_message(
            LogLevel::Ok,
            &format!(
                "{:<22} → CurseForge file ID {}",
                name,
                file_id.map_or_else(|| "unknown".to_string(), |id| id.to_string())
            ),
        ),
        PublishOutcome::Skipped(SkipReason::NoProjectId) => logger.log_message(
            LogLevel::Skip,
            &format!("{:<22} curseProjectId not set in config", name),
        ),
        PublishOutcome::Skipped(SkipReason::MissingArchive(path)) => logger.log_message(
            LogLevel::Skip,
            &format!("{:<22} zip not found: {}", name, path.display()),
        ),
        PublishOutcome::Failed(e) => {
            logger.log_message(LogLevel::Fail, &format!("{:<22} : {}", name, format_error_chain(e)))
        }
    }
}
