use std::path::PathBuf;

use crate::types::curseforge::ReleaseType;

pub const DEFAULT_API_BASE_URL: &str = "https://wow.curseforge.com/api";
/// Burning Crusade Classic / TBC Anniversary.
pub const DEFAULT_GAME_VERSION_TYPE_ID: i64 = 67;
pub const DEFAULT_BOUNDARY: &str = "CF_BOUNDARY_SLYSUITE_UPLOAD";
pub const DEFAULT_CHANGELOG_URL: &str =
    "https://github.com/kyleian/wow-addons/releases/tag/v{version}";
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Everything a publish run needs besides the token and the addon list.
#[derive(Debug, Clone)]
pub struct PublishSettings {
    pub api_base_url: String,
    pub game_version_type_id: i64,
    pub boundary: String,
    pub changelog_url_template: String,
    pub release_type: ReleaseType,
    pub config_path: PathBuf,
}

impl Default for PublishSettings {
    fn default() -> Self {
        PublishSettings {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            game_version_type_id: DEFAULT_GAME_VERSION_TYPE_ID,
            boundary: DEFAULT_BOUNDARY.to_string(),
            changelog_url_template: DEFAULT_CHANGELOG_URL.to_string(),
            release_type: ReleaseType::Release,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

impl PublishSettings {
    pub fn changelog_url(&self, version: &str) -> String {
        self.changelog_url_template.replace("{version}", version)
    }
}
