use serde::{Deserialize, Serialize};

/// One entry of `GET /game/versions`. Records missing either number never
/// match a type filter but do not spoil the rest of the list.
#[derive(Debug, Clone, Deserialize)]
pub struct GameVersion {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "gameVersionTypeID", default)]
    pub game_version_type_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

impl GameVersion {
    /// The version id when this record belongs to `type_id`.
    pub fn id_for_type(&self, type_id: i64) -> Option<i64> {
        match self.game_version_type_id {
            Some(t) if t == type_id => self.id,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    Release,
    Beta,
    Alpha,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangelogType {
    Markdown,
}

/// The `metadata` part of an upload request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadMetadata {
    pub changelog: String,
    pub changelog_type: ChangelogType,
    pub display_name: String,
    pub game_versions: Vec<i64>,
    pub release_type: ReleaseType,
}

/// Body of a successful upload. The file is stored even when the server
/// leaves out the id, so it is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub id: Option<i64>,
}
