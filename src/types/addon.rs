use serde::{Deserialize, Deserializer};

/// Shape of `config.json`. Only the `addons` list matters here; anything else
/// in the file belongs to other tooling and is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddonsConfig {
    #[serde(default)]
    pub addons: Vec<AddonEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddonEntry {
    pub name: String,
    #[serde(
        rename = "curseProjectId",
        default,
        deserialize_with = "deserialize_project_id"
    )]
    pub curse_project_id: Option<String>,
}

impl AddonEntry {
    /// The trimmed project id, or `None` when the addon is not set up for publishing.
    pub fn project_id(&self) -> Option<&str> {
        self.curse_project_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// File name the packaging step produces for this addon.
    pub fn archive_name(&self, version: &str) -> String {
        format!("{}-{}.zip", self.name, version)
    }
}

// Project ids are usually written as strings, but hand-edited configs
// sometimes carry bare numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawProjectId {
    Text(String),
    Number(serde_json::Number),
}

fn deserialize_project_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawProjectId>::deserialize(deserializer)?;
    Ok(raw.map(|r| match r {
        RawProjectId::Text(s) => s,
        RawProjectId::Number(n) => n.to_string(),
    }))
}
