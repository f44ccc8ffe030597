use std::path::{Path, PathBuf};

use crate::types::addon::AddonsConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn load_addons_config(path: &Path) -> Result<AddonsConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_addons_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "addons": [ { "name": "Foo", "curseProjectId": "111" }, { "name": "Bar", "curseProjectId": "" } ] }"#,
        )
        .unwrap();

        let cfg = load_addons_config(&path).unwrap();
        let names: Vec<&str> = cfg.addons.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Foo", "Bar"]);
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_addons_config(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ \"addons\": [ ").unwrap();
        assert!(matches!(
            load_addons_config(&path).unwrap_err(),
            ConfigError::Parse { .. }
        ));
    }
}
