/// Returns the CLI version: `CFPUBLISH_CLI_VERSION` when set, otherwise the
/// compile-time package version.
pub fn get_version() -> String {
    if let Ok(v) = std::env::var("CFPUBLISH_CLI_VERSION") {
        if !v.trim().is_empty() {
            return v.trim().to_string();
        }
    }

    env!("CARGO_PKG_VERSION").to_string()
}
