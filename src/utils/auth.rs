pub const PRIMARY_TOKEN_VAR: &str = "CURSEFORGE_TOKEN";
pub const FALLBACK_TOKEN_VAR: &str = "CF_API_KEY";

/// Reads the upload token from the environment, primary variable first.
pub fn load_api_token() -> Option<String> {
    resolve_api_token(|name| std::env::var(name).ok())
}

pub fn resolve_api_token<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    [PRIMARY_TOKEN_VAR, FALLBACK_TOKEN_VAR]
        .iter()
        .filter_map(|name| lookup(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}
