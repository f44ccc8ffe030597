use crate::types::settings::DEFAULT_API_BASE_URL;

pub fn get_curseforge_api_base_url() -> String {
    std::env::var("CURSEFORGE_API_URL")
        .ok()
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}
