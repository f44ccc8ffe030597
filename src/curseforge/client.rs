use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::{
    curseforge::{error::ApiError, multipart::MultipartBody},
    types::curseforge::{GameVersion, UploadResponse},
};

const TOKEN_HEADER: &str = "X-Api-Token";

/// Thin client over the CurseForge upload API. Every call carries the token
/// header; a body turns the call into a POST.
#[derive(Debug, Clone)]
pub struct CurseForgeClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl CurseForgeClient {
    pub fn new(base_url: &str, token: &str) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().build()?;

        Ok(CurseForgeClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<MultipartBody>,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let request = match body {
            Some(body) => self
                .client
                .post(&url)
                .header(CONTENT_TYPE, body.content_type)
                .body(body.bytes),
            None => self.client.get(&url),
        };

        let response = request
            .header(TOKEN_HEADER, self.token.as_str())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|source| ApiError::Decode { source, body: text })
    }

    pub async fn get_game_versions(&self) -> Result<Vec<GameVersion>, ApiError> {
        self.request("/game/versions", None).await
    }

    pub async fn upload_file(
        &self,
        project_id: &str,
        body: MultipartBody,
    ) -> Result<UploadResponse, ApiError> {
        self.request(&format!("/projects/{}/upload-file", project_id), Some(body))
            .await
    }
}
