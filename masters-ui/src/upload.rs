use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::http_client::ApiClient;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub filename: String,
    pub original_name: String,
    /// Server-relative path, e.g. `/uploads/images/abc.png`.
    pub path: String,
    pub size: u64,
}

/// Image storage used by entities with an `imagePath`.
#[derive(Debug, Clone)]
pub struct UploadClient {
    api: ApiClient,
}

impl UploadClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn upload_image(&self, file_name: &str, bytes: Vec<u8>) -> Result<UploadResponse> {
        log::info!("Uploading image {} ({} bytes)", file_name, bytes.len());
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);
        self.api.post_multipart("/upload/image", form).await
    }

    /// The stored image at `path` as a `data:` URL.
    pub async fn fetch_base64(&self, path: &str) -> Result<String> {
        let body = self.api.get_text("/upload/base64", &[("path", path)]).await?;
        Ok(data_url_from_body(&body))
    }

    /// Absolute URL for a stored image path. Absolute URLs pass through,
    /// `/uploads...` paths are prefixed with the API base, bare file names
    /// are looked up under `/uploads/images/`.
    pub fn image_url(&self, path: Option<&str>) -> String {
        let Some(path) = path.filter(|p| !p.is_empty()) else {
            return String::new();
        };
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if path.starts_with("/uploads") {
            return format!("{}{}", self.api.base_url(), path);
        }
        format!("{}/uploads/images/{}", self.api.base_url(), path)
    }
}

fn data_url_from_body(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(s)) => s,
        Ok(serde_json::Value::Object(map)) => ["dataUrl", "data", "url"]
            .iter()
            .find_map(|key| map.get(*key).and_then(|v| v.as_str()))
            .map(str::to_string)
            .unwrap_or_else(|| body.to_string()),
        _ => body.trim().to_string(),
    }
}
