//! Transport shared by every resource client: URL building, JSON verbs,
//! error decoding and the global loading indicator.

use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::config::ClientConfig;
use crate::errors::{ApiError, Result};

/// Count of requests in flight. Cloning shares the counter.
#[derive(Debug, Clone, Default)]
pub struct LoadingState {
    active: Arc<AtomicUsize>,
}

impl LoadingState {
    pub fn begin(&self) -> LoadingGuard {
        self.active.fetch_add(1, Ordering::SeqCst);
        LoadingGuard {
            active: Arc::clone(&self.active),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.active_requests() > 0
    }

    pub fn active_requests(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }
}

/// Marks one request as in flight until dropped.
#[derive(Debug)]
pub struct LoadingGuard {
    active: Arc<AtomicUsize>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    production: bool,
    loading: LoadingState,
    skip_loading: bool,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .unwrap_or_else(|e| {
                log::warn!("HTTP client setup failed ({}), using default timeouts", e);
                reqwest::Client::new()
            });

        Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            production: config.production,
            loading: LoadingState::default(),
            skip_loading: false,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn loading(&self) -> &LoadingState {
        &self.loading
    }

    /// A handle whose requests do not drive the loading indicator.
    pub fn without_loading(&self) -> Self {
        Self {
            skip_loading: true,
            ..self.clone()
        }
    }

    /// `{base}{resource}[/{id}][/{subpath}]`, with leading slashes of the
    /// sub-path stripped.
    pub fn build_url(&self, resource: &str, id: Option<&str>, subpath: Option<&str>) -> String {
        let mut url = format!("{}{}", self.base_url, resource);
        if let Some(id) = id.filter(|id| !id.is_empty()) {
            url.push('/');
            url.push_str(id);
        }
        if let Some(sub) = subpath.map(|s| s.trim_start_matches('/')).filter(|s| !s.is_empty()) {
            url.push('/');
            url.push_str(sub);
        }
        url
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let response = self.send(Method::GET, path, |req| req).await?;
        self.read_json(response).await
    }

    /// GET with query parameters; `None` values are left out.
    pub async fn get_with_query<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, Option<String>)],
    ) -> Result<R> {
        let pairs: Vec<(&str, &str)> = query
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (*k, v)))
            .collect();
        let response = self.send(Method::GET, path, |req| req.query(&pairs)).await?;
        self.read_json(response).await
    }

    pub async fn get_text(&self, path: &str, query: &[(&str, &str)]) -> Result<String> {
        let response = self.send(Method::GET, path, |req| req.query(query)).await?;
        Ok(response.text().await?)
    }

    pub async fn post<T: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R> {
        let response = self.send(Method::POST, path, |req| req.json(body)).await?;
        self.read_json(response).await
    }

    /// POST whose response body, if any, is not needed.
    pub async fn post_discard<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<()> {
        self.send(Method::POST, path, |req| req.json(body)).await?;
        Ok(())
    }

    pub async fn patch<T: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R> {
        let response = self.send(Method::PATCH, path, |req| req.json(body)).await?;
        self.read_json(response).await
    }

    pub async fn put<T: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R> {
        let response = self.send(Method::PUT, path, |req| req.json(body)).await?;
        self.read_json(response).await
    }

    /// DELETE; any response body is ignored.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send(Method::DELETE, path, |req| req).await?;
        Ok(())
    }

    pub async fn post_multipart<R: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<R> {
        let response = self
            .send(Method::POST, path, |req| req.multipart(form))
            .await?;
        self.read_json(response).await
    }

    async fn send<F>(&self, method: Method, path: &str, build: F) -> Result<Response>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let url = if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        };
        let parsed = Url::parse(&url).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", url, e)))?;

        let _guard = (!self.skip_loading).then(|| self.loading.begin());
        log::debug!("{} {}", method, parsed);

        let response = build(self.client.request(method.clone(), parsed))
            .send()
            .await
            .map_err(|e| {
                self.log_failure(&method, &url, &e.to_string());
                ApiError::Network(e)
            })?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let error = ApiError::Status {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            message: extract_message(&body),
        };
        self.log_failure(&method, &url, &error.user_message());
        Err(error)
    }

    async fn read_json<R: DeserializeOwned>(&self, response: Response) -> Result<R> {
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    fn log_failure(&self, method: &Method, url: &str, message: &str) {
        if !self.production {
            log::error!("HTTP {} {} failed: {}", method, url, message);
        }
    }
}

/// Pulls `message` out of a JSON error body. Validation pipes may send it as
/// a list of strings, which are joined.
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("message")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(|v| v.as_str()).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        _ => None,
    }
}
