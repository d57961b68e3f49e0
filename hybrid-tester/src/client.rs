use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::api::{CompareRequest, DetectRequest, Envelope, FamilyRequest, StatusAction};
use crate::error::Result;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

pub const STATUS_PATH: &str = "/api/hybrid/status";
pub const COMPARE_PATH: &str = "/api/rekognition/compare-faces";
pub const DETECT_PATH: &str = "/api/rekognition/detect-faces";
pub const FAMILY_PATH: &str = "/api/family-similarity";

/// Status code and raw body of a completed request.
///
/// Non-2xx answers are not errors here; probes decide what they mean.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    pub fn envelope<T: DeserializeOwned>(&self) -> Result<Envelope<T>> {
        self.json()
    }
}

/// Thin client for the hybrid face-analysis service.
#[derive(Clone)]
pub struct HybridClient {
    base: String,
    client: Client,
}

impl HybridClient {
    /// Create a client targeting `base` (e.g. `http://localhost:3000`).
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            base,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn send(&self, req: RequestBuilder) -> Result<Reply> {
        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        debug!(%status, bytes = body.len(), "response received");
        Ok(Reply { status, body })
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Reply> {
        let url = self.url(path);
        debug!(%url, "POST");
        self.send(self.client.post(url).json(body)).await
    }

    /// `GET /api/hybrid/status`
    pub async fn status(&self) -> Result<Reply> {
        let url = self.url(STATUS_PATH);
        debug!(%url, "GET");
        self.send(self.client.get(url)).await
    }

    /// `POST /api/hybrid/status`
    pub async fn status_action(&self, action: &StatusAction) -> Result<Reply> {
        self.post(STATUS_PATH, action).await
    }

    pub async fn compare_faces(&self, req: &CompareRequest) -> Result<Reply> {
        self.post(COMPARE_PATH, req).await
    }

    pub async fn detect_faces(&self, req: &DetectRequest) -> Result<Reply> {
        self.post(DETECT_PATH, req).await
    }

    pub async fn family_similarity(&self, req: &FamilyRequest) -> Result<Reply> {
        self.post(FAMILY_PATH, req).await
    }
}
