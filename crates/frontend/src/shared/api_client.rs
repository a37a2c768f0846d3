//! Remote data gateway: one round-trip per operation against a fixed
//! resource endpoint, normalized into `Result` plus the response envelope.
//!
//! Every mutation is followed by a full list refetch at the call site; the
//! UI always reflects server truth after a write, never an optimistic
//! guess.

use contracts::api::{ApiEnvelope, ListPage};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::storage;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// Request never completed (offline, DNS, CORS).
    #[error("Network error: {0}")]
    Transport(String),
    /// Non-2xx with a business message; shown to the user verbatim.
    #[error("{0}")]
    Server(String),
    /// 2xx with a body we could not understand.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Toast text: the server's own message when it sent one, otherwise a
    /// generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server(msg) => msg.clone(),
            ApiError::Transport(_) => "Request failed. Check your connection and try again.".to_string(),
            ApiError::Decode(_) => "Something went wrong. Please try again.".to_string(),
        }
    }
}

/// Base URL for API requests; the backend always listens on port 3000.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::auth_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn read_envelope<T: DeserializeOwned>(resp: Response) -> Result<ApiEnvelope<T>, ApiError> {
    let status = resp.status();
    let ok = resp.ok();
    let text = resp
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !ok {
        // Prefer the server's own message when the error body carries one.
        let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&text)
            .ok()
            .and_then(|env| env.message)
            .unwrap_or_else(|| format!("HTTP {}", status));
        return Err(ApiError::Server(message));
    }

    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Gateway for one REST resource. Cheap to copy; pages keep one per list.
#[derive(Debug, Clone, Copy)]
pub struct ResourceClient {
    base_path: &'static str,
}

impl ResourceClient {
    pub const fn new(base_path: &'static str) -> Self {
        Self { base_path }
    }

    fn url(&self, suffix: &str) -> String {
        format!("{}{}{}", api_base(), self.base_path, suffix)
    }

    /// Fetch one page (1-based) or, with `None`, the whole collection.
    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        page: Option<usize>,
    ) -> Result<ListPage<T>, ApiError> {
        let url = match page {
            Some(p) => self.url(&format!("?page={}", p)),
            None => self.url(""),
        };
        let resp = with_auth(Request::get(&url))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let env: ApiEnvelope<Vec<T>> = read_envelope(resp).await?;
        let items = env.data.unwrap_or_default();
        let total_items = env.total_items.unwrap_or(items.len());
        Ok(ListPage { items, total_items })
    }

    pub async fn create<B, T>(&self, payload: &B) -> Result<Option<T>, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let resp = with_auth(Request::post(&self.url("")))
            .header("Accept", "application/json")
            .json(payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let env: ApiEnvelope<T> = read_envelope(resp).await?;
        Ok(env.data)
    }

    pub async fn update<B, T>(&self, id: &str, payload: &B) -> Result<Option<T>, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let resp = with_auth(Request::patch(&self.url(&format!("/{}", id))))
            .header("Accept", "application/json")
            .json(payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let env: ApiEnvelope<T> = read_envelope(resp).await?;
        Ok(env.data)
    }

    /// Create with a multipart body (record fields + attachment). The
    /// caller is responsible for keeping the previously stored attachment
    /// reference in the form data when no new file was chosen.
    pub async fn create_multipart<T: DeserializeOwned>(
        &self,
        form: web_sys::FormData,
    ) -> Result<Option<T>, ApiError> {
        let resp = with_auth(Request::post(&self.url("")))
            .header("Accept", "application/json")
            .body(form)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let env: ApiEnvelope<T> = read_envelope(resp).await?;
        Ok(env.data)
    }

    pub async fn update_multipart<T: DeserializeOwned>(
        &self,
        id: &str,
        form: web_sys::FormData,
    ) -> Result<Option<T>, ApiError> {
        let resp = with_auth(Request::patch(&self.url(&format!("/{}", id))))
            .header("Accept", "application/json")
            .body(form)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let env: ApiEnvelope<T> = read_envelope(resp).await?;
        Ok(env.data)
    }

    /// Delete one record. Callers must have taken the user through an
    /// explicit confirmation step first.
    pub async fn remove(&self, id: &str) -> Result<(), ApiError> {
        let resp = with_auth(Request::delete(&self.url(&format!("/{}", id))))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let _: ApiEnvelope<serde_json::Value> = read_envelope(resp).await?;
        Ok(())
    }
}
