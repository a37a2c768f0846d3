use contracts::api::ApiEnvelope;
use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_client::{api_base, ApiError};

pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let url = format!("{}/api/auth/login", api_base());
    let resp = Request::post(&url)
        .header("Accept", "application/json")
        .json(&LoginRequest { username, password })
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = resp.status();
    let ok = resp.ok();
    let text = resp
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !ok {
        let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&text)
            .ok()
            .and_then(|env| env.message)
            .unwrap_or_else(|| format!("HTTP {}", status));
        return Err(ApiError::Server(message));
    }

    let env: ApiEnvelope<LoginResponse> = serde_json::from_str(&text)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    env.data
        .ok_or_else(|| ApiError::Decode("login response had no data".to_string()))
}
