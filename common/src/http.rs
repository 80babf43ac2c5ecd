use reqwest::Response;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("sending request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error (status {}): {body}", status.as_u16())]
    Status { status: StatusCode, body: String },

    #[error("decoding response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid credential header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status(),
            _ => None,
        }
    }
}

/// Rejects non-2xx responses, capturing the body for the error message.
pub async fn ensure_success(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}

pub async fn decode_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let resp = ensure_success(resp).await?;
    let bytes = resp.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Drains a successful response whose body carries nothing we need.
pub async fn discard_body(resp: Response) -> Result<(), ApiError> {
    let resp = ensure_success(resp).await?;
    resp.bytes().await?;
    Ok(())
}
