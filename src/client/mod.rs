//! Typed consumer of the articles API. Reshapes wire records into the
//! display model the dashboard and landing pages render, and reshapes edits
//! back into store field names. No business logic lives here.

mod articles;
mod view;

pub use articles::{ArticleClient, ArticlePayload};
pub use view::ArticleView;

use serde::Deserialize;
use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded {status}: {message}")]
    Api { status: u16, message: String },
}

/// Error payloads are only mined for their `message`; everything else in the
/// body is ignored.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

impl ClientError {
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) if !body.message.is_empty() => body.message,
            _ => "request failed".to_string(),
        };
        Self::Api { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(_) => None,
        }
    }
}
