//! Payloads exchanged with the page relay
//!
//! The relay answers `GET <relay>?url=<target>` with either
//! `{"contents": "<raw page>"}` or `{"error": "...", "details": "..."}`.

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use url::Url;

/// Query parameter carrying the target URL
pub const TARGET_PARAM: &str = "url";

/// Body of a relay response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelayResponse {
    Contents {
        contents: String,
    },
    Error {
        error: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
}

impl RelayResponse {
    pub fn contents(contents: impl Into<String>) -> Self {
        RelayResponse::Contents {
            contents: contents.into(),
        }
    }

    pub fn error(error: impl Into<String>, details: Option<String>) -> Self {
        RelayResponse::Error {
            error: error.into(),
            details,
        }
    }

    /// The page text, or an error when the relay reported one or sent
    /// nothing usable
    pub fn into_contents(self) -> Result<String> {
        match self {
            RelayResponse::Contents { contents } if !contents.is_empty() => Ok(contents),
            RelayResponse::Contents { .. } => Err(anyhow!(
                "relay returned no content; the URL may not exist or the relay failed"
            )),
            RelayResponse::Error { error, details } => match details {
                Some(details) => Err(anyhow!("relay error: {error} ({details})")),
                None => Err(anyhow!("relay error: {error}")),
            },
        }
    }
}

/// Address of the relay call that fetches `target`
pub fn relay_request_url(relay: &Url, target: &str) -> Url {
    let mut request = relay.clone();
    request.query_pairs_mut().append_pair(TARGET_PARAM, target);
    request
}
