//! Posting payloads to the form endpoint

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::encode::{PartData, Payload};

/// The endpoint the marketing site posts to: the page's own path, where
/// the static host's form handler intercepts the request.
pub const DEFAULT_ENDPOINT: &str = "/";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Delivery of an encoded payload. The pipeline only needs the response
/// status back; tests substitute a canned implementation.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, payload: Payload) -> Result<u16, TransportError>;
}

/// The production transport: posts over HTTP with a request timeout so a
/// stalled endpoint resolves the attempt as a failure instead of hanging
/// the submit button.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, payload: Payload) -> Result<u16, TransportError> {
        let request = self.client.post(&self.endpoint);
        let response = match payload {
            Payload::UrlEncoded(pairs) => request.form(&pairs).send().await?,
            Payload::Multipart(parts) => {
                let mut multipart = reqwest::multipart::Form::new();
                for part in parts {
                    match part.data {
                        PartData::Text(text) => {
                            multipart = multipart.text(part.name, text);
                        }
                        PartData::File(file) => {
                            let file_part = reqwest::multipart::Part::bytes(file.bytes)
                                .file_name(file.file_name)
                                .mime_str(&file.content_type)?;
                            multipart = multipart.part(part.name, file_part);
                        }
                    }
                }
                request.multipart(multipart).send().await?
            }
        };
        Ok(response.status().as_u16())
    }
}
