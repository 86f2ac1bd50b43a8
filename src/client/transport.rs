//! Blocking HTTP plumbing shared by both clients

use super::config::ClientConfig;
use super::error::ClientError;
use crate::model::AudioFixture;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, RequestBuilder};
use std::fs::File;
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Multipart field the server reads the upload from
pub const AUDIO_FIELD: &str = "audio";

/// One blocking HTTP client bound to one server
pub(crate) struct Transport {
    http_client: Client,
    config: ClientConfig,
}

impl Transport {
    pub(crate) fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http_client,
            config,
        })
    }

    pub(crate) fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `GET /health`, returning the raw body
    pub(crate) fn get_health(&self) -> Result<String, ClientError> {
        let url = self.config.health_endpoint();
        log::debug!("GET {}", url);

        let request = self.http_client.get(&url);
        self.send(request, &url, self.config.health_timeout)
    }

    /// `POST /analyze` with the fixture as multipart field `audio`
    ///
    /// The open file moves into the request body and is closed when the
    /// request finishes, whichever way it ends.
    pub(crate) fn post_audio(&self, fixture: &AudioFixture) -> Result<String, ClientError> {
        let file = File::open(&fixture.path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ClientError::FileNotFound(fixture.path.clone()),
            _ => ClientError::Io(e),
        })?;
        let length = file.metadata()?.len();

        let part = Part::reader_with_length(file, length)
            .file_name(fixture.file_name())
            .mime_str(fixture.format.mime_type())
            .map_err(ClientError::Request)?;
        let form = Form::new().part(AUDIO_FIELD, part);

        let url = self.config.analyze_endpoint();
        log::debug!(
            "POST {} ({} bytes, {:?})",
            url,
            length,
            fixture.format
        );

        let request = self.http_client.post(&url).multipart(form);
        self.send(request, &url, self.config.analyze_timeout)
    }

    fn send(
        &self,
        request: RequestBuilder,
        url: &str,
        timeout: Duration,
    ) -> Result<String, ClientError> {
        let response = request
            .timeout(timeout)
            .send()
            .map_err(|e| ClientError::from_reqwest(e, url, timeout))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| ClientError::from_reqwest(e, url, timeout))?;

        if !status.is_success() {
            return Err(ClientError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        log::debug!("{} answered {} ({} bytes)", url, status, body.len());
        Ok(body)
    }
}
