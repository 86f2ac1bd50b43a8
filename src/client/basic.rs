//! Basic analysis client
//!
//! Treats any successful JSON answer from `/health` as healthy and hands
//! back the raw analysis response without interpreting it.

use super::config::ClientConfig;
use super::error::ClientError;
use super::traits::AnalysisClient;
use super::transport::Transport;
use crate::model::AudioFixture;
use serde_json::Value;
use std::path::Path;
use std::time::Instant;

/// Lenient client returning the server's JSON verbatim
pub struct BasicClient {
    transport: Transport,
}

impl BasicClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        Ok(Self {
            transport: Transport::new(config)?,
        })
    }

    /// Health payload, or why it could not be fetched
    pub fn try_check_health(&self) -> Result<Value, ClientError> {
        let body = self.transport.get_health()?;
        serde_json::from_str(&body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Full analysis response, or why there is none
    pub fn try_analyze(&self, audio_path: &Path) -> Result<Value, ClientError> {
        let fixture = AudioFixture::new(audio_path);
        if !fixture.exists() {
            return Err(ClientError::FileNotFound(fixture.path));
        }

        let timeout = self.transport.config().analyze_timeout.as_secs();
        log::info!(
            "🎵 Analyzing audio file: {} ({:.2} MB)",
            fixture.file_name(),
            fixture.size_mb()?
        );
        log::info!(
            "💡 This may take a while for longer files. Timeout set to {} seconds.",
            timeout
        );

        let start = Instant::now();
        log::info!("📤 Uploading and processing audio file...");
        let body = self.transport.post_audio(&fixture)?;

        let result: Value = serde_json::from_str(&body)
            .map_err(|e| ClientError::InvalidResponse(format!("{}: {}", e, body)))?;

        log::info!(
            "✅ Analysis complete in {:.2} seconds",
            start.elapsed().as_secs_f64()
        );

        if is_empty(&result) {
            return Err(ClientError::InvalidResponse(
                "empty analysis result".to_string(),
            ));
        }

        Ok(result)
    }
}

/// `null`, `{}` and `[]` carry no result
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

impl AnalysisClient for BasicClient {
    type Output = Value;

    fn server_url(&self) -> &str {
        &self.transport.config().server_url
    }

    fn check_health(&self) -> bool {
        match self.try_check_health() {
            Ok(health) => {
                println!("\n✅ Server Health Check:");
                println!("{}", pretty(&health));
                true
            }
            Err(e) => {
                log::error!("❌ Server Health Check Failed: {}", e);
                false
            }
        }
    }

    fn analyze(&self, audio_path: &Path) -> Option<Value> {
        match self.try_analyze(audio_path) {
            Ok(result) => Some(result),
            Err(ClientError::FileNotFound(path)) => {
                log::error!("❌ Audio file not found: {}", path.display());
                None
            }
            Err(ClientError::Timeout { secs, .. }) => {
                log::error!("❌ Analysis request timed out after {} seconds.", secs);
                log::error!(
                    "   This could be due to a large audio file or server processing limitations."
                );
                log::error!("   Try with a shorter audio clip or increase the timeout.");
                None
            }
            Err(ClientError::HttpStatus { status, body, .. }) => {
                log::error!("❌ Analysis failed: HTTP {}", status);
                log::error!("   Status code: {}", status);
                log::error!("   Response: {}", body);
                None
            }
            Err(e) => {
                log::error!("❌ Analysis failed: {}", e);
                None
            }
        }
    }

    fn render(&self, output: &Value) -> String {
        format!("\n✅ Analysis Results:\n{}", pretty(output))
    }
}
