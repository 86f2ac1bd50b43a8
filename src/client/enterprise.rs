//! Enterprise analysis client
//!
//! Stricter than the basic client: the health payload must say
//! `"healthy"` and a `success: false` analysis counts as a failure.

use super::config::ClientConfig;
use super::error::ClientError;
use super::traits::AnalysisClient;
use super::transport::Transport;
use crate::model::{Analysis, AnalysisResponse, AudioFixture, HealthStatus};
use std::path::Path;
use std::time::Instant;

/// Client that interprets the server's payloads
pub struct EnterpriseClient {
    transport: Transport,
}

impl EnterpriseClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        log::info!("===== Professional Audio Analysis Server Test =====");
        log::debug!("Server: {}", config.server_url);
        Ok(Self {
            transport: Transport::new(config)?,
        })
    }

    /// Health status when the server reports `"healthy"`
    pub fn try_check_health(&self) -> Result<HealthStatus, ClientError> {
        let body = self.transport.get_health()?;
        let health: HealthStatus = serde_json::from_str(&body)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        if !health.is_healthy() {
            return Err(ClientError::Unhealthy(body.trim().to_string()));
        }
        Ok(health)
    }

    /// Extracted features, or why there are none
    pub fn try_analyze(&self, audio_path: &Path) -> Result<Analysis, ClientError> {
        let fixture = AudioFixture::new(audio_path);
        if !fixture.exists() {
            return Err(ClientError::FileNotFound(fixture.path));
        }

        log::info!(
            "📊 Audio file: {} ({:.2} MB)",
            fixture.file_name(),
            fixture.size_mb()?
        );
        log::info!("📤 Uploading and analyzing audio file...");
        let start = Instant::now();

        let body = self.transport.post_audio(&fixture)?;
        let response: AnalysisResponse = serde_json::from_str(&body)
            .map_err(|e| ClientError::InvalidResponse(format!("{}: {}", e, body)))?;

        log::info!(
            "⏱️ Analysis completed in {:.2} seconds",
            start.elapsed().as_secs_f64()
        );

        if !response.success {
            let message = response
                .message
                .unwrap_or_else(|| "no message".to_string());
            return Err(ClientError::ServerReported(message));
        }

        let analysis = response
            .analysis
            .filter(|a| !a.is_empty())
            .ok_or_else(|| ClientError::InvalidResponse("no analysis in response".to_string()))?;

        // The feature report cannot be produced without these
        if analysis.tempo.is_none() || analysis.duration.is_none() {
            return Err(ClientError::InvalidResponse(
                "analysis is missing tempo or duration".to_string(),
            ));
        }

        Ok(analysis)
    }
}

impl AnalysisClient for EnterpriseClient {
    type Output = Analysis;

    fn server_url(&self) -> &str {
        &self.transport.config().server_url
    }

    fn check_health(&self) -> bool {
        match self.try_check_health() {
            Ok(health) => {
                println!("✅ Server Health Check:");
                println!(
                    "{}",
                    serde_json::to_string_pretty(&health).unwrap_or_default()
                );
                true
            }
            Err(ClientError::Connection { .. }) => {
                log::error!(
                    "❌ Connection failed: Could not connect to {}",
                    self.server_url()
                );
                log::error!("   Please verify your network connection and server availability.");
                false
            }
            Err(ClientError::Timeout { .. }) => {
                log::error!(
                    "❌ Request timed out: Server at {} is not responding",
                    self.server_url()
                );
                false
            }
            Err(e @ ClientError::Unhealthy(_)) => {
                log::error!("❌ {}", e);
                false
            }
            Err(e) => {
                log::error!("❌ Health check failed: {}", e);
                false
            }
        }
    }

    fn analyze(&self, audio_path: &Path) -> Option<Analysis> {
        match self.try_analyze(audio_path) {
            Ok(analysis) => {
                log::info!("✅ Analysis successful!");
                Some(analysis)
            }
            Err(ClientError::FileNotFound(path)) => {
                log::error!("❌ Error: Audio file not found: {}", path.display());
                None
            }
            Err(ClientError::Connection { .. }) => {
                log::error!("❌ Connection failed during analysis");
                None
            }
            Err(ClientError::Timeout { .. }) => {
                log::error!("❌ Analysis timed out - file may be too large or complex");
                None
            }
            Err(ClientError::HttpStatus { status, body, .. }) => {
                log::error!("❌ HTTP error: {}", status);
                match status {
                    400 => log::error!("   Bad request: {}", body),
                    500 => log::error!("   Server error: {}", body),
                    _ => log::error!("   Response: {}", body),
                }
                None
            }
            Err(e @ ClientError::ServerReported(_)) => {
                log::error!("❌ {}", e);
                None
            }
            Err(e @ ClientError::Request(_)) => {
                log::error!("❌ Analysis request failed: {}", e);
                None
            }
            Err(e) => {
                log::error!("❌ Unexpected error: {}", e);
                None
            }
        }
    }

    fn render(&self, output: &Analysis) -> String {
        output.report()
    }
}
