//! Client trait shared by both analysis clients

use std::path::Path;

/// Analysis server client - allows swapping between the basic and enterprise flavours
///
/// Every method reports its own failures and returns a sentinel; nothing is
/// raised to the caller.
pub trait AnalysisClient {
    /// What a successful analysis yields
    type Output;

    /// Base URL of the server this client talks to
    fn server_url(&self) -> &str;

    /// Probe `GET /health`; true when the server is ready
    fn check_health(&self) -> bool;

    /// Upload `audio_path` to `POST /analyze`; `None` on any failure
    fn analyze(&self, audio_path: &Path) -> Option<Self::Output>;

    /// Text printed after a successful analysis
    fn render(&self, output: &Self::Output) -> String;
}
