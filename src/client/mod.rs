//! Clients for the external audio analysis server
//!
//! Two flavours share the `AnalysisClient` trait: `BasicClient` accepts any
//! successful health answer and returns raw JSON, `EnterpriseClient` checks
//! the reported status and returns parsed features. Both are blocking and
//! issue one request at a time.

mod basic;
mod config;
mod enterprise;
mod error;
mod session;
mod traits;
mod transport;

pub use basic::BasicClient;
pub use config::{ClientConfig, ANALYZE_TIMEOUT, DEFAULT_SERVER_URL, HEALTH_TIMEOUT};
pub use enterprise::EnterpriseClient;
pub use error::ClientError;
pub use session::{find_default_audio, run_session, AudioSource, SessionOutcome, DEFAULT_AUDIO_DIR};
pub use traits::AnalysisClient;
pub use transport::AUDIO_FIELD;
