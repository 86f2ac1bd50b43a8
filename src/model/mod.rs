//! Data exchanged with the analysis server
//!
//! The server owns every payload; the client only parses and displays them.

mod analysis;
mod fixture;
mod health;

pub use analysis::{Analysis, AnalysisResponse};
pub use fixture::{AudioFixture, AudioFormat};
pub use health::HealthStatus;
