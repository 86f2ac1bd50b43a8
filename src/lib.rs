//! Analysis Probe - test clients and fixtures for an audio analysis server
//!
//! This library generates audio fixtures (test tones, trimmed samples) and
//! exercises a remote analysis server through its `/health` and `/analyze`
//! endpoints.

pub mod client;
pub mod fixtures;
pub mod model;

pub use client::{AnalysisClient, BasicClient, ClientConfig, ClientError, EnterpriseClient};
pub use fixtures::{create_sample, create_test_tone, ToneConfig};
