//! Fixture generation for exercising the analysis server
//!
//! Both generators run offline and only produce files; nothing here talks
//! to the network.

mod decode;
pub mod sample;
pub mod tone;

pub use decode::{decode_file, DecodedAudio};
pub use sample::{create_sample, try_create_sample, TrimmedSample};
pub use tone::{create_test_tone, ToneConfig};
