//! Short WAV fixtures cut from longer recordings

use super::decode::decode_file;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default output file
pub const DEFAULT_SAMPLE_PATH: &str = "sample.wav";
/// Default sample length in milliseconds
pub const DEFAULT_SAMPLE_MS: u64 = 10_000;

/// Summary of a written sample
#[derive(Debug, Clone)]
pub struct TrimmedSample {
    pub path: PathBuf,

    /// Frames written (samples per channel)
    pub frames: usize,

    pub sample_rate: u32,

    pub channels: u16,

    /// Integer sample width, taken from the source when it declares one
    pub bits_per_sample: u16,
}

impl TrimmedSample {
    pub fn duration_ms(&self) -> u64 {
        self.frames as u64 * 1000 / self.sample_rate.max(1) as u64
    }
}

/// Cut the first `duration_ms` of `input` into a WAV file at `output`
///
/// Requests longer than the source yield the whole source. The sample keeps
/// the source's rate, channel count and PCM bit depth.
pub fn try_create_sample(input: &Path, output: &Path, duration_ms: u64) -> Result<TrimmedSample> {
    log::info!("Loading audio file: {}", input.display());
    let mut audio = decode_file(input, Some(duration_ms))
        .with_context(|| format!("Failed to load {:?}", input))?;

    log::info!("Creating {}s sample", duration_ms as f64 / 1000.0);
    let frames = audio.frames_for_ms(duration_ms);
    audio.truncate_frames(frames);

    if audio.frames() < frames {
        log::debug!(
            "Source shorter than requested ({} ms < {} ms), exporting all of it",
            audio.duration_ms(),
            duration_ms
        );
    }

    log::info!("Exporting to {}", output.display());
    let spec = hound::WavSpec {
        channels: audio.channels,
        sample_rate: audio.sample_rate,
        bits_per_sample: audio.bits_per_sample,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(output, spec)
        .with_context(|| format!("Failed to create WAV file: {:?}", output))?;
    for &sample in &audio.samples {
        writer.write_sample(sample)?;
    }
    writer
        .finalize()
        .with_context(|| format!("Failed to finalize WAV file: {:?}", output))?;

    Ok(TrimmedSample {
        path: output.to_path_buf(),
        frames: audio.frames(),
        sample_rate: audio.sample_rate,
        channels: audio.channels,
        bits_per_sample: audio.bits_per_sample,
    })
}

/// Cut a sample, reporting failures instead of returning them
///
/// Returns the output path on success and `None` on any failure.
pub fn create_sample(input: &Path, output: &Path, duration_ms: u64) -> Option<PathBuf> {
    match try_create_sample(input, output, duration_ms) {
        Ok(sample) => {
            log::info!("Sample created successfully: {}", sample.path.display());
            Some(sample.path)
        }
        Err(e) => {
            log::error!("Error creating sample: {:#}", e);
            None
        }
    }
}
