//! Synthetic two-tone WAV generator
//!
//! Produces predictable input for the analysis server: A4 (440 Hz) plus
//! E5 (659.25 Hz), shaped by a short attack and a long release so the
//! file starts and ends without clicks.

use anyhow::{Context, Result};
use std::f64::consts::PI;
use std::path::{Path, PathBuf};

/// Default output file
pub const DEFAULT_TONE_PATH: &str = "test-tone.wav";
/// Default length in seconds
pub const DEFAULT_DURATION_SECS: f64 = 5.0;
/// Default sample rate in Hz
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Partials as (frequency Hz, amplitude)
const PARTIALS: [(f64, f64); 2] = [(440.0, 0.5), (659.25, 0.3)];
/// Attack ramp length in seconds
const ATTACK_SECS: f64 = 0.01;
/// Release ramp length in seconds
const RELEASE_SECS: f64 = 0.5;

/// Parameters of the generated tone
#[derive(Debug, Clone)]
pub struct ToneConfig {
    /// Where the WAV file is written
    pub path: PathBuf,

    /// Length in seconds
    pub duration_secs: f64,

    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl ToneConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            duration_secs: DEFAULT_DURATION_SECS,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }

    pub fn with_duration(mut self, secs: f64) -> Self {
        self.duration_secs = secs;
        self
    }

    pub fn with_sample_rate(mut self, rate: u32) -> Self {
        self.sample_rate = rate;
        self
    }

    /// Number of samples the tone will contain
    pub fn sample_count(&self) -> usize {
        (self.sample_rate as f64 * self.duration_secs).round() as usize
    }

    /// Render the tone as 16-bit PCM samples
    pub fn render(&self) -> Vec<i16> {
        let n = self.sample_count();
        let attack = ((ATTACK_SECS * self.sample_rate as f64) as usize).min(n);
        let release = ((RELEASE_SECS * self.sample_rate as f64) as usize).min(n);
        let release_start = n - release;

        (0..n)
            .map(|i| {
                let t = linspace_at(0.0, self.duration_secs, n, i);
                let signal: f64 = PARTIALS
                    .iter()
                    .map(|&(freq, amp)| (2.0 * PI * freq * t).sin() * amp)
                    .sum();

                // Release overrides attack where they overlap
                let envelope = if i >= release_start {
                    linspace_at(1.0, 0.0, release, i - release_start)
                } else if i < attack {
                    linspace_at(0.0, 1.0, attack, i)
                } else {
                    1.0
                };

                (signal * envelope * i16::MAX as f64) as i16
            })
            .collect()
    }
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TONE_PATH)
    }
}

/// Value at `index` of `count` evenly spaced points from `start` to `end` inclusive
fn linspace_at(start: f64, end: f64, count: usize, index: usize) -> f64 {
    if count <= 1 {
        return start;
    }
    start + (end - start) * index as f64 / (count - 1) as f64
}

/// Write the test tone described by `config`
///
/// Any I/O failure is returned to the caller.
pub fn create_test_tone(config: &ToneConfig) -> Result<PathBuf> {
    if !config.duration_secs.is_finite() || config.duration_secs <= 0.0 {
        anyhow::bail!("Tone duration must be positive, got {}", config.duration_secs);
    }
    if config.sample_rate == 0 {
        anyhow::bail!("Sample rate must be positive");
    }

    log::info!(
        "Creating {}-second test tone at {} Hz",
        config.duration_secs,
        config.sample_rate
    );

    let samples = config.render();
    write_mono_wav(&config.path, config.sample_rate, &samples)?;

    log::info!("Test tone saved to {}", config.path.display());
    Ok(config.path.clone())
}

fn write_mono_wav(path: &Path, sample_rate: u32, samples: &[i16]) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)
        .with_context(|| format!("Failed to create WAV file: {:?}", path))?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer
        .finalize()
        .with_context(|| format!("Failed to finalize WAV file: {:?}", path))?;

    Ok(())
}
