//! Audio decoding via symphonia
//!
//! Decodes any container/codec symphonia was built with into interleaved
//! integer PCM, keeping the source sample rate, channel layout and (for PCM
//! sources) bit depth. Compressed sources come out as 16-bit.

use anyhow::{Context, Result};
use std::path::Path;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Bit depth used when the source does not declare one (mp3, ogg, ...)
const DEFAULT_BITS_PER_SAMPLE: u16 = 16;

/// Interleaved PCM decoded from a file
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// Interleaved samples (frame-major), right-aligned to `bits_per_sample`
    pub samples: Vec<i32>,

    /// Integer sample width: 8, 16, 24 or 32
    pub bits_per_sample: u16,

    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Number of interleaved channels
    pub channels: u16,
}

impl DecodedAudio {
    /// Number of frames (samples per channel)
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.samples.len() / self.channels as usize
        }
    }

    /// Duration in milliseconds
    pub fn duration_ms(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        self.frames() as u64 * 1000 / self.sample_rate as u64
    }

    /// Frames covering `ms` milliseconds at this sample rate, clamped to `usize`
    pub fn frames_for_ms(&self, ms: u64) -> usize {
        let frames = ms as u128 * self.sample_rate as u128 / 1000;
        frames.min(usize::MAX as u128) as usize
    }

    /// Keep at most `frames` frames
    pub fn truncate_frames(&mut self, frames: usize) {
        let keep = frames.saturating_mul(self.channels as usize);
        self.samples.truncate(keep);
    }
}

/// Decode `path`, stopping once `max_ms` milliseconds have been read
///
/// `None` decodes the whole file. The result may hold slightly more than
/// `max_ms` since decoding stops on packet boundaries.
pub fn decode_file(path: &Path, max_ms: Option<u64>) -> Result<DecodedAudio> {
    log::debug!("Decoding audio: {:?}", path);

    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open audio file: {:?}", path))?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension() {
        hint.with_extension(ext.to_str().unwrap_or(""));
    }

    let detected = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .with_context(|| format!("Failed to detect audio format: {:?}", path))?;

    let mut format = detected.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .context("No audio track found")?;

    let track_id = track.id;
    let mut sample_rate = track.codec_params.sample_rate.unwrap_or(0);
    let mut channels = track
        .codec_params
        .channels
        .map(|c| c.count() as u16)
        .unwrap_or(0);
    let bits_per_sample = track
        .codec_params
        .bits_per_sample
        .map(|b| b as u16)
        .filter(|b| matches!(b, 8 | 16 | 24 | 32))
        .unwrap_or(DEFAULT_BITS_PER_SAMPLE);
    let shift = 32 - bits_per_sample as u32;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .context("Failed to create audio decoder")?;

    let mut samples: Vec<i32> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(SymphoniaError::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                break;
            }
            Err(e) => {
                log::warn!("Error reading packet: {:?}", e);
                break;
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(SymphoniaError::DecodeError(e)) => {
                log::warn!("Error decoding packet: {}", e);
                continue;
            }
            Err(e) => return Err(e).context("Audio decoding failed"),
        };

        let spec = *decoded.spec();
        sample_rate = spec.rate;
        channels = spec.channels.count() as u16;

        // Full-scale i32, shifted back down to the source width
        let mut sample_buf = SampleBuffer::<i32>::new(decoded.capacity() as u64, spec);
        sample_buf.copy_interleaved_ref(decoded);
        samples.extend(sample_buf.samples().iter().map(|s| s >> shift));

        if let Some(limit) = max_ms {
            let frames = (samples.len() / channels.max(1) as usize) as u128;
            if frames * 1000 >= limit as u128 * sample_rate as u128 {
                break;
            }
        }
    }

    if sample_rate == 0 || channels == 0 {
        anyhow::bail!("No sample rate or channel layout in audio track: {:?}", path);
    }

    let audio = DecodedAudio {
        samples,
        bits_per_sample,
        sample_rate,
        channels,
    };

    log::debug!(
        "Decoded {} frames ({:.1}s) at {}Hz, {} channel(s), {}-bit",
        audio.frames(),
        audio.frames() as f32 / sample_rate as f32,
        sample_rate,
        channels,
        bits_per_sample
    );

    Ok(audio)
}
