use std::path::{Path, PathBuf};

/// Container format of a fixture, inferred from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Wav,
    Mp3,
    /// Anything else the decoder may still understand (flac, ogg, ...)
    Other,
}

impl AudioFormat {
    /// Guess the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("wav") | Some("wave") => AudioFormat::Wav,
            Some("mp3") => AudioFormat::Mp3,
            _ => AudioFormat::Other,
        }
    }

    /// Content type sent with the upload
    pub fn mime_type(self) -> &'static str {
        match self {
            AudioFormat::Wav => "audio/wav",
            AudioFormat::Mp3 => "audio/mpeg",
            AudioFormat::Other => "application/octet-stream",
        }
    }
}

/// An audio file handed to the analysis server
#[derive(Debug, Clone)]
pub struct AudioFixture {
    /// Location on disk
    pub path: PathBuf,

    /// Implicit format
    pub format: AudioFormat,
}

impl AudioFixture {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = AudioFormat::from_path(&path);
        Self { path, format }
    }

    /// Whether the file is present on disk
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// File name used for the multipart upload and in reports
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }

    /// Size in MiB, as shown before an upload
    pub fn size_mb(&self) -> std::io::Result<f64> {
        let bytes = std::fs::metadata(&self.path)?.len();
        Ok(bytes as f64 / (1024.0 * 1024.0))
    }
}
