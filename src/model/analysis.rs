use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Envelope returned by `POST /analyze`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Whether the server managed to analyze the upload
    #[serde(default)]
    pub success: bool,

    /// Extracted features (present when `success` is true)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,

    /// Server-supplied reason (present when `success` is false)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Musical features extracted by the server for one upload
///
/// Every field is optional on the wire. Fields this client does not know
/// about are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Tonic (e.g. "A")
    #[serde(default)]
    pub key: Option<String>,

    /// Mode (e.g. "major")
    #[serde(default)]
    pub scale: Option<String>,

    /// Tempo in BPM
    #[serde(default)]
    pub tempo: Option<f64>,

    /// Key detection confidence (0.0-1.0)
    #[serde(default)]
    pub confidence: Option<f64>,

    /// Overall energy
    #[serde(default)]
    pub energy: Option<f64>,

    /// Duration in seconds
    #[serde(default)]
    pub duration: Option<f64>,

    /// Beat positions in seconds
    #[serde(default)]
    pub beat_times: Vec<f64>,

    /// Onset positions in seconds
    #[serde(default)]
    pub onset_times: Vec<f64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Analysis {
    /// No field at all was sent
    pub fn is_empty(&self) -> bool {
        *self == Analysis::default()
    }

    pub fn beat_count(&self) -> usize {
        self.beat_times.len()
    }

    pub fn onset_count(&self) -> usize {
        self.onset_times.len()
    }

    /// Human-readable feature lines, one per feature
    pub fn feature_lines(&self) -> Vec<String> {
        let key = self.key.as_deref().unwrap_or("unknown");
        let scale = self.scale.as_deref().unwrap_or("unknown");
        let tempo = self
            .tempo
            .map(|t| format!("{:.1} BPM", t))
            .unwrap_or_else(|| "unknown".to_string());
        let duration = self
            .duration
            .map(|d| format!("{:.2} seconds", d))
            .unwrap_or_else(|| "unknown".to_string());

        vec![
            format!("  • Key: {} {}", key, scale),
            format!("  • Tempo: {}", tempo),
            format!("  • Confidence: {:.2}", self.confidence.unwrap_or(0.0)),
            format!("  • Energy: {:.2}", self.energy.unwrap_or(0.0)),
            format!("  • Duration: {}", duration),
            format!("  • Beat Count: {}", self.beat_count()),
            format!("  • Onset Count: {}", self.onset_count()),
        ]
    }

    /// Full feature report as printed after a successful analysis
    pub fn report(&self) -> String {
        let mut out = String::from("🎵 Musical Features:\n");
        for line in self.feature_lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}
