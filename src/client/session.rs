//! One test run against the server: health check, one analysis, exit code

use super::traits::AnalysisClient;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Directory searched when no audio file is given
pub const DEFAULT_AUDIO_DIR: &str = "audio";

/// Where the file to analyze comes from
#[derive(Debug, Clone)]
pub enum AudioSource {
    /// Explicit path
    File(PathBuf),

    /// First MP3 found in a directory
    FirstMp3In(PathBuf),
}

impl AudioSource {
    pub fn resolve(&self) -> Result<PathBuf> {
        match self {
            AudioSource::File(path) => Ok(path.clone()),
            AudioSource::FirstMp3In(dir) => find_default_audio(dir),
        }
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Server healthy and analysis succeeded
    Completed,

    /// Health check failed; no analysis was attempted
    Unhealthy,

    /// No audio file could be chosen
    MissingInput,

    /// Analysis did not produce a result
    AnalysisFailed,
}

impl SessionOutcome {
    pub fn is_success(self) -> bool {
        self == SessionOutcome::Completed
    }

    /// Process exit code for this outcome
    pub fn exit_code(self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

/// First `.mp3` directly inside `dir`, by file name
pub fn find_default_audio(dir: &Path) -> Result<PathBuf> {
    if !dir.is_dir() {
        anyhow::bail!(
            "No '{}' directory found. Please provide an audio file path.",
            dir.display()
        );
    }

    let mut mp3_files: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {:?}", dir))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case("mp3"))
        })
        .collect();
    mp3_files.sort();

    mp3_files
        .into_iter()
        .next()
        .with_context(|| format!("No MP3 files found in the '{}' directory", dir.display()))
}

/// Run health check then analysis, printing the result
///
/// The audio source is only resolved once the server is known to be healthy.
pub fn run_session<C: AnalysisClient>(client: &C, source: &AudioSource) -> SessionOutcome {
    if !client.check_health() {
        log::error!("🛑 Server health check failed. Please verify server status.");
        return SessionOutcome::Unhealthy;
    }
    log::info!("🚀 Server is healthy, proceeding with analysis");

    let audio_path = match source.resolve() {
        Ok(path) => path,
        Err(e) => {
            log::error!("{:#}", e);
            return SessionOutcome::MissingInput;
        }
    };

    match client.analyze(&audio_path) {
        Some(output) => {
            println!("{}", client.render(&output));
            log::info!("🎉 Test completed successfully!");
            SessionOutcome::Completed
        }
        None => {
            log::error!("❌ Audio analysis failed.");
            SessionOutcome::AnalysisFailed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tempfile::TempDir;

    /// Scripted client counting how often it is asked to analyze
    struct ScriptedClient {
        healthy: bool,
        result: Option<String>,
        analyze_calls: Cell<usize>,
    }

    impl ScriptedClient {
        fn new(healthy: bool, result: Option<&str>) -> Self {
            Self {
                healthy,
                result: result.map(str::to_string),
                analyze_calls: Cell::new(0),
            }
        }
    }

    impl AnalysisClient for ScriptedClient {
        type Output = String;

        fn server_url(&self) -> &str {
            "http://stub"
        }

        fn check_health(&self) -> bool {
            self.healthy
        }

        fn analyze(&self, _audio_path: &Path) -> Option<String> {
            self.analyze_calls.set(self.analyze_calls.get() + 1);
            self.result.clone()
        }

        fn render(&self, output: &String) -> String {
            output.clone()
        }
    }

    #[test]
    fn test_unhealthy_never_analyzes() {
        let client = ScriptedClient::new(false, Some("ok"));
        let outcome = run_session(&client, &AudioSource::File(PathBuf::from("a.wav")));

        assert_eq!(outcome, SessionOutcome::Unhealthy);
        assert_eq!(outcome.exit_code(), 1);
        assert_eq!(client.analyze_calls.get(), 0);
    }

    #[test]
    fn test_completed() {
        let client = ScriptedClient::new(true, Some("ok"));
        let outcome = run_session(&client, &AudioSource::File(PathBuf::from("a.wav")));

        assert_eq!(outcome, SessionOutcome::Completed);
        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(client.analyze_calls.get(), 1);
    }

    #[test]
    fn test_analysis_failure() {
        let client = ScriptedClient::new(true, None);
        let outcome = run_session(&client, &AudioSource::File(PathBuf::from("a.wav")));
        assert_eq!(outcome, SessionOutcome::AnalysisFailed);
        assert_eq!(outcome.exit_code(), 1);
    }

    #[test]
    fn test_missing_default_directory() {
        let temp_dir = TempDir::new().unwrap();
        let client = ScriptedClient::new(true, Some("ok"));
        let source = AudioSource::FirstMp3In(temp_dir.path().join("audio"));

        let outcome = run_session(&client, &source);
        assert_eq!(outcome, SessionOutcome::MissingInput);
        assert_eq!(client.analyze_calls.get(), 0);
    }

    #[test]
    fn test_find_default_audio_picks_first_mp3() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        std::fs::write(dir.join("notes.txt"), b"x").unwrap();
        std::fs::write(dir.join("b_track.mp3"), b"x").unwrap();
        std::fs::write(dir.join("a_track.MP3"), b"x").unwrap();

        let found = find_default_audio(dir).unwrap();
        assert_eq!(found, dir.join("a_track.MP3"));
    }

    #[test]
    fn test_find_default_audio_without_mp3() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("tone.wav"), b"x").unwrap();

        let err = find_default_audio(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("No MP3 files found"));
    }
}
