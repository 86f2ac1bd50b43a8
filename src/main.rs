use analysis_probe::client::{
    run_session, AudioSource, BasicClient, ClientConfig, EnterpriseClient, DEFAULT_AUDIO_DIR,
};
use analysis_probe::fixtures::sample::{DEFAULT_SAMPLE_MS, DEFAULT_SAMPLE_PATH};
use analysis_probe::fixtures::tone::{DEFAULT_DURATION_SECS, DEFAULT_SAMPLE_RATE, DEFAULT_TONE_PATH};
use analysis_probe::{create_sample, create_test_tone, ToneConfig};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "analysis-probe")]
#[command(about = "Fixtures and test clients for the audio analysis server", long_about = None)]
struct Args {
    /// Verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Cut the first seconds of an audio file into a WAV sample
    CreateSample {
        /// Audio file to cut from
        input: String,

        /// Output WAV file
        #[arg(default_value = DEFAULT_SAMPLE_PATH)]
        output: String,

        /// Sample length in milliseconds
        #[arg(long, default_value_t = DEFAULT_SAMPLE_MS)]
        duration_ms: u64,
    },

    /// Generate a two-tone test WAV
    CreateTestTone {
        /// Output WAV file
        #[arg(short = 'o', long, default_value = DEFAULT_TONE_PATH)]
        output: String,

        /// Length in seconds
        #[arg(long, default_value_t = DEFAULT_DURATION_SECS)]
        duration: f64,

        /// Sample rate in Hz
        #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,
    },

    /// Health check and analysis with the basic client (default server)
    TestAnalysis {
        /// Audio file to analyze (default: first MP3 in ./audio)
        audio_file: Option<String>,
    },

    /// Health check and analysis with the enterprise client
    TestEnterprise {
        /// Audio file to analyze
        audio_file: String,

        /// Server URL (defaults to the shared analysis server)
        #[arg(long)]
        server: Option<String>,
    },
}

/// Expand ~ in a path argument
fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match args.command {
        Command::CreateSample {
            input,
            output,
            duration_ms,
        } => {
            // Failures are reported by create_sample; the exit code stays 0
            create_sample(&expand(&input), &expand(&output), duration_ms);
            Ok(ExitCode::SUCCESS)
        }

        Command::CreateTestTone {
            output,
            duration,
            sample_rate,
        } => {
            let config = ToneConfig::new(expand(&output))
                .with_duration(duration)
                .with_sample_rate(sample_rate);
            create_test_tone(&config)?;
            Ok(ExitCode::SUCCESS)
        }

        Command::TestAnalysis { audio_file } => {
            log::info!("===== Professional Audio Analysis Server Test =====");
            let source = match audio_file {
                Some(path) => AudioSource::File(expand(&path)),
                None => AudioSource::FirstMp3In(PathBuf::from(DEFAULT_AUDIO_DIR)),
            };

            let client = BasicClient::new(ClientConfig::default())?;
            let outcome = run_session(&client, &source);
            Ok(ExitCode::from(outcome.exit_code()))
        }

        Command::TestEnterprise { audio_file, server } => {
            let client = EnterpriseClient::new(ClientConfig::from_override(server))?;
            let outcome = run_session(&client, &AudioSource::File(expand(&audio_file)));
            Ok(ExitCode::from(outcome.exit_code()))
        }
    }
}
