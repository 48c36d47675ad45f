//! Voxbot - speech-enabled chatbot
//!
//! Transcribes short voice clips through a remote speech-recognition API
//! and answers them from a fixed list of regex dialogue rules.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use voxbot_cli::config::AppConfig;
use voxbot_cli::session::{transition, SessionAction, SessionEvent, SessionState};
use voxbot_cli::transcript::save_transcript;
use voxbot_rules::{Responder, RuleSet};
use voxbot_stt::{build_transcriber, AudioClip, EngineKind};

#[derive(Parser)]
#[command(name = "voxbot", version, about = "Speech-enabled chatbot")]
struct Cli {
    /// Override the recognition language code
    #[arg(long, global = true)]
    language: Option<String>,

    /// Override the speech engine (google, sphinx)
    #[arg(long, global = true)]
    engine: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Reply to a single utterance given as text
    Say { text: String },

    /// Read utterances from stdin and print replies
    Repl,

    /// Transcribe a WAV clip, reply, and optionally save the transcript
    Wav {
        file: PathBuf,

        /// Save the literal transcript to the configured transcript file
        #[arg(long)]
        save: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(language) = cli.language {
        config.language = language;
    }
    if let Some(engine) = cli.engine {
        config.engine = engine;
    }

    let rule_set = match &config.rules_path {
        Some(path) => RuleSet::load(path).context("Failed to load rule file")?,
        None => RuleSet::default(),
    };
    let responder = rule_set.compile().context("Failed to compile rules")?;
    info!("🤖 {} dialogue rules ready", responder.rule_count());

    match cli.command {
        Command::Say { text } => {
            let reply = responder.respond(&text).context("Failed to render reply")?;
            println!("{}", reply);
        }
        Command::Repl => repl(&responder)?,
        Command::Wav { file, save } => run_wav(&config, &responder, &file, save).await?,
    }

    Ok(())
}

/// Interactive loop: one utterance per line, reply on stdout.
fn repl(responder: &Responder) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match responder.respond(input) {
            Ok(reply) => {
                println!("{}", reply);
                stdout.flush()?;
            }
            Err(e) => warn!("Could not render reply: {}", e),
        }
    }

    Ok(())
}

/// Transcribe a recorded clip, respond, and optionally persist the
/// literal transcript.
async fn run_wav(
    config: &AppConfig,
    responder: &Responder,
    file: &Path,
    save: bool,
) -> Result<()> {
    let engine: EngineKind = config
        .engine
        .parse()
        .context("Invalid speech engine in configuration")?;
    let transcriber = build_transcriber(engine, &config.language, config.api_key.as_deref())?;

    info!("🎙️ Transcribing {} via {}", file.display(), transcriber.name());
    let clip = AudioClip::from_wav_path(file).context("Failed to read WAV file")?;

    let result = transcriber
        .transcribe(&clip)
        .await
        .context("Transcription failed")?;
    let (state, _) = transition(
        &SessionState::default(),
        SessionEvent::Transcript(result.text.clone()),
    );
    println!("Transcription: {}", result.text);

    let reply = responder
        .respond(&result.text)
        .context("Failed to render reply")?;
    let (state, _) = transition(&state, SessionEvent::Reply(reply.clone()));
    println!("Voxbot: {}", reply);

    if save {
        if let (_, Some(SessionAction::Persist(text))) = transition(&state, SessionEvent::Save) {
            save_transcript(&config.transcript_path, &text)?;
        }
    }

    Ok(())
}
