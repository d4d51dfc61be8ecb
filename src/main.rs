use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use kodi_skill::bus::BusMessage;
use kodi_skill::logging;
use kodi_skill::model::{KodiClient, SkillSession};
use kodi_skill::{KodiSkill, Settings, SettingsStore};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== Kodi Skill Starting ===");

    let settings_path = Settings::default_path();
    let store = SettingsStore::from_file(settings_path.clone())
        .with_context(|| format!("failed to read settings from {}", settings_path.display()))?;
    tracing::info!(path = %settings_path.display(), "Settings loaded");

    let client = KodiClient::new().context("failed to build HTTP client")?;
    let session = SkillSession::new(store);
    let mut skill = KodiSkill::with_resources(client, session);

    let res = run_bus(&mut skill).await;
    if let Err(err) = &res {
        tracing::error!(error = ?err, "Message bus error");
    }

    tracing::info!("Kodi Skill shutting down");
    res
}

/// Read host messages from stdin one line at a time and answer on stdout.
/// Each message is handled to completion before the next line is read.
async fn run_bus(skill: &mut KodiSkill<KodiClient>) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let message: BusMessage = match serde_json::from_str(line) {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!(error = %e, "Skipping malformed bus message");
                continue;
            }
        };

        let Some(event) = message.to_event() else {
            tracing::trace!(kind = %message.kind, "Ignoring bus message");
            continue;
        };

        let reply = skill.handle(event).await;
        if let Some(response) = BusMessage::from_reply(&reply) {
            let mut encoded = serde_json::to_string(&response)?;
            encoded.push('\n');
            stdout.write_all(encoded.as_bytes()).await?;
            stdout.flush().await?;
        }
    }

    Ok(())
}
