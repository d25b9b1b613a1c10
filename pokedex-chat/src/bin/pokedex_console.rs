//! Interactive console for the Pokédex.
//!
//! Reads one chat message per stdin line and prints every reply line.
//!
//! ```text
//! pokedex-console [config.toml] [--json] [--channel NAME]
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use pokedex_chat::{ChatConfig, Dispatcher, MemorySettings, MessageSink, WriterSink};
use pokedex_core::Pokedex;

#[derive(Debug)]
struct Args {
    config: Option<PathBuf>,
    json: bool,
    channel: String,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        config: None,
        json: false,
        channel: "console".to_string(),
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--json" => args.json = true,
            "--channel" => {
                args.channel = it.next().context("--channel needs a value")?;
            }
            other if other.starts_with("--") => anyhow::bail!("unknown flag {other}"),
            path => args.config = Some(PathBuf::from(path)),
        }
    }
    Ok(args)
}

#[derive(serde::Serialize)]
struct JsonReply<'a> {
    channel: &'a str,
    message: &'a str,
    lines: &'a [String],
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => ChatConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ChatConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.pokedex.general.log_level.as_str().into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let pokedex = Pokedex::open(&config.pokedex).context("opening the reference dataset")?;
    let dispatcher = Dispatcher::new(
        Arc::new(pokedex),
        Arc::new(MemorySettings::new()),
        config.chat.clone(),
    );
    info!(channel = %args.channel, json = args.json, "Console ready");

    let stdout = WriterSink::new(std::io::stdout());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(message) = lines.next_line().await? {
        if !args.json {
            dispatcher.respond(&args.channel, &message, &stdout).await?;
            continue;
        }
        let Some(reply) = dispatcher.handle(&args.channel, &message).await? else {
            continue;
        };
        let json = serde_json::to_string(&JsonReply {
            channel: &args.channel,
            message: &message,
            lines: &reply,
        })?;
        stdout.send(&args.channel, &json)?;
    }

    let snapshot = dispatcher.pokedex().counters().snapshot();
    info!(
        requests = snapshot.requests,
        not_found = snapshot.not_found,
        lines = snapshot.lines_emitted,
        "Console finished"
    );
    Ok(())
}
