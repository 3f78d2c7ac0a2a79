//! Relay CLI - command-line consumer of the Relay message API.
//!
//! Mirrors the three primitives of the web page: display the message count,
//! submit a message and display its assigned id, and fetch a message by id
//! and display its text.
//!
//! # Usage
//!
//! ```text
//! relay count
//! relay send "hello there"
//! relay get 7d5bb1c1-...-e0a9
//! ```
//!
//! The API endpoint comes from the same JSON document the web deployment
//! serves as `config.json`, located via the `RELAY_CONFIG` environment
//! variable (default `config.json` in the working directory).

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing_subscriber::EnvFilter;

use relay_client::{ClientConfig, HttpMessageClient, MessageApi};

/// A parsed CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Display the total message count.
    Count,
    /// Create a message and display its assigned id.
    Send(String),
    /// Fetch a message by id and display its text.
    Get(String),
}

impl Command {
    /// Parse a command from raw arguments (without the program name).
    fn parse(args: &[String]) -> Result<Self> {
        match args {
            [cmd] if cmd == "count" => Ok(Self::Count),
            [cmd, text] if cmd == "send" => Ok(Self::Send(text.clone())),
            [cmd, id] if cmd == "get" => Ok(Self::Get(id.clone())),
            _ => bail!("usage: relay <count | send <text> | get <message_id>>"),
        }
    }
}

/// Locate the client configuration file.
fn config_path() -> PathBuf {
    std::env::var_os("RELAY_CONFIG")
        .map_or_else(|| PathBuf::from("config.json"), PathBuf::from)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;

    let path = config_path();
    let config = ClientConfig::load(&path)
        .with_context(|| format!("loading client configuration from {}", path.display()))?;
    let client = HttpMessageClient::new(&config)?;

    match command {
        Command::Count => {
            let count = client.count().await?;
            println!("{count}");
        }
        Command::Send(text) => {
            let record = client.create(&text).await?;
            println!("{}", record.id);
        }
        Command::Get(id) => {
            let record = client.get(&id).await?;
            println!("{}", record.message);
        }
    }

    Ok(())
}
