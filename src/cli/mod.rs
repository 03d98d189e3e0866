use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod chat;
pub mod personas;

#[derive(Subcommand)]
enum Command {
    /// Start a chat session with the default assistant
    Chat {
        /// Name the conversation; defaults to a generated ID
        #[arg(long)]
        session_id: Option<String>,
    },
    /// Start a chat session with selectable personas
    Personas {
        /// Name the conversation; defaults to a generated ID
        #[arg(long)]
        session_id: Option<String>,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Cli::parse();

    match args.command {
        Some(Command::Chat { session_id }) => {
            chat::run(session_id).await?;
        }
        Some(Command::Personas { session_id }) => {
            personas::run(session_id).await?;
        }
        None => {}
    }

    Ok(())
}
