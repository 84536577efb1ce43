#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod command;

use command::{AskInput, AskStrategy, ChatStrategy, CommandStrategy, InitStrategy, VersionStrategy};

#[derive(Parser)]
#[command(name = "confab")]
#[command(about = "Conference schedule assistant", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask about the schedule interactively
    Chat,
    /// Run one stateless intent invocation
    Ask {
        /// Intent name, e.g. topics.list
        #[arg(short, long)]
        intent: String,

        /// Named argument as key=value (repeatable)
        #[arg(short, long)]
        arg: Vec<String>,

        /// Prior context blob as JSON
        #[arg(short, long)]
        context: Option<String>,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat => ChatStrategy.execute(()).await?,
        Commands::Ask {
            intent,
            arg,
            context,
        } => {
            AskStrategy
                .execute(AskInput {
                    intent,
                    args: arg,
                    context,
                })
                .await?;
        }
        Commands::Init => InitStrategy.execute(()).await?,
        Commands::Version => VersionStrategy.execute(()).await?,
    }

    Ok(())
}
