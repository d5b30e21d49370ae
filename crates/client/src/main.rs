//! `todo-client` -- list and add todos from the command line.
//!
//! # Environment variables
//!
//! | Variable          | Default                 |
//! |-------------------|-------------------------|
//! | `TODO_API_URL`    | `http://localhost:5000` |
//! | `TODO_API_PREFIX` | `/api`                  |
//!
//! `--api-url` / `--api-prefix` take precedence over both.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_client::api::TodoApiClient;
use todo_client::config::ClientConfig;
use todo_client::view::TodoView;

#[derive(Debug, Parser)]
#[command(name = "todo-client", version, about = "List and add todos")]
struct Cli {
    /// API host, e.g. `http://localhost:5000`.
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Path prefix the API is mounted under.
    #[arg(long, global = true)]
    api_prefix: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every todo.
    List,
    /// Add a todo, then print the list.
    Add {
        /// Todo text; several words are joined with spaces.
        #[arg(required = true)]
        text: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(url) = cli.api_url {
        config.base_url = url;
    }
    if let Some(prefix) = cli.api_prefix {
        config.prefix = prefix;
    }
    tracing::debug!(api_root = %config.api_root(), "Using API");

    let client = TodoApiClient::new(&config).context("Failed to build HTTP client")?;
    let mut view = TodoView::new(client);
    view.mount().await;

    if let Command::Add { text } = cli.command {
        view.submit(&text.join(" ")).await;
    }

    for todo in view.todos() {
        println!("{}\t{}", todo.id, todo.text);
    }

    Ok(())
}
