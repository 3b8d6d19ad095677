//! jsonreq - issue a single JSON request from the command line.

use clap::{Parser, Subcommand};
use jsonreq::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jsonreq")]
#[command(about = "Issue a JSON GET or POST and print the parsed response")]
#[command(version)]
struct Cli {
    /// Origin that relative URLs are resolved against
    #[arg(long)]
    base_url: Option<String>,

    /// Treat non-2xx statuses as failures
    #[arg(long)]
    require_success: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// GET a URL
    Get { url: String },
    /// POST a JSON document to a URL
    Post {
        url: String,
        /// JSON payload, e.g. '{"a":1}'
        data: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = HelperConfig::new();
    if let Some(base_url) = cli.base_url {
        config = config.base_url(base_url);
    }
    let mut helper = RequestHelper::new(config);
    if cli.require_success {
        helper = helper.require_success();
    }

    let (tx, rx) = tokio::sync::oneshot::channel();
    let on_complete = move |completion: Completion| {
        let _ = tx.send(completion);
    };

    match cli.command {
        Command::Get { url } => helper.get(url, on_complete),
        Command::Post { url, data } => {
            let payload: serde_json::Value = serde_json::from_str(&data)?;
            helper.post(&payload, url, on_complete);
        }
    }

    let completion = rx.await?;
    let value = completion.into_result()?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
