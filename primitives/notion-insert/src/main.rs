//! Notion Insert - Bulk Page Creator
//!
//! Reads a text file and creates one page in a Notion database per line.
//! Each line becomes the page's `Title` property verbatim, empty lines included.
//!
//! Requests are sent one at a time. The first file or request error is logged
//! and the process exits with status 1. Non-2xx responses are only logged.
//!
//! # Usage
//!
//! ```bash
//! notion-insert --file-name tasks.txt --token secret_xxx --database-id 0123abcd
//!
//! # Token from the environment
//! NOTION_INSERT_TOKEN=secret_xxx notion-insert --file-name tasks.txt --database-id 0123abcd
//!
//! # Against a local mock server
//! notion-insert --file-name tasks.txt --api-url http://localhost:8080/v1/pages
//! ```

use anyhow::Context;
use clap::Parser;
use notion_insert::{DEFAULT_API_URL, NOTION_VERSION, NotionClient};
use reqwest::Client;
use tracing_subscriber::EnvFilter;

/// Creates Notion database pages from the lines of a file.
#[derive(Parser, Debug, Clone)]
#[command(name = "notion-insert")]
#[command(about = "Creates one Notion database page per line of a text file")]
struct Args {
    /// File whose lines become page titles.
    #[arg(long, env = "NOTION_INSERT_FILE_NAME", default_value = "")]
    file_name: String,

    /// Token for the Notion API.
    #[arg(long, env = "NOTION_INSERT_TOKEN", default_value = "", hide_env_values = true)]
    token: String,

    /// Target Notion database ID.
    #[arg(long, env = "NOTION_INSERT_DATABASE_ID", default_value = "")]
    database_id: String,

    /// Page-creation endpoint.
    #[arg(long, env = "NOTION_INSERT_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Value of the Notion-Version header.
    #[arg(long, env = "NOTION_INSERT_NOTION_VERSION", default_value = NOTION_VERSION)]
    notion_version: String,
}

async fn try_main(args: Args) -> anyhow::Result<()> {
    let http = Client::builder()
        .build()
        .context("failed to build HTTP client")?;

    let client = NotionClient::new(http, args.token, args.database_id)
        .with_api_url(args.api_url)
        .with_notion_version(args.notion_version);

    let submitted = notion_insert::run(&args.file_name, &client).await?;
    tracing::debug!(submitted, file = %args.file_name, "All lines submitted");

    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = try_main(args).await {
        tracing::error!("{e:#}");
        std::process::exit(1);
    }
}
