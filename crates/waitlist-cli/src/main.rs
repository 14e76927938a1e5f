#![forbid(unsafe_code)]

//! Waitlist CLI
//!
//! Runs either server of the registration pipeline, submits an email
//! through the proxy, or dumps the sheet store table.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use waitlist_client::{BackupList, SubmitClient};
use waitlist_core::ListResponse;
use waitlist_proxy::{ProxyConfig, ProxyState};
use waitlist_sheet::SheetTable;

/// Waitlist Command-Line Interface
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the sheet store server
    Sheet {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8091", env = "WAITLIST_SHEET_LISTEN")]
        listen: String,

        /// Path of the CSV table file
        #[arg(long, default_value = "signups.csv", env = "WAITLIST_SHEET_FILE")]
        file: PathBuf,
    },

    /// Run the submission proxy
    Proxy {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8090", env = "WAITLIST_PROXY_LISTEN")]
        listen: String,

        /// Sheet store URL; when omitted, resolved from
        /// WAITLIST_SHEET_URL then PUBLIC_WAITLIST_SHEET_URL
        #[arg(long)]
        sheet_url: Option<String>,
    },

    /// Submit one email through the proxy
    Submit {
        /// The email address to register
        email: String,

        /// Proxy submission endpoint
        #[arg(
            long,
            default_value = "http://127.0.0.1:8090/api/submit",
            env = "WAITLIST_PROXY_URL"
        )]
        proxy_url: String,

        /// Backup list file; defaults to the platform data directory
        #[arg(long)]
        backup_file: Option<PathBuf>,
    },

    /// Dump the sheet store table
    List {
        /// Sheet store URL
        #[arg(long, env = "WAITLIST_SHEET_URL")]
        sheet_url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,waitlist=debug".into()),
        )
        .init();

    let args = Args::parse();
    match args.command {
        Command::Sheet { listen, file } => run_sheet(&listen, &file).await,
        Command::Proxy { listen, sheet_url } => run_proxy(&listen, sheet_url).await,
        Command::Submit {
            email,
            proxy_url,
            backup_file,
        } => run_submit(&email, &proxy_url, backup_file).await,
        Command::List { sheet_url } => run_list(&sheet_url).await,
    }
}

async fn run_sheet(listen: &str, file: &Path) -> Result<()> {
    let table = SheetTable::open(file)
        .with_context(|| format!("failed to open sheet table at {}", file.display()))?;
    tracing::info!(listen, file = %file.display(), "starting sheet store");

    let router = waitlist_sheet::router(Arc::new(Mutex::new(table)));
    let listener = tokio::net::TcpListener::bind(listen).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

async fn run_proxy(listen: &str, sheet_url: Option<String>) -> Result<()> {
    let config = match sheet_url {
        Some(url) => ProxyConfig::new(url),
        None => ProxyConfig::from_env(),
    };
    if config.sheet_url().is_none() {
        tracing::warn!("no sheet URL resolved; submissions will fail until configured");
    }
    tracing::info!(listen, "starting submission proxy");

    let router = waitlist_proxy::router(ProxyState::new(config)?);
    let listener = tokio::net::TcpListener::bind(listen).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

async fn run_submit(email: &str, proxy_url: &str, backup_file: Option<PathBuf>) -> Result<()> {
    let backup_path = backup_file.unwrap_or_else(BackupList::default_path);
    let backup = BackupList::load(&backup_path)?;
    let client = SubmitClient::new(proxy_url, backup)?;

    let outcome = client.submit(email).await?;
    println!("{}", outcome.message);
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

async fn run_list(sheet_url: &str) -> Result<()> {
    let response: ListResponse = reqwest::get(sheet_url)
        .await
        .context("failed to reach the sheet store")?
        .json()
        .await
        .context("sheet store answered outside the list contract")?;

    println!("{} ({} registrations)", response.sheet_name, response.count);
    for row in &response.data {
        println!("{}", row.join("\t"));
    }
    Ok(())
}
