//! FreeNews command-line interface.
//!
//! One subcommand per application page: the news feed, the add-news
//! form and the wallet panel. Every invocation resolves its environment
//! once, builds a fresh session for the page it runs, and exits.

mod pages;

use anyhow::Result;
use clap::{Parser, Subcommand};
use freenews_config::{resolve_with_contract, Environment};
use pages::addnews::{AddNewsPage, NewsForm};
use pages::news::{NewsPage, VoteKind};
use pages::wallet::WalletPage;
use pages::{build_session, PageError};
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "freenews", about = "FreeNews - blockchain-backed news feed")]
struct Cli {
    /// Deployment environment (production, mainnet, development,
    /// testnet, betanet).
    #[arg(long, env = "NEWS_ENV", default_value = "testnet", value_name = "NAME")]
    env: String,

    /// Overrides the contract account on production/betanet.
    #[arg(long, env = "CONTRACT_NAME", value_name = "ACCOUNT")]
    contract: Option<String>,

    /// Overrides the credential store directory.
    #[arg(long, value_name = "PATH")]
    credentials_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the news feed
    News,
    /// Vote on a feed entry
    Vote {
        #[arg(value_enum)]
        kind: VoteKind,
        id: u32,
    },
    /// Submit a news entry
    Add {
        #[arg(long)]
        uri: String,
        #[arg(long)]
        header: String,
        #[arg(long)]
        body: String,
        /// Fingerprint header and body instead of sending raw text
        #[arg(long)]
        digest: bool,
    },
    /// Wallet sign-in and sign-out
    Wallet {
        #[command(subcommand)]
        action: WalletCommands,
    },
}

#[derive(Subcommand, Debug)]
enum WalletCommands {
    /// Show the sign-in state
    Status,
    /// Start the sign-in flow for an account
    SignIn { account_id: String },
    /// Finish a sign-in after the external wallet authorized it
    Complete { account_id: String },
    /// Sign out
    SignOut,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    run(Cli::parse()).await
}

async fn run(cli: Cli) -> Result<()> {
    let env: Environment = cli.env.parse()?;
    let config = resolve_with_contract(env, cli.contract);
    let credentials = cli.credentials_dir.as_deref();

    match cli.command {
        Commands::News => {
            let page = NewsPage::new(build_session(config, credentials).await?);
            match page.fetch().await {
                Ok(items) => print!("{}", NewsPage::render(&items)),
                Err(e) => {
                    // A failed query shows an empty feed plus the error,
                    // never stale or default data.
                    error!(error = %e, "feed query failed");
                    eprintln!("error: {e}");
                    print!("{}", NewsPage::render(&[]));
                    anyhow::bail!("news feed unavailable");
                }
            }
        }
        Commands::Vote { kind, id } => match NewsPage::vote(kind, id) {
            Ok(()) => {}
            Err(e @ PageError::NotYetImplemented(_)) => println!("{e}"),
            Err(e) => return Err(e.into()),
        },
        Commands::Add {
            uri,
            header,
            body,
            digest,
        } => {
            let page = AddNewsPage::new(build_session(config, credentials).await?);
            let form = NewsForm { uri, header, body };
            match page.submit(form, digest).await {
                Ok(target) => println!("submitted; continue at {target}"),
                Err(e) => {
                    eprintln!("error: {e}");
                    eprintln!("submission failed; staying on the form");
                    return Err(e.into());
                }
            }
        }
        Commands::Wallet { action } => {
            let mut page = WalletPage::new(build_session(config, credentials).await?);
            match action {
                WalletCommands::Status => print!("{}", page.status()),
                WalletCommands::SignIn { account_id } => match page.sign_in(&account_id)? {
                    Some(request) => {
                        println!("authorize this key in your wallet:");
                        println!("  {}", request.url);
                        println!("then run: freenews wallet complete {}", request.account_id);
                    }
                    None => println!("already signed in"),
                },
                WalletCommands::Complete { account_id } => {
                    page.complete(&account_id)?;
                    print!("{}", page.status());
                }
                WalletCommands::SignOut => {
                    page.sign_out()?;
                    println!("signed out");
                }
            }
        }
    }
    Ok(())
}
