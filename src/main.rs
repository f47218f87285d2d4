use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use bookshelf::{
    config::DEFAULT_BASE_URL, export::export_file, shell, Action, BooksApi, Config, Encoding,
    ListController,
};

/// Browse and edit the books held by a /books REST backend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Backend base url
    #[arg(long, env = "BOOKSHELF_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Body encoding for create and update: json or form
    #[arg(long, env = "BOOKSHELF_ENCODING", default_value = "json")]
    encoding: Encoding,

    /// Give up on a request after this many seconds
    #[arg(long, env = "BOOKSHELF_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Print every book
    List,
    /// Create a book
    Add { name: String, price: String },
    /// Change the name and price of a book
    Update { id: i64, name: String, price: String },
    /// Delete a book
    Delete { id: i64 },
    /// Write every book to a csv file
    Export { path: PathBuf },
    /// Interactive mode (default)
    Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::new(&args.base_url)?
        .with_encoding(args.encoding)
        .with_timeout(args.timeout_secs.map(Duration::from_secs));
    let api = BooksApi::new(&config)?;
    let mut controller = ListController::new(api);

    match args.command.unwrap_or(Cmd::Shell) {
        Cmd::List => {
            controller.start().await?;
            print!("{}", controller.view());
        }
        Cmd::Add { name, price } => {
            controller.add(&name, &price).await?;
            print!("{}", controller.view());
        }
        Cmd::Update { id, name, price } => {
            controller.start().await?;
            controller.edit(id, &name, &price).await?;
            print!("{}", controller.view());
        }
        Cmd::Delete { id } => {
            controller.press(Action::Delete(id)).await?;
            print!("{}", controller.view());
        }
        Cmd::Export { path } => {
            controller.start().await?;
            let count = export_file(&path, controller.view().rows())
                .with_context(|| format!("writing {}", path.display()))?;
            println!("wrote {} rows to {}", count, path.display());
        }
        Cmd::Shell => {
            let stdin = BufReader::new(tokio::io::stdin());
            shell::run(&mut controller, stdin, &mut std::io::stdout()).await?;
        }
    }
    Ok(())
}
