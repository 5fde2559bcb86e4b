use std::{env, sync::Arc, time::Duration};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::{
    app::envy::Envy,
    transactions::{
        client::{config::Config, transactions_client::TransactionsClient},
        controller,
        dtos::create_transaction_dto::CreateTransactionDto,
        enums::transaction_type::TransactionType,
        store::TransactionStore,
    },
};

mod app;
mod transactions;

#[derive(Parser, Debug)]
#[command(name = "transactions-store")]
#[command(about = "Keeps a list of transactions in sync with a json-server backend", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print transactions, newest first
    List {
        /// Full-text filter applied by the backend
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Create a transaction and print the updated list
    Create {
        #[arg(long)]
        description: String,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        category: String,
        #[arg(long = "type", value_enum)]
        kind: TransactionType,
    },
    /// Reload periodically and log every update
    Watch {
        /// Seconds between reloads
        #[arg(long, default_value_t = 30)]
        interval: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = envy::from_env::<Envy>()?;

    let client = TransactionsClient::new(Config::from_envy(&envy), None)?;
    let store = Arc::new(TransactionStore::new(client));

    tracing::debug!(app_env = ?envy.app_env, api_url = %envy.api_url, "store created");

    store.initialize().await?;

    match args.command {
        Command::List { query } => controller::list(&store, query).await?,
        Command::Create {
            description,
            price,
            category,
            kind,
        } => {
            let dto = CreateTransactionDto {
                description,
                price,
                category,
                kind,
            };
            controller::create(&store, dto).await?
        }
        Command::Watch { interval } => {
            controller::watch(store, Duration::from_secs(interval.max(1))).await
        }
    }

    Ok(())
}
