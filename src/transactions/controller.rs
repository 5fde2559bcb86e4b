use std::{sync::Arc, time::Duration};

use tokio::time::interval;

use crate::{
    app::models::request_error::RequestError,
    transactions::{
        dtos::create_transaction_dto::CreateTransactionDto,
        enums::transaction_type::TransactionType,
        models::{summary::Summary, transaction::Transaction},
        store::TransactionStore,
    },
};

pub async fn list(store: &TransactionStore, query: Option<String>) -> Result<(), RequestError> {
    if query.is_some() {
        store.load(query.as_deref()).await?;
    }

    print!("{}", render(&store.transactions()));

    Ok(())
}

pub async fn create(store: &TransactionStore, dto: CreateTransactionDto) -> Result<(), RequestError> {
    let transaction = store.create(dto).await?;
    println!("created {} transaction {}", transaction.kind.value(), transaction.id);

    print!("{}", render(&store.transactions()));

    Ok(())
}

/// Reloads every `period` and logs what subscribers receive, until Ctrl-C.
pub async fn watch(store: Arc<TransactionStore>, period: Duration) {
    let mut receiver = store.subscribe();

    let subscriber = tokio::spawn(async move {
        while receiver.changed().await.is_ok() {
            let summary = Summary::from_transactions(&receiver.borrow_and_update());
            tracing::info!(
                income = summary.income,
                outcome = summary.outcome,
                total = summary.total,
                "transactions updated"
            );
        }
    });

    let mut interval = interval(period);
    interval.tick().await;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if let Err(e) = store.load(None).await {
                    tracing::error!("watch: {:?}", e);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("watch stopped");
                break;
            }
        }
    }

    subscriber.abort();
}

pub fn render(transactions: &[Transaction]) -> String {
    let mut out = String::new();

    for transaction in transactions {
        let price = match transaction.kind {
            TransactionType::Income => format!("{:.2}", transaction.price),
            TransactionType::Outcome => format!("-{:.2}", transaction.price),
        };
        let date = match transaction.created_at_utc() {
            Some(created_at) => created_at.format("%Y-%m-%d").to_string(),
            None => transaction.created_at.to_string(),
        };

        out.push_str(&format!(
            "{:>6}  {:<30} {:>12}  {:<15} {}\n",
            transaction.id, transaction.description, price, transaction.category, date
        ));
    }

    let summary = Summary::from_transactions(transactions);
    out.push_str(&format!(
        "income {:.2} | outcome {:.2} | total {:.2}\n",
        summary.income, summary.outcome, summary.total
    ));

    out
}
