use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tokio::sync::watch;

use crate::{
    app::models::request_error::RequestError,
    transactions::{
        client::transactions_client::TransactionsClient,
        dtos::{
            create_transaction_dto::{CreateTransactionBody, CreateTransactionDto},
            get_transactions_filter_dto::GetTransactionsFilterDto,
        },
        models::transaction::Transaction,
    },
};

/// Shared, observable list of transactions kept in sync with the backend.
///
/// The list lives inside a watch channel. Every mutation runs under the
/// channel's lock, so concurrent `create` calls each land their own record
/// and subscribers only ever see whole states.
#[derive(Debug)]
pub struct TransactionStore {
    client: TransactionsClient,
    transactions: watch::Sender<Vec<Transaction>>,
    initialized: AtomicBool,
    // tickets handed to loads when issued / ticket of the last applied load
    issued_loads: AtomicU64,
    applied_load: AtomicU64,
}

impl TransactionStore {
    pub fn new(client: TransactionsClient) -> TransactionStore {
        let (transactions, _) = watch::channel(Vec::new());

        TransactionStore {
            client,
            transactions,
            initialized: AtomicBool::new(false),
            issued_loads: AtomicU64::new(0),
            applied_load: AtomicU64::new(0),
        }
    }

    /// Runs the first `load` of this store. Later calls do nothing.
    pub async fn initialize(&self) -> Result<(), RequestError> {
        if self.initialized.swap(true, Ordering::SeqCst) {
            tracing::debug!("store already initialized");
            return Ok(());
        }

        self.load(None).await
    }

    /// Replaces the list with the backend's transactions, newest first,
    /// optionally filtered by `query`.
    ///
    /// A response is dropped if a load issued after this one was applied
    /// first.
    pub async fn load(&self, query: Option<&str>) -> Result<(), RequestError> {
        let ticket = self.issued_loads.fetch_add(1, Ordering::SeqCst) + 1;
        let dto = GetTransactionsFilterDto::newest_first(query);

        let transactions = self.client.get_transactions(&dto).await?;
        let count = transactions.len();

        let applied = self.transactions.send_if_modified(|current| {
            if ticket < self.applied_load.load(Ordering::SeqCst) {
                return false;
            }

            self.applied_load.store(ticket, Ordering::SeqCst);
            *current = transactions;
            true
        });

        if applied {
            tracing::debug!(ticket, count, "load applied");
        } else {
            tracing::debug!(ticket, "stale load discarded");
        }

        Ok(())
    }

    /// Sends `dto` to the backend and puts the record it returns at the
    /// front of the list.
    pub async fn create(&self, dto: CreateTransactionDto) -> Result<Transaction, RequestError> {
        let body = CreateTransactionBody::new(dto);

        let transaction = self.client.create_transaction(&body).await?;

        self.transactions.send_modify(|current| {
            if let Some(head) = current.first() {
                warn_if_older(&transaction, head);
            }
            current.insert(0, transaction.clone());
        });

        tracing::debug!(id = %transaction.id, "create applied");

        Ok(transaction)
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Transaction>> {
        self.transactions.subscribe()
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.borrow().clone()
    }
}

// new records always go first; say so when that breaks newest-first order
fn warn_if_older(created: &Transaction, head: &Transaction) {
    if let (Some(created_at), Some(head_at)) = (created.created_at_utc(), head.created_at_utc()) {
        if created_at < head_at {
            tracing::warn!(
                id = %created.id,
                created_at = %created.created_at,
                head_created_at = %head.created_at,
                "created transaction is older than the current head"
            );
        }
    }
}
