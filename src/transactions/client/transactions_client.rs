use crate::{
    app::{models::request_error::RequestError, util::reqwest::read_json},
    transactions::{
        dtos::{
            create_transaction_dto::CreateTransactionBody,
            get_transactions_filter_dto::GetTransactionsFilterDto,
        },
        errors::TransactionsRequestError,
        models::transaction::Transaction,
    },
};

use super::config::Config;

#[derive(Clone, Debug)]
pub struct TransactionsClient {
    pub config: Config,
    pub http_client: reqwest::Client,
}

impl TransactionsClient {
    pub fn new(
        config: Config,
        http_client: Option<reqwest::Client>,
    ) -> Result<TransactionsClient, RequestError> {
        let http_client = match http_client {
            Some(http_client) => http_client,
            None => {
                let mut builder = reqwest::ClientBuilder::new();
                if let Some(timeout) = config.timeout {
                    builder = builder.timeout(timeout);
                }

                match builder.build() {
                    Ok(http_client) => http_client,
                    Err(e) => {
                        tracing::error!(%e);
                        return Err(TransactionsRequestError::ClientBuildFailed.value());
                    }
                }
            }
        };

        Ok(TransactionsClient {
            config,
            http_client,
        })
    }

    pub async fn get_transactions(
        &self,
        dto: &GetTransactionsFilterDto,
    ) -> Result<Vec<Transaction>, RequestError> {
        tracing::debug!(q = ?dto.q, "get_transactions");

        let result = self
            .http_client
            .get(self.config.transactions_url())
            .query(dto)
            .send()
            .await;

        read_json(result, TransactionsRequestError::FetchFailed.value()).await
    }

    pub async fn create_transaction(
        &self,
        body: &CreateTransactionBody,
    ) -> Result<Transaction, RequestError> {
        tracing::debug!(created_at = %body.created_at, "create_transaction");

        let result = self
            .http_client
            .post(self.config.transactions_url())
            .json(body)
            .send()
            .await;

        read_json(result, TransactionsRequestError::CreateFailed.value()).await
    }
}
