pub mod config;
pub mod transactions_client;
