pub mod create_transaction_dto;
pub mod get_transactions_filter_dto;
