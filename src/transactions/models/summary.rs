use crate::transactions::enums::transaction_type::TransactionType;

use super::transaction::Transaction;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub income: f64,
    pub outcome: f64,
    pub total: f64,
}

impl Summary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut summary = Summary::default();

        for transaction in transactions {
            match transaction.kind {
                TransactionType::Income => summary.income += transaction.price,
                TransactionType::Outcome => summary.outcome += transaction.price,
            }
        }
        summary.total = summary.income - summary.outcome;

        summary
    }
}
