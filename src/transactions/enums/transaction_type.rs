use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Outcome,
}

impl TransactionType {
    pub fn value(&self) -> &'static str {
        match *self {
            TransactionType::Income => "income",
            TransactionType::Outcome => "outcome",
        }
    }
}
