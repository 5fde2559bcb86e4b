use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{app::util::time, transactions::enums::transaction_type::TransactionType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub price: f64,
    pub category: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Transaction {
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        time::parse_iso8601(&self.created_at)
    }
}

/// Backend assigned id. Older json-server versions hand out numbers, newer
/// ones strings; whichever arrives is kept as is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionId::Number(id) => f.pad(&id.to_string()),
            TransactionId::Text(id) => f.pad(id),
        }
    }
}
