use serde::{Deserialize, Serialize};

use crate::{app::util::time, transactions::enums::transaction_type::TransactionType};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTransactionDto {
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

/// Body of `POST /transactions`. The backend assigns the id.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTransactionBody {
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl CreateTransactionBody {
    pub fn new(dto: CreateTransactionDto) -> Self {
        Self::with_created_at(dto, time::current_time_iso8601())
    }

    pub fn with_created_at(dto: CreateTransactionDto, created_at: String) -> Self {
        CreateTransactionBody {
            description: dto.description,
            price: dto.price,
            category: dto.category,
            kind: dto.kind,
            created_at,
        }
    }
}
