use serde::Serialize;

/// Query string of `GET /transactions`.
///
/// `q` is left out entirely when no query was given. An empty query is still
/// sent as `q=`, the backend decides what that means.
#[derive(Debug, Clone, Serialize)]
pub struct GetTransactionsFilterDto {
    #[serde(rename = "_sort")]
    pub sort: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

impl GetTransactionsFilterDto {
    pub fn newest_first(query: Option<&str>) -> Self {
        GetTransactionsFilterDto {
            sort: "-createdAt".to_string(),
            q: query.map(str::to_string),
        }
    }
}
