use serde::{Deserialize, Serialize};

/// Paginated envelope wrapping every list and lookup response. The server
/// applies default pagination; this client never sends pagination parameters.
#[derive(Serialize, Deserialize, Debug)]
pub struct GetResponse<T> {
    pub docs: Vec<T>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub page: i64,
    pub pages: i64,
}
