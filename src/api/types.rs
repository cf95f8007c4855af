//! Wire types returned by the catalog service

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response of `POST /products/add`, kept verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Acknowledgment {
    pub id: u64,
    pub title: String,
    /// Any further fields echoed back by the service
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
