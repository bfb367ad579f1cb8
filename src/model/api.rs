use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Total number of stored documents in a collection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CountDto {
    pub count: u64,
}
