use serde::{Deserialize, Serialize};

/// JSON body of every failed API response.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct ErrorDto {
    pub error: String,
}
