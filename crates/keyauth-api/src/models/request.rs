use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractRequest {
    // raw authorization header value to test
    #[serde(default)]
    pub authorization: Option<String>,
}
