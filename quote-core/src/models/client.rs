use serde::{Deserialize, Serialize};

/// The recipient shown in the "To" block of a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    pub company_name: String,
    pub address: String,
    pub contact: String,
}
