use serde::{Deserialize, Serialize};

/// The issuing company shown in the "From" block of a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub address: String,
    pub contact: String,

    /// Logo as an embedded data URI. Absent until the user uploads one.
    #[serde(default)]
    pub logo: Option<String>,
}
