use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.airtable.com/v0";
pub const DEFAULT_TABLE: &str = "Project Types";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorSettings {
    /// Base URL; the dataset id and table name are appended as path segments.
    pub api_base: String,
    pub table: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_body_bytes: u64,
}

impl Default for ConnectorSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            table: DEFAULT_TABLE.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_body_bytes: 5 * 1024 * 1024,
        }
    }
}
