//! Connection defaults and the settings resolved from the command line.

pub const DEFAULT_URI: &str = "mongodb://localhost:27017";

pub const DEFAULT_DATABASE: &str = "plp_bookstore";

pub const DEFAULT_COLLECTION: &str = "books";

/// Reported to the server in the connection handshake.
pub const APP_NAME: &str = "bookstore-report";

pub const URI_ENV_VAR: &str = "MONGODB_URI";

/// Books per page for the paginated title listing.
pub const PAGE_SIZE: i64 = 5;

/// What the runner does when a step fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failed step.
    #[default]
    Abort,
    /// Record the failure and move on to the next step.
    Continue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub uri: String,
    pub database: String,
    pub collection: String,
    pub failure_policy: FailurePolicy,
    pub output: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            failure_policy: FailurePolicy::default(),
            output: OutputFormat::default(),
        }
    }
}
