use thiserror::Error;

/// Reasons a single span cannot be translated into the collector format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    #[error("invalid identifier {value:?}: {reason}")]
    InvalidIdentifier { value: String, reason: String },

    #[error("128 bit trace ids not supported by LightStep: {value:?}")]
    UnsupportedIdentifierWidth { value: String },

    #[error("start and end time expected")]
    MissingTimestamp,

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("expected start time to be before end time (start {start}, end {end})")]
    NegativeDuration { start: String, end: String },

    #[error("unsupported type {kind} for tag {key:?}")]
    UnsupportedTagType { key: String, kind: &'static str },
}

/// Batch-level failure: the first span that could not be translated.
///
/// When this is returned no report was built and nothing was sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to convert span {index} (span id {span_id:?}): {source}")]
pub struct ConversionError {
    /// Position of the offending span in the inbound batch.
    pub index: usize,
    pub span_id: String,
    #[source]
    pub source: SpanError,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),

    #[error("failed to parse arguments: {0}")]
    Args(#[from] clap::Error),
}

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to bind to address {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not connect to satellite {address}: {source}")]
    Connect {
        address: String,
        #[source]
        source: tonic::transport::Error,
    },

    #[error("failed to send report: {0}")]
    Conversion(#[from] ConversionError),

    #[error("failed to send report: {0}")]
    Report(#[from] tonic::Status),

    #[error("gRPC server error: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

impl From<AdapterError> for tonic::Status {
    fn from(err: AdapterError) -> Self {
        match err {
            AdapterError::Conversion(e) => {
                tonic::Status::invalid_argument(format!("failed to send report: {e}"))
            }
            AdapterError::Report(status) => status,
            other => tonic::Status::internal(other.to_string()),
        }
    }
}
