use std::fmt;

/// Failure classes at the generation-service boundary. Everything here is
/// caught before the display layer and turned into a diagnostic file
/// record; nothing propagates as a panic or an unhandled error.
#[derive(Debug)]
pub enum GenerationError {
    /// Transport-level failure reaching the service.
    Network(String),
    /// The service answered with an unexpected status code.
    Api(String),
    /// Rejected credentials.
    Authentication(String),
    /// Too many requests; transient.
    RateLimit(String),
    /// The reply decoded as JSON but lacked the content-array/text shape.
    ResponseShape(String),
    /// The content array was present but empty, or its text was empty.
    EmptyContent,
    /// Local misconfiguration, e.g. a missing API key.
    Validation(String),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Api(msg) => write!(f, "API error: {}", msg),
            Self::Authentication(msg) => write!(f, "Authentication error: {}", msg),
            Self::RateLimit(msg) => write!(f, "Rate limit error: {}", msg),
            Self::ResponseShape(msg) => write!(f, "Unexpected response shape: {}", msg),
            Self::EmptyContent => write!(f, "The generation service returned no content"),
            Self::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for GenerationError {}
