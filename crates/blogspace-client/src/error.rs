use std::fmt;

/// Result type for blogspace-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy for the API boundary.
///
/// Callers decide which of these reach the user; the client only
/// classifies. `Network` means no HTTP response arrived at all.
#[derive(Debug)]
pub enum Error {
    /// Transport failure, no response from the server
    Network(Box<dyn std::error::Error + Send + Sync + 'static>),

    /// Login endpoint returned a non-success status
    InvalidCredentials,

    /// Any other endpoint returned a non-success status
    Rejected { status: u16, detail: Option<String> },

    /// Successful response whose body failed schema validation
    Malformed(String),
}

impl Error {
    /// The server-provided detail message, when one was parseable.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Error::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Network(err) => write!(f, "Network error: {}", err),
            Error::InvalidCredentials => write!(f, "Invalid credentials"),
            Error::Rejected { status, detail } => match detail {
                Some(detail) => write!(f, "Request rejected ({}): {}", status, detail),
                None => write!(f, "Request rejected ({})", status),
            },
            Error::Malformed(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Network(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Malformed(err.to_string())
        } else {
            Error::Network(Box::new(err))
        }
    }
}
