use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
    /// Text the backend put in `{ error: { message } }` or `{ message }`.
    pub backend_message: Option<String>,
}

impl ApiError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            backend_message: None,
        }
    }

    pub(crate) fn http_status(status: u16, backend_message: Option<String>) -> Self {
        Self {
            kind: FailureKind::HttpStatus(status),
            message: format!("backend answered {status}"),
            backend_message,
        }
    }

    /// True when no HTTP answer was obtained at all.
    pub fn is_transport(&self) -> bool {
        matches!(
            self.kind,
            FailureKind::Network | FailureKind::Timeout | FailureKind::InvalidUrl
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Network,
    Timeout,
    HttpStatus(u16),
    InvalidRequest,
    Decode,
    MissingField(&'static str),
    NotFound,
    Io,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::InvalidRequest => write!(f, "invalid request"),
            FailureKind::Decode => write!(f, "unexpected response body"),
            FailureKind::MissingField(field) => write!(f, "missing field {field} in response"),
            FailureKind::NotFound => write!(f, "record not found"),
            FailureKind::Io => write!(f, "io error"),
        }
    }
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return ApiError::new(FailureKind::InvalidUrl, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
