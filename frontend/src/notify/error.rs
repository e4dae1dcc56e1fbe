use thiserror::Error;

/// Why a notify-me attempt did not go through.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("email is empty")]
    EmptyInput,
    #[error("email does not look like local@domain.tld")]
    InvalidFormat,
    #[error("honeypot field was filled")]
    BotDetected,
    #[error("rate limited, retry in {retry_after_ms} ms")]
    RateLimited { retry_after_ms: i64 },
    #[error("a submission is already in flight")]
    InFlight,
    #[error("transport failure: {0}")]
    TransportFailure(#[from] TransportError),
}

impl SubmitError {
    /// Text shown in the toast. Transport details stay in the console log.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::EmptyInput => "Please enter your email address",
            SubmitError::InvalidFormat => "Invalid email address",
            SubmitError::BotDetected => "Submission blocked",
            SubmitError::RateLimited { .. } => {
                "Too many attempts. Please wait a minute before trying again."
            }
            SubmitError::InFlight => "Hang on, we're still sending your last request.",
            SubmitError::TransportFailure(_) => "Something went wrong. Please try again.",
        }
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("stored submission record is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("could not write to local storage")]
    Write,
}
