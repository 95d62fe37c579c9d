use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid dnstap envelope: {0}")]
    InvalidEnvelope(String),

    #[error("Envelope of kind MESSAGE carries no message")]
    MissingMessage,

    #[error("Message carries no valid type")]
    MissingMessageType,

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Frame stream error: {0}")]
    FrameStream(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
