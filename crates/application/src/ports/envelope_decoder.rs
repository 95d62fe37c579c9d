use dnstap_quiet_domain::{DomainError, Envelope};

/// Turns one encoded dnstap payload into a structured envelope.
pub trait EnvelopeDecoder: Send + Sync {
    fn decode(&self, frame: &[u8]) -> Result<Envelope, DomainError>;
}
