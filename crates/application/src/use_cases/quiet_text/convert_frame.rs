use dnstap_quiet_domain::DomainError;
use std::sync::Arc;
use tracing::debug;

use crate::ports::EnvelopeDecoder;
use crate::services::QuietTextFormatter;

/// Decodes one dnstap payload and renders it as a quiet text line.
pub struct ConvertFrameUseCase {
    decoder: Arc<dyn EnvelopeDecoder>,
    formatter: Arc<QuietTextFormatter>,
}

impl ConvertFrameUseCase {
    pub fn new(decoder: Arc<dyn EnvelopeDecoder>, formatter: Arc<QuietTextFormatter>) -> Self {
        Self { decoder, formatter }
    }

    /// Returns the rendered line, an empty buffer for non-message envelopes, or the decode
    /// error when the payload is not a valid envelope. Nothing is rendered in that case.
    pub fn execute(&self, frame: &[u8]) -> Result<Vec<u8>, DomainError> {
        let envelope = self.decoder.decode(frame).inspect_err(|e| {
            debug!(error = %e, len = frame.len(), "Failed to decode dnstap frame");
        })?;

        Ok(self.formatter.format_envelope(&envelope))
    }
}
