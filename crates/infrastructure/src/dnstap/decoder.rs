use dnstap_quiet_application::ports::EnvelopeDecoder;
use dnstap_quiet_domain::{
    DomainError, Envelope, Message, MessageType, SocketProtocol, ENVELOPE_KIND_MESSAGE,
};
use prost::Message as _;
use tracing::trace;

use super::proto;

/// Decodes protobuf-encoded dnstap payloads.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProtobufEnvelopeDecoder;

impl ProtobufEnvelopeDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl EnvelopeDecoder for ProtobufEnvelopeDecoder {
    fn decode(&self, frame: &[u8]) -> Result<Envelope, DomainError> {
        let dnstap = proto::Dnstap::decode(frame)
            .map_err(|e| DomainError::InvalidEnvelope(e.to_string()))?;

        if dnstap.r#type != ENVELOPE_KIND_MESSAGE {
            trace!(kind = dnstap.r#type, "Decoded non-message envelope");
            return Ok(Envelope::Other {
                kind: dnstap.r#type,
            });
        }

        let message = dnstap.message.ok_or(DomainError::MissingMessage)?;
        Ok(Envelope::Message(into_domain(message)?))
    }
}

fn into_domain(message: proto::Message) -> Result<Message, DomainError> {
    // proto2 `required` is not enforced by prost; an absent type decodes as 0.
    if message.r#type == 0 {
        return Err(DomainError::MissingMessageType);
    }

    Ok(Message {
        kind: MessageType::from_code(message.r#type),
        query_time_sec: message.query_time_sec,
        query_time_nsec: message.query_time_nsec,
        response_time_sec: message.response_time_sec,
        response_time_nsec: message.response_time_nsec,
        query_address: message.query_address,
        response_address: message.response_address,
        socket_protocol: message.socket_protocol.map(SocketProtocol::from_code),
        query_message: message.query_message,
        response_message: message.response_message,
        query_name: message.query_name,
        // DNS class and type codes are 16 bits wide; upper bits are dropped.
        query_class: message.query_class.map(|c| c as u16),
        query_type: message.query_type.map(|t| t as u16),
    })
}
