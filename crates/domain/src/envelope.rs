use crate::message_type::MessageType;
use crate::socket_protocol::SocketProtocol;

/// Wire code of the only renderable envelope kind.
pub const ENVELOPE_KIND_MESSAGE: i32 = 1;

/// One decoded dnstap record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope {
    Message(Message),
    /// Any payload kind other than MESSAGE. Kept only so callers can log what was skipped.
    Other { kind: i32 },
}

impl Envelope {
    pub fn is_message(&self) -> bool {
        matches!(self, Envelope::Message(_))
    }
}

/// A DNS query or response event. Only `kind` is guaranteed; every other field may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageType,
    pub query_time_sec: Option<u64>,
    pub query_time_nsec: Option<u32>,
    pub response_time_sec: Option<u64>,
    pub response_time_nsec: Option<u32>,
    pub query_address: Option<Vec<u8>>,
    pub response_address: Option<Vec<u8>>,
    pub socket_protocol: Option<SocketProtocol>,
    pub query_message: Option<Vec<u8>>,
    pub response_message: Option<Vec<u8>>,
    /// Question name in DNS wire encoding.
    pub query_name: Option<Vec<u8>>,
    pub query_class: Option<u16>,
    pub query_type: Option<u16>,
}

impl Message {
    pub fn new(kind: MessageType) -> Self {
        Self {
            kind,
            query_time_sec: None,
            query_time_nsec: None,
            response_time_sec: None,
            response_time_nsec: None,
            query_address: None,
            response_address: None,
            socket_protocol: None,
            query_message: None,
            response_message: None,
            query_name: None,
            query_class: None,
            query_type: None,
        }
    }
}
