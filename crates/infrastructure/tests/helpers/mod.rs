#![allow(dead_code)]

use dnstap_quiet_infrastructure::dnstap::proto;
use prost::Message as _;

pub const CONTROL_START: u32 = 0x02;
pub const CONTROL_STOP: u32 = 0x03;
pub const CONTROL_READY: u32 = 0x04;

/// Wire encoding of a dotted name, e.g. `example.com` -> `\x07example\x03com\x00`.
pub fn wire_name(name: &str) -> Vec<u8> {
    let mut wire = Vec::new();
    for label in name.split('.').filter(|l| !l.is_empty()) {
        wire.push(label.len() as u8);
        wire.extend_from_slice(label.as_bytes());
    }
    wire.push(0);
    wire
}

/// Builds Frame Streams byte sequences by hand.
#[derive(Default)]
pub struct FrameStreamBuilder {
    bytes: Vec<u8>,
}

impl FrameStreamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn control(mut self, control_type: u32, content_type: Option<&[u8]>) -> Self {
        let mut body = control_type.to_be_bytes().to_vec();
        if let Some(content_type) = content_type {
            body.extend_from_slice(&1u32.to_be_bytes());
            body.extend_from_slice(&(content_type.len() as u32).to_be_bytes());
            body.extend_from_slice(content_type);
        }
        self.bytes.extend_from_slice(&0u32.to_be_bytes());
        self.bytes.extend_from_slice(&(body.len() as u32).to_be_bytes());
        self.bytes.extend_from_slice(&body);
        self
    }

    pub fn start(self) -> Self {
        self.control(CONTROL_START, Some(b"protobuf:dnstap.Dnstap"))
    }

    pub fn stop(self) -> Self {
        self.control(CONTROL_STOP, None)
    }

    pub fn data(mut self, frame: &[u8]) -> Self {
        self.bytes
            .extend_from_slice(&(frame.len() as u32).to_be_bytes());
        self.bytes.extend_from_slice(frame);
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

/// A protobuf `Message` with every field unset except its type.
pub fn proto_message(kind: i32) -> proto::Message {
    proto::Message {
        r#type: kind,
        ..Default::default()
    }
}

pub fn encode_envelope(kind: i32, message: Option<proto::Message>) -> Vec<u8> {
    proto::Dnstap {
        identity: Some(b"ns1.example".to_vec()),
        version: Some(b"test 1.0".to_vec()),
        extra: None,
        r#type: kind,
        message,
    }
    .encode_to_vec()
}

/// A CLIENT_QUERY for `example.com. IN A` from 127.0.0.1 over UDP.
pub fn client_query_frame() -> Vec<u8> {
    let mut message = proto_message(5);
    message.socket_family = Some(1);
    message.socket_protocol = Some(1);
    message.query_address = Some(vec![127, 0, 0, 1]);
    message.response_address = Some(vec![127, 0, 0, 53]);
    message.query_port = Some(40_000);
    message.response_port = Some(53);
    message.query_time_sec = Some(1_700_000_000);
    message.query_time_nsec = Some(123_456_000);
    message.query_message = Some(vec![0u8; 34]);
    message.query_name = Some(wire_name("example.com"));
    message.query_class = Some(1);
    message.query_type = Some(1);
    encode_envelope(1, Some(message))
}
