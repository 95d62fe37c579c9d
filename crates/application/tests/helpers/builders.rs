use dnstap_quiet_domain::{Message, MessageType, SocketProtocol};

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

pub struct MessageBuilder {
    message: Message,
}

impl MessageBuilder {
    pub fn new(kind: MessageType) -> Self {
        Self {
            message: Message::new(kind),
        }
    }

    pub fn query_time(mut self, secs: u64, nsecs: u32) -> Self {
        self.message.query_time_sec = Some(secs);
        self.message.query_time_nsec = Some(nsecs);
        self
    }

    pub fn response_time(mut self, secs: u64, nsecs: u32) -> Self {
        self.message.response_time_sec = Some(secs);
        self.message.response_time_nsec = Some(nsecs);
        self
    }

    pub fn query_address(mut self, bytes: &[u8]) -> Self {
        self.message.query_address = Some(bytes.to_vec());
        self
    }

    pub fn response_address(mut self, bytes: &[u8]) -> Self {
        self.message.response_address = Some(bytes.to_vec());
        self
    }

    pub fn protocol(mut self, protocol: SocketProtocol) -> Self {
        self.message.socket_protocol = Some(protocol);
        self
    }

    pub fn query_message_len(mut self, len: usize) -> Self {
        self.message.query_message = Some(vec![0u8; len]);
        self
    }

    pub fn response_message_len(mut self, len: usize) -> Self {
        self.message.response_message = Some(vec![0u8; len]);
        self
    }

    pub fn query_name(mut self, name: &str) -> Self {
        self.message.query_name = Some(wire_name(name));
        self
    }

    pub fn raw_query_name(mut self, wire: &[u8]) -> Self {
        self.message.query_name = Some(wire.to_vec());
        self
    }

    pub fn query_class(mut self, class: u16) -> Self {
        self.message.query_class = Some(class);
        self
    }

    pub fn query_type(mut self, rtype: u16) -> Self {
        self.message.query_type = Some(rtype);
        self
    }

    pub fn build(self) -> Message {
        self.message
    }
}
