/// Role and direction of a logged DNS message, as carried in the dnstap `Message.type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    AuthQuery,
    AuthResponse,
    ResolverQuery,
    ResolverResponse,
    ClientQuery,
    ClientResponse,
    ForwarderQuery,
    ForwarderResponse,
    StubQuery,
    StubResponse,
    ToolQuery,
    ToolResponse,
    UpdateQuery,
    UpdateResponse,
    Unknown(i32),
}

impl MessageType {
    /// Maps a dnstap wire code onto a subtype. Codes outside the schema are kept as `Unknown`.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => MessageType::AuthQuery,
            2 => MessageType::AuthResponse,
            3 => MessageType::ResolverQuery,
            4 => MessageType::ResolverResponse,
            5 => MessageType::ClientQuery,
            6 => MessageType::ClientResponse,
            7 => MessageType::ForwarderQuery,
            8 => MessageType::ForwarderResponse,
            9 => MessageType::StubQuery,
            10 => MessageType::StubResponse,
            11 => MessageType::ToolQuery,
            12 => MessageType::ToolResponse,
            13 => MessageType::UpdateQuery,
            14 => MessageType::UpdateResponse,
            other => MessageType::Unknown(other),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            MessageType::AuthQuery => 1,
            MessageType::AuthResponse => 2,
            MessageType::ResolverQuery => 3,
            MessageType::ResolverResponse => 4,
            MessageType::ClientQuery => 5,
            MessageType::ClientResponse => 6,
            MessageType::ForwarderQuery => 7,
            MessageType::ForwarderResponse => 8,
            MessageType::StubQuery => 9,
            MessageType::StubResponse => 10,
            MessageType::ToolQuery => 11,
            MessageType::ToolResponse => 12,
            MessageType::UpdateQuery => 13,
            MessageType::UpdateResponse => 14,
            MessageType::Unknown(code) => *code,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::AuthQuery => "AUTH_QUERY",
            MessageType::AuthResponse => "AUTH_RESPONSE",
            MessageType::ResolverQuery => "RESOLVER_QUERY",
            MessageType::ResolverResponse => "RESOLVER_RESPONSE",
            MessageType::ClientQuery => "CLIENT_QUERY",
            MessageType::ClientResponse => "CLIENT_RESPONSE",
            MessageType::ForwarderQuery => "FORWARDER_QUERY",
            MessageType::ForwarderResponse => "FORWARDER_RESPONSE",
            MessageType::StubQuery => "STUB_QUERY",
            MessageType::StubResponse => "STUB_RESPONSE",
            MessageType::ToolQuery => "TOOL_QUERY",
            MessageType::ToolResponse => "TOOL_RESPONSE",
            MessageType::UpdateQuery => "UPDATE_QUERY",
            MessageType::UpdateResponse => "UPDATE_RESPONSE",
            MessageType::Unknown(_) => "UNKNOWN",
        }
    }
}
