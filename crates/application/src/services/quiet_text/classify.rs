use dnstap_quiet_domain::MessageType;

/// The two axes every field selection in a quiet line depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub is_query: bool,
    /// `None` for subtypes without a role letter; the slot is then skipped entirely.
    pub role: Option<char>,
    /// Print `query_address` instead of `response_address`.
    pub prefer_query_address: bool,
}

pub fn classify(kind: MessageType) -> Classification {
    let is_query = matches!(
        kind,
        MessageType::ClientQuery
            | MessageType::ResolverQuery
            | MessageType::AuthQuery
            | MessageType::ForwarderQuery
    );

    let role = match kind {
        MessageType::ClientQuery | MessageType::ClientResponse => Some('C'),
        MessageType::ResolverQuery | MessageType::ResolverResponse => Some('R'),
        MessageType::AuthQuery | MessageType::AuthResponse => Some('A'),
        MessageType::ForwarderQuery | MessageType::ForwarderResponse => Some('F'),
        MessageType::StubQuery | MessageType::StubResponse => Some('S'),
        _ => None,
    };

    let prefer_query_address = matches!(kind, MessageType::ClientQuery | MessageType::AuthQuery);

    Classification {
        is_query,
        role,
        prefer_query_address,
    }
}
