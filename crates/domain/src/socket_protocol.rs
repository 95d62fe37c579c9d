use std::borrow::Cow;
use std::fmt;

/// Transport the logged message travelled over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocketProtocol {
    Udp,
    Tcp,
    Dot,
    Doh,
    DnsCryptUdp,
    DnsCryptTcp,
    Doq,
    Unknown(i32),
}

impl SocketProtocol {
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => SocketProtocol::Udp,
            2 => SocketProtocol::Tcp,
            3 => SocketProtocol::Dot,
            4 => SocketProtocol::Doh,
            5 => SocketProtocol::DnsCryptUdp,
            6 => SocketProtocol::DnsCryptTcp,
            7 => SocketProtocol::Doq,
            other => SocketProtocol::Unknown(other),
        }
    }

    /// Label as written in the dnstap schema. Codes the schema does not name print as numbers.
    pub fn as_label(&self) -> Cow<'static, str> {
        match self {
            SocketProtocol::Udp => Cow::Borrowed("UDP"),
            SocketProtocol::Tcp => Cow::Borrowed("TCP"),
            SocketProtocol::Dot => Cow::Borrowed("DOT"),
            SocketProtocol::Doh => Cow::Borrowed("DOH"),
            SocketProtocol::DnsCryptUdp => Cow::Borrowed("DNSCryptUDP"),
            SocketProtocol::DnsCryptTcp => Cow::Borrowed("DNSCryptTCP"),
            SocketProtocol::Doq => Cow::Borrowed("DOQ"),
            SocketProtocol::Unknown(code) => Cow::Owned(code.to_string()),
        }
    }
}

impl fmt::Display for SocketProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_label())
    }
}
