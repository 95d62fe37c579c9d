//! dnstap-quiet Domain Layer
pub mod config;
pub mod envelope;
pub mod errors;
pub mod message_type;
pub mod socket_protocol;

pub use config::{CliOverrides, Config, ConfigError, FormatterConfig, NameDecodeFailurePolicy};
pub use envelope::{Envelope, Message, ENVELOPE_KIND_MESSAGE};
pub use errors::DomainError;
pub use message_type::MessageType;
pub use socket_protocol::SocketProtocol;
