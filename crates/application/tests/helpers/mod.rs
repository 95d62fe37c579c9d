#![allow(dead_code)]

pub mod builders;
pub mod mock_ports;

pub use builders::{wire_name, MessageBuilder};
pub use mock_ports::{MockDnsWireText, MockEnvelopeDecoder};
