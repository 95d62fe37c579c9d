mod dns_wire_text;
mod envelope_decoder;

pub use dns_wire_text::DnsWireText;
pub use envelope_decoder::EnvelopeDecoder;

// Re-export for convenience
pub use dnstap_quiet_domain::{Envelope, Message};
