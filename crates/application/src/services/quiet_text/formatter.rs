use chrono_tz::Tz;
use dnstap_quiet_domain::{
    ConfigError, Envelope, FormatterConfig, Message, NameDecodeFailurePolicy,
};
use std::sync::Arc;
use tracing::{debug, trace};

use super::address::format_address;
use super::classify::classify;
use super::quote::quote;
use super::time::write_time;
use crate::ports::DnsWireText;

/// Rendering choices that would otherwise depend on ambient process state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub reference_zone: Tz,
    pub name_failure: NameDecodeFailurePolicy,
}

impl FormatOptions {
    pub fn from_config(config: &FormatterConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            reference_zone: config.reference_zone()?,
            name_failure: config.name_decode_failure,
        })
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            reference_zone: chrono_tz::UTC,
            name_failure: NameDecodeFailurePolicy::Legacy,
        }
    }
}

/// Renders dnstap envelopes as one-line summaries:
///
/// ```text
/// 22:13:20.123456 CQ 127.0.0.1 UDP 34b "example.com." IN A
/// ```
pub struct QuietTextFormatter {
    wire_text: Arc<dyn DnsWireText>,
    options: FormatOptions,
}

impl QuietTextFormatter {
    pub fn new(wire_text: Arc<dyn DnsWireText>, options: FormatOptions) -> Self {
        Self { wire_text, options }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// One newline-terminated line for a MESSAGE envelope, nothing for any other kind.
    pub fn format_envelope(&self, envelope: &Envelope) -> Vec<u8> {
        match envelope {
            Envelope::Message(message) => self.format_message(message),
            Envelope::Other { kind } => {
                trace!(kind = *kind, "Skipping non-message envelope");
                Vec::new()
            }
        }
    }

    pub fn format_message(&self, message: &Message) -> Vec<u8> {
        let mut line = String::with_capacity(96);
        self.write_message(&mut line, message);
        line.into_bytes()
    }

    fn write_message(&self, out: &mut String, message: &Message) {
        let class = classify(message.kind);

        if class.is_query {
            write_time(
                out,
                message.query_time_sec,
                message.query_time_nsec,
                &self.options.reference_zone,
            );
        } else {
            write_time(
                out,
                message.response_time_sec,
                message.response_time_nsec,
                &self.options.reference_zone,
            );
        }
        out.push(' ');

        if let Some(role) = class.role {
            out.push(role);
        }
        out.push_str(if class.is_query { "Q " } else { "R " });

        let address = if class.prefer_query_address {
            message.query_address.as_deref()
        } else {
            message.response_address.as_deref()
        };
        if let Some(address) = address {
            out.push_str(&format_address(address));
        }
        out.push(' ');

        if let Some(protocol) = message.socket_protocol {
            out.push_str(&protocol.as_label());
        }
        out.push(' ');

        let payload = if class.is_query {
            message.query_message.as_deref()
        } else {
            message.response_message.as_deref()
        };
        out.push_str(&payload.map_or(0, <[u8]>::len).to_string());
        out.push_str("b ");

        // Placeholders carry their own trailing space so empty slots line up with filled ones.
        match message.query_name.as_deref() {
            Some(wire) => self.write_query_name(out, wire),
            None => out.push_str("X "),
        }
        out.push(' ');

        match message.query_class {
            Some(code) => out.push_str(&self.wire_text.class_label(code)),
            None => out.push_str("X "),
        }
        out.push(' ');

        match message.query_type {
            Some(code) => out.push_str(&self.wire_text.type_label(code)),
            None => out.push('X'),
        }

        out.push('\n');
    }

    fn write_query_name(&self, out: &mut String, wire: &[u8]) {
        match self.wire_text.unpack_name(wire) {
            Ok(name) => out.push_str(&quote(&name)),
            Err(e) => {
                debug!(error = %e, len = wire.len(), "Failed to decode query name");
                out.push_str("X ");
                if self.options.name_failure == NameDecodeFailurePolicy::Legacy {
                    out.push_str(&quote(""));
                }
            }
        }
    }
}
