use dnstap_quiet_application::ports::{DnsWireText, EnvelopeDecoder};
use dnstap_quiet_domain::{DomainError, Envelope};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Label-by-label name decoder with a handful of class and type mnemonics.
#[derive(Default)]
pub struct MockDnsWireText;

impl MockDnsWireText {
    pub fn new() -> Self {
        Self
    }
}

impl DnsWireText for MockDnsWireText {
    fn unpack_name(&self, wire: &[u8]) -> Result<String, DomainError> {
        let mut name = String::new();
        let mut pos = 0;
        loop {
            let len = *wire
                .get(pos)
                .ok_or_else(|| DomainError::InvalidDomainName("truncated".to_string()))?
                as usize;
            pos += 1;
            if len == 0 {
                break;
            }
            let label = wire
                .get(pos..pos + len)
                .ok_or_else(|| DomainError::InvalidDomainName("label overflow".to_string()))?;
            name.push_str(&String::from_utf8_lossy(label));
            name.push('.');
            pos += len;
        }
        if name.is_empty() {
            name.push('.');
        }
        Ok(name)
    }

    fn class_label(&self, class: u16) -> String {
        match class {
            1 => "IN".to_string(),
            3 => "CH".to_string(),
            other => format!("CLASS{}", other),
        }
    }

    fn type_label(&self, rtype: u16) -> String {
        match rtype {
            1 => "A".to_string(),
            28 => "AAAA".to_string(),
            other => format!("TYPE{}", other),
        }
    }
}

/// Hands out a preset envelope, or fails, and records how often it was asked.
pub struct MockEnvelopeDecoder {
    envelope: Mutex<Option<Envelope>>,
    calls: Arc<AtomicUsize>,
}

impl MockEnvelopeDecoder {
    pub fn returning(envelope: Envelope) -> Self {
        Self {
            envelope: Mutex::new(Some(envelope)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            envelope: Mutex::new(None),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EnvelopeDecoder for MockEnvelopeDecoder {
    fn decode(&self, _frame: &[u8]) -> Result<Envelope, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.envelope
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| DomainError::InvalidEnvelope("mock decoder failure".to_string()))
    }
}
