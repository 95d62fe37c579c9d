use dnstap_quiet_domain::DomainError;

/// Presentation-form rendering of DNS wire values.
pub trait DnsWireText: Send + Sync {
    /// Decode a wire-format domain name into its fully qualified text form (`example.com.`).
    fn unpack_name(&self, wire: &[u8]) -> Result<String, DomainError>;

    /// Mnemonic of a DNS class code (`IN`), or `CLASSnnn` for codes without one.
    fn class_label(&self, class: u16) -> String;

    /// Mnemonic of a DNS type code (`AAAA`), or `TYPEnnn` for codes without one.
    fn type_label(&self, rtype: u16) -> String;
}
