use dnstap_quiet_application::ports::DnsWireText;
use dnstap_quiet_domain::DomainError;
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinDecodable, BinDecoder};
use std::fmt::Write;

/// `DnsWireText` backed by hickory-proto's wire decoder and mnemonic tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct HickoryWireText;

impl HickoryWireText {
    pub fn new() -> Self {
        Self
    }
}

impl DnsWireText for HickoryWireText {
    fn unpack_name(&self, wire: &[u8]) -> Result<String, DomainError> {
        let mut decoder = BinDecoder::new(wire);
        let name = Name::read(&mut decoder)
            .map_err(|e| DomainError::InvalidDomainName(e.to_string()))?;

        Ok(presentation_form(&name))
    }

    fn class_label(&self, class: u16) -> String {
        if let Some(label) = class_mnemonic(class) {
            return label.to_string();
        }
        match DNSClass::from(class) {
            DNSClass::Unknown(code) => format!("CLASS{}", code),
            known => known.to_string(),
        }
    }

    fn type_label(&self, rtype: u16) -> String {
        if let Some(label) = type_mnemonic(rtype) {
            return label.to_string();
        }
        match RecordType::from(rtype) {
            RecordType::Unknown(code) => format!("TYPE{}", code),
            known => known.to_string(),
        }
    }
}

/// Master-file text of a name built from its raw label bytes: no IDN conversion,
/// special characters backslash-escaped, non-printable bytes as decimal `\DDD`.
fn presentation_form(name: &Name) -> String {
    let mut out = String::with_capacity(name.len());

    for label in name.iter() {
        for &byte in label {
            match byte {
                b'.' | b'(' | b')' | b';' | b' ' | b'@' | b'"' | b'\\' | b'$' => {
                    out.push('\\');
                    out.push(byte as char);
                }
                0x21..=0x7e => out.push(byte as char),
                _ => {
                    let _ = write!(out, "\\{:03}", byte);
                }
            }
        }
        out.push('.');
    }

    if out.is_empty() {
        out.push('.');
    }
    out
}

/// Class mnemonics hickory-proto does not carry.
fn class_mnemonic(class: u16) -> Option<&'static str> {
    match class {
        2 => Some("CS"),
        _ => None,
    }
}

/// Type mnemonics hickory-proto lacks or spells differently.
fn type_mnemonic(rtype: u16) -> Option<&'static str> {
    let label = match rtype {
        0 => "None",
        3 => "MD",
        4 => "MF",
        7 => "MB",
        8 => "MG",
        9 => "MR",
        11 => "WKS",
        14 => "MINFO",
        17 => "RP",
        18 => "AFSDB",
        19 => "X25",
        20 => "ISDN",
        21 => "RT",
        22 => "NSAP",
        23 => "NSAP-PTR",
        26 => "PX",
        27 => "GPOS",
        29 => "LOC",
        30 => "NXT",
        31 => "EID",
        32 => "NIMLOC",
        34 => "ATMA",
        36 => "KX",
        38 => "A6",
        39 => "DNAME",
        42 => "APL",
        45 => "IPSECKEY",
        49 => "DHCID",
        55 => "HIP",
        56 => "NINFO",
        57 => "RKEY",
        58 => "TALINK",
        63 => "ZONEMD",
        99 => "SPF",
        100 => "UINFO",
        101 => "UID",
        102 => "GID",
        103 => "UNSPEC",
        104 => "NID",
        105 => "L32",
        106 => "L64",
        107 => "LP",
        108 => "EUI48",
        109 => "EUI64",
        249 => "TKEY",
        253 => "MAILB",
        254 => "MAILA",
        256 => "URI",
        258 => "AVC",
        260 => "AMTRELAY",
        32768 => "TA",
        32769 => "DLV",
        _ => return None,
    };
    Some(label)
}
