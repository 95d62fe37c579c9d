use dnstap_quiet_application::services::{FormatOptions, QuietTextFormatter};
use dnstap_quiet_application::use_cases::ConvertFrameUseCase;
use dnstap_quiet_domain::{DomainError, Envelope, MessageType};
use std::sync::Arc;

mod helpers;
use helpers::{MessageBuilder, MockDnsWireText, MockEnvelopeDecoder};

fn use_case(decoder: Arc<MockEnvelopeDecoder>) -> ConvertFrameUseCase {
    let formatter = Arc::new(QuietTextFormatter::new(
        Arc::new(MockDnsWireText::new()),
        FormatOptions::default(),
    ));
    ConvertFrameUseCase::new(decoder, formatter)
}

#[test]
fn test_execute_renders_message() {
    let message = MessageBuilder::new(MessageType::AuthResponse)
        .response_time(1_700_000_000, 123_456_000)
        .response_address(&[192, 0, 2, 53])
        .response_message_len(64)
        .query_name("example.net")
        .query_class(1)
        .query_type(1)
        .build();
    let decoder = Arc::new(MockEnvelopeDecoder::returning(Envelope::Message(message)));

    let line = use_case(decoder.clone()).execute(b"frame").unwrap();

    assert_eq!(
        String::from_utf8(line).unwrap(),
        "22:13:20.123456 AR 192.0.2.53  64b \"example.net.\" IN A\n"
    );
    assert_eq!(decoder.calls(), 1);
}

#[test]
fn test_execute_non_message_is_ok_and_empty() {
    let decoder = Arc::new(MockEnvelopeDecoder::returning(Envelope::Other { kind: 3 }));

    let result = use_case(decoder).execute(b"frame");

    assert_eq!(result, Ok(Vec::new()));
}

#[test]
fn test_execute_reports_decode_failure() {
    let decoder = Arc::new(MockEnvelopeDecoder::failing());

    let result = use_case(decoder.clone()).execute(b"garbage");

    assert!(matches!(result, Err(DomainError::InvalidEnvelope(_))));
    assert_eq!(decoder.calls(), 1);
}
