use dnstap_quiet_application::services::{FormatOptions, QuietTextFormatter};
use dnstap_quiet_application::use_cases::ConvertFrameUseCase;
use dnstap_quiet_domain::Config;
use dnstap_quiet_infrastructure::dns::HickoryWireText;
use dnstap_quiet_infrastructure::dnstap::ProtobufEnvelopeDecoder;
use std::sync::Arc;

pub struct UseCases {
    pub convert_frame: Arc<ConvertFrameUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let options = FormatOptions::from_config(&config.formatter)?;
        let formatter = Arc::new(QuietTextFormatter::new(
            Arc::new(HickoryWireText::new()),
            options,
        ));

        Ok(Self {
            convert_frame: Arc::new(ConvertFrameUseCase::new(
                Arc::new(ProtobufEnvelopeDecoder::new()),
                formatter,
            )),
        })
    }
}
