pub mod decoder;
pub mod proto;

pub use decoder::ProtobufEnvelopeDecoder;
