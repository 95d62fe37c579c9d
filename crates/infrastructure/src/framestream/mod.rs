pub mod reader;

pub use reader::{FrameStreamReader, CONTENT_TYPE_DNSTAP};
