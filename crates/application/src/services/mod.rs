pub mod quiet_text;

pub use quiet_text::{FormatOptions, QuietTextFormatter};
