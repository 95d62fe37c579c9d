pub mod address;
pub mod classify;
pub mod formatter;
pub mod quote;
pub mod time;

pub use address::format_address;
pub use classify::{classify, Classification};
pub use formatter::{FormatOptions, QuietTextFormatter};
pub use quote::quote;
pub use time::write_time;
