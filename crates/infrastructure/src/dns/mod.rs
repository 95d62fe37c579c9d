pub mod wire_text;

pub use wire_text::HickoryWireText;
