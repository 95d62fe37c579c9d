pub mod quiet_text;

// Re-export use cases
pub use quiet_text::ConvertFrameUseCase;
