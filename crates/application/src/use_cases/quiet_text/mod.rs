pub mod convert_frame;

pub use convert_frame::ConvertFrameUseCase;
