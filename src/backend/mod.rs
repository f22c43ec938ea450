//! Backend module - the image-edit trait and the hosted Gemini client

pub mod gemini;
pub mod traits;

pub use gemini::GeminiBackend;
pub use traits::{EditRequest, ImageEditBackend};
