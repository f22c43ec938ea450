//! Common traits and types for image-edit backends

use async_trait::async_trait;

use crate::error::Result;
use crate::payload::ImagePayload;

/// One image edit: a source photo plus the finished instruction text
#[derive(Debug, Clone)]
pub struct EditRequest {
    /// The photo to edit
    pub image: ImagePayload,

    /// Instruction produced by the prompt builder
    pub instruction: String,
}

impl EditRequest {
    pub fn new(image: ImagePayload, instruction: impl Into<String>) -> Self {
        Self {
            image,
            instruction: instruction.into(),
        }
    }
}

/// Trait for image-edit backends
#[async_trait]
pub trait ImageEditBackend: Send + Sync {
    /// Get the backend name
    fn name(&self) -> &str;

    /// Model identifier requests are sent to
    fn model(&self) -> &str;

    /// Perform exactly one edit call and return the first image produced
    async fn edit(&self, request: EditRequest) -> Result<ImagePayload>;
}
