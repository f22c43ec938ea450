//! Hairstyle Studio
//!
//! Upload a photo, pick a preset hairstyle and have a hosted image-editing
//! model render the photo with the new hair, leaving face and background
//! untouched.

pub mod backend;
pub mod catalog;
pub mod config;
pub mod console;
pub mod error;
pub mod i18n;
pub mod payload;
pub mod prompt;
pub mod studio;

pub use error::{AppError, Result};
