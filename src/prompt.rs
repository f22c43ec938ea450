//! Instruction text sent alongside the source photo

/// Appended when the edit must leave everything but the hair untouched
pub const PRESERVATION_CLAUSE: &str = "Maintain the original face facial features, identity, expression, lighting, and background exactly as they are. Only change the hair.";

/// Always appended
pub const QUALITY_CLAUSE: &str = "High quality, photorealistic.";

/// Build the final instruction from a style prompt.
///
/// Catalog styles always pass `preserve = true`; the unrestricted form is
/// kept for free-form edits.
pub fn build_instruction(raw: &str, preserve: bool) -> String {
    if preserve {
        format!("{}. {} {}", raw, PRESERVATION_CLAUSE, QUALITY_CLAUSE)
    } else {
        format!("{}. {}", raw, QUALITY_CLAUSE)
    }
}
