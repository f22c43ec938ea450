//! Unit tests for instruction building and payload normalization

use hairstyle_studio::payload::base64::OUTPUT_DATA_URL_PREFIX;
use hairstyle_studio::payload::ImagePayload;
use hairstyle_studio::prompt::{build_instruction, PRESERVATION_CLAUSE, QUALITY_CLAUSE};

#[test]
fn test_preserving_instruction_order() {
    let raw = "Change the hairstyle to a pixie cut";
    let out = build_instruction(raw, true);

    assert!(out.starts_with(raw));
    let preserve_at = out.find(PRESERVATION_CLAUSE).unwrap();
    let quality_at = out.find(QUALITY_CLAUSE).unwrap();
    assert!(raw.len() <= preserve_at);
    assert!(preserve_at < quality_at);
}

#[test]
fn test_unrestricted_instruction_has_quality_only() {
    let raw = "Change the hairstyle to a pixie cut";
    let out = build_instruction(raw, false);

    assert!(out.starts_with(raw));
    assert!(out.ends_with(QUALITY_CLAUSE));
    assert!(!out.contains(PRESERVATION_CLAUSE));
}

#[test]
fn test_upload_prefix_stripped() {
    for prefix in [
        "data:image/png;base64,",
        "data:image/jpeg;base64,",
        "data:image/jpg;base64,",
        "data:image/webp;base64,",
    ] {
        let payload = ImagePayload::parse(&format!("{}SGVsbG8=", prefix));
        assert_eq!(payload.data, "SGVsbG8=");
    }
}

#[test]
fn test_generated_payload_prefix() {
    let payload = ImagePayload::generated("SGVsbG8=");
    assert_eq!(
        payload.to_data_url(),
        format!("{}SGVsbG8=", OUTPUT_DATA_URL_PREFIX)
    );
}
