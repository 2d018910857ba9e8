use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StitchError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(StitchError::shape("x").to_string().contains("shape error:"));
    assert!(
        StitchError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StitchError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
