use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MemeframeError::invalid_dimensions("x")
            .to_string()
            .contains("invalid dimensions:")
    );
    assert!(
        MemeframeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        MemeframeError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        MemeframeError::speech("x")
            .to_string()
            .contains("speech error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MemeframeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
