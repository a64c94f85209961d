use crate::error::PickerError;

/// Host element identifiers the widget cannot start without.
pub const REQUIRED_ELEMENTS: [&str; 10] = [
    "color-trigger",
    "color-preview",
    "color-text",
    "color-dropdown",
    "color-canvas",
    "picker-indicator",
    "hue-thumb",
    "alpha-thumb",
    "alpha-overlay",
    "format-input",
];

/// Check that every required element is present.
/// All missing identifiers are reported together, in manifest order.
pub fn validate_elements<S: AsRef<str>>(available: &[S]) -> Result<(), PickerError> {
    let missing: Vec<String> = REQUIRED_ELEMENTS
        .iter()
        .filter(|id| !available.iter().any(|a| a.as_ref() == **id))
        .map(|id| id.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        log::warn!("color picker refused to start, missing elements: {missing:?}");
        Err(PickerError::MissingElements { missing })
    }
}
