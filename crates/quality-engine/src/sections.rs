//! Section presence checking

/// Return the required section labels not found in `text`, preserving
/// rule-table order. Empty text reports every required section missing.
pub fn missing_sections(text: &str, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|section| !text.contains(*section))
        .map(|section| section.to_string())
        .collect()
}
