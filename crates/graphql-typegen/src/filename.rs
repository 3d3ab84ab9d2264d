//! File-designator derivation for import records. A designator is the
//! synthetic on-disk name of the artifact a generated type references, minus
//! the extension (file extensions belong to the surrounding tool, not to the
//! compiler core).

/// Derives the file designator for a referenced artifact: the lowercased
/// name with non-word characters stripped, suffixed by its classification
/// tag, e.g. `sanitize_filename("NewUserInput", "input-type")` is
/// `"newuserinput.input-type"`.
pub fn sanitize_filename(name: &str, classification: &str) -> String {
    let mut sanitized = String::with_capacity(name.len() + classification.len() + 1);
    sanitized.extend(
        name.chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .map(|c| c.to_ascii_lowercase()),
    );
    sanitized.push('.');
    sanitized.push_str(classification);
    sanitized
}
