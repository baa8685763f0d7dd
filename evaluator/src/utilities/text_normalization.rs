/// Lower-cases `text` and trims surrounding whitespace.
///
/// Every comparison and every feature scan runs on this form, so two submissions that differ
/// only in case or padding are treated as identical.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}
