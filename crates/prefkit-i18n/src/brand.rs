//! Brand placeholder substitution

/// Placeholder that catalog strings carry until a brand is applied
pub const BRAND_PLACEHOLDER: &str = "[Company Name]";

/// Replace every brand placeholder in a translated string.
///
/// Borrows the input back when there is nothing to replace.
pub fn apply_brand<'a>(text: &'a str, brand: &str) -> std::borrow::Cow<'a, str> {
    if text.contains(BRAND_PLACEHOLDER) {
        std::borrow::Cow::Owned(text.replace(BRAND_PLACEHOLDER, brand))
    } else {
        std::borrow::Cow::Borrowed(text)
    }
}
