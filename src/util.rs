use num_format::{Locale, ToFormattedString};

/// Thousands-separated rendering for counts shown on the page
/// (e.g. `1,234,567`).
pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    n.to_formatted_string(&Locale::en)
}
