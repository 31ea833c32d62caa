//! Formatting shared by progress lines and reports.

/// Format a count with comma thousands separators, e.g. `1234567` as `1,234,567`.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    result
}

/// Format a count that may be missing. Missing counts render as `n/a`.
pub fn format_optional_count(count: Option<u64>) -> String {
    count.map_or_else(|| "n/a".to_string(), format_count)
}
