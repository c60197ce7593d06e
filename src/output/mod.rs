// Output formatting: terminal rendering of corpus summaries.
//
// Computation never prints; these functions only consume finished values.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..."
/// if truncated. Byte slicing would panic mid-character on Cyrillic, so
/// this walks chars.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("таким образом", 5), "таким...");
        assert_eq!(truncate_chars("итог", 10), "итог");
    }
}
