//! Initials for the no-image placeholder.

/// Collect the first character of each word until `max_len` characters are
/// gathered.
///
/// Empty input gives an empty string; input made only of spaces gives `?`.
pub fn abbreviate(text: &str, max_len: usize) -> String {
    if text.is_empty() {
        return String::new();
    }

    let abbr: String = text
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(max_len.max(1))
        .collect();

    if abbr.is_empty() {
        "?".to_string()
    } else {
        abbr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(abbreviate("Red Coffee Mug", 2), "RC");
        assert_eq!(abbreviate("Red Coffee Mug", 3), "RCM");
        assert_eq!(abbreviate("lamp", 2), "l");
    }

    #[test]
    fn test_extra_whitespace() {
        assert_eq!(abbreviate("  Desk   Lamp ", 2), "DL");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(abbreviate("", 2), "");
        assert_eq!(abbreviate("   ", 2), "?");
    }

    #[test]
    fn test_multibyte() {
        assert_eq!(abbreviate("Été Ânes", 2), "ÉÂ");
    }
}
