//! Shared utility functions.

/// Uppercase the first character of a word, leaving the rest untouched.
///
/// "theorem" -> "Theorem"
/// "lEMMA" -> "LEMMA"
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("theorem"), "Theorem");
        assert_eq!(capitalize("lemma"), "Lemma");
        assert_eq!(capitalize("lEMMA"), "LEMMA");
        assert_eq!(capitalize("émile"), "Émile");
        assert_eq!(capitalize(""), "");
    }
}
