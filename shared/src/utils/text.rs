//! Free-text normalization

/// Upper-case the first character of every space-separated word
///
/// Only the first character is touched: `"ana de souza"` becomes
/// `"Ana De Souza"`, and spacing is preserved as typed.
pub fn capitalize_words(raw: &str) -> String {
    raw.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("david de oliveira guimarães"), "David De Oliveira Guimarães");
        assert_eq!(capitalize_words("élton  silva"), "Élton  Silva");
        assert_eq!(capitalize_words(""), "");
        assert_eq!(capitalize_words("ANA"), "ANA");
    }

    #[test]
    fn test_capitalize_words_is_idempotent() {
        let once = capitalize_words("maria clara");
        assert_eq!(capitalize_words(&once), once);
    }
}
