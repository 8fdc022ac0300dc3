//! Log sanitization utilities for masking sensitive data.
//!
//! Venue and artist phone numbers and free-text search terms are user input;
//! these helpers shorten or mask them before they reach the log.

/// Longest search term written to the log verbatim.
const MAX_LOGGED_TERM_CHARS: usize = 32;

/// Mask a phone number for safe logging.
///
/// Keeps the last four digits and replaces every other digit with `*`.
///
/// # Examples
/// ```ignore
/// assert_eq!(mask_phone("415-555-0100"), "***-***-0100");
/// ```
pub fn mask_phone(phone: &str) -> String {
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    let mut hidden = digits.saturating_sub(4);
    phone
        .chars()
        .map(|c| {
            if c.is_ascii_digit() && hidden > 0 {
                hidden -= 1;
                '*'
            } else {
                c
            }
        })
        .collect()
}

/// Mask an optional phone number, logging `-` when there is none.
pub fn mask_optional_phone(phone: Option<&str>) -> String {
    phone.map(mask_phone).unwrap_or_else(|| "-".to_string())
}

/// Shorten a search term for logging.
///
/// # Examples
/// ```ignore
/// assert_eq!(truncate_term("music"), "music");
/// ```
pub fn truncate_term(term: &str) -> String {
    if term.chars().count() <= MAX_LOGGED_TERM_CHARS {
        return term.to_string();
    }
    let head: String = term.chars().take(MAX_LOGGED_TERM_CHARS).collect();
    format!("{}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_phone_normal() {
        assert_eq!(mask_phone("415-555-0100"), "***-***-0100");
        assert_eq!(mask_phone("914-003-1132"), "***-***-1132");
    }

    #[test]
    fn test_mask_phone_short() {
        assert_eq!(mask_phone("123"), "123");
        assert_eq!(mask_phone(""), "");
    }

    #[test]
    fn test_mask_optional_phone() {
        assert_eq!(mask_optional_phone(None), "-");
        assert_eq!(mask_optional_phone(Some("326-123-5000")), "***-***-5000");
    }

    #[test]
    fn test_truncate_term() {
        assert_eq!(truncate_term("Hop"), "Hop");
        let long = "x".repeat(40);
        assert_eq!(truncate_term(&long), format!("{}...", "x".repeat(32)));
    }

    #[test]
    fn test_truncate_term_multibyte() {
        let long = "é".repeat(33);
        assert_eq!(truncate_term(&long).chars().count(), 35);
    }
}
