// ============================================================================
// Log Sanitization - safe logging of customer-supplied text
// ============================================================================
//
// Inquiry fields are free text typed by website visitors and end up in the
// service logs. Before logging:
//
// - names and messages go through `sanitize_for_log`, which strips line
//   breaks, ANSI escapes and control characters (no forged log lines, no
//   terminal tricks) and truncates long values
// - contact details (phone numbers, email addresses) go through
//   `mask_contact` and are never logged in full
//
// ============================================================================

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum number of characters kept from a logged value.
const MAX_LOG_CHARS: usize = 200;

/// Digits of a phone number left visible by `mask_contact`.
const VISIBLE_PHONE_DIGITS: usize = 4;

static ANSI_ESCAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x1b\[[0-9;]*[a-zA-Z]").expect("ANSI escape pattern is valid")
});

/// Make user input safe to embed in a single log line.
pub fn sanitize_for_log(input: &str) -> String {
    let no_ansi = ANSI_ESCAPE_REGEX.replace_all(input, "");

    let cleaned: String = no_ansi
        .chars()
        .map(|c| if matches!(c, '\n' | '\r' | '\t') { ' ' } else { c })
        .filter(|c| !c.is_control())
        .collect();

    match cleaned.char_indices().nth(MAX_LOG_CHARS) {
        Some((cut, _)) => format!("{}...", &cleaned[..cut]),
        None => cleaned,
    }
}

/// Mask a phone number or email address for logging.
///
/// Emails keep the first character of the local part and the domain
/// (`r***@example.com`); phone numbers keep their last four digits
/// (`******9999`). Anything else is reduced to its length.
pub fn mask_contact(contact: &str) -> String {
    let contact = contact.trim();

    if let Some((local, domain)) = contact.rsplit_once('@') {
        if let Some(first) = local.chars().next() {
            if !domain.is_empty() {
                return format!("{}***@{}", first, sanitize_for_log(domain));
            }
        }
    }

    let digits: Vec<char> = contact.chars().filter(|c| c.is_ascii_digit()).collect();
    let looks_like_phone = digits.len() > VISIBLE_PHONE_DIGITS
        && contact
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'));

    if looks_like_phone {
        let visible: String = digits[digits.len() - VISIBLE_PHONE_DIGITS..].iter().collect();
        return format!("{}{}", "*".repeat(digits.len() - VISIBLE_PHONE_DIGITS), visible);
    }

    format!("[REDACTED-{}]", contact.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_flattens_line_breaks() {
        let result = sanitize_for_log("Raj\nINFO inquiry approved\r\tby admin");
        assert_eq!(result, "Raj INFO inquiry approved  by admin");
    }

    #[test]
    fn test_sanitize_strips_ansi_and_control_chars() {
        assert_eq!(sanitize_for_log("\x1b[31mRaj\x1b[0m\x00\x07"), "Raj");
    }

    #[test]
    fn test_sanitize_truncates_on_char_boundary() {
        let long_input = "ऑ".repeat(MAX_LOG_CHARS + 50);
        let result = sanitize_for_log(&long_input);
        assert!(result.ends_with("..."));
        assert_eq!(result.chars().count(), MAX_LOG_CHARS + 3);
    }

    #[test]
    fn test_sanitize_keeps_normal_text() {
        assert_eq!(sanitize_for_log("Need 15W-40 for truck fleet"), "Need 15W-40 for truck fleet");
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_contact("raj.kumar@fleet.in"), "r***@fleet.in");
    }

    #[test]
    fn test_mask_phone_keeps_last_digits() {
        assert_eq!(mask_contact("9999912345"), "******2345");
        assert_eq!(mask_contact("+91 98765-43210"), "********3210");
    }

    #[test]
    fn test_mask_other_contact() {
        assert_eq!(mask_contact("call me"), "[REDACTED-7]");
        assert_eq!(mask_contact("@"), "[REDACTED-1]");
    }
}
