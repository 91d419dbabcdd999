//! Contact form field rules.
//!
//! Pure predicates with no page access. Lengths are counted in Unicode scalar values
//! after trimming surrounding whitespace.

use once_cell::sync::Lazy;
use regex::Regex;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

/// `local@domain.tld` shape: no whitespace anywhere, exactly one `@`, a dot after it.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// One of the three contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// The form control's `name` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Inline error shown when the field fails its rule.
    pub fn error_message(&self) -> &'static str {
        match self {
            Field::Name => "Please enter your name.",
            Field::Email => "Please enter a valid email.",
            Field::Message => "Message must be at least 10 characters.",
        }
    }
}

pub fn is_valid_name(name: &str) -> bool {
    name.trim().chars().count() >= NAME_MIN_CHARS
}

/// Checks the raw value; callers trim before asking.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_message(message: &str) -> bool {
    message.trim().chars().count() >= MESSAGE_MIN_CHARS
}

/// Trimmed values of one submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormInput {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Fields failing their rule, in form order. Empty means the input is acceptable.
    pub fn invalid_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| {
                let value = self.value(*field);
                !match field {
                    Field::Name => is_valid_name(value),
                    Field::Email => is_valid_email(value),
                    Field::Message => is_valid_message(value),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rule() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("A"));
        assert!(!is_valid_name("  A  "));
        assert!(is_valid_name("Al"));
        assert!(is_valid_name(" Ada Lovelace "));
        assert!(is_valid_name("Zoë"));
    }

    #[test]
    fn test_email_rule() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("al@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.example.co.uk"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@b.c "));
    }

    #[test]
    fn test_message_rule_boundary() {
        assert!(!is_valid_message("short"));
        assert!(!is_valid_message("123456789"));
        assert!(is_valid_message("1234567890"));
        assert!(!is_valid_message("   123456789   "));
    }

    #[test]
    fn test_input_is_trimmed() {
        let input = FormInput::new("  Al ", " al@example.com ", "\tHello there, testing.\n");
        assert_eq!(input.name, "Al");
        assert_eq!(input.email, "al@example.com");
        assert_eq!(input.message, "Hello there, testing.");
        assert!(input.invalid_fields().is_empty());
    }

    #[test]
    fn test_all_fields_can_fail_together() {
        let input = FormInput::new("A", "bad", "short");
        assert_eq!(input.invalid_fields(), vec![Field::Name, Field::Email, Field::Message]);
    }
}
