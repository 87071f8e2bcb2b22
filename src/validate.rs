use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static NAME_RULE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w{2}").unwrap());

static EMAIL_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]+@[A-Za-z0-9._-]+\.[A-Za-z0-9._-]+$").unwrap());

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The name is too short")]
    InvalidName,

    #[error("The email address is not valid")]
    InvalidEmail,
}

/// A name needs two consecutive word characters once trimmed.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let name = name.trim();
    if name.is_empty() || !NAME_RULE.is_match(name) {
        return Err(ValidationError::InvalidName);
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !EMAIL_RULE.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_too_short() {
        assert_eq!(validate_name("a"), Err(ValidationError::InvalidName));
        assert_eq!(validate_name(""), Err(ValidationError::InvalidName));
        assert_eq!(validate_name("  "), Err(ValidationError::InvalidName));
        assert_eq!(validate_name(" a "), Err(ValidationError::InvalidName));
    }

    #[test]
    fn test_name_needs_consecutive_word_chars() {
        assert_eq!(validate_name("a b"), Err(ValidationError::InvalidName));
        assert_eq!(validate_name("--"), Err(ValidationError::InvalidName));
    }

    #[test]
    fn test_valid_names() {
        assert_eq!(validate_name("ab"), Ok(()));
        assert_eq!(validate_name("  Zaphod "), Ok(()));
        assert_eq!(validate_name("Ég"), Ok(()));
        assert_eq!(validate_name("R2"), Ok(()));
    }

    #[test]
    fn test_valid_emails() {
        assert_eq!(validate_email("a@b.c"), Ok(()));
        assert_eq!(validate_email("arthur.dent@earth.example"), Ok(()));
        assert_eq!(validate_email("Ford_Prefect-42@betelgeuse.co.uk"), Ok(()));
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(
            validate_email("not-an-email"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(validate_email(""), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a@b"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("@b.c"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a@.c"), Err(ValidationError::InvalidEmail));
        assert_eq!(
            validate_email("hi there a@b.c"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ValidationError::InvalidName.to_string(), "The name is too short");
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "The email address is not valid"
        );
    }
}
