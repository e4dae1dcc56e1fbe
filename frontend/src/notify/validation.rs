use once_cell::sync::Lazy;
use regex::Regex;

use super::error::SubmitError;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

pub fn validate_email(email: &str) -> Result<(), SubmitError> {
    if email.trim().is_empty() {
        return Err(SubmitError::EmptyInput);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(SubmitError::InvalidFormat);
    }
    Ok(())
}

/// The honeypot input is hidden from people, so anything in it came from a bot.
pub fn check_honeypot(value: &str) -> Result<(), SubmitError> {
    if value.trim().is_empty() {
        Ok(())
    } else {
        Err(SubmitError::BotDetected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_are_empty_input() {
        for input in ["", "   ", "\t\n"] {
            assert!(matches!(validate_email(input), Err(SubmitError::EmptyInput)), "{input:?}");
        }
    }

    #[test]
    fn rejects_missing_at_or_missing_dot_after_at() {
        for input in [
            "plainaddress",
            "legend.email.com",
            "legend@email",
            "legend@localhost",
            "a.b@c",
            "@email.com",
            "legend@.com",
            "legend@email.",
            "le gend@email.com",
            "legend@@email.com",
            " legend@email.com",
        ] {
            assert!(
                matches!(validate_email(input), Err(SubmitError::InvalidFormat)),
                "{input:?} should be invalid"
            );
        }
    }

    #[test]
    fn accepts_x_at_y_dot_z() {
        for input in ["a@b.com", "x@y.z", "legend@email.com", "first.last+tag@sub.domain.io"] {
            assert!(validate_email(input).is_ok(), "{input:?} should be valid");
        }
    }

    #[test]
    fn honeypot_only_passes_when_blank() {
        assert!(check_honeypot("").is_ok());
        assert!(check_honeypot("  ").is_ok());
        assert!(matches!(check_honeypot("http://spam"), Err(SubmitError::BotDetected)));
    }
}
