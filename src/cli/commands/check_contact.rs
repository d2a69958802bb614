//! Check-contact command - Validate a set of contact details

use crate::domain::{is_valid_email, is_valid_name, is_valid_phone, validate_contact};
use crate::errors::{IntakeError, Result};

fn mark(valid: bool) -> &'static str {
    if valid {
        "ok"
    } else {
        "invalid"
    }
}

/// Per-field report, one line each
pub fn format_checks(name: &str, email: &str, phone: &str) -> String {
    [
        format!("name:  {}", mark(is_valid_name(name))),
        format!("email: {}", mark(is_valid_email(email))),
        format!("phone: {}", mark(is_valid_phone(phone))),
    ]
    .join("\n")
}

/// Print the per-field report; fails when the details would be rejected
pub async fn run(name: &str, email: &str, phone: &str) -> Result<()> {
    println!("{}", format_checks(name, email, phone));

    let result = validate_contact(name, email, phone);
    match result.reason {
        Some(reason) if !result.valid => Err(IntakeError::InvalidContact(reason)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_checks_marks_each_field() {
        let text = format_checks("J", "jan@example.nl", "12");
        assert_eq!(text, "name:  invalid\nemail: ok\nphone: invalid");
    }

    #[tokio::test]
    async fn test_run_accepts_valid_details() {
        assert!(run("Jan", "jan@example.nl", "0612345678").await.is_ok());
    }

    #[tokio::test]
    async fn test_run_rejects_invalid_details() {
        let err = run("Jan", "jan@example", "0612345678").await.unwrap_err();
        assert_eq!(err.code(), "INVALID_CONTACT");
    }
}
