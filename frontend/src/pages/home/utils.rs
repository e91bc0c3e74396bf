use thiserror::Error;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";
pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Your message could not be sent: {0}")]
    Delivery(String),
}

/// A validated contact submission, detached from the form signals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn validate_contact(name: &str, email: &str, message: &str) -> Result<ContactMessage, ContactError> {
    if is_blank(name) || is_blank(email) || is_blank(message) {
        return Err(ContactError::MissingFields);
    }
    Ok(ContactMessage {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        message: message.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn accepts_only_when_every_field_is_filled() {
        let options = ["", "filled"];
        for name in options {
            for email in options {
                for message in options {
                    let all_filled = !name.is_empty() && !email.is_empty() && !message.is_empty();
                    let result = validate_contact(name, email, message);
                    assert_eq!(
                        result.is_ok(),
                        all_filled,
                        "name={:?} email={:?} message={:?}",
                        name,
                        email,
                        message
                    );
                }
            }
        }
    }

    #[wasm_bindgen_test]
    fn missing_email_reports_generic_message() {
        let err = validate_contact("Jane", "", "Hi").unwrap_err();
        assert_eq!(err, ContactError::MissingFields);
        assert_eq!(err.to_string(), MISSING_FIELDS_MESSAGE);
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        assert!(validate_contact("Jane", "   ", "Hi").is_err());
        assert!(validate_contact("\t", "jane@example.com", "Hi").is_err());
    }

    #[test]
    fn accepted_message_is_trimmed() {
        let msg = validate_contact(" Jane ", "jane@example.com\n", " Hi").unwrap();
        assert_eq!(msg.name, "Jane");
        assert_eq!(msg.email, "jane@example.com");
        assert_eq!(msg.message, "Hi");
    }

    #[test]
    fn delivery_error_names_cause() {
        let err = ContactError::Delivery("timeout".into());
        assert!(err.to_string().contains("timeout"));
    }
}
