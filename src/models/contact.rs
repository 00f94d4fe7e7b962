use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::errors::ServiceError;
use super::{require, validate_email_domain};
use crate::repositories::Record;

/// Contact form payload as submitted by the website.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct ContactForm {
    #[validate(required, length(min = 2, max = 120))]
    pub name: Option<String>,
    #[validate(required, email, custom(function = "validate_email_domain"))]
    pub email: Option<String>,
    #[validate(required, length(min = 10, max = 5000))]
    pub message: Option<String>,
    #[validate(length(max = 200))]
    pub company: Option<String>,
    /// Phone or WhatsApp number.
    #[validate(length(max = 50))]
    pub phone: Option<String>,
}

/// Stored contact message. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    pub company: Option<String>,
    pub phone: Option<String>,
}

impl Record for ContactMessage {
    const COLLECTION: &'static str = "contactmessage";
    const LABEL: &'static str = "Contact message";
}

impl TryFrom<ContactForm> for ContactMessage {
    type Error = ServiceError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            name: require("name", form.name)?,
            email: require("email", form.email)?,
            message: require("message", form.message)?,
            company: form.company,
            phone: form.phone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::ViolationKind;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: Some("Ada Lovelace".into()),
            email: Some("ada@example.com".into()),
            message: Some("I would like a quote for a new site.".into()),
            company: None,
            phone: None,
        }
    }

    fn violations(form: ContactForm) -> Vec<(String, ViolationKind)> {
        match ContactMessage::try_from(form) {
            Err(ServiceError::ValidationError(errors)) => {
                errors.into_iter().map(|e| (e.field, e.kind)).collect()
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn accepts_valid_form() {
        let message = ContactMessage::try_from(valid_form()).unwrap();
        assert_eq!(message.name, "Ada Lovelace");
        assert_eq!(message.company, None);
    }

    #[test]
    fn length_bounds_are_inclusive() {
        let mut form = valid_form();
        form.name = Some("Al".into());
        form.message = Some("x".repeat(5000));
        form.company = Some("c".repeat(200));
        form.phone = Some("1".repeat(50));
        assert!(ContactMessage::try_from(form).is_ok());
    }

    #[test]
    fn lengths_are_counted_in_characters() {
        let mut form = valid_form();
        form.name = Some("é".repeat(120));
        assert!(ContactMessage::try_from(form).is_ok());
    }

    #[test]
    fn reports_every_missing_required_field() {
        let found = violations(ContactForm::default());
        assert_eq!(
            found,
            vec![
                ("email".to_string(), ViolationKind::Missing),
                ("message".to_string(), ViolationKind::Missing),
                ("name".to_string(), ViolationKind::Missing),
            ]
        );
    }

    #[test]
    fn rejects_email_without_dotted_domain() {
        for email in ["ada@example", "a@b"] {
            let mut form = valid_form();
            form.email = Some(email.into());
            assert_eq!(
                violations(form),
                vec![("email".to_string(), ViolationKind::InvalidEmail)]
            );
        }
    }

    #[test]
    fn rejects_out_of_bounds_and_malformed_values() {
        let mut form = valid_form();
        form.name = Some("A".into());
        form.email = Some("not-an-email".into());
        form.message = Some("short".into());
        form.phone = Some("9".repeat(51));

        let found = violations(form);
        assert!(found.contains(&("name".to_string(), ViolationKind::StringLength)));
        assert!(found.contains(&("email".to_string(), ViolationKind::InvalidEmail)));
        assert!(found.contains(&("message".to_string(), ViolationKind::StringLength)));
        assert!(found.contains(&("phone".to_string(), ViolationKind::StringLength)));
        assert_eq!(found.len(), 4);
    }
}
