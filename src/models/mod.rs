// Re-export all models organized by domain
pub mod contact;
pub mod errors;
pub mod project;
pub mod response;
pub mod settings;

pub use contact::*;
pub use errors::*;
pub use project::*;
pub use response::*;
pub use settings::*;

use validator::ValidationError;

/// Unwraps a required form field, reporting it as missing otherwise.
pub(crate) fn require<T>(field: &str, value: Option<T>) -> Result<T, ServiceError> {
    value.ok_or_else(|| ServiceError::ValidationError(vec![FieldError::missing(field)]))
}

/// Requires a dotted domain after the `@`, which `#[validate(email)]` alone
/// does not (`ada@example` passes it). Addresses without a local part or
/// domain are left to the email rule.
pub(crate) fn validate_email_domain(email: &str) -> Result<(), ValidationError> {
    match email.rsplit_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
            let dotted = domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.');
            if dotted {
                Ok(())
            } else {
                Err(ValidationError::new("email").with_message(
                    "The part after the @-sign is not valid. It should have a period.".into(),
                ))
            }
        }
        _ => Ok(()),
    }
}
