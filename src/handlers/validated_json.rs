//! JSON body extractor that reports every rejected field at once.
//!
//! [`ValidatedJson`] reads the body as a JSON object and decodes it into the
//! target form. Fields holding a value of the wrong type are reported by name,
//! then dropped so that the remaining fields can still be decoded and checked
//! against the form's `validator` rules. The outcome is a single
//! [`ServiceError::ValidationError`] listing every violation.
//!
//! Forms decoded this way must accept a body with any subset of their fields,
//! which holds when every field is an `Option` or has a serde default.

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::Validate;

use crate::models::{field_errors, FieldError, ServiceError, ViolationKind};

#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        // Malformed JSON is rejected here through the app's `JsonConfig`.
        let body = web::Json::<Value>::from_request(req, payload);

        Box::pin(async move {
            let web::Json(body) = body.await?;
            let form = decode_and_validate(body)?;
            Ok(ValidatedJson(form))
        })
    }
}

fn decode<T: DeserializeOwned>(fields: Map<String, Value>) -> Result<T, serde_json::Error> {
    serde_json::from_value(Value::Object(fields))
}

fn body_error(message: impl Into<String>) -> ServiceError {
    ServiceError::ValidationError(vec![FieldError::new(
        "body",
        ViolationKind::InvalidType,
        message,
    )])
}

pub fn decode_and_validate<T>(body: Value) -> Result<T, ServiceError>
where
    T: DeserializeOwned + Validate,
{
    let Value::Object(mut fields) = body else {
        return Err(body_error("Input should be a JSON object"));
    };

    let mut errors = Vec::new();
    let form: T = match decode(fields.clone()) {
        Ok(form) => form,
        Err(whole) => {
            for (name, value) in &fields {
                let single = Map::from_iter([(name.clone(), value.clone())]);
                if let Err(e) = decode::<T>(single) {
                    errors.push(FieldError::new(name, ViolationKind::InvalidType, e.to_string()));
                }
            }
            if errors.is_empty() {
                return Err(body_error(whole.to_string()));
            }

            for error in &errors {
                fields.remove(&error.field);
            }
            decode(fields).map_err(|e| body_error(e.to_string()))?
        }
    };

    if let Err(violations) = form.validate() {
        let extra: Vec<FieldError> = field_errors(&violations)
            .into_iter()
            .filter(|violation| !errors.iter().any(|e| e.field == violation.field))
            .collect();
        errors.extend(extra);
    }

    if errors.is_empty() {
        return Ok(form);
    }
    errors.sort_by(|a, b| a.field.cmp(&b.field));
    Err(ServiceError::ValidationError(errors))
}
